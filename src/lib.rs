//! # Introduction
//!
//! SliceTTY is an interactive explorer for sequence slicing: pick a string,
//! type a start, an end and a step, and watch which characters are selected.
//! Positive and negative indices are shown around every character, and the
//! selected ones are highlighted in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Keys → SliceForm → SliceParams → SliceSnapshot → TUI / plain text
//! ```
//!
//! 1. [`input`]: raw form fields and lenient number parsing.
//! 2. [`slice`]: the slicing rules. [`slice::resolve_bounds`] turns optional
//!    and negative bounds into concrete indices, [`slice::slice`] walks them
//!    and [`slice::mask`] decides per position what gets highlighted.
//! 3. [`snapshot`]: everything derived from one form state, recomputed on
//!    every edit.
//! 4. [`presets`] and [`config`]: quick examples, optionally extended from a
//!    TOML config file.
//! 5. [`ui`]: ratatui-based TUI and the plain-text renderer; not part of the
//!    stable library API.
//!
//! ## Slicing rules
//!
//! Start is inclusive, end exclusive. Negative bounds count from the end.
//! Absent bounds mean "from the edge" in the direction of the step, so
//! `[::-1]` reverses. Out-of-range bounds are clamped, never an error. A step
//! of zero is rejected.

pub mod cli;
pub mod config;
pub mod input;
pub mod presets;
pub mod slice;
pub mod snapshot;
pub mod ui;
