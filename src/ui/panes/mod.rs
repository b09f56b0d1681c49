//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`input`]: Text, start, end and step fields with the focused field marked
//! - [`presets`]: Quick example list with the active preset marked
//! - [`code`]: Slice notation and the quoted result string
//! - [`indices`]: Index visualization with positive/negative index rows and highlighting
//! - [`tips`]: Static tips and common slicing patterns
//! - [`status`]: Status bar with keybindings and selection summary
//! - `utils`: Shared block styling
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*_pane()` function that reads from a
//! [`SliceSnapshot`](crate::snapshot::SliceSnapshot) or the form and holds no state.

mod utils;

pub mod code;
pub mod indices;
pub mod input;
pub mod presets;
pub mod status;
pub mod tips;

// Re-export render functions for convenience
pub use code::{render_code_pane, render_result_pane};
pub use indices::{cell_width, index_lines, render_indices_pane};
pub use input::render_input_pane;
pub use presets::render_presets_pane;
pub use status::render_status_bar;
pub use tips::render_tips_pane;
