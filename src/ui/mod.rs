//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, field focus, preset loading
//! - **[`panes`]**: stateless render functions for each visible pane (input, presets,
//!   code, result, indices, tips, status bar)
//! - **[`plain`]**: the same visualization as plain text, for `--print`
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`SliceForm`] and a
//! [`PresetLibrary`] and call [`App::run`] to start the event loop.
//!
//! [`SliceForm`]: crate::input::SliceForm
//! [`PresetLibrary`]: crate::presets::PresetLibrary
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod plain;
pub mod theme;

pub use app::App;
pub use plain::render_plain;
