//! Command-line arguments
//!
//! Bounds are taken as raw strings and go through the same lenient parsing as
//! the form fields, so `--start abc` means "no start" rather than a usage error.

use crate::config::Config;
use crate::input::SliceForm;
use crate::presets::PresetLibrary;
use crate::slice::SliceResult;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "slicetty",
    version,
    about = "Interactive explorer for string slicing: see it, understand it, master it"
)]
pub struct Cli {
    /// Text to slice
    #[arg(long, short)]
    pub text: Option<String>,

    /// Start index (inclusive, negative counts from the end)
    #[arg(long, short, allow_hyphen_values = true)]
    pub start: Option<String>,

    /// End index (exclusive, negative counts from the end)
    #[arg(long, short, allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Step, negative walks backwards
    #[arg(long, short = 'k', allow_hyphen_values = true)]
    pub step: Option<String>,

    /// Start from a named example
    #[arg(long, short)]
    pub preset: Option<String>,

    /// Config file (defaults to <config dir>/slicetty/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the visualization to stdout instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// List the available examples and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Initial form contents and the preset they came from.
    ///
    /// An explicit `--preset` wins over the configured initial preset. Without
    /// either, `--text` starts from an empty form; otherwise the first example
    /// is loaded. Any bound given on the command line overrides the preset.
    pub fn initial_form(
        &self,
        config: &Config,
        presets: &PresetLibrary,
    ) -> SliceResult<(SliceForm, Option<usize>)> {
        let preset_key = match (&self.preset, &self.text) {
            (Some(key), _) => Some(key.as_str()),
            (None, Some(_)) => None,
            (None, None) => config.initial_preset.as_deref(),
        };

        let (mut form, mut active) = match preset_key {
            Some(key) if self.preset.is_some() => {
                let preset = presets.get(key)?;
                (preset.to_form(), presets.index_of(key))
            }
            Some(key) => match presets.get(key) {
                Ok(preset) => (preset.to_form(), presets.index_of(key)),
                Err(e) => {
                    tracing::warn!("ignoring configured initial preset: {}", e);
                    first_preset(presets)
                }
            },
            None if self.text.is_some() => (SliceForm::default(), None),
            None => first_preset(presets),
        };

        let overrides = [
            (&self.text, &mut form.text),
            (&self.start, &mut form.start),
            (&self.end, &mut form.end),
            (&self.step, &mut form.step),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
                active = None;
            }
        }

        Ok((form, active))
    }
}

fn first_preset(presets: &PresetLibrary) -> (SliceForm, Option<usize>) {
    match presets.at(0) {
        Some(preset) => (preset.to_form(), Some(0)),
        None => (SliceForm::default(), None),
    }
}
