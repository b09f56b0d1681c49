//! Optional TOML configuration
//!
//! Looked up at `<config_dir>/slicetty/config.toml` unless a path is given on
//! the command line. A missing file is not an error.
//!
//! ```toml
//! initial_preset = "reverse"
//! show_tips = false
//!
//! [[presets]]
//! key = "domain"
//! text = "user@example.com"
//! start = 5
//! description = "Extract domain from email"
//! ```

use crate::presets::{Preset, PresetLibrary};
use crate::slice::{SliceParams, SliceResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    Read {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    Parse {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Preset loaded at startup when no text is given on the command line
    pub initial_preset: Option<String>,
    /// Show the tips pane
    pub show_tips: bool,
    /// Extra presets, appended after the built-in ones
    pub presets: Vec<PresetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_preset: None,
            show_tips: true,
            presets: Vec::new(),
        }
    }
}

/// A user-defined preset as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetConfig {
    pub key: String,
    pub text: String,
    #[serde(default)]
    pub start: Option<i64>,
    #[serde(default)]
    pub end: Option<i64>,
    #[serde(default = "default_step")]
    pub step: i64,
    #[serde(default)]
    pub description: String,
}

fn default_step() -> i64 {
    1
}

impl PresetConfig {
    pub fn to_preset(&self) -> SliceResult<Preset> {
        let params = SliceParams::try_new(self.start, self.end, self.step)?;
        let description = if self.description.is_empty() {
            self.key.clone()
        } else {
            self.description.clone()
        };
        Ok(Preset::new(&self.key, &self.text, params, description))
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            config_path: config_path.to_path_buf(),
            source,
        })?;

        Ok(Some(config))
    }

    /// Load from the default location
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(path),
            None => Ok(None),
        }
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("slicetty").join("config.toml"))
    }

    /// Built-in presets followed by the configured ones.
    ///
    /// Configured presets with a zero step are skipped.
    pub fn preset_library(&self) -> PresetLibrary {
        let mut library = PresetLibrary::builtin();
        for preset in &self.presets {
            match preset.to_preset() {
                Ok(preset) => library.insert(preset),
                Err(e) => tracing::warn!("skipping preset '{}': {}", preset.key, e),
            }
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(dir.path().join("config.toml")).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_presets() {
        let file = write_config(
            r#"
initial_preset = "domain"
show_tips = false

[[presets]]
key = "domain"
text = "user@example.com"
start = 5
description = "Extract domain from email"

[[presets]]
key = "broken"
text = "abc"
step = 0
"#,
        );
        let config = Config::load_from_path(file.path()).unwrap().unwrap();
        assert_eq!(config.initial_preset.as_deref(), Some("domain"));
        assert!(!config.show_tips);
        assert_eq!(config.presets.len(), 2);
        assert_eq!(config.presets[0].step, 1);

        let library = config.preset_library();
        assert!(library.get("broken").is_err());
        let domain = library.get("domain").unwrap();
        assert_eq!(domain.params.start, Some(5));
        assert_eq!(domain.params.end, None);
        assert_eq!(library.len(), 6);
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let file = write_config("");
        let config = Config::load_from_path(file.path()).unwrap().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.show_tips);
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let file = write_config("show_tips = \"maybe\"");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
