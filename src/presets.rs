//! Built-in example slices
//!
//! Presets only prefill the form. They are ordered for display and indexed by
//! key for lookup from the command line and the config file.

use crate::input::SliceForm;
use crate::slice::{SliceError, SliceParams, SliceResult, Step};
use rustc_hash::FxHashMap;

/// A named example slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub key: String,
    pub text: String,
    pub params: SliceParams,
    pub description: String,
}

impl Preset {
    pub fn new(
        key: impl Into<String>,
        text: impl Into<String>,
        params: SliceParams,
        description: impl Into<String>,
    ) -> Self {
        Preset {
            key: key.into(),
            text: text.into(),
            params,
            description: description.into(),
        }
    }

    /// Form contents for this preset, absent bounds left blank
    pub fn to_form(&self) -> SliceForm {
        SliceForm::from_params(self.text.clone(), &self.params)
    }
}

/// Presets shipped with the explorer
pub fn builtin_presets() -> Vec<Preset> {
    let step = |k: i64| Step::new(k).unwrap_or(Step::ONE);
    vec![
        Preset::new(
            "basic",
            "Hello, Python World!",
            SliceParams::new(Some(0), Some(5), Step::ONE),
            "Basic substring extraction",
        ),
        Preset::new(
            "negative",
            "Programming",
            SliceParams::new(Some(-4), None, Step::ONE),
            "Negative indexing from end",
        ),
        Preset::new(
            "skip",
            "ABCDEFGHIJK",
            SliceParams::new(Some(0), Some(11), step(2)),
            "Every other character",
        ),
        Preset::new(
            "reverse",
            "Python",
            SliceParams::new(None, None, Step::REVERSE),
            "Reverse the string",
        ),
        Preset::new(
            "email",
            "user@example.com",
            SliceParams::new(Some(0), Some(4), Step::ONE),
            "Extract username from email",
        ),
    ]
}

/// Ordered presets with a key index
#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: Vec<Preset>,
    by_key: FxHashMap<String, usize>,
}

impl PresetLibrary {
    pub fn new(presets: Vec<Preset>) -> Self {
        let mut library = PresetLibrary {
            presets: Vec::with_capacity(presets.len()),
            by_key: FxHashMap::default(),
        };
        for preset in presets {
            library.insert(preset);
        }
        library
    }

    pub fn builtin() -> Self {
        PresetLibrary::new(builtin_presets())
    }

    /// Add a preset, replacing any existing preset with the same key in place
    pub fn insert(&mut self, preset: Preset) {
        match self.by_key.get(&preset.key) {
            Some(&index) => {
                tracing::debug!("replacing preset '{}'", preset.key);
                self.presets[index] = preset;
            }
            None => {
                self.by_key.insert(preset.key.clone(), self.presets.len());
                self.presets.push(preset);
            }
        }
    }

    pub fn get(&self, key: &str) -> SliceResult<&Preset> {
        self.index_of(key)
            .map(|i| &self.presets[i])
            .ok_or_else(|| SliceError::UnknownPreset(key.to_string()))
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub fn at(&self, index: usize) -> Option<&Preset> {
        self.presets.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.key.as_str()).collect()
    }
}

impl Default for PresetLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
