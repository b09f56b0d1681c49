//! Error types for slice parameters
//!
//! Malformed numeric input never becomes an error: the form layer degrades it
//! to an absent bound. The only parameter that can be rejected is a zero step.

use thiserror::Error;

/// Errors raised while building slice parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SliceError {
    /// A step of zero has no traversal direction
    #[error("slice step cannot be zero")]
    ZeroStep,

    /// Preset lookup by key failed
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Result type for slice operations
pub type SliceResult<T> = Result<T, SliceError>;
