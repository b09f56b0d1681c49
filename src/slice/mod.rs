//! Slice semantics over an abstract sequence
//!
//! A slice is described by [`SliceParams`]: an optional start, an optional
//! exclusive end and a non-zero [`Step`]. Negative bounds count from the end of
//! the sequence and a negative step walks it backwards.
//!
//! # Modules
//!
//! - [`bounds`]: resolves optional/negative bounds into concrete indices
//! - [`engine`]: produces the ordered [`engine::Selection`] and the substring
//! - [`annotator`]: produces the per-position [`annotator::HighlightMask`]
//! - [`notation`]: formats the `[start:end:step]` notation
//!
//! Both the engine and the annotator go through [`bounds::resolve_bounds`], so
//! the highlighted positions always match the extracted characters.

pub mod annotator;
pub mod bounds;
pub mod engine;
pub mod errors;
pub mod notation;

pub use annotator::{mask, HighlightMask};
pub use bounds::{resolve_bounds, NormalizedBounds};
pub use engine::{slice, slice_items, slice_str, Selection};
pub use errors::{SliceError, SliceResult};
pub use notation::notation;

use std::fmt;
use std::num::NonZeroI64;

/// Stride of a slice, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step(NonZeroI64);

impl Step {
    pub const ONE: Step = Step(match NonZeroI64::new(1) {
        Some(n) => n,
        None => panic!("one is non-zero"),
    });

    pub const REVERSE: Step = Step(match NonZeroI64::new(-1) {
        Some(n) => n,
        None => panic!("minus one is non-zero"),
    });

    /// Build a step, rejecting zero
    pub fn new(value: i64) -> SliceResult<Self> {
        NonZeroI64::new(value).map(Step).ok_or(SliceError::ZeroStep)
    }

    pub fn get(self) -> i64 {
        self.0.get()
    }

    /// True when traversal runs towards higher indices
    pub fn is_forward(self) -> bool {
        self.get() > 0
    }

    /// Absolute stride
    pub fn magnitude(self) -> u64 {
        self.get().unsigned_abs()
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::ONE
    }
}

impl TryFrom<i64> for Step {
    type Error = SliceError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Step::new(value)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// A slicing request, independent of the sequence it is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SliceParams {
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub step: Step,
}

impl SliceParams {
    pub fn new(start: Option<i64>, end: Option<i64>, step: Step) -> Self {
        SliceParams { start, end, step }
    }

    /// Build parameters from a raw step value
    pub fn try_new(start: Option<i64>, end: Option<i64>, step: i64) -> SliceResult<Self> {
        Ok(SliceParams::new(start, end, Step::new(step)?))
    }

    /// The `[::-1]` idiom: both bounds absent and a step of exactly -1
    pub fn is_full_reverse(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.step == Step::REVERSE
    }

    /// Notation for these parameters over a sequence of `length` items
    pub fn notation(&self, length: usize) -> String {
        notation(self.start, self.end, Some(self.step.get()), length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rejects_zero() {
        assert_eq!(Step::new(0), Err(SliceError::ZeroStep));
        assert_eq!(Step::try_from(-3).map(Step::get), Ok(-3));
    }

    #[test]
    fn test_step_direction() {
        assert!(Step::ONE.is_forward());
        assert!(!Step::REVERSE.is_forward());
        assert_eq!(Step::new(i64::MIN).map(Step::magnitude), Ok(1u64 << 63));
    }

    #[test]
    fn test_full_reverse_detection() {
        assert!(SliceParams::new(None, None, Step::REVERSE).is_full_reverse());
        assert!(!SliceParams::new(Some(0), None, Step::REVERSE).is_full_reverse());
        assert!(!SliceParams::try_new(None, None, -2).unwrap().is_full_reverse());
    }

    #[test]
    fn test_default_params_select_everything() {
        let params = SliceParams::default();
        assert_eq!(params.step, Step::ONE);
        assert_eq!(slice_str("abc", &params), "abc");
    }
}
