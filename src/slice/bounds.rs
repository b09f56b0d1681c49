//! Bound normalization shared by extraction and highlighting

use super::SliceParams;

/// Concrete traversal bounds: `start` is inclusive, `end` exclusive
///
/// For a forward step both lie in `[0, length]`; for a backward step both lie
/// in `[-1, length - 1]`, where `-1` means "past the front".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedBounds {
    pub start: i64,
    pub end: i64,
}

/// Sequence length as a signed index
pub(crate) fn signed_len(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

/// Resolve optional and negative bounds into concrete indices.
///
/// Absent bounds take the natural boundary in the traversal direction. Explicit
/// negative bounds count from the end. Explicit values are then clamped into the
/// traversable range so that an out-of-range start still lands on the first
/// reachable element, the same way the native slice operator behaves.
pub fn resolve_bounds(length: usize, params: &SliceParams) -> NormalizedBounds {
    let len = signed_len(length);
    let forward = params.step.is_forward();

    let (default_start, default_end) = if forward { (0, len) } else { (len - 1, -1) };

    NormalizedBounds {
        start: resolve_bound(params.start, len, forward, default_start),
        end: resolve_bound(params.end, len, forward, default_end),
    }
}

fn resolve_bound(value: Option<i64>, len: i64, forward: bool, absent: i64) -> i64 {
    let Some(value) = value else {
        return absent;
    };

    let value = if value < 0 {
        len.saturating_add(value)
    } else {
        value
    };

    if forward {
        value.clamp(0, len)
    } else {
        value.clamp(-1, len - 1)
    }
}
