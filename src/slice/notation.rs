//! `[start:end:step]` notation

use std::fmt::Write;

/// Format slice bounds the way they would be written in source.
///
/// Absent bounds leave their field empty, `:step` is dropped when the step is
/// absent or 1, and an explicit end equal to `length` is dropped for forward
/// steps since it selects the same thing as an open end.
pub fn notation(start: Option<i64>, end: Option<i64>, step: Option<i64>, length: usize) -> String {
    let forward = step.map_or(true, |s| s > 0);
    let end = end.filter(|&e| !(forward && usize::try_from(e).is_ok_and(|e| e == length)));

    let mut out = String::from("[");
    if let Some(start) = start {
        let _ = write!(out, "{}", start);
    }
    out.push(':');
    if let Some(end) = end {
        let _ = write!(out, "{}", end);
    }
    if let Some(step) = step.filter(|&s| s != 1) {
        let _ = write!(out, ":{}", step);
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_notation() {
        assert_eq!(notation(Some(0), Some(5), Some(1), 20), "[0:5]");
        assert_eq!(notation(Some(-4), None, Some(1), 11), "[-4:]");
        assert_eq!(notation(None, None, None, 3), "[:]");
    }

    #[test]
    fn test_step_is_shown_unless_one() {
        assert_eq!(notation(None, None, Some(2), 11), "[::2]");
        assert_eq!(notation(None, None, Some(-1), 6), "[::-1]");
        assert_eq!(notation(Some(1), Some(2), Some(0), 6), "[1:2:0]");
    }

    #[test]
    fn test_end_equal_to_length_is_omitted_for_forward_steps() {
        assert_eq!(notation(Some(0), Some(11), Some(2), 11), "[0::2]");
        assert_eq!(notation(Some(0), Some(6), None, 6), "[0:]");
        assert_eq!(notation(Some(0), Some(6), Some(-1), 6), "[0:6:-1]");
    }
}
