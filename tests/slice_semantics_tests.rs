// Slicing behavior checked against native slice semantics

mod common;

use pretty_assertions::assert_eq;
use rstest::rstest;
use slicetty::slice::{mask, slice, slice_str, SliceParams, Step};

/// Independent reference: clamp the bounds, then derive the element count and
/// generate `start + k * step`.
fn reference(length: usize, start: Option<i64>, end: Option<i64>, step: i64) -> Vec<usize> {
    let len = length as i64;
    let (lower, upper) = if step < 0 { (-1, len - 1) } else { (0, len) };
    let adjust = |value: Option<i64>, default: i64| match value {
        None => default,
        Some(v) if v < 0 => (v + len).max(lower),
        Some(v) => v.min(upper),
    };
    let (start, stop) = if step < 0 {
        (adjust(start, upper), adjust(end, lower))
    } else {
        (adjust(start, lower), adjust(end, upper))
    };

    let count = if step > 0 && start < stop {
        (stop - start - 1) / step + 1
    } else if step < 0 && stop < start {
        (start - stop - 1) / (-step) + 1
    } else {
        0
    };

    (0..count).map(|k| (start + k * step) as usize).collect()
}

fn params(start: Option<i64>, end: Option<i64>, step: i64) -> SliceParams {
    SliceParams::try_new(start, end, step).unwrap()
}

fn bound_values() -> Vec<Option<i64>> {
    std::iter::once(None).chain((-10..=10).map(Some)).collect()
}

#[test]
fn test_matches_reference_semantics() {
    common::tracing::init_tracing_from_env();

    for length in 0..=7usize {
        for start in bound_values() {
            for end in bound_values() {
                for step in [-4, -3, -2, -1, 1, 2, 3, 4] {
                    let p = params(start, end, step);
                    assert_eq!(
                        slice(length, &p).into_vec(),
                        reference(length, start, end, step),
                        "len={} start={:?} end={:?} step={}",
                        length,
                        start,
                        end,
                        step
                    );
                }
            }
        }
    }
}

#[test]
fn test_mask_agrees_with_selection() {
    for length in 0..=7usize {
        for start in bound_values() {
            for end in bound_values() {
                for step in [-3, -2, -1, 1, 2, 3] {
                    let p = params(start, end, step);
                    let mut highlighted = mask(length, &p).selected_positions();
                    if step < 0 {
                        highlighted.reverse();
                    }
                    assert_eq!(
                        highlighted,
                        slice(length, &p).into_vec(),
                        "len={} start={:?} end={:?} step={}",
                        length,
                        start,
                        end,
                        step
                    );
                }
            }
        }
    }
}

#[rstest]
#[case("Hello, Python World!", Some(0), Some(5), 1, "Hello")]
#[case("Hello, Python World!", Some(-4), None, 1, "rld!")]
#[case("ABCDEFGHIJK", Some(0), Some(11), 2, "ACEGIK")]
#[case("Python", None, None, -1, "nohtyP")]
#[case("user@example.com", Some(0), Some(4), 1, "user")]
#[case("Programming", Some(-4), None, 1, "ming")]
#[case("abcdef", Some(-10), None, 2, "ace")]
#[case("abcdef", Some(-9), None, 2, "ace")]
#[case("abcdef", Some(9), None, -2, "fdb")]
#[case("abcdef", Some(10), Some(-10), -3, "fc")]
#[case("abcdef", Some(2), Some(100), 1, "cdef")]
#[case("abcdef", Some(-100), Some(-100), 1, "")]
#[case("abcdef", Some(5), Some(0), -2, "fdb")]
#[case("abcdef", None, Some(-7), -1, "fedcba")]
#[case("abcdef", Some(1), Some(-1), 1, "bcde")]
fn test_concrete_slices(
    #[case] text: &str,
    #[case] start: Option<i64>,
    #[case] end: Option<i64>,
    #[case] step: i64,
    #[case] expected: &str,
) {
    assert_eq!(slice_str(text, &params(start, end, step)), expected);
}

#[test]
fn test_reverse_shortcut_matches_general_rule() {
    for text in ["", "a", "Python", "Hello, Python World!"] {
        let n = text.chars().count() as i64;
        let shortcut = SliceParams::new(None, None, Step::REVERSE);
        let explicit = params(Some(n - 1), Some(-n - 1), -1);

        assert_eq!(slice_str(text, &shortcut), slice_str(text, &explicit));
        assert_eq!(
            slice_str(text, &shortcut),
            text.chars().rev().collect::<String>()
        );
    }
}

#[test]
fn test_empty_sequence_selects_nothing() {
    for start in bound_values() {
        for end in bound_values() {
            for step in [-2, -1, 1, 2] {
                let p = params(start, end, step);
                assert!(slice(0, &p).is_empty());
                assert!(mask(0, &p).is_empty());
            }
        }
    }
}

#[test]
fn test_slicing_is_pure() {
    let p = params(Some(-7), Some(2), -2);
    let text = "Hello, Python World!";
    assert_eq!(slice_str(text, &p), slice_str(text, &p));
    assert_eq!(mask(20, &p), mask(20, &p));
}

#[test]
fn test_extreme_bounds_do_not_overflow() {
    let p = params(Some(i64::MIN), Some(i64::MAX), i64::MAX);
    assert_eq!(slice_str("abc", &p), "a");
    let p = params(Some(i64::MAX), Some(i64::MIN), i64::MIN);
    assert_eq!(slice_str("abc", &p), "c");
    assert_eq!(mask(3, &p).selected_positions(), vec![2]);
}
