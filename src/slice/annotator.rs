//! Per-position highlight decisions
//!
//! The mask is decided position by position from the resolved bounds, without
//! walking the traversal. It shares [`resolve_bounds`] with the engine, so a
//! position is highlighted exactly when the engine would extract it.

use super::bounds::{resolve_bounds, NormalizedBounds};
use super::SliceParams;

/// One flag per sequence position, true when the position is selected
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightMask {
    positions: Vec<bool>,
}

impl HighlightMask {
    /// A mask with nothing selected
    pub fn none(length: usize) -> Self {
        HighlightMask {
            positions: vec![false; length],
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.positions.get(index).copied().unwrap_or(false)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.positions
    }

    /// Number of selected positions
    pub fn count(&self) -> usize {
        self.positions.iter().filter(|&&selected| selected).count()
    }

    /// Selected positions in ascending order
    pub fn selected_positions(&self) -> Vec<usize> {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, &selected)| selected.then_some(i))
            .collect()
    }
}

/// Decide, for every position of a sequence of `length` items, whether it is selected
pub fn mask(length: usize, params: &SliceParams) -> HighlightMask {
    let bounds = resolve_bounds(length, params);
    let step = params.step.get();

    HighlightMask {
        positions: (0..length)
            .map(|i| is_selected(i as i64, bounds, step))
            .collect(),
    }
}

fn is_selected(i: i64, bounds: NormalizedBounds, step: i64) -> bool {
    let stride = step.unsigned_abs();
    if step > 0 {
        i >= bounds.start && i < bounds.end && (i - bounds.start) as u64 % stride == 0
    } else {
        i <= bounds.start && i > bounds.end && (bounds.start - i) as u64 % stride == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(length: usize, start: Option<i64>, end: Option<i64>, step: i64) -> Vec<bool> {
        let params = SliceParams::try_new(start, end, step).unwrap();
        mask(length, &params).as_slice().to_vec()
    }

    #[test]
    fn test_forward_mask() {
        assert_eq!(
            flags(6, Some(1), Some(5), 2),
            vec![false, true, false, true, false, false]
        );
    }

    #[test]
    fn test_backward_mask() {
        assert_eq!(
            flags(6, None, None, -2),
            vec![false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_negative_start_with_forward_step_highlights_tail() {
        // Zero-defaulting the start here would highlight nothing.
        assert_eq!(
            flags(6, Some(-2), None, 1),
            vec![false, false, false, false, true, true]
        );
    }

    #[test]
    fn test_mask_queries() {
        let params = SliceParams::try_new(Some(0), Some(4), 1).unwrap();
        let m = mask(6, &params);
        assert_eq!(m.len(), 6);
        assert_eq!(m.count(), 4);
        assert!(m.is_selected(3));
        assert!(!m.is_selected(4));
        assert!(!m.is_selected(100));
        assert_eq!(m.selected_positions(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_none_mask() {
        let m = HighlightMask::none(3);
        assert_eq!(m.count(), 0);
        assert!(!m.is_empty());
        assert!(HighlightMask::none(0).is_empty());
    }
}
