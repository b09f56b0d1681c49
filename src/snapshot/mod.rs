// Derived view of the slice form, recomputed on every edit

use crate::input::SliceForm;
use crate::slice::{self, HighlightMask, Selection, SliceError, SliceParams};

/// Everything the panes need, computed from one form state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceSnapshot {
    pub text: String,
    pub chars: Vec<char>,
    pub notation: String,
    pub params: Result<SliceParams, SliceError>,
    pub selection: Selection,
    pub mask: HighlightMask,
    pub result: String,
}

impl SliceSnapshot {
    /// Compute the snapshot for a form.
    ///
    /// An invalid form (zero step) still yields a snapshot: the result is empty
    /// and nothing is highlighted.
    pub fn compute(form: &SliceForm) -> Self {
        let chars: Vec<char> = form.text.chars().collect();
        let params = form.params();

        let (selection, mask) = match &params {
            Ok(params) => (
                slice::slice(chars.len(), params),
                slice::mask(chars.len(), params),
            ),
            Err(_) => (Selection::default(), HighlightMask::none(chars.len())),
        };
        let result: String = selection.iter().map(|i| chars[i]).collect();

        tracing::debug!(
            "recomputed text{}: {} of {} selected",
            form.notation(),
            selection.len(),
            chars.len()
        );

        SliceSnapshot {
            text: form.text.clone(),
            notation: form.notation(),
            chars,
            params,
            selection,
            mask,
            result,
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn error(&self) -> Option<&SliceError> {
        self.params.as_ref().err()
    }

    /// Characters at the highlighted positions, in traversal order
    pub fn highlighted_text(&self) -> String {
        let mut positions = self.mask.selected_positions();
        if matches!(&self.params, Ok(p) if !p.step.is_forward()) {
            positions.reverse();
        }
        positions.into_iter().map(|i| self.chars[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_basic_form() {
        let snapshot = SliceSnapshot::compute(&SliceForm::new("Hello, Python World!", "0", "5", "1"));
        assert_eq!(snapshot.result, "Hello");
        assert_eq!(snapshot.notation, "[0:5]");
        assert_eq!(snapshot.mask.count(), 5);
        assert_eq!(snapshot.highlighted_text(), "Hello");
        assert!(snapshot.error().is_none());
    }

    #[test]
    fn test_snapshot_with_zero_step_is_empty() {
        let snapshot = SliceSnapshot::compute(&SliceForm::new("Python", "", "", "0"));
        assert_eq!(snapshot.result, "");
        assert_eq!(snapshot.mask, HighlightMask::none(6));
        assert_eq!(snapshot.error(), Some(&SliceError::ZeroStep));
        assert_eq!(snapshot.notation, "[::0]");
    }

    #[test]
    fn test_snapshot_is_pure() {
        let form = SliceForm::new("ABCDEFGHIJK", "-2", "", "-3");
        assert_eq!(SliceSnapshot::compute(&form), SliceSnapshot::compute(&form));
    }

    #[test]
    fn test_reverse_highlight_order() {
        let snapshot = SliceSnapshot::compute(&SliceForm::new("Python", "", "", "-2"));
        assert_eq!(snapshot.result, "nhy");
        assert_eq!(snapshot.highlighted_text(), "nhy");
    }
}
