//! Editable slice form
//!
//! The form keeps every field as the raw text the user typed. Numbers are only
//! parsed on demand, and parsing is lenient: a blank or non-numeric bound is
//! treated as absent instead of being reported.

use crate::slice::{notation, SliceParams, SliceResult, Step};

/// Fields of the slice form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Text,
    Start,
    End,
    Step,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Text,
        FormField::Start,
        FormField::End,
        FormField::Step,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Text => "Text",
            FormField::Start => "Start",
            FormField::End => "End",
            FormField::Step => "Step",
        }
    }

    /// Placeholder shown while the field is blank
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Text => "Enter your text...",
            FormField::Start => "0",
            FormField::End => "length",
            FormField::Step => "1",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, FormField::Text)
    }
}

/// Parse a bound field. Blank and malformed input both mean "absent".
pub fn parse_index(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!("treating {:?} as absent: {}", raw, e);
            None
        }
    }
}

/// Raw contents of the text, start, end and step fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliceForm {
    pub text: String,
    pub start: String,
    pub end: String,
    pub step: String,
}

impl SliceForm {
    pub fn new(
        text: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        step: impl Into<String>,
    ) -> Self {
        SliceForm {
            text: text.into(),
            start: start.into(),
            end: end.into(),
            step: step.into(),
        }
    }

    /// Prefill the form from parsed parameters, leaving absent bounds blank
    pub fn from_params(text: impl Into<String>, params: &SliceParams) -> Self {
        let show = |v: Option<i64>| v.map(|v| v.to_string()).unwrap_or_default();
        SliceForm::new(
            text,
            show(params.start),
            show(params.end),
            params.step.to_string(),
        )
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Text => &self.text,
            FormField::Start => &self.start,
            FormField::End => &self.end,
            FormField::Step => &self.step,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Text => &mut self.text,
            FormField::Start => &mut self.start,
            FormField::End => &mut self.end,
            FormField::Step => &mut self.step,
        }
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn start_value(&self) -> Option<i64> {
        parse_index(&self.start)
    }

    pub fn end_value(&self) -> Option<i64> {
        parse_index(&self.end)
    }

    pub fn step_value(&self) -> Option<i64> {
        parse_index(&self.step)
    }

    /// Parameters described by the form. Fails only on a zero step.
    pub fn params(&self) -> SliceResult<SliceParams> {
        let step = match self.step_value() {
            Some(value) => Step::new(value)?,
            None => Step::ONE,
        };
        Ok(SliceParams::new(self.start_value(), self.end_value(), step))
    }

    /// `[start:end:step]` for the values as typed
    pub fn notation(&self) -> String {
        notation(
            self.start_value(),
            self.end_value(),
            self.step_value(),
            self.char_len(),
        )
    }

    /// Append a character to a field.
    ///
    /// Numeric fields only take digits and signs. Returns whether the
    /// character was accepted.
    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        if field.is_numeric() && !(c.is_ascii_digit() || c == '-' || c == '+') {
            return false;
        }
        if c.is_control() {
            return false;
        }
        self.field_mut(field).push(c);
        true
    }

    pub fn backspace(&mut self, field: FormField) {
        self.field_mut(field).pop();
    }

    pub fn clear(&mut self, field: FormField) {
        self.field_mut(field).clear();
    }

    /// Nudge a numeric field by `delta`.
    ///
    /// A blank bound starts from its natural boundary in the current traversal
    /// direction. The step field skips over zero.
    pub fn adjust(&mut self, field: FormField, delta: i64) {
        let len = i64::try_from(self.char_len()).unwrap_or(i64::MAX);
        let forward = self.step_value().map_or(true, |s| s >= 0);

        let base = match field {
            FormField::Text => return,
            FormField::Start => self
                .start_value()
                .unwrap_or(if forward { 0 } else { len - 1 }),
            FormField::End => self
                .end_value()
                .unwrap_or(if forward { len } else { -(len + 1) }),
            FormField::Step => self.step_value().unwrap_or(1),
        };

        let mut next = base.saturating_add(delta);
        if field == FormField::Step && next == 0 {
            next = next.saturating_add(delta.signum());
        }
        *self.field_mut(field) = next.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::SliceError;

    #[test]
    fn test_parse_index_is_lenient() {
        assert_eq!(parse_index("5"), Some(5));
        assert_eq!(parse_index(" -4 "), Some(-4));
        assert_eq!(parse_index("+3"), Some(3));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("   "), None);
        assert_eq!(parse_index("abc"), None);
        assert_eq!(parse_index("-"), None);
        assert_eq!(parse_index("99999999999999999999"), None);
    }

    #[test]
    fn test_params_from_form() {
        let form = SliceForm::new("Programming", "-4", "", "");
        let params = form.params().unwrap();
        assert_eq!(params.start, Some(-4));
        assert_eq!(params.end, None);
        assert_eq!(params.step, Step::ONE);
    }

    #[test]
    fn test_garbage_bounds_become_absent() {
        let form = SliceForm::new("Python", "x", "oops", "-1");
        assert!(form.params().unwrap().is_full_reverse());
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let form = SliceForm::new("Python", "", "", "0");
        assert_eq!(form.params(), Err(SliceError::ZeroStep));
    }

    #[test]
    fn test_from_params_keeps_absent_blank() {
        let params = SliceParams::try_new(None, None, -1).unwrap();
        let form = SliceForm::from_params("Python", &params);
        assert_eq!(form, SliceForm::new("Python", "", "", "-1"));
    }

    #[test]
    fn test_numeric_fields_reject_letters() {
        let mut form = SliceForm::default();
        assert!(!form.insert_char(FormField::Start, 'a'));
        assert!(form.insert_char(FormField::Start, '-'));
        assert!(form.insert_char(FormField::Start, '2'));
        assert!(form.insert_char(FormField::Text, 'a'));
        assert_eq!(form.start, "-2");
        form.backspace(FormField::Start);
        assert_eq!(form.start, "-");
        form.clear(FormField::Start);
        assert_eq!(form.start, "");
    }

    #[test]
    fn test_adjust_numeric_fields() {
        let mut form = SliceForm::new("Python", "", "", "");
        form.adjust(FormField::Start, 1);
        assert_eq!(form.start, "1");
        form.adjust(FormField::End, -1);
        assert_eq!(form.end, "5");
        form.adjust(FormField::Step, -1);
        assert_eq!(form.step, "-1");
        form.adjust(FormField::Text, 1);
        assert_eq!(form.text, "Python");
    }

    #[test]
    fn test_adjust_backward_defaults() {
        let mut form = SliceForm::new("Python", "", "", "-1");
        form.adjust(FormField::Start, -1);
        assert_eq!(form.start, "4");
        form.adjust(FormField::End, 1);
        assert_eq!(form.end, "-6");
    }
}
