//! Input pane rendering
//!
//! Shows one line per form field. Blank fields show their placeholder, and a
//! bound that does not parse is marked as ignored since it counts as absent.

use super::utils::pane_block;
use crate::input::{parse_index, FormField, SliceForm};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LABEL_WIDTH: usize = 6;

/// Render the input pane. `focused_field` is `None` when another pane has focus.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    form: &SliceForm,
    focused_field: Option<FormField>,
) {
    let block = pane_block(" Slice ", focused_field.is_some());

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| field_line(form, field, focused_field == Some(field)))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(form: &SliceForm, field: FormField, is_focused: bool) -> Line<'static> {
    let label_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.primary)
    };

    let marker = if is_focused { "▶ " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
    ];

    let raw = form.field(field);
    if raw.is_empty() {
        if is_focused {
            spans.push(Span::styled("▌", Style::default().fg(DEFAULT_THEME.fg)));
        }
        spans.push(Span::styled(
            field.placeholder(),
            Style::default()
                .fg(DEFAULT_THEME.comment)
                .add_modifier(Modifier::ITALIC),
        ));
        return Line::from(spans);
    }

    let value_style = if field.is_numeric() {
        Style::default().fg(DEFAULT_THEME.secondary)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    spans.push(Span::styled(raw.to_string(), value_style));

    if is_focused {
        spans.push(Span::styled("▌", Style::default().fg(DEFAULT_THEME.fg)));
    }

    if field.is_numeric() && parse_index(raw).is_none() {
        spans.push(Span::styled(
            "  (ignored)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    Line::from(spans)
}
