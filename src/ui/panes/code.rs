//! Code and result panes

use super::utils::pane_block;
use crate::snapshot::SliceSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the slice expression as it would be written in code
pub fn render_code_pane(frame: &mut Frame, area: Rect, snapshot: &SliceSnapshot) {
    let block = pane_block(" Code ", false);
    let line = Line::from(vec![
        Span::styled("text", Style::default().fg(DEFAULT_THEME.code)),
        Span::styled(
            snapshot.notation.clone(),
            Style::default()
                .fg(DEFAULT_THEME.code)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the quoted result string, or the reason it is empty
pub fn render_result_pane(frame: &mut Frame, area: Rect, snapshot: &SliceSnapshot) {
    let block = pane_block(" Result ", false);

    let mut lines = vec![Line::from(vec![
        Span::styled("\"", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            snapshot.result.clone(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("\"", Style::default().fg(DEFAULT_THEME.comment)),
    ])];

    match snapshot.error() {
        Some(e) => lines.push(Line::from(Span::styled(
            e.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ))),
        None => lines.push(Line::from(Span::styled(
            format!(
                "{} of {} characters selected",
                snapshot.selection.len(),
                snapshot.len()
            ),
            Style::default().fg(DEFAULT_THEME.comment),
        ))),
    }

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
