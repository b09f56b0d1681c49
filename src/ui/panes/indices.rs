//! Index visualization pane
//!
//! Every character sits in a fixed-width cell with its positive index above it
//! and its negative index below it. Selected characters are highlighted. When
//! the text is wider than the pane, the rows wrap into several chunks.

use super::utils::pane_block;
use crate::snapshot::SliceSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of one character cell for a text of `length` characters.
///
/// Wide enough for the longest index label (`-length` or `length - 1`) plus one
/// column of spacing.
pub fn cell_width(length: usize) -> usize {
    let positive = length.saturating_sub(1).to_string().len();
    let negative = length.to_string().len() + 1;
    positive.max(negative) + 1
}

/// Build the index rows for a given inner width
pub fn index_lines(snapshot: &SliceSnapshot, width: usize) -> Vec<Line<'static>> {
    let length = snapshot.len();
    let cell = cell_width(length);
    let per_chunk = (width / cell).max(1);

    let positive_style = Style::default().fg(DEFAULT_THEME.positive_index);
    let negative_style = Style::default().fg(DEFAULT_THEME.negative_index);
    let selected_style = Style::default()
        .bg(DEFAULT_THEME.selected_bg)
        .fg(DEFAULT_THEME.selected_fg)
        .add_modifier(Modifier::BOLD);
    let plain_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = Vec::new();
    let positions: Vec<usize> = (0..length).collect();

    for (n, chunk) in positions.chunks(per_chunk).enumerate() {
        if n > 0 {
            lines.push(Line::default());
        }

        let positive: Vec<Span> = chunk
            .iter()
            .map(|&i| Span::styled(format!("{:^cell$}", i), positive_style))
            .collect();

        let chars: Vec<Span> = chunk
            .iter()
            .map(|&i| {
                let style = if snapshot.mask.is_selected(i) {
                    selected_style
                } else {
                    plain_style
                };
                Span::styled(format!("{:^cell$}", display_char(snapshot.chars[i])), style)
            })
            .collect();

        let negative: Vec<Span> = chunk
            .iter()
            .map(|&i| {
                let label = -((length - i) as i64);
                Span::styled(format!("{:^cell$}", label), negative_style)
            })
            .collect();

        lines.push(Line::from(positive));
        lines.push(Line::from(chars));
        lines.push(Line::from(negative));
    }

    lines
}

/// Printable stand-in for characters that would break the cell grid
pub(crate) fn display_char(c: char) -> char {
    match c {
        ' ' => '·',
        c if c.is_control() => '�',
        c => c,
    }
}

/// Render the index visualization pane
pub fn render_indices_pane(frame: &mut Frame, area: Rect, snapshot: &SliceSnapshot) {
    let block = pane_block(" String Index Visualization ", false);

    if snapshot.is_empty() {
        let paragraph = Paragraph::new("(empty text)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines = index_lines(snapshot, inner_width);

    let legend = Style::default().fg(DEFAULT_THEME.comment);
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("• Top row: positive indices  ", legend),
        Span::styled("• Bottom row: negative indices  ", legend),
        Span::styled("• Highlighted characters show your selection", legend),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
