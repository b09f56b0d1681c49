//! Static tips pane

use super::utils::pane_block;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const PRO_TIPS: [&str; 5] = [
    "Negative indices count from the end: -1 is the last character",
    "End index is exclusive (not included in result)",
    "Empty start/end uses string boundaries",
    "Negative step reverses the direction",
    "Step of 2 takes every other character",
];

pub const COMMON_PATTERNS: [(&str, &str); 5] = [
    ("text[:5]", "first 5 characters"),
    ("text[5:]", "from index 5 to end"),
    ("text[-3:]", "last 3 characters"),
    ("text[::2]", "every other character"),
    ("text[::-1]", "reverse string"),
];

/// Render the tips pane: pro tips on the left, common patterns on the right
pub fn render_tips_pane(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let tips: Vec<Line> = PRO_TIPS
        .iter()
        .map(|tip| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(DEFAULT_THEME.success)),
                Span::styled(*tip, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    let patterns: Vec<Line> = COMMON_PATTERNS
        .iter()
        .map(|(code, meaning)| {
            Line::from(vec![
                Span::styled(format!("{:<11}", code), Style::default().fg(DEFAULT_THEME.code)),
                Span::styled("→ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(*meaning, Style::default().fg(DEFAULT_THEME.fg)),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(tips).block(pane_block(" Pro Tips ", false)),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(patterns).block(pane_block(" Common Patterns ", false)),
        columns[1],
    );
}
