//! Quick examples pane

use super::utils::pane_block;
use crate::presets::PresetLibrary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the presets pane.
///
/// `active` is the preset currently loaded into the form and `cursor` the one
/// that Enter would load.
pub fn render_presets_pane(
    frame: &mut Frame,
    area: Rect,
    presets: &PresetLibrary,
    active: Option<usize>,
    cursor: usize,
    is_focused: bool,
) {
    let block = pane_block(" Quick Examples ", is_focused);

    let items: Vec<ListItem> = presets
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let is_active = active == Some(i);
            let is_cursor = is_focused && cursor == i;

            let mut style = if is_active {
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            if is_cursor {
                style = style.bg(DEFAULT_THEME.status_bg);
            }

            let marker = if is_active { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(marker, style),
                Span::styled(preset.description.clone(), style),
            ]))
        })
        .collect();

    // Keep the cursor visible when the list is taller than the pane
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = (cursor + 1).saturating_sub(visible_height);
    let items: Vec<ListItem> = items.into_iter().skip(skip).collect();

    frame.render_widget(List::new(items).block(block), area);
}
