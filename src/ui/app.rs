//! Main TUI application state and logic

use crate::input::{FormField, SliceForm};
use crate::presets::PresetLibrary;
use crate::snapshot::SliceSnapshot;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Text,
    Start,
    End,
    Step,
    Presets,
}

impl FocusedPane {
    /// Move focus to the next pane (text -> start -> end -> step -> presets)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Text => FocusedPane::Start,
            FocusedPane::Start => FocusedPane::End,
            FocusedPane::End => FocusedPane::Step,
            FocusedPane::Step => FocusedPane::Presets,
            FocusedPane::Presets => FocusedPane::Text,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Text => FocusedPane::Presets,
            FocusedPane::Start => FocusedPane::Text,
            FocusedPane::End => FocusedPane::Start,
            FocusedPane::Step => FocusedPane::End,
            FocusedPane::Presets => FocusedPane::Step,
        }
    }

    /// The form field behind this pane, if it is one
    pub fn field(self) -> Option<FormField> {
        match self {
            FocusedPane::Text => Some(FormField::Text),
            FocusedPane::Start => Some(FormField::Start),
            FocusedPane::End => Some(FormField::End),
            FocusedPane::Step => Some(FormField::Step),
            FocusedPane::Presets => None,
        }
    }
}

/// The main application state
pub struct App {
    /// Raw field contents
    pub form: SliceForm,

    /// Everything derived from `form`, recomputed after each edit
    pub snapshot: SliceSnapshot,

    /// Quick examples
    pub presets: PresetLibrary,

    /// Preset most recently loaded into the form
    pub active_preset: Option<usize>,

    /// Highlighted row in the presets pane
    pub preset_cursor: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Whether the tips pane is shown
    pub show_tips: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app with an initial form and the preset library
    pub fn new(form: SliceForm, presets: PresetLibrary, active_preset: Option<usize>) -> Self {
        let snapshot = SliceSnapshot::compute(&form);
        let mut app = App {
            form,
            snapshot,
            presets,
            active_preset,
            preset_cursor: active_preset.unwrap_or(0),
            focused_pane: FocusedPane::Text,
            show_tips: true,
            should_quit: false,
            status_message: String::new(),
        };
        app.status_message = app.summary();
        app
    }

    pub fn with_tips(mut self, show_tips: bool) -> Self {
        self.show_tips = show_tips;
        self
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Top: form and examples | code and result. Middle: indices. Bottom: tips.
        let preset_rows = self.presets.len().min(8) as u16;
        let tips_height = if self.show_tips { 7 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6 + preset_rows + 2),
                Constraint::Min(5),
                Constraint::Length(tips_height),
            ])
            .split(pane_area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(0)])
            .split(columns[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_input_pane(
            frame,
            left_rows[0],
            &self.form,
            self.focused_pane.field(),
        );

        super::panes::render_presets_pane(
            frame,
            left_rows[1],
            &self.presets,
            self.active_preset,
            self.preset_cursor,
            self.focused_pane == FocusedPane::Presets,
        );

        super::panes::render_code_pane(frame, right_rows[0], &self.snapshot);
        super::panes::render_result_pane(frame, right_rows[1], &self.snapshot);
        super::panes::render_indices_pane(frame, rows[1], &self.snapshot);

        if self.show_tips {
            super::panes::render_tips_pane(frame, rows[2]);
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.snapshot.selection.len(),
            self.snapshot.len(),
            self.snapshot.error().is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            _ => match self.focused_pane.field() {
                Some(field) => self.handle_field_key(field, key, ctrl),
                None => self.handle_presets_key(key),
            },
        }
    }

    fn handle_field_key(&mut self, field: FormField, key: KeyEvent, ctrl: bool) {
        match key.code {
            KeyCode::Char('u') if ctrl => {
                self.form.clear(field);
                self.refresh();
            }
            KeyCode::Char(c) if !ctrl => {
                if self.form.insert_char(field, c) {
                    self.refresh();
                } else {
                    self.status_message =
                        format!("{} only takes digits and a sign", field.label());
                }
            }
            KeyCode::Backspace => {
                self.form.backspace(field);
                self.refresh();
            }
            KeyCode::Up if field.is_numeric() => {
                self.form.adjust(field, 1);
                self.refresh();
            }
            KeyCode::Down if field.is_numeric() => {
                self.form.adjust(field, -1);
                self.refresh();
            }
            KeyCode::Enter => {
                self.focused_pane = self.focused_pane.next();
            }
            _ => {}
        }
    }

    fn handle_presets_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.preset_cursor = self.preset_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.preset_cursor + 1 < self.presets.len() {
                    self.preset_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.load_preset(self.preset_cursor);
            }
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(n) = c.to_digit(10) {
                    self.load_preset(n as usize - 1);
                }
            }
            _ => {}
        }
    }

    /// Replace the form with a preset
    pub fn load_preset(&mut self, index: usize) {
        let Some(preset) = self.presets.at(index) else {
            self.status_message = format!("No example #{}", index + 1);
            return;
        };

        tracing::info!("loading preset '{}'", preset.key);
        let description = preset.description.clone();
        self.form = preset.to_form();
        self.active_preset = Some(index);
        self.preset_cursor = index;
        self.refresh();
        self.status_message = format!("Loaded: {}", description);
    }

    /// Recompute the snapshot after the form changed
    fn refresh(&mut self) {
        self.snapshot = SliceSnapshot::compute(&self.form);
        self.status_message = self.summary();
    }

    fn summary(&self) -> String {
        match self.snapshot.error() {
            Some(e) => format!("{}: showing an empty selection", e),
            None => format!(
                "text{} = \"{}\"",
                self.snapshot.notation, self.snapshot.result
            ),
        }
    }
}
