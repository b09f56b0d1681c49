//! Plain-text rendering of a snapshot
//!
//! Produces the same information as the TUI without styling: the code line,
//! the result, and the index grid with a caret row marking the selection.

use super::panes::indices::display_char;
use super::panes::cell_width;
use crate::snapshot::SliceSnapshot;
use std::fmt::Write;

pub fn render_plain(snapshot: &SliceSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "text{}", snapshot.notation);
    match snapshot.error() {
        Some(e) => {
            let _ = writeln!(out, "Result: \"\" ({})", e);
        }
        None => {
            let _ = writeln!(out, "Result: \"{}\"", snapshot.result);
        }
    }

    if snapshot.is_empty() {
        return out;
    }

    let length = snapshot.len();
    let cell = cell_width(length);
    let mut positive = String::new();
    let mut chars = String::new();
    let mut markers = String::new();
    let mut negative = String::new();

    for i in 0..length {
        let _ = write!(positive, "{:^cell$}", i);
        let _ = write!(chars, "{:^cell$}", display_char(snapshot.chars[i]));
        let marker = if snapshot.mask.is_selected(i) { "^" } else { "" };
        let _ = write!(markers, "{:^cell$}", marker);
        let _ = write!(negative, "{:^cell$}", -((length - i) as i64));
    }

    out.push('\n');
    for row in [positive, chars, markers, negative] {
        let _ = writeln!(out, "{}", row.trim_end());
    }
    out
}
