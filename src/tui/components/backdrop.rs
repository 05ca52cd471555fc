//! Dimmed backdrop.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use crate::tui::theme::*;

/// Dim the cells already drawn in `area`, keeping their text.
pub fn render_backdrop(area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::new().fg(BACKDROP_FG).add_modifier(Modifier::DIM));
}
