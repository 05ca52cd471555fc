//! A wheel column: the selected row centered, neighbours above and below.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::events::Action;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

use super::truncate;

/// One visible row of a wheel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WheelRow {
    pub text: String,
    /// Rows outside the allowed range are drawn but dimmed
    pub enabled: bool,
}

/// Render a wheel whose `rows` are centered on the selection.
///
/// `rows[rows.len() / 2]` is the selected row; `None` slots are blank.
/// When `area` is shorter than `rows`, only the rows around the selection
/// are drawn, so the selection always stays visible.
/// Clicking a row scrolls it to the center.
pub fn render_wheel(
    rows: &[Option<WheelRow>],
    component: usize,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
    registry: &mut InteractionRegistry,
) {
    if area.is_empty() || rows.is_empty() {
        return;
    }

    let center = rows.len() / 2;
    let (first, visible) = visible_window(rows.len(), area.height as usize);
    let width = area.width as usize;

    let lines: Vec<Line> = rows[first..first + visible]
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let Some(row) = row else {
                return Line::raw("");
            };
            let style = if first + i == center {
                let fg = if focused { ACCENT_LIGHT_BLUE } else { TEXT_WHITE };
                Style::new().fg(fg).add_modifier(Modifier::BOLD)
            } else {
                Style::new().fg(TEXT_DIM)
            };
            let style = if row.enabled {
                style
            } else {
                style.fg(TEXT_DIM).add_modifier(Modifier::DIM)
            };
            Line::styled(truncate(&row.text, width), style)
        })
        .collect();

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, buf);

    let center_y = area.y + (center - first) as u16;
    buf.set_style(Rect::new(area.x, center_y, area.width, 1), Style::new().bg(SELECTION_BG));

    for i in 0..visible {
        let delta = (first + i) as i32 - center as i32;
        registry.register_click(
            "wheel_row",
            Rect::new(area.x, area.y + i as u16, area.width, 1),
            Action::ScrollBy { component, delta },
        );
    }

    registry.register_scroll(
        "wheel",
        area,
        Action::ScrollBy { component, delta: -1 },
        Action::ScrollBy { component, delta: 1 },
    );
}

/// First row index and row count of the window of `len` rows that fits
/// `height`, centered on the middle row.
fn visible_window(len: usize, height: usize) -> (usize, usize) {
    let visible = len.min(height);
    let first = (len / 2).saturating_sub(visible / 2).min(len - visible);
    (first, visible)
}
