//! Toolbar component.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};

use crate::events::Action;
use crate::toolbar::Toolbar;
use crate::tui::interaction::InteractionRegistry;
use crate::tui::theme::*;

/// Render the toolbar: Cancel on the left, Done on the right.
pub fn render_toolbar(toolbar: &Toolbar, area: Rect, buf: &mut Buffer, registry: &mut InteractionRegistry) {
    if area.is_empty() {
        return;
    }

    Clear.render(area, buf);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(TEXT_DIM))
        .style(Style::new().bg(PANEL_BG));
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.is_empty() {
        return;
    }

    let cancel = toolbar.cancel.label();
    let cancel_width = cancel.chars().count() as u16;
    let cancel_area = Rect::new(inner.x.saturating_add(1), inner.y, cancel_width, 1).intersection(inner);
    buf.set_stringn(
        cancel_area.x,
        cancel_area.y,
        &cancel,
        cancel_area.width as usize,
        Style::new().fg(ACCENT_CORAL),
    );
    registry.register_click("toolbar_cancel", cancel_area, Action::Cancel);

    let done = toolbar.done.label();
    let done_width = done.chars().count() as u16;
    let done_x = inner.right().saturating_sub(done_width + 1).max(inner.x);
    let done_area = Rect::new(done_x, inner.y, done_width, 1).intersection(inner);
    buf.set_stringn(
        done_area.x,
        done_area.y,
        &done,
        done_area.width as usize,
        Style::new().fg(ACCENT_LIGHT_BLUE).add_modifier(Modifier::BOLD),
    );
    registry.register_click("toolbar_done", done_area, Action::Done);
}
