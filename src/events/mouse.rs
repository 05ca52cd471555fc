//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which the
//! picker fills while rendering its toolbar and wheels.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::interaction::InteractionRegistry;

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// Scrolling outside any wheel moves the focused wheel.
pub fn handle_mouse_event(registry: &InteractionRegistry, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::ScrollUp => {
            let action = registry.handle_scroll_up(x, y);
            if matches!(action, Action::None) {
                Action::ScrollFocused(-1)
            } else {
                action
            }
        }
        MouseEventKind::ScrollDown => {
            let action = registry.handle_scroll_down(x, y);
            if matches!(action, Action::None) {
                Action::ScrollFocused(1)
            } else {
                action
            }
        }
        MouseEventKind::Down(MouseButton::Left) => registry.handle_click(x, y),
        _ => Action::None,
    }
}
