//! Central event handler that routes terminal events to the key and mouse handlers.

use crossterm::event::{Event, KeyEventKind};

use crate::tui::interaction::InteractionRegistry;

use super::Action;
use super::keyboard::handle_key_event;
use super::mouse::handle_mouse_event;

pub struct EventHandler;

impl EventHandler {
    /// Handle a crossterm event and return an action.
    pub fn handle_event(registry: &InteractionRegistry, event: &Event) -> Action {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(*key),
            Event::Mouse(mouse) => handle_mouse_event(registry, *mouse),
            _ => Action::None,
        }
    }
}
