//! Keyboard event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Rows moved by PageUp/PageDown.
pub const PAGE_ROWS: i32 = 5;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Cancel,
        KeyCode::Enter => Action::Done,

        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::PageUp => Action::ScrollFocused(-PAGE_ROWS),
        KeyCode::PageDown => Action::ScrollFocused(PAGE_ROWS),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => Action::FocusNext,

        _ => Action::None,
    }
}
