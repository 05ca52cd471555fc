//! Input handling for the overlay.
//!
//! Terminal events are translated into [`Action`]s, which the picker then
//! applies through `PickerView::handle_action`.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;
