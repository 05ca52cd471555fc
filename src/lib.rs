//! A modal picker overlay for terminal UIs.
//!
//! A [`PickerView`] is presented above the current screen with a dimmed
//! backdrop, a toolbar carrying "Cancel" and "Done", and one selector: either
//! a multi-component list wheel or a date wheel.
//!
//! ```ignore
//! let mut host = HostView::new(frame_area);
//! let mut picker = PickerView::present_on(&mut host, PickerKind::Date);
//! if let Some(date) = picker.date_selector_mut() {
//!     date.set_mode(DateMode::Date);
//! }
//! picker.set_delegate(&delegate);
//! ```

pub mod animation;
pub mod config;
pub mod delegate;
pub mod error;
pub mod events;
pub mod host;
pub mod log;
pub mod overlay;
pub mod selector;
pub mod toolbar;
pub mod tui;
pub mod wheel;

pub use config::Config;
pub use delegate::{PickerDelegate, RowSource};
pub use error::{PickerError, Result};
pub use events::Action;
pub use host::{HostView, Layer, LayerId};
pub use overlay::{Phase, PickerKind, PickerView};
pub use selector::{DateField, DateMode, DateSelector, ListSelector, Selector};
pub use toolbar::{ButtonKind, Toolbar, ToolbarButton};
pub use tui::interaction::InteractionRegistry;
