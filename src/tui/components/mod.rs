//! Overlay components.
//!
//! - `backdrop` - Dims whatever the host drew below the overlay
//! - `toolbar` - Cancel/Done bar
//! - `wheel` - A single wheel column, shared by both selectors
//! - `list_selector` - Multi-component list wheels
//! - `date_selector` - Date and time wheels

mod backdrop;
mod date_selector;
mod list_selector;
mod toolbar;
mod wheel;

pub use backdrop::render_backdrop;
pub use date_selector::render_date_selector;
pub use list_selector::render_list_selector;
pub use toolbar::render_toolbar;
pub use wheel::{WheelRow, render_wheel};

/// Truncate text to `width` characters, ending with "..." when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{}...", kept)
}
