//! Rendering of the overlay with ratatui.

pub mod components;
pub mod interaction;
pub mod layout;
pub mod theme;
