//! The Cancel/Done bar anchored above the selector.

use crate::config::Config;

/// Rows taken by the toolbar: a separator line and the button row.
pub const TOOLBAR_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Cancel,
    Done,
}

/// A toolbar button, passed to the delegate when Done is pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolbarButton {
    pub kind: ButtonKind,
    pub title: String,
}

impl ToolbarButton {
    pub fn new(kind: ButtonKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }

    /// Text drawn for the button.
    pub fn label(&self) -> String {
        format!(" {} ", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub cancel: ToolbarButton,
    pub done: ToolbarButton,
}

impl Toolbar {
    pub fn new(config: &Config) -> Self {
        Self {
            cancel: ToolbarButton::new(ButtonKind::Cancel, config.cancel_title.as_str()),
            done: ToolbarButton::new(ButtonKind::Done, config.done_title.as_str()),
        }
    }

    pub fn button(&self, kind: ButtonKind) -> &ToolbarButton {
        match kind {
            ButtonKind::Cancel => &self.cancel,
            ButtonKind::Done => &self.done,
        }
    }
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
