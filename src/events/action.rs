//! Action enum for decoupling input handling from state changes.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are applied by the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action
    None,

    // === Toolbar ===
    /// Dismiss without notifying the delegate
    Cancel,
    /// Notify the delegate, then dismiss
    Done,

    // === Wheels ===
    /// Move the focused wheel one row up
    SelectPrev,
    /// Move the focused wheel one row down
    SelectNext,
    /// Focus the wheel to the left
    FocusPrev,
    /// Focus the wheel to the right
    FocusNext,
    /// Move the focused wheel by n rows
    ScrollFocused(i32),
    /// Focus a wheel and move it by n rows
    ScrollBy { component: usize, delta: i32 },
}
