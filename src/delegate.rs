//! Caller-supplied capabilities.
//!
//! The one required capability, reacting to "Done", is a trait. The optional
//! row overrides are independent closures grouped in a [`RowSource`], so a
//! caller supplies either, both or neither.

use std::fmt;

use crate::overlay::PickerView;
use crate::selector::ListSelector;
use crate::toolbar::ToolbarButton;

/// Receives the Done notification.
///
/// The picker holds its delegate weakly, so the caller keeps ownership.
pub trait PickerDelegate {
    /// Called once per Done press, before the overlay starts dismissing.
    ///
    /// The selector is still alive here; read the selected rows or the date
    /// from `picker`.
    fn done_pressed(&mut self, picker: &PickerView, button: &ToolbarButton);
}

/// Number of rows in a list component.
pub type RowCountFn = Box<dyn Fn(&ListSelector, usize) -> usize>;

/// Title of `row` in `component`.
pub type TitleFn = Box<dyn Fn(&ListSelector, usize, usize) -> String>;

/// Optional row overrides for the list selector.
#[derive(Default)]
pub struct RowSource {
    pub(crate) row_count: Option<RowCountFn>,
    pub(crate) title_for_row: Option<TitleFn>,
}

impl RowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the number of rows per component.
    pub fn with_row_count<F>(mut self, f: F) -> Self
    where
        F: Fn(&ListSelector, usize) -> usize + 'static,
    {
        self.row_count = Some(Box::new(f));
        self
    }

    /// Override the title shown for `(row, component)`.
    pub fn with_title_for_row<F>(mut self, f: F) -> Self
    where
        F: Fn(&ListSelector, usize, usize) -> String + 'static,
    {
        self.title_for_row = Some(Box::new(f));
        self
    }

    pub fn has_row_count(&self) -> bool {
        self.row_count.is_some()
    }

    pub fn has_title_for_row(&self) -> bool {
        self.title_for_row.is_some()
    }
}

impl fmt::Debug for RowSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowSource")
            .field("row_count", &self.has_row_count())
            .field("title_for_row", &self.has_title_for_row())
            .finish()
    }
}
