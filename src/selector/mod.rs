//! The two selector variants an overlay can carry.

mod date;
mod list;

pub use date::{DateField, DateMode, DateSelector};
pub use list::{DEFAULT_ROW_COUNT, ListColumn, ListSelector};

/// Exactly one selector lives in an overlay.
#[derive(Debug)]
pub enum Selector {
    List(ListSelector),
    Date(DateSelector),
}

impl Selector {
    /// Number of wheels side by side.
    pub fn component_count(&self) -> usize {
        match self {
            Selector::List(list) => list.component_count(),
            Selector::Date(date) => date.fields().len(),
        }
    }

    pub fn focused_component(&self) -> usize {
        match self {
            Selector::List(list) => list.focused_component(),
            Selector::Date(date) => date.focused_index(),
        }
    }

    pub fn focus_next(&mut self) {
        match self {
            Selector::List(list) => list.focus_next(),
            Selector::Date(date) => date.focus_next(),
        }
    }

    pub fn focus_prev(&mut self) {
        match self {
            Selector::List(list) => list.focus_prev(),
            Selector::Date(date) => date.focus_prev(),
        }
    }

    /// Move the wheel `component` by `delta` rows and focus it.
    pub fn scroll_by(&mut self, component: usize, delta: i32) {
        match self {
            Selector::List(list) => {
                list.set_focused_component(component);
                list.scroll_by(component, delta);
            }
            Selector::Date(date) => {
                date.set_focused_index(component);
                date.step(delta);
            }
        }
    }

    /// Move the focused wheel by `delta` rows.
    pub fn scroll_focused(&mut self, delta: i32) {
        let component = self.focused_component();
        self.scroll_by(component, delta);
    }
}
