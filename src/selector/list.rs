//! Multi-component list wheel.

use crate::delegate::RowSource;
use crate::wheel::Wheel;

/// Rows shown by a component when no row-count override is supplied.
pub const DEFAULT_ROW_COUNT: usize = 0;

/// A list of one or more side-by-side wheels.
///
/// Row counts and titles come from the [`RowSource`] overrides. Without them
/// every component has [`DEFAULT_ROW_COUNT`] rows and empty titles.
#[derive(Debug)]
pub struct ListSelector {
    component_count: usize,
    selected: Vec<usize>,
    focused: usize,
    source: RowSource,
}

impl Default for ListSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ListSelector {
    pub fn new() -> Self {
        Self {
            component_count: 1,
            selected: vec![0],
            focused: 0,
            source: RowSource::default(),
        }
    }

    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Set how many wheels are shown side by side (at least one).
    pub fn set_component_count(&mut self, count: usize) {
        let count = count.max(1);
        self.component_count = count;
        self.selected.resize(count, 0);
        self.focused = self.focused.min(count - 1);
    }

    pub fn row_source(&self) -> &RowSource {
        &self.source
    }

    /// Replace both row overrides.
    pub fn set_row_source(&mut self, source: RowSource) {
        self.source = source;
        self.reload();
    }

    pub fn set_row_count<F>(&mut self, f: F)
    where
        F: Fn(&ListSelector, usize) -> usize + 'static,
    {
        self.source.row_count = Some(Box::new(f));
        self.reload();
    }

    pub fn set_title_for_row<F>(&mut self, f: F)
    where
        F: Fn(&ListSelector, usize, usize) -> String + 'static,
    {
        self.source.title_for_row = Some(Box::new(f));
    }

    /// Rows in `component`, from the override or [`DEFAULT_ROW_COUNT`].
    pub fn number_of_rows(&self, component: usize) -> usize {
        if component >= self.component_count {
            return 0;
        }
        match &self.source.row_count {
            Some(row_count) => row_count(self, component),
            None => DEFAULT_ROW_COUNT,
        }
    }

    /// Title of `row` in `component`, empty without an override.
    pub fn title_for_row(&self, row: usize, component: usize) -> String {
        match &self.source.title_for_row {
            Some(title) => title(self, row, component),
            None => String::new(),
        }
    }

    /// Selected row of `component`, `None` when it has no rows.
    pub fn selected_row(&self, component: usize) -> Option<usize> {
        let rows = self.number_of_rows(component);
        if rows == 0 {
            return None;
        }
        self.selected.get(component).map(|&row| row.min(rows - 1))
    }

    /// Selected rows of every component, left to right.
    pub fn selected_rows(&self) -> Vec<Option<usize>> {
        (0..self.component_count)
            .map(|component| self.selected_row(component))
            .collect()
    }

    /// Select `row` in `component` (clamped to the rows it has).
    pub fn select_row(&mut self, row: usize, component: usize) {
        if let Some(mut column) = self.column_mut(component) {
            column.select_index(row);
        }
    }

    /// Clamp stored selections after the overrides' data changed.
    pub fn reload(&mut self) {
        for component in 0..self.component_count {
            let rows = self.number_of_rows(component);
            self.selected[component] = self.selected[component].min(rows.saturating_sub(1));
        }
    }

    pub fn focused_component(&self) -> usize {
        self.focused
    }

    pub fn set_focused_component(&mut self, component: usize) {
        if component < self.component_count {
            self.focused = component;
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.component_count;
    }

    pub fn focus_prev(&mut self) {
        self.focused = self
            .focused
            .checked_sub(1)
            .unwrap_or(self.component_count - 1);
    }

    /// The wheel of `component`.
    pub fn column_mut(&mut self, component: usize) -> Option<ListColumn<'_>> {
        if component >= self.component_count {
            return None;
        }
        Some(ListColumn {
            selector: self,
            component,
        })
    }

    pub fn scroll_by(&mut self, component: usize, delta: i32) {
        if let Some(mut column) = self.column_mut(component) {
            column.scroll_by(delta);
        }
    }

    pub fn select_next(&mut self) {
        self.scroll_by(self.focused, 1);
    }

    pub fn select_prev(&mut self) {
        self.scroll_by(self.focused, -1);
    }
}

/// One component of a [`ListSelector`] viewed as a wheel.
pub struct ListColumn<'a> {
    selector: &'a mut ListSelector,
    component: usize,
}

impl Wheel for ListColumn<'_> {
    fn len(&self) -> usize {
        self.selector.number_of_rows(self.component)
    }

    fn selected_index(&self) -> usize {
        self.selector.selected_row(self.component).unwrap_or(0)
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selector.selected[self.component] = index;
    }
}
