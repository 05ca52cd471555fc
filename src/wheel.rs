//! Wheel trait definition
//!
//! A wheel is one scrollable column of a selector. Unlike a menu, a wheel
//! stops at its ends instead of wrapping around.

/// A single selectable column.
///
/// This trait provides default implementations for the stepping operations,
/// so implementors only expose length and selection.
///
/// # Example
///
/// ```ignore
/// struct Hours {
///     selected: usize,
/// }
///
/// impl Wheel for Hours {
///     fn len(&self) -> usize {
///         24
///     }
///
///     fn selected_index(&self) -> usize {
///         self.selected
///     }
///
///     fn set_selected_index(&mut self, index: usize) {
///         self.selected = index;
///     }
/// }
/// ```
pub trait Wheel {
    /// Number of rows on the wheel
    fn len(&self) -> usize;

    /// Get the current selected index
    fn selected_index(&self) -> usize;

    /// Set the selected index
    fn set_selected_index(&mut self, index: usize);

    /// Check if the wheel has no rows
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move one row down, stopping at the last row
    fn select_next(&mut self) {
        self.scroll_by(1);
    }

    /// Move one row up, stopping at the first row
    fn select_prev(&mut self) {
        self.scroll_by(-1);
    }

    /// Move by `delta` rows (clamped to valid range)
    fn scroll_by(&mut self, delta: i32) {
        if self.is_empty() {
            return;
        }
        let target = self.selected_index() as i64 + delta as i64;
        self.select_index(target.max(0) as usize);
    }

    /// Select a specific index (clamped to valid range)
    fn select_index(&mut self, index: usize) {
        if !self.is_empty() {
            let clamped = index.min(self.len() - 1);
            self.set_selected_index(clamped);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Column {
        rows: usize,
        selected: usize,
    }

    impl Wheel for Column {
        fn len(&self) -> usize {
            self.rows
        }

        fn selected_index(&self) -> usize {
            self.selected
        }

        fn set_selected_index(&mut self, index: usize) {
            self.selected = index;
        }
    }

    #[test]
    fn test_stops_at_ends() {
        let mut column = Column { rows: 3, selected: 0 };
        column.select_prev();
        assert_eq!(column.selected, 0);
        column.select_next();
        column.select_next();
        column.select_next();
        assert_eq!(column.selected, 2);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut column = Column { rows: 10, selected: 5 };
        column.scroll_by(-20);
        assert_eq!(column.selected, 0);
        column.scroll_by(4);
        assert_eq!(column.selected, 4);
        column.scroll_by(100);
        assert_eq!(column.selected, 9);
    }

    #[test]
    fn test_empty_wheel_is_untouched() {
        let mut column = Column { rows: 0, selected: 0 };
        column.select_next();
        column.select_index(3);
        assert_eq!(column.selected, 0);
    }
}
