//! Date selector component.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use crate::selector::DateSelector;
use crate::tui::interaction::InteractionRegistry;

use super::{WheelRow, render_wheel};

/// Render one wheel per date field of the current mode.
pub fn render_date_selector(
    date: &DateSelector,
    visible_rows: u16,
    area: Rect,
    buf: &mut Buffer,
    registry: &mut InteractionRegistry,
) {
    let fields = date.fields();
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, fields.len() as u32); fields.len()]).split(area);
    let center = (visible_rows / 2) as i32;

    for (index, (field, column)) in fields.iter().zip(columns.iter()).enumerate() {
        let rows: Vec<Option<WheelRow>> = (0..visible_rows as i32)
            .map(|i| {
                let value = date.value_after(*field, i - center);
                Some(WheelRow {
                    text: field.label(value),
                    enabled: date.is_in_range(value),
                })
            })
            .collect();

        let focused = index == date.focused_index();
        render_wheel(&rows, index, focused, *column, buf, registry);
    }
}
