//! List selector component.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use crate::selector::ListSelector;
use crate::tui::interaction::InteractionRegistry;

use super::{WheelRow, render_wheel};

/// Render one wheel per component, side by side.
pub fn render_list_selector(
    list: &ListSelector,
    visible_rows: u16,
    area: Rect,
    buf: &mut Buffer,
    registry: &mut InteractionRegistry,
) {
    let components = list.component_count();
    let columns = Layout::horizontal(vec![Constraint::Ratio(1, components as u32); components]).split(area);
    let center = (visible_rows / 2) as i64;

    for (component, column) in columns.iter().enumerate() {
        let count = list.number_of_rows(component) as i64;
        let rows: Vec<Option<WheelRow>> = match list.selected_row(component) {
            Some(selected) => (0..visible_rows as i64)
                .map(|i| {
                    let row = selected as i64 + i - center;
                    (0..count).contains(&row).then(|| WheelRow {
                        text: list.title_for_row(row as usize, component),
                        enabled: true,
                    })
                })
                .collect(),
            None => vec![None; visible_rows as usize],
        };

        let focused = component == list.focused_component();
        render_wheel(&rows, component, focused, *column, buf, registry);
    }
}
