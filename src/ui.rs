use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use overlay_picker::tui::theme::*;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.resize(area);

    let layout = Layout::vertical([
        Constraint::Length(2), // Title + spacing
        Constraint::Min(0),    // Selections
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![Span::styled(
            "overlay-picker",
            Style::new().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD),
        )])),
        layout[0],
    );

    let mut lines: Vec<Line> = vec![];
    let selections = app.selections.borrow();
    for selection in &selections.entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", selection.recorded_at), Style::new().fg(TEXT_DIM)),
            Span::styled(format!("[{}] ", selection.picker), Style::new().fg(ACCENT_LIGHT_BLUE)),
            Span::styled(selection.value.clone(), Style::new().fg(TEXT_WHITE)),
        ]));
    }
    if selections.entries.is_empty() {
        lines.push(Line::styled("  (nothing picked yet)", Style::new().fg(TEXT_DIM)));
    }
    drop(selections);

    let block = Block::default()
        .borders(Borders::TOP)
        .title("Picked")
        .border_style(Style::new().fg(TEXT_DIM));
    frame.render_widget(Paragraph::new(lines).block(block), layout[1]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[l]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" list • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[d]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" date • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" quit", Style::new().fg(TEXT_DIM)),
        ])),
        layout[2],
    );

    // Overlay last so it sits on top and dims everything above
    app.interactions.clear();
    if let Some(picker) = &app.picker {
        frame.render_stateful_widget(picker, app.host.bounds(), &mut app.interactions);
    }
}
