//! Demo application state: a host screen that opens pickers and records
//! what was picked.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use chrono::{Duration as ChronoDuration, Local};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::layout::Rect;
use serde::Serialize;

use overlay_picker::events::EventHandler;
use overlay_picker::{
    Config, DateMode, HostView, InteractionRegistry, PickerDelegate, PickerKind, PickerView,
    RowSource, ToolbarButton, log,
};

pub const FRUITS: [&str; 8] = [
    "Apple", "Banana", "Cherry", "Date", "Elderberry", "Fig", "Grape", "Honeydew",
];

/// Largest quantity offered by the list demo
pub const MAX_QUANTITY: usize = 12;

/// A value confirmed with Done
#[derive(Debug, Clone, Serialize)]
pub struct Selection {
    pub picker: &'static str,
    pub value: String,
    pub recorded_at: String,
}

/// Delegate collecting Done results
#[derive(Debug, Default)]
pub struct SelectionLog {
    pub entries: Vec<Selection>,
}

impl PickerDelegate for SelectionLog {
    fn done_pressed(&mut self, picker: &PickerView, button: &ToolbarButton) {
        let recorded_at = Local::now().format("%H:%M:%S").to_string();

        if let Some(list) = picker.list_selector() {
            let fruit = list.selected_row(0).map(|row| list.title_for_row(row, 0));
            let quantity = list.selected_row(1).map(|row| list.title_for_row(row, 1));
            if let (Some(fruit), Some(quantity)) = (fruit, quantity) {
                self.entries.push(Selection {
                    picker: "list",
                    value: format!("{} x {}", quantity, fruit),
                    recorded_at,
                });
            }
        } else if let Some(date) = picker.date_selector() {
            self.entries.push(Selection {
                picker: "date",
                value: date.date().format("%Y-%m-%d %H:%M").to_string(),
                recorded_at,
            });
        }

        log::log_event(&format!("'{}' pressed", button.title));
    }
}

pub struct App {
    pub config: Config,
    pub host: HostView,
    pub picker: Option<PickerView>,
    pub interactions: InteractionRegistry,
    pub selections: Rc<RefCell<SelectionLog>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut host = HostView::new(Rect::default());
        host.add_full_layer("selections");

        Self {
            config,
            host,
            picker: None,
            interactions: InteractionRegistry::new(),
            selections: Rc::new(RefCell::new(SelectionLog::default())),
            should_quit: false,
        }
    }

    /// Keep the host in sync with the terminal size.
    pub fn resize(&mut self, area: Rect) {
        if self.host.bounds() != area {
            self.host.set_bounds(area);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.picker.as_ref().is_some_and(|p| p.is_animating())
    }

    pub fn open_picker(&mut self, kind: PickerKind) {
        if self.picker.is_some() {
            return;
        }

        let mut picker = PickerView::present_on_with_config(&mut self.host, kind, &self.config);
        picker.set_delegate(&self.selections);

        if let Some(list) = picker.list_selector_mut() {
            list.set_component_count(2);
            list.set_row_source(
                RowSource::new()
                    .with_row_count(|_, component| match component {
                        0 => FRUITS.len(),
                        _ => MAX_QUANTITY,
                    })
                    .with_title_for_row(|_, row, component| match component {
                        0 => FRUITS.get(row).copied().unwrap_or_default().to_string(),
                        _ => (row + 1).to_string(),
                    }),
            );
        }

        if let Some(date) = picker.date_selector_mut() {
            let now = Local::now().naive_local();
            date.set_mode(DateMode::DateAndTime);
            date.set_minute_interval(5);
            date.set_minimum_date(Some(now - ChronoDuration::days(365)));
            date.set_maximum_date(Some(now + ChronoDuration::days(365)));
        }

        self.picker = Some(picker);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(picker) = self.picker.as_mut() {
            let action = EventHandler::handle_event(&self.interactions, event);
            picker.handle_action(action, &mut self.host);
            self.reap_picker();
            return;
        }

        if let Event::Key(key) = event
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('l') => self.open_picker(PickerKind::List),
                KeyCode::Char('d') => self.open_picker(PickerKind::Date),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
        }
    }

    /// Advance animations.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(picker) = self.picker.as_mut() {
            picker.tick(&mut self.host, now);
        }
        self.reap_picker();
    }

    /// Drop a dismissed picker; the next one is built fresh.
    fn reap_picker(&mut self) {
        if self.picker.as_ref().is_some_and(|p| p.is_dismissed()) {
            self.picker = None;
            self.interactions.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn app() -> App {
        let config = Config {
            animation_ms: 0,
            ..Config::default()
        };
        let mut app = App::new(config);
        app.resize(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_list_picker_records_selection() {
        let mut app = app();
        app.handle_event(&press(KeyCode::Char('l')));
        assert_eq!(app.host.len(), 2);

        app.handle_event(&press(KeyCode::Down));
        app.handle_event(&press(KeyCode::Tab));
        app.handle_event(&press(KeyCode::Down));
        app.handle_event(&press(KeyCode::Down));
        app.handle_event(&press(KeyCode::Enter));

        assert!(app.picker.is_none());
        assert_eq!(app.host.len(), 1);
        let selections = app.selections.borrow();
        assert_eq!(selections.entries.len(), 1);
        assert_eq!(selections.entries[0].value, "3 x Banana");
    }

    #[test]
    fn test_cancel_records_nothing() {
        let mut app = app();
        app.handle_event(&press(KeyCode::Char('d')));
        app.handle_event(&press(KeyCode::Esc));

        assert!(app.picker.is_none());
        assert!(!app.should_quit);
        assert!(app.selections.borrow().entries.is_empty());
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        app.handle_event(&press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }
}
