//! The picker overlay.
//!
//! A [`PickerView`] goes through one fixed lifecycle:
//! `Constructed → Presenting → Shown → Dismissing → Dismissed`. Once
//! dismissed it has removed itself from its host and dropped its toolbar and
//! selector; a new instance is needed for the next presentation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Clear, StatefulWidget, Widget},
};

use crate::animation::{self, Direction, Transition};
use crate::config::Config;
use crate::delegate::PickerDelegate;
use crate::events::Action;
use crate::host::{HostView, LayerId};
use crate::log;
use crate::selector::{DateSelector, ListSelector, Selector};
use crate::toolbar::{ButtonKind, Toolbar};
use crate::tui::components::{render_backdrop, render_date_selector, render_list_selector, render_toolbar};
use crate::tui::interaction::InteractionRegistry;
use crate::tui::layout::{OverlayLayout, overlay_layout, panel_height};
use crate::tui::theme::PANEL_BG;

/// Layer name the overlay registers in its host.
pub const LAYER_NAME: &str = "picker_overlay";

/// Which selector the overlay carries. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    List,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Built, not yet in a host
    Constructed,
    /// In the host, sliding in
    Presenting,
    /// Fully on screen
    Shown,
    /// Sliding out
    Dismissing,
    /// Removed from the host
    Dismissed,
}

#[derive(Debug)]
struct Content {
    toolbar: Toolbar,
    selector: Selector,
}

/// A modal list or date picker shown above a host.
pub struct PickerView {
    kind: PickerKind,
    content: Option<Content>,
    delegate: Option<Weak<RefCell<dyn PickerDelegate>>>,
    phase: Phase,
    layer: Option<LayerId>,
    transition: Option<Transition>,
    visibility: f32,
    animation: Duration,
    visible_rows: u16,
    dim_backdrop: bool,
}

impl std::fmt::Debug for PickerView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickerView")
            .field("kind", &self.kind)
            .field("phase", &self.phase)
            .field("layer", &self.layer)
            .field("content", &self.content)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl PickerView {
    /// Build a picker with the default configuration.
    pub fn new(kind: PickerKind) -> Self {
        Self::with_config(kind, &Config::default())
    }

    pub fn with_config(kind: PickerKind, config: &Config) -> Self {
        let selector = match kind {
            PickerKind::List => Selector::List(ListSelector::new()),
            PickerKind::Date => Selector::Date(DateSelector::new()),
        };

        Self {
            kind,
            content: Some(Content {
                toolbar: Toolbar::new(config),
                selector,
            }),
            delegate: None,
            phase: Phase::Constructed,
            layer: None,
            transition: None,
            visibility: 0.0,
            animation: config.animation(),
            visible_rows: config.visible_rows(),
            dim_backdrop: config.dim_backdrop,
        }
    }

    /// Build a picker and show it on `host` right away.
    pub fn present_on(host: &mut HostView, kind: PickerKind) -> Self {
        Self::present_on_with_config(host, kind, &Config::default())
    }

    pub fn present_on_with_config(host: &mut HostView, kind: PickerKind, config: &Config) -> Self {
        let mut picker = Self::with_config(kind, config);
        picker.show(host);
        picker
    }

    pub fn kind(&self) -> PickerKind {
        self.kind
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The host layer while presented.
    pub fn layer(&self) -> Option<LayerId> {
        self.layer
    }

    /// Whether any part of the overlay is on screen.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Presenting | Phase::Shown | Phase::Dismissing)
    }

    pub fn is_dismissed(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    /// Whether a transition is running and frames should keep coming.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn toolbar(&self) -> Option<&Toolbar> {
        self.content.as_ref().map(|c| &c.toolbar)
    }

    pub fn selector(&self) -> Option<&Selector> {
        self.content.as_ref().map(|c| &c.selector)
    }

    pub fn selector_mut(&mut self) -> Option<&mut Selector> {
        self.content.as_mut().map(|c| &mut c.selector)
    }

    /// The list selector, when this is a list picker that is not dismissed.
    pub fn list_selector(&self) -> Option<&ListSelector> {
        match self.selector() {
            Some(Selector::List(list)) => Some(list),
            _ => None,
        }
    }

    pub fn list_selector_mut(&mut self) -> Option<&mut ListSelector> {
        match self.selector_mut() {
            Some(Selector::List(list)) => Some(list),
            _ => None,
        }
    }

    /// The date selector, when this is a date picker that is not dismissed.
    pub fn date_selector(&self) -> Option<&DateSelector> {
        match self.selector() {
            Some(Selector::Date(date)) => Some(date),
            _ => None,
        }
    }

    pub fn date_selector_mut(&mut self) -> Option<&mut DateSelector> {
        match self.selector_mut() {
            Some(Selector::Date(date)) => Some(date),
            _ => None,
        }
    }

    /// Hold `delegate` weakly; the caller keeps it alive.
    pub fn set_delegate<D: PickerDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        let delegate: Rc<RefCell<dyn PickerDelegate>> = delegate.clone();
        self.delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn set_delegate_weak(&mut self, delegate: Weak<RefCell<dyn PickerDelegate>>) {
        self.delegate = Some(delegate);
    }

    /// Place the overlay on top of `host` and start sliding it in.
    ///
    /// Only the first call has an effect.
    pub fn show(&mut self, host: &mut HostView) {
        self.show_at(host, Instant::now());
    }

    fn show_at(&mut self, host: &mut HostView, now: Instant) {
        if self.phase != Phase::Constructed {
            log::log_event(&format!("picker show ignored in phase {:?}", self.phase));
            return;
        }

        self.layer = Some(host.add_full_layer(LAYER_NAME));
        self.phase = Phase::Presenting;
        self.visibility = 0.0;
        self.transition = Some(Transition::new(Direction::In, self.animation, now));
        log::log_event(&format!("picker {:?} shown", self.kind));
        self.tick(host, now);
    }

    /// Cancel: dismiss without notifying the delegate.
    pub fn cancel(&mut self, host: &mut HostView) {
        if !self.accepts_input() {
            return;
        }
        log::log_event("picker cancelled");
        self.dismiss(host, Instant::now());
    }

    /// Done: notify the delegate while the selector is alive, then dismiss.
    pub fn done(&mut self, host: &mut HostView) {
        if !self.accepts_input() {
            return;
        }
        self.notify_done();
        self.dismiss(host, Instant::now());
    }

    fn notify_done(&self) {
        let Some(toolbar) = self.toolbar() else {
            return;
        };
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            log::log_event("picker done without a live delegate");
            return;
        };
        match delegate.try_borrow_mut() {
            Ok(mut delegate) => delegate.done_pressed(self, toolbar.button(ButtonKind::Done)),
            Err(_) => log::log_event("picker delegate busy, done notification skipped"),
        }
    }

    fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Presenting | Phase::Shown)
    }

    fn dismiss(&mut self, host: &mut HostView, now: Instant) {
        let start = if self.animation.is_zero() {
            now
        } else {
            // Resume from the current position when still sliding in
            let elapsed = (1.0 - self.visibility).clamp(0.0, 1.0).sqrt();
            now.checked_sub(self.animation.mul_f32(elapsed)).unwrap_or(now)
        };
        self.phase = Phase::Dismissing;
        self.transition = Some(Transition::new(Direction::Out, self.animation, start));
        self.tick(host, now);
    }

    fn finish_dismiss(&mut self, host: &mut HostView) {
        if let Some(layer) = self.layer.take() {
            host.remove_layer(layer);
        }
        self.content = None;
        self.transition = None;
        self.visibility = 0.0;
        self.phase = Phase::Dismissed;
        log::log_event(&format!("picker {:?} dismissed", self.kind));
    }

    /// Advance the running transition to `now`.
    ///
    /// Returns true while the overlay needs redrawing.
    pub fn tick(&mut self, host: &mut HostView, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        self.visibility = transition.visibility(now);
        if !transition.is_finished(now) {
            return true;
        }

        self.transition = None;
        match transition.direction() {
            Direction::In => {
                self.phase = Phase::Shown;
                self.visibility = 1.0;
            }
            Direction::Out => self.finish_dismiss(host),
        }
        true
    }

    /// Apply a user action.
    pub fn handle_action(&mut self, action: Action, host: &mut HostView) {
        if !self.accepts_input() {
            return;
        }
        match action {
            Action::None => {}
            Action::Cancel => self.cancel(host),
            Action::Done => self.done(host),
            action => {
                let Some(selector) = self.selector_mut() else {
                    return;
                };
                match action {
                    Action::SelectPrev => selector.scroll_focused(-1),
                    Action::SelectNext => selector.scroll_focused(1),
                    Action::FocusPrev => selector.focus_prev(),
                    Action::FocusNext => selector.focus_next(),
                    Action::ScrollFocused(delta) => selector.scroll_focused(delta),
                    Action::ScrollBy { component, delta } => selector.scroll_by(component, delta),
                    Action::None | Action::Cancel | Action::Done => {}
                }
            }
        }
    }

    /// Where the overlay's parts land in `bounds` at the current visibility.
    pub fn layout(&self, bounds: Rect) -> OverlayLayout {
        let panel = panel_height(bounds, self.visible_rows);
        let offset = animation::slide_offset(panel, self.visibility);
        overlay_layout(bounds, self.visible_rows, offset)
    }
}

impl StatefulWidget for &PickerView {
    type State = InteractionRegistry;

    fn render(self, area: Rect, buf: &mut Buffer, registry: &mut InteractionRegistry) {
        let Some(content) = &self.content else {
            return;
        };
        if !self.is_visible() {
            return;
        }

        let layout = self.layout(area);
        if self.dim_backdrop && self.visibility > 0.0 {
            render_backdrop(layout.backdrop, buf);
        }

        render_toolbar(&content.toolbar, layout.toolbar, buf, registry);

        if layout.selector.is_empty() {
            return;
        }
        Clear.render(layout.selector, buf);
        buf.set_style(layout.selector, Style::new().bg(PANEL_BG));
        match &content.selector {
            Selector::List(list) => {
                render_list_selector(list, self.visible_rows, layout.selector, buf, registry)
            }
            Selector::Date(date) => {
                render_date_selector(date, self.visible_rows, layout.selector, buf, registry)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegate::RowSource;
    use crate::toolbar::ToolbarButton;
    use chrono::{NaiveDate, NaiveDateTime};
    use ratatui::style::Modifier;

    #[derive(Default)]
    struct Recorder {
        calls: usize,
        rows: Vec<Vec<Option<usize>>>,
        dates: Vec<NaiveDateTime>,
        buttons: Vec<ToolbarButton>,
        phases: Vec<Phase>,
        attached: Vec<bool>,
    }

    impl PickerDelegate for Recorder {
        fn done_pressed(&mut self, picker: &PickerView, button: &ToolbarButton) {
            self.calls += 1;
            if let Some(list) = picker.list_selector() {
                self.rows.push(list.selected_rows());
            }
            if let Some(date) = picker.date_selector() {
                self.dates.push(date.date());
            }
            self.buttons.push(button.clone());
            self.phases.push(picker.phase());
            self.attached.push(picker.layer().is_some());
        }
    }

    fn instant_config() -> Config {
        Config {
            animation_ms: 0,
            ..Config::default()
        }
    }

    fn fixed_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn fruit_source() -> RowSource {
        const FRUITS: [&str; 3] = ["Apple", "Banana", "Cherry"];
        RowSource::new()
            .with_row_count(|_, _| FRUITS.len())
            .with_title_for_row(|_, row, _| FRUITS[row].to_string())
    }

    #[test]
    fn test_construct_matches_kind() {
        let list = PickerView::new(PickerKind::List);
        assert_eq!(list.kind(), PickerKind::List);
        assert!(list.list_selector().is_some());
        assert!(list.date_selector().is_none());
        assert_eq!(list.phase(), Phase::Constructed);
        assert!(list.layer().is_none());

        let date = PickerView::new(PickerKind::Date);
        assert!(date.date_selector().is_some());
        assert!(date.list_selector().is_none());
    }

    #[test]
    fn test_show_makes_overlay_frontmost_and_cancel_removes_it() {
        let mut host = HostView::new(Rect::new(0, 0, 80, 24));
        host.add_full_layer("content");
        let recorder = Rc::new(RefCell::new(Recorder::default()));

        let mut picker = PickerView::with_config(PickerKind::List, &instant_config());
        picker.set_delegate(&recorder);
        picker.show(&mut host);

        let layer = picker.layer().unwrap();
        let front = host.frontmost().unwrap();
        assert_eq!(front.id, layer);
        assert_eq!(front.frame, host.bounds());
        assert_eq!(picker.phase(), Phase::Shown);

        picker.handle_action(Action::Cancel, &mut host);

        assert!(!host.contains(layer));
        assert_eq!(host.len(), 1);
        assert_eq!(picker.phase(), Phase::Dismissed);
        assert!(picker.selector().is_none());
        assert!(picker.toolbar().is_none());
        assert_eq!(recorder.borrow().calls, 0);
    }

    #[test]
    fn test_list_scenario_layout_and_render() {
        let bounds = Rect::new(0, 0, 320, 480);
        let mut host = HostView::new(bounds);
        host.add_full_layer("content");

        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::List, &instant_config());
        if let Some(list) = picker.list_selector_mut() {
            list.set_row_source(fruit_source());
        }

        let layer = host.frontmost().unwrap();
        assert_eq!(Some(layer.id), picker.layer());
        assert_eq!(layer.frame, bounds);

        let layout = picker.layout(bounds);
        assert_eq!(layout.backdrop, bounds);
        assert_eq!(layout.selector.bottom(), bounds.bottom());
        assert_eq!(layout.toolbar.bottom(), layout.selector.y);

        let mut buf = Buffer::empty(bounds);
        let mut registry = InteractionRegistry::new();
        StatefulWidget::render(&picker, bounds, &mut buf, &mut registry);

        let button_row = row_text(&buf, layout.toolbar.y + 1);
        assert!(button_row.contains("Cancel"));
        assert!(button_row.contains("Done"));

        let center = layout.selector.y + layout.selector.height / 2;
        assert!(row_text(&buf, center).contains("Apple"));
        assert!(row_text(&buf, center + 1).contains("Banana"));

        let done = registry.find("toolbar_done").unwrap();
        assert_eq!(done.bounds.y, layout.toolbar.y + 1);
    }

    #[test]
    fn test_date_scenario_done_notifies_then_removes() {
        let mut host = HostView::new(Rect::new(0, 0, 320, 480));
        let recorder = Rc::new(RefCell::new(Recorder::default()));

        let mut picker = PickerView::with_config(PickerKind::Date, &instant_config());
        picker.date_selector_mut().unwrap().set_date(fixed_date());
        picker.set_delegate(&recorder);
        picker.show(&mut host);
        let layer = picker.layer().unwrap();

        picker.done(&mut host);

        let recorder = recorder.borrow();
        assert_eq!(recorder.calls, 1);
        assert_eq!(recorder.dates, vec![fixed_date()]);
        assert_eq!(recorder.buttons[0].kind, ButtonKind::Done);
        assert_eq!(recorder.phases, vec![Phase::Shown]);
        assert_eq!(recorder.attached, vec![true]);
        assert!(!host.contains(layer));
        assert!(picker.is_dismissed());
    }

    #[test]
    fn test_done_notifies_once() {
        let mut host = HostView::new(Rect::new(0, 0, 80, 24));
        let recorder = Rc::new(RefCell::new(Recorder::default()));

        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::List, &instant_config());
        picker.list_selector_mut().unwrap().set_row_source(fruit_source());
        picker.set_delegate(&recorder);

        picker.handle_action(Action::SelectNext, &mut host);
        picker.handle_action(Action::Done, &mut host);
        picker.handle_action(Action::Done, &mut host);
        picker.done(&mut host);

        assert_eq!(recorder.borrow().calls, 1);
        assert_eq!(recorder.borrow().rows, vec![vec![Some(1)]]);
    }

    #[test]
    fn test_list_without_overrides_renders_empty() {
        let bounds = Rect::new(0, 0, 40, 12);
        let mut host = HostView::new(bounds);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::List, &instant_config());
        picker.set_delegate(&recorder);

        let list = picker.list_selector().unwrap();
        assert_eq!(list.number_of_rows(0), 0);

        let mut buf = Buffer::empty(bounds);
        let mut registry = InteractionRegistry::new();
        StatefulWidget::render(&picker, bounds, &mut buf, &mut registry);

        picker.handle_action(Action::SelectNext, &mut host);
        picker.done(&mut host);
        assert_eq!(recorder.borrow().rows, vec![vec![None]]);
    }

    #[test]
    fn test_backdrop_dims_host_content() {
        let bounds = Rect::new(0, 0, 40, 20);
        let mut host = HostView::new(bounds);
        let picker = PickerView::present_on_with_config(&mut host, PickerKind::Date, &instant_config());

        let mut buf = Buffer::empty(bounds);
        buf.set_string(0, 0, "hello", Style::new());
        let mut registry = InteractionRegistry::new();
        StatefulWidget::render(&picker, bounds, &mut buf, &mut registry);

        assert_eq!(buf[(0, 0)].symbol(), "h");
        assert!(buf[(0, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_animated_show_and_dismiss() {
        let mut host = HostView::new(Rect::new(0, 0, 80, 24));
        let config = Config {
            animation_ms: 100,
            ..Config::default()
        };
        let mut picker = PickerView::with_config(PickerKind::Date, &config);
        let start = Instant::now();

        picker.show_at(&mut host, start);
        assert_eq!(picker.phase(), Phase::Presenting);
        assert!(picker.is_animating());
        let hidden = picker.layout(host.bounds());
        assert!(hidden.selector.is_empty());

        assert!(picker.tick(&mut host, start + Duration::from_millis(50)));
        assert_eq!(picker.phase(), Phase::Presenting);

        picker.tick(&mut host, start + Duration::from_millis(150));
        assert_eq!(picker.phase(), Phase::Shown);
        assert!(!picker.tick(&mut host, start + Duration::from_millis(160)));

        let layer = picker.layer().unwrap();
        picker.cancel(&mut host);
        assert_eq!(picker.phase(), Phase::Dismissing);
        assert!(host.contains(layer));
        assert!(picker.date_selector().is_some());

        picker.tick(&mut host, Instant::now() + Duration::from_secs(1));
        assert_eq!(picker.phase(), Phase::Dismissed);
        assert!(!host.contains(layer));
    }

    #[test]
    fn test_second_show_is_ignored() {
        let mut host = HostView::new(Rect::new(0, 0, 80, 24));
        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::List, &instant_config());
        let layer = picker.layer();

        picker.show(&mut host);
        assert_eq!(host.len(), 1);
        assert_eq!(picker.layer(), layer);

        picker.cancel(&mut host);
        picker.show(&mut host);
        assert!(host.is_empty());
        assert!(picker.is_dismissed());
    }

    #[test]
    fn test_delegate_is_held_weakly() {
        let mut host = HostView::new(Rect::new(0, 0, 80, 24));
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::Date, &instant_config());
        picker.set_delegate(&recorder);
        assert_eq!(Rc::strong_count(&recorder), 1);

        drop(recorder);
        picker.done(&mut host);
        assert!(picker.is_dismissed());
        assert!(host.is_empty());
    }

    #[test]
    fn test_click_on_done_region() {
        let bounds = Rect::new(0, 0, 60, 20);
        let mut host = HostView::new(bounds);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::Date, &instant_config());
        picker.set_delegate(&recorder);

        let mut buf = Buffer::empty(bounds);
        let mut registry = InteractionRegistry::new();
        StatefulWidget::render(&picker, bounds, &mut buf, &mut registry);

        let done = registry.find("toolbar_done").unwrap().bounds;
        let action = registry.handle_click(done.x, done.y);
        assert_eq!(action, Action::Done);

        picker.handle_action(action, &mut host);
        assert_eq!(recorder.borrow().calls, 1);
        assert!(host.is_empty());
    }

    #[test]
    fn test_wheel_actions_reach_date_selector() {
        let mut host = HostView::new(Rect::new(0, 0, 80, 24));
        let mut picker = PickerView::present_on_with_config(&mut host, PickerKind::Date, &instant_config());
        picker.date_selector_mut().unwrap().set_date(fixed_date());

        // Year, Month, Day, Hour, Minute
        picker.handle_action(Action::FocusNext, &mut host);
        picker.handle_action(Action::SelectNext, &mut host);
        picker.handle_action(Action::ScrollBy { component: 3, delta: -2 }, &mut host);

        let date = picker.date_selector().unwrap();
        assert_eq!(date.focused_index(), 3);
        let expected = NaiveDate::from_ymd_opt(2026, 11, 19)
            .and_then(|d| d.and_hms_opt(7, 30, 0))
            .unwrap();
        assert_eq!(date.date(), expected);
    }
}
