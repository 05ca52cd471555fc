//! Mouse interactivity for the overlay.
//!
//! The toolbar and wheels register their interactive regions during render,
//! and mouse events are routed to the region under the pointer.
//!
//! # Example
//!
//! ```ignore
//! // During render, register an interactive region:
//! registry.register(InteractiveRegion::clickable("done", bounds, Action::Done));
//!
//! // Mouse events are dispatched to matching regions
//! let action = registry.handle_click(x, y);
//! ```

use ratatui::layout::{Position, Rect};

use crate::events::Action;

/// Priority of every region the overlay registers, above host content.
pub const OVERLAY_PRIORITY: i32 = 10;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for debugging/logging
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: Rect,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: Rect, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(id: &'static str, bounds: Rect, scroll_up: Action, scroll_down: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: None,
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if a point is within this region's bounds
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(Position::new(x, y))
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a clickable region at overlay priority
    pub fn register_click(&mut self, id: &'static str, bounds: Rect, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action).with_priority(OVERLAY_PRIORITY));
    }

    /// Register a scrollable region at overlay priority
    pub fn register_scroll(&mut self, id: &'static str, bounds: Rect, scroll_up: Action, scroll_down: Action) {
        self.register(
            InteractiveRegion::scrollable(id, bounds, scroll_up, scroll_down)
                .with_priority(OVERLAY_PRIORITY),
        );
    }

    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    /// Find the first region with the given id
    pub fn find(&self, id: &str) -> Option<&InteractiveRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Find the action to dispatch for a click at (x, y)
    ///
    /// Returns the action from the highest-priority region that contains the point
    /// and has a click handler.
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        self.pick(x, y, |r| r.on_click)
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.pick(x, y, |r| r.on_scroll_up)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.pick(x, y, |r| r.on_scroll_down)
    }

    fn pick(&self, x: u16, y: u16, handler: impl Fn(&InteractiveRegion) -> Option<Action>) -> Action {
        // Later registrations win ties, they were drawn on top
        self.regions
            .iter()
            .enumerate()
            .filter(|(_, r)| r.contains(x, y))
            .filter_map(|(i, r)| handler(r).map(|action| (r.priority, i, action)))
            .max_by_key(|(priority, i, _)| (*priority, *i))
            .map(|(_, _, action)| action)
            .unwrap_or(Action::None)
    }
}
