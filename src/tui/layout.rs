//! Geometry of the overlay: full-screen backdrop, panel anchored to the bottom.

use ratatui::layout::Rect;

use crate::toolbar::TOOLBAR_HEIGHT;

/// Where each part of the overlay is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
    pub backdrop: Rect,
    pub toolbar: Rect,
    pub selector: Rect,
}

/// Height of toolbar plus selector, limited to the bounds.
pub fn panel_height(bounds: Rect, selector_rows: u16) -> u16 {
    TOOLBAR_HEIGHT.saturating_add(selector_rows).min(bounds.height)
}

/// Lay the overlay out in `bounds` with the panel pushed down by `offset` rows.
///
/// At offset 0 the selector's bottom edge sits on the bottom of `bounds` and
/// the toolbar sits directly above it. Parts pushed past the bounds are clipped.
pub fn overlay_layout(bounds: Rect, selector_rows: u16, offset: u16) -> OverlayLayout {
    let panel = panel_height(bounds, selector_rows);
    let toolbar_height = TOOLBAR_HEIGHT.min(panel);
    let selector_height = panel - toolbar_height;

    let top = (bounds.bottom() - panel).saturating_add(offset);
    let toolbar = Rect::new(bounds.x, top, bounds.width, toolbar_height);
    let selector = Rect::new(
        bounds.x,
        top.saturating_add(toolbar_height),
        bounds.width,
        selector_height,
    );

    OverlayLayout {
        backdrop: bounds,
        toolbar: toolbar.intersection(bounds),
        selector: selector.intersection(bounds),
    }
}
