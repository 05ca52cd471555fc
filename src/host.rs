//! The view hierarchy an overlay is presented in.
//!
//! A host is a bounded area with an ordered stack of layers. The last layer
//! is frontmost and is drawn last.

use ratatui::layout::Rect;

/// Identifier of a layer within one host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

/// A layer placed in a host.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: LayerId,
    /// Name for debugging/logging
    pub name: &'static str,
    pub frame: Rect,
    /// Full-screen layers follow host resizes
    pub fills_host: bool,
}

#[derive(Debug, Clone)]
pub struct HostView {
    bounds: Rect,
    layers: Vec<Layer>,
    next_id: u64,
}

impl HostView {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            layers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resize the host; full-screen layers are resized with it.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for layer in self.layers.iter_mut().filter(|l| l.fills_host) {
            layer.frame = bounds;
        }
    }

    /// Push a full-screen layer on top of the stack.
    pub fn add_full_layer(&mut self, name: &'static str) -> LayerId {
        self.push(name, self.bounds, true)
    }

    /// Push a layer with a fixed frame on top of the stack.
    pub fn add_layer(&mut self, name: &'static str, frame: Rect) -> LayerId {
        self.push(name, frame, false)
    }

    fn push(&mut self, name: &'static str, frame: Rect, fills_host: bool) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push(Layer {
            id,
            name,
            frame,
            fills_host,
        });
        id
    }

    /// Remove a layer. Returns false if it was not in the host.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|l| l.id != id);
        self.layers.len() != before
    }

    pub fn contains(&self, id: LayerId) -> bool {
        self.layers.iter().any(|l| l.id == id)
    }

    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    /// The layer drawn last.
    pub fn frontmost(&self) -> Option<&Layer> {
        self.layers.last()
    }

    /// Layers from back to front.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}
