//! Slide transitions for presenting and dismissing the overlay.
//!
//! A transition is a pure function of elapsed time, so callers drive it by
//! passing the current instant on every frame.
//!
//! # Example
//!
//! ```rust,ignore
//! let transition = Transition::new(Direction::In, Duration::from_millis(250), Instant::now());
//!
//! // In the frame loop:
//! let visible = transition.visibility(Instant::now());
//! ```

use std::time::{Duration, Instant};

/// Which way the overlay is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Sliding into view
    In,
    /// Sliding out of view
    Out,
}

/// A running slide transition.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    direction: Direction,
    started: Instant,
    duration: Duration,
}

impl Transition {
    /// Create a transition that starts at `started`.
    pub fn new(direction: Direction, duration: Duration, started: Instant) -> Self {
        Self {
            direction,
            started,
            duration,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// How much of the panel is on screen, `0.0` hidden to `1.0` fully shown.
    ///
    /// Sliding in eases out, sliding out eases in.
    pub fn visibility(&self, now: Instant) -> f32 {
        let t = self.fraction(now);
        match self.direction {
            Direction::In => 1.0 - (1.0 - t) * (1.0 - t),
            Direction::Out => 1.0 - t * t,
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }
}

/// Rows the panel is pushed down by for the given visibility.
pub fn slide_offset(panel_height: u16, visibility: f32) -> u16 {
    let hidden = (1.0 - visibility.clamp(0.0, 1.0)) * panel_height as f32;
    (hidden.round() as u16).min(panel_height)
}
