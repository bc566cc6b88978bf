//! Input model: mouse buttons, modifier keys, wheel deltas, and drag events.
//!
//! These types describe a pointer event at the moment the host hands it to the
//! dispatcher. `DragEvent` is what a captured action bag receives while the
//! pointer is held down and after it is let go.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// Modifier keys as reported by the pointer event that carried them.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl-presses are left to the browser (context menu on macOS).
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Which mouse button an event refers to. Only `Primary` starts a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Primary,
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Unknown codes (back/forward) are `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

impl WheelDelta {
    #[must_use]
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Multiplier applied to both axes: the larger magnitude, capped at `max_rate`.
    #[must_use]
    pub fn rate(&self, max_rate: f64) -> f64 {
        self.dx.abs().max(self.dy.abs()).min(max_rate)
    }

    /// Both axes scaled by [`WheelDelta::rate`].
    #[must_use]
    pub fn scaled(&self, max_rate: f64) -> (f64, f64) {
        let rate = self.rate(max_rate);
        (self.dx * rate, self.dy * rate)
    }
}

/// Notification delivered to a captured action bag's drag callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    /// The pointer moved while the drag is held.
    Move(Point),
    /// The button was released over the canvas at this point.
    Release(Point),
    /// The button was released outside the canvas; the drag is abandoned.
    Cancel,
}

impl DragEvent {
    /// Whether the drag continues after this event.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// Pointer position carried by the event, if any.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self {
            Self::Move(pt) | Self::Release(pt) => Some(*pt),
            Self::Cancel => None,
        }
    }
}
