//! Browser event conversions.
//!
//! Coordinates come from `offsetX` / `offsetY`, which are relative to the
//! canvas element's padding edge in CSS pixels, the same space regions are
//! registered in.

use web_sys::{MouseEvent, WheelEvent};

use crate::geom::Point;
use crate::input::{Button, Modifiers, WheelDelta};

#[must_use]
pub fn pointer_point(ev: &MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// The pressed button; `None` for back/forward and other extra buttons.
#[must_use]
pub fn button(ev: &MouseEvent) -> Option<Button> {
    Button::from_dom(ev.button())
}

#[must_use]
pub fn modifiers(ev: &MouseEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}

/// Raw wheel delta. Line- and page-mode deltas are passed through unscaled.
#[must_use]
pub fn wheel_delta(ev: &WheelEvent) -> WheelDelta {
    WheelDelta::new(ev.delta_x(), ev.delta_y())
}
