#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
}

#[test]
fn modifiers_struct_update() {
    let m = Modifiers { shift: true, ..Default::default() };
    assert!(m.shift);
    assert!(!m.ctrl);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Some(Button::Primary));
    assert_eq!(Button::from_dom(1), Some(Button::Middle));
    assert_eq!(Button::from_dom(2), Some(Button::Secondary));
    assert_eq!(Button::from_dom(3), None);
    assert_eq!(Button::from_dom(-1), None);
}

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_rate_uses_larger_axis() {
    let d = WheelDelta::new(-3.0, 2.0);
    assert_eq!(d.rate(15.0), 3.0);
}

#[test]
fn wheel_rate_is_capped() {
    let d = WheelDelta::new(0.0, 100.0);
    assert_eq!(d.rate(15.0), 15.0);
    assert_eq!(d.scaled(15.0), (0.0, 1500.0));
}

#[test]
fn wheel_scaled_keeps_sign() {
    let d = WheelDelta::new(-2.0, 1.0);
    assert_eq!(d.scaled(15.0), (-4.0, 2.0));
}

#[test]
fn wheel_zero_delta_scales_to_zero() {
    let d = WheelDelta::new(0.0, 0.0);
    assert_eq!(d.scaled(15.0), (0.0, 0.0));
}

// =============================================================
// DragEvent
// =============================================================

#[test]
fn drag_event_moving_only_for_move() {
    assert!(DragEvent::Move(Point::new(1.0, 2.0)).is_moving());
    assert!(!DragEvent::Release(Point::new(1.0, 2.0)).is_moving());
    assert!(!DragEvent::Cancel.is_moving());
}

#[test]
fn drag_event_point() {
    assert_eq!(DragEvent::Move(Point::new(1.0, 2.0)).point(), Some(Point::new(1.0, 2.0)));
    assert_eq!(DragEvent::Release(Point::new(3.0, 4.0)).point(), Some(Point::new(3.0, 4.0)));
    assert_eq!(DragEvent::Cancel.point(), None);
}
