#![allow(clippy::float_cmp)]

use super::*;

/// # Safety
/// Env tests share process state; each clears the variables it touches.
unsafe fn clear_router_env() {
    unsafe {
        std::env::remove_var(ENV_IDLE_ALPHA);
        std::env::remove_var(ENV_PRESSED_ALPHA);
        std::env::remove_var(ENV_MAX_SCROLL_RATE);
    }
}

// =============================================================
// Defaults / JSON
// =============================================================

#[test]
fn default_matches_constants() {
    let cfg = RouterConfig::default();
    assert_eq!(cfg.idle_alpha, 0.5);
    assert_eq!(cfg.pressed_alpha, 1.0);
    assert_eq!(cfg.max_scroll_rate, 15.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn alpha_for_press_state() {
    let cfg = RouterConfig::default();
    assert_eq!(cfg.alpha_for(true), 1.0);
    assert_eq!(cfg.alpha_for(false), 0.5);
}

#[test]
fn from_json_fills_missing_fields() {
    let cfg = RouterConfig::from_json(r#"{"idle_alpha": 0.3}"#).unwrap();
    assert_eq!(cfg.idle_alpha, 0.3);
    assert_eq!(cfg.pressed_alpha, 1.0);
    assert_eq!(cfg.max_scroll_rate, 15.0);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(RouterConfig::from_json("{}").unwrap(), RouterConfig::default());
}

#[test]
fn from_json_rejects_malformed() {
    let err = RouterConfig::from_json("{idle_alpha:").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_alpha_out_of_range() {
    let err = RouterConfig::from_json(r#"{"pressed_alpha": 1.5}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "pressed_alpha", .. }));
    assert!(err.to_string().contains("pressed_alpha out of range"));
}

#[test]
fn validate_rejects_non_positive_scroll_rate() {
    let cfg = RouterConfig { max_scroll_rate: 0.0, ..RouterConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::OutOfRange { field: "max_scroll_rate", .. })));
    let cfg = RouterConfig { max_scroll_rate: f64::INFINITY, ..RouterConfig::default() };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_nan_alpha() {
    let cfg = RouterConfig { idle_alpha: f64::NAN, ..RouterConfig::default() };
    assert!(matches!(cfg.validate(), Err(ConfigError::OutOfRange { field: "idle_alpha", .. })));
}

// =============================================================
// Environment
// =============================================================

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_router_env() };
    assert_eq!(RouterConfig::from_env().unwrap(), RouterConfig::default());

    unsafe {
        std::env::set_var(ENV_IDLE_ALPHA, "0.25");
        std::env::set_var(ENV_MAX_SCROLL_RATE, " 30 ");
    }
    let cfg = RouterConfig::from_env().unwrap();
    assert_eq!(cfg.idle_alpha, 0.25);
    assert_eq!(cfg.pressed_alpha, 1.0);
    assert_eq!(cfg.max_scroll_rate, 30.0);

    unsafe {
        clear_router_env();
        std::env::set_var(ENV_PRESSED_ALPHA, "bright");
    }
    let err = RouterConfig::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::Parse { var: ENV_PRESSED_ALPHA, .. }));
    assert!(err.to_string().contains("bright"));

    unsafe { clear_router_env() };
}
