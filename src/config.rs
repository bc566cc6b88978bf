//! Router configuration: press-feedback alphas and wheel scaling.
//!
//! Values come from code (`Default`), from a JSON blob the host embeds in the
//! page, or from environment variables when the router runs natively.

use serde::{Deserialize, Serialize};

use crate::consts::{IDLE_ALPHA, MAX_SCROLL_RATE, PRESSED_ALPHA};

pub const ENV_IDLE_ALPHA: &str = "HIT_ROUTER_IDLE_ALPHA";
pub const ENV_PRESSED_ALPHA: &str = "HIT_ROUTER_PRESSED_ALPHA";
pub const ENV_MAX_SCROLL_RATE: &str = "HIT_ROUTER_MAX_SCROLL_RATE";

/// Error returned while building a [`RouterConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON blob could not be parsed.
    #[error("invalid router config json: {0}")]
    Json(#[from] serde_json::Error),
    /// An environment variable held a non-numeric value.
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
    /// A value parsed but lies outside its allowed range.
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Alpha for drawing regions that are not pressed.
    pub idle_alpha: f64,
    /// Alpha for drawing the region under a held button.
    pub pressed_alpha: f64,
    /// Cap on the wheel multiplier applied before `on_scroll`.
    pub max_scroll_rate: f64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self { idle_alpha: IDLE_ALPHA, pressed_alpha: PRESSED_ALPHA, max_scroll_rate: MAX_SCROLL_RATE }
    }
}

impl RouterConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON and
    /// [`ConfigError::OutOfRange`] for values rejected by [`RouterConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HIT_ROUTER_IDLE_ALPHA`: default 0.5
    /// - `HIT_ROUTER_PRESSED_ALPHA`: default 1.0
    /// - `HIT_ROUTER_MAX_SCROLL_RATE`: default 15
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a variable is set but not a number,
    /// and [`ConfigError::OutOfRange`] when validation fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            idle_alpha: env_parse_f64(ENV_IDLE_ALPHA, defaults.idle_alpha)?,
            pressed_alpha: env_parse_f64(ENV_PRESSED_ALPHA, defaults.pressed_alpha)?,
            max_scroll_rate: env_parse_f64(ENV_MAX_SCROLL_RATE, defaults.max_scroll_rate)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that alphas lie in `[0, 1]` and the scroll rate is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_alpha("idle_alpha", self.idle_alpha)?;
        check_alpha("pressed_alpha", self.pressed_alpha)?;
        if !(self.max_scroll_rate.is_finite() && self.max_scroll_rate > 0.0) {
            return Err(ConfigError::OutOfRange { field: "max_scroll_rate", value: self.max_scroll_rate });
        }
        Ok(())
    }

    /// Alpha to draw with for the given press state.
    #[must_use]
    pub fn alpha_for(&self, pressed: bool) -> f64 {
        if pressed { self.pressed_alpha } else { self.idle_alpha }
    }
}

fn check_alpha(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn env_parse_f64(var: &'static str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw.trim().parse::<f64>().map_err(|_| ConfigError::Parse { var, value: raw }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
