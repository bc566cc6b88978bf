//! Shared numeric constants for the router.

// ── Press feedback ──────────────────────────────────────────────

/// Global alpha for regions that are not being pressed.
pub const IDLE_ALPHA: f64 = 0.5;

/// Global alpha for a region under a held button.
pub const PRESSED_ALPHA: f64 = 1.0;

// ── Wheel ───────────────────────────────────────────────────────

/// Upper bound on the per-event wheel multiplier.
pub const MAX_SCROLL_RATE: f64 = 15.0;

// ── Resolution ──────────────────────────────────────────────────

/// Priority multiplier used when a region does not set one.
pub const DEFAULT_PRIORITY_FACTOR: f64 = 1.0;

/// Cursor restored after a drag that showed a custom cursor.
pub const DEFAULT_CURSOR: &str = "default";
