//! Errors returned by region registration and the frame lifecycle.

/// Error returned by [`crate::router::InteractionRouter`] operations.
///
/// All variants indicate a caller bug rather than a recoverable runtime
/// condition; the usual response is to abort the current draw pass with `?`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// The rectangle passed to `add` does not satisfy `left <= right && top <= bottom`.
    #[error("region ({top},{right},{bottom},{left}) invalid")]
    InvalidRegion { top: f64, right: f64, bottom: f64, left: f64 },
    /// A drawing region was registered with no frame open.
    #[error("no drawing scope open; call begin_drawing first")]
    NotDrawing,
    /// The router was torn down by `clear` and not re-initialized.
    #[error("router was cleared; call reinit before reuse")]
    Cleared,
}
