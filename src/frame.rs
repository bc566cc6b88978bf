//! Scoped drawing guard.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use std::ops::{Deref, DerefMut};

use crate::router::InteractionRouter;
use crate::surface::Surface;

/// An open draw pass. Dropping it calls `end_drawing`, so a frame is always
/// closed even when a draw callback panics or registration bails out with `?`.
///
/// ```ignore
/// let mut frame = router.frame(ctx)?;
/// frame.add(0.0, 40.0, 20.0, 0.0, button)?;
/// frame.add_default(background)?;
/// // frame closes here
/// ```
pub struct Frame<'a, S: Surface> {
    router: &'a mut InteractionRouter<S>,
}

impl<'a, S: Surface> Frame<'a, S> {
    pub(crate) fn new(router: &'a mut InteractionRouter<S>) -> Self {
        Self { router }
    }

    /// Close the frame now and take the surface back.
    pub fn finish(mut self) -> Option<S> {
        self.router.end_drawing()
    }
}

impl<S: Surface> Deref for Frame<'_, S> {
    type Target = InteractionRouter<S>;

    fn deref(&self) -> &InteractionRouter<S> {
        self.router
    }
}

impl<S: Surface> DerefMut for Frame<'_, S> {
    fn deref_mut(&mut self) -> &mut InteractionRouter<S> {
        self.router
    }
}

impl<S: Surface> Drop for Frame<'_, S> {
    fn drop(&mut self) {
        if self.router.is_drawing() {
            self.router.end_drawing();
        }
    }
}
