//! Drawing-context seam.
//!
//! The router never draws. It only brackets a region's draw callbacks with a
//! state save/restore and sets the global alpha for press feedback, so this is
//! all it asks of a context. The draw callbacks themselves receive the concrete
//! surface type and can use its full API.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::ops::{Deref, DerefMut};

/// The subset of a 2D drawing context the router touches.
pub trait Surface {
    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the most recently saved drawing state.
    fn restore(&mut self);
    /// Set the compositing alpha for subsequent drawing.
    fn set_global_alpha(&mut self, alpha: f64);
}

#[cfg(feature = "web")]
impl Surface for web_sys::CanvasRenderingContext2d {
    fn save(&mut self) {
        web_sys::CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        web_sys::CanvasRenderingContext2d::restore(self);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        web_sys::CanvasRenderingContext2d::set_global_alpha(self, alpha);
    }
}

/// Saved drawing state that is restored when dropped, including while unwinding.
pub struct SavedState<'a, S: Surface> {
    surface: &'a mut S,
}

impl<'a, S: Surface> SavedState<'a, S> {
    /// Save `surface`'s state; it is restored when the guard goes out of scope.
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface> Deref for SavedState<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface> DerefMut for SavedState<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface> Drop for SavedState<'_, S> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
