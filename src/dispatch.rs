//! Pointer and wheel dispatcher.
//!
//! Translates canvas input events into router state, callback invocations,
//! and [`Effect`]s the host applies to the page. The dispatcher owns the drag
//! lifecycle: a press on a region with `on_drag` captures that bag, pointer
//! moves are forwarded to it, and the release (or a release outside the
//! canvas) ends it.
//!
//! Resolution uses the regions of the last completed frame, so events must be
//! dispatched between frames, never while a frame is open.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::actions::{Actions, DragHandle};
use crate::consts::DEFAULT_CURSOR;
use crate::geom::Point;
use crate::input::{Button, DragEvent, Modifiers, WheelDelta};
use crate::router::InteractionRouter;
use crate::surface::Surface;

/// Side effect the host should apply after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Schedule a redraw (`requestAnimationFrame`).
    RenderNeeded,
    /// Set the canvas CSS cursor.
    SetCursor(String),
    /// Call `preventDefault()` on the DOM event.
    PreventDefault,
}

/// Routes input for one [`InteractionRouter`].
pub struct Dispatcher<S> {
    /// Strong reference to the bag holding the current drag.
    capture: Option<Rc<Actions<S>>>,
    /// Whether a drag cursor was pushed to the host and needs resetting.
    cursor_shown: bool,
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self { capture: None, cursor_shown: false }
    }
}

impl<S> fmt::Debug for Dispatcher<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("capture", &self.capture)
            .field("cursor_shown", &self.cursor_shown)
            .finish()
    }
}

impl<S: Surface> Dispatcher<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The bag holding the current drag, if the router still agrees it is held.
    #[must_use]
    pub fn captured(&self, router: &InteractionRouter<S>) -> Option<Rc<Actions<S>>> {
        let capture = self.capture.as_ref()?;
        let held = router.dragging.as_ref().is_some_and(|h| h.refers_to(capture));
        held.then(|| Rc::clone(capture))
    }

    /// Press: resolve the target and capture it if it drags.
    ///
    /// Ctrl-clicks and non-primary buttons only request a redraw. When no
    /// region contains `pt`, the frame's default bag is the target.
    pub fn on_pointer_down(
        &mut self,
        router: &mut InteractionRouter<S>,
        pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Effect> {
        let mut effects = vec![Effect::RenderNeeded];
        if button != Button::Primary || modifiers.ctrl {
            trace!(?button, ctrl = modifiers.ctrl, "pointer down ignored");
            return effects;
        }

        let target = router.find(pt.x, pt.y).or_else(|| router.default_actions());
        if let Some(target) = target.filter(|t| t.wants_pointer()) {
            trace!(x = pt.x, y = pt.y, "pointer down");
            router.button_down = true;
            router.pointer = Some(pt);
            router.modifiers = modifiers;
            target.down(pt, modifiers);

            if target.has_drag() {
                router.dragging = Some(DragHandle::new(&target));
                if let Some(cursor) = target.cursor() {
                    effects.push(Effect::SetCursor(cursor.to_owned()));
                    self.cursor_shown = true;
                }
                debug!(x = pt.x, y = pt.y, "drag captured");
                self.capture = Some(target);
            }
        }

        effects.push(Effect::PreventDefault);
        effects
    }

    /// Move: track the pointer when anything depends on it and feed the drag.
    pub fn on_pointer_move(&mut self, router: &mut InteractionRouter<S>, pt: Point, modifiers: Modifiers) -> Vec<Effect> {
        let over_hover = router.find(pt.x, pt.y).is_some_and(|a| a.has_hover() || a.has_hover_drag());
        let captured = self.captured(router);
        if !(router.button_down || router.hover_active() || captured.is_some() || over_hover) {
            return Vec::new();
        }

        router.pointer = Some(pt);
        router.modifiers = modifiers;
        if let Some(bag) = captured {
            trace!(x = pt.x, y = pt.y, "drag move");
            bag.drag(DragEvent::Move(pt));
        }
        vec![Effect::RenderNeeded]
    }

    /// Release over the canvas: click and up on the region under `pt`, then end any drag.
    pub fn on_pointer_up(
        &mut self,
        router: &mut InteractionRouter<S>,
        pt: Point,
        button: Button,
        modifiers: Modifiers,
    ) -> Vec<Effect> {
        trace!(x = pt.x, y = pt.y, ?button, "pointer up");
        router.pointer = None;
        router.button_down = false;
        router.modifiers = modifiers;

        if let Some(target) = router.find(pt.x, pt.y) {
            target.click();
            target.up();
        }

        let mut effects = vec![Effect::RenderNeeded];
        self.end_drag(router, DragEvent::Release(pt), &mut effects);
        effects.push(Effect::PreventDefault);
        effects
    }

    /// The pointer left the canvas.
    #[allow(clippy::unused_self)]
    pub fn on_pointer_out(&self, router: &mut InteractionRouter<S>) -> Vec<Effect> {
        router.pointer = None;
        vec![Effect::RenderNeeded]
    }

    /// The pointer entered the canvas.
    #[allow(clippy::unused_self)]
    pub fn on_pointer_over(&self) -> Vec<Effect> {
        vec![Effect::RenderNeeded]
    }

    /// Wheel: send the scaled delta to the first scroll region under `pt`.
    ///
    /// Both axes are multiplied by `min(max_scroll_rate, max(|dx|, |dy|))`.
    /// Nothing happens, and the page keeps its default scrolling, when no
    /// region with `on_scroll` is under the pointer.
    #[allow(clippy::unused_self)]
    pub fn on_wheel(&self, router: &InteractionRouter<S>, pt: Point, delta: WheelDelta) -> Vec<Effect> {
        let Some(target) = router.find_scroll(pt.x, pt.y).filter(|t| t.has_scroll()) else {
            return Vec::new();
        };
        let (dx, dy) = delta.scaled(router.config().max_scroll_rate);
        trace!(dx, dy, "wheel");
        target.scroll(dx, dy);
        vec![Effect::RenderNeeded, Effect::PreventDefault]
    }

    /// Context menu: offer it to the most specific region that wants one.
    #[allow(clippy::unused_self)]
    pub fn on_context_menu(&self, router: &InteractionRouter<S>, pt: Point) -> Vec<Effect> {
        match router.find_context_menus(pt.x, pt.y).first() {
            Some(target) => {
                target.context_menu(pt);
                vec![Effect::PreventDefault]
            }
            None => Vec::new(),
        }
    }

    /// The button was released outside the canvas: abandon any drag.
    pub fn on_window_release(&mut self, router: &mut InteractionRouter<S>) -> Vec<Effect> {
        router.button_down = false;
        let mut effects = Vec::new();
        self.end_drag(router, DragEvent::Cancel, &mut effects);
        effects
    }

    fn end_drag(&mut self, router: &mut InteractionRouter<S>, event: DragEvent, effects: &mut Vec<Effect>) {
        if let Some(bag) = self.captured(router) {
            debug!(?event, "drag ended");
            bag.drag(event);
        }
        self.capture = None;
        router.dragging = None;
        if self.cursor_shown {
            self.cursor_shown = false;
            effects.push(Effect::SetCursor(DEFAULT_CURSOR.to_owned()));
        }
    }
}
