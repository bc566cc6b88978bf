//! Per-frame region registry, press feedback, and hit resolution.
//!
//! The router is rebuilt every frame by the draw pass and queried between
//! frames by the input dispatcher:
//!
//! 1. `begin_drawing` (or [`InteractionRouter::frame`]) empties the region
//!    lists and takes the drawing surface.
//! 2. UI elements call `add` / `add_scroll` / `add_default` while they draw.
//!    `add` also draws the element: dimmed, or at full alpha when the held
//!    button is over it, and fires at most one hover callback per frame.
//! 3. `end_drawing` hands the surface back, and the host applies
//!    [`InteractionRouter::cursor_effect`].
//! 4. Pointer events call `find` / `find_scroll` / `find_context_menus`
//!    against what the last frame registered.
//!
//! Pointer position, button state, modifiers, and the drag handle persist
//! across frames. They are written by the dispatcher, never by the router.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::actions::{Actions, DragHandle};
use crate::config::RouterConfig;
use crate::consts::DEFAULT_CURSOR;
use crate::dispatch::Effect;
use crate::error::RouterError;
use crate::frame::Frame;
use crate::geom::{Bounds, Point};
use crate::input::Modifiers;
use crate::surface::{SavedState, Surface};

/// A registered rectangle and the action bag it routes to.
pub struct Region<S> {
    pub bounds: Bounds,
    pub actions: Rc<Actions<S>>,
    /// Area scaled by the bag's priority factor; smaller wins in `find`.
    pub priority: f64,
}

impl<S> Region<S> {
    fn new(bounds: Bounds, actions: Rc<Actions<S>>) -> Self {
        let priority = bounds.area() * actions.factor();
        Self { bounds, actions, priority }
    }
}

impl<S> Clone for Region<S> {
    fn clone(&self) -> Self {
        Self { bounds: self.bounds, actions: Rc::clone(&self.actions), priority: self.priority }
    }
}

impl<S> fmt::Debug for Region<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("bounds", &self.bounds)
            .field("actions", &self.actions)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Everything registered during one frame. Absent after `clear`.
struct Registry<S> {
    hits: Vec<Region<S>>,
    scrolls: Vec<Region<S>>,
    context_menus: Vec<Region<S>>,
    default_actions: Option<Rc<Actions<S>>>,
}

impl<S> Registry<S> {
    fn new() -> Self {
        Self { hits: Vec::new(), scrolls: Vec::new(), context_menus: Vec::new(), default_actions: None }
    }

    fn reset(&mut self) {
        self.hits.clear();
        self.scrolls.clear();
        self.context_menus.clear();
        self.default_actions = None;
    }
}

/// Immediate-mode interaction router for one canvas view.
pub struct InteractionRouter<S> {
    registry: Option<Registry<S>>,
    surface: Option<S>,
    config: RouterConfig,
    hover_active: bool,
    wants_context_menu: bool,
    /// Whether the primary button is held.
    pub button_down: bool,
    /// Last known pointer position; `None` before any event or after the pointer leaves.
    pub pointer: Option<Point>,
    /// Modifier keys of the last pointer event.
    pub modifiers: Modifiers,
    /// The action bag holding the current drag, if any.
    pub dragging: Option<DragHandle<S>>,
    /// Advisory: a region registered itself while its data was still loading.
    pub data_pending: bool,
    /// Cursor requested during the current frame. Reset by `begin_drawing`;
    /// set by a hovered region's `hover_cursor` or directly by draw code.
    pub hover_cursor: Option<String>,
}

impl<S: Surface> Default for InteractionRouter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> InteractionRouter<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            registry: Some(Registry::new()),
            surface: None,
            config,
            hover_active: false,
            wants_context_menu: false,
            button_down: false,
            pointer: None,
            modifiers: Modifiers::default(),
            dragging: None,
            data_pending: false,
            hover_cursor: None,
        }
    }

    // --- Frame lifecycle ---

    /// Start a draw pass: take `surface` and forget the previous frame's regions.
    ///
    /// Pointer, button, modifier, and drag state carry over.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Cleared`] if the router was torn down.
    pub fn begin_drawing(&mut self, surface: S) -> Result<(), RouterError> {
        let registry = self.registry.as_mut().ok_or(RouterError::Cleared)?;
        registry.reset();
        self.surface = Some(surface);
        self.hover_active = false;
        self.wants_context_menu = false;
        self.data_pending = false;
        self.hover_cursor = None;
        trace!("frame begin");
        Ok(())
    }

    /// Finish the draw pass and hand the surface back. Regions stay queryable.
    pub fn end_drawing(&mut self) -> Option<S> {
        let surface = self.surface.take();
        if surface.is_some() {
            trace!(hits = self.hits().len(), scrolls = self.scrolls().len(), "frame end");
        }
        surface
    }

    /// Begin a draw pass that ends when the returned guard is dropped.
    ///
    /// The guard dereferences to the router, so registration calls go through
    /// it directly. `end_drawing` runs on every exit path, including `?` and
    /// panics inside draw callbacks.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Cleared`] if the router was torn down.
    pub fn frame(&mut self, surface: S) -> Result<Frame<'_, S>, RouterError> {
        self.begin_drawing(surface)?;
        Ok(Frame::new(self))
    }

    /// Tear the router down for disposal.
    ///
    /// Region lists become absent and all input state is dropped. Every
    /// registration and `begin_drawing` fails with [`RouterError::Cleared`]
    /// until [`InteractionRouter::reinit`] is called.
    pub fn clear(&mut self) {
        self.registry = None;
        self.surface = None;
        self.hover_active = false;
        self.wants_context_menu = false;
        self.button_down = false;
        self.pointer = None;
        self.modifiers = Modifiers::default();
        self.dragging = None;
        self.data_pending = false;
        self.hover_cursor = None;
        debug!("router cleared");
    }

    /// Bring a cleared router back to its freshly constructed state, keeping its config.
    pub fn reinit(&mut self) {
        *self = Self::with_config(self.config);
        debug!("router reinitialized");
    }

    // --- Registration ---

    /// Register a pointer region and draw it.
    ///
    /// The region joins the hit list if its bag has click/down/up, the scroll
    /// list if it has `on_scroll`, and the context-menu list if it has
    /// `on_context_menu`. Drawing and hover are evaluated against the current
    /// pointer, so the geometry passed here must be final.
    ///
    /// # Errors
    ///
    /// - [`RouterError::InvalidRegion`] unless `left <= right && top <= bottom`.
    /// - [`RouterError::Cleared`] after `clear`.
    /// - [`RouterError::NotDrawing`] outside `begin_drawing` / `end_drawing`.
    pub fn add(
        &mut self,
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
        actions: impl Into<Rc<Actions<S>>>,
    ) -> Result<(), RouterError> {
        let bounds = Bounds::new(top, right, bottom, left);
        if !bounds.is_well_formed() {
            warn!(top, right, bottom, left, "rejected invalid region");
            return Err(RouterError::InvalidRegion { top, right, bottom, left });
        }
        let inside = self.mouse_in(&bounds);
        let pressed = self.button_down && inside;

        let registry = self.registry.as_mut().ok_or(RouterError::Cleared)?;
        let surface = self.surface.as_mut().ok_or(RouterError::NotDrawing)?;

        let actions: Rc<Actions<S>> = actions.into();
        let region = Region::new(bounds, Rc::clone(&actions));
        if actions.wants_pointer() {
            registry.hits.push(region.clone());
        }
        if actions.has_scroll() {
            registry.scrolls.push(region.clone());
        }
        if actions.has_context_menu() {
            registry.context_menus.push(region);
            self.wants_context_menu = true;
        }

        if actions.has_press_visual() {
            let mut saved = SavedState::new(surface);
            saved.set_global_alpha(self.config.alpha_for(pressed));
            actions.paint(&mut *saved);
            if pressed {
                actions.paint_down(&mut *saved);
            }
        } else if actions.has_draw_custom() {
            actions.paint_custom(surface, pressed);
        }

        if inside && !self.hover_active {
            if actions.has_hover() && !self.is_dragging() {
                self.hover_active = true;
                self.take_hover_cursor(&actions);
                actions.hover();
            } else if actions.has_hover_drag() {
                self.hover_active = true;
                self.take_hover_cursor(&actions);
                actions.hover_drag();
            }
        }
        Ok(())
    }

    /// Register a wheel region. No drawing or hover side effects.
    ///
    /// Inverted rectangles are accepted and logged; they simply never match.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Cleared`] after `clear`.
    pub fn add_scroll(
        &mut self,
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
        actions: impl Into<Rc<Actions<S>>>,
    ) -> Result<(), RouterError> {
        let registry = self.registry.as_mut().ok_or(RouterError::Cleared)?;
        let bounds = Bounds::new(top, right, bottom, left);
        if !bounds.is_well_formed() {
            warn!(top, right, bottom, left, "accepted inverted scroll region");
        }
        registry.scrolls.push(Region::new(bounds, actions.into()));
        Ok(())
    }

    /// Set the fallback bag for presses that hit no region, replacing any earlier one this frame.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Cleared`] after `clear`.
    pub fn add_default(&mut self, actions: impl Into<Rc<Actions<S>>>) -> Result<(), RouterError> {
        let registry = self.registry.as_mut().ok_or(RouterError::Cleared)?;
        registry.default_actions = Some(actions.into());
        Ok(())
    }

    // --- Resolution ---

    /// The bag of the smallest-priority hit region containing `(x, y)`.
    ///
    /// Priority is area times the bag's priority factor (1.0 unless set), so
    /// by default the smallest enclosing region wins. On equal priority the
    /// earlier registration wins.
    #[must_use]
    pub fn find(&self, x: f64, y: f64) -> Option<Rc<Actions<S>>> {
        self.hits()
            .iter()
            .filter(|r| r.bounds.contains(x, y))
            .min_by(|a, b| a.priority.total_cmp(&b.priority))
            .map(|r| Rc::clone(&r.actions))
    }

    /// The bag of the first registered scroll region containing `(x, y)`.
    #[must_use]
    pub fn find_scroll(&self, x: f64, y: f64) -> Option<Rc<Actions<S>>> {
        self.scrolls()
            .iter()
            .find(|r| r.bounds.contains(x, y))
            .map(|r| Rc::clone(&r.actions))
    }

    /// Bags of every context-menu region containing `(x, y)`, most specific first.
    #[must_use]
    pub fn find_context_menus(&self, x: f64, y: f64) -> Vec<Rc<Actions<S>>> {
        let mut matches: Vec<&Region<S>> =
            self.context_menus().iter().filter(|r| r.bounds.contains(x, y)).collect();
        matches.sort_by(|a, b| a.priority.total_cmp(&b.priority));
        matches.into_iter().map(|r| Rc::clone(&r.actions)).collect()
    }

    /// Whether the current pointer lies inside `bounds`. Always false with no pointer.
    #[must_use]
    pub fn mouse_in(&self, bounds: &Bounds) -> bool {
        self.pointer.is_some_and(|pt| bounds.contains_point(pt))
    }

    fn take_hover_cursor(&mut self, actions: &Actions<S>) {
        if let Some(cursor) = actions.hover_cursor_name() {
            self.hover_cursor = Some(cursor.to_owned());
        }
    }

    /// Cursor the host should show once the frame has ended.
    ///
    /// A live drag keeps its bag's drag cursor. Otherwise the frame's
    /// `hover_cursor` applies, falling back to `default`.
    #[must_use]
    pub fn cursor_effect(&self) -> Effect {
        let drag_cursor = self
            .dragging
            .as_ref()
            .and_then(DragHandle::upgrade)
            .and_then(|bag| bag.cursor().map(str::to_owned));
        let cursor = drag_cursor
            .or_else(|| self.hover_cursor.clone())
            .unwrap_or_else(|| DEFAULT_CURSOR.to_owned());
        Effect::SetCursor(cursor)
    }

    // --- Queries ---

    /// Hit regions of the current (or last completed) frame, in registration order.
    #[must_use]
    pub fn hits(&self) -> &[Region<S>] {
        self.registry.as_ref().map_or(&[][..], |r| r.hits.as_slice())
    }

    #[must_use]
    pub fn scrolls(&self) -> &[Region<S>] {
        self.registry.as_ref().map_or(&[][..], |r| r.scrolls.as_slice())
    }

    #[must_use]
    pub fn context_menus(&self) -> &[Region<S>] {
        self.registry.as_ref().map_or(&[][..], |r| r.context_menus.as_slice())
    }

    #[must_use]
    pub fn default_actions(&self) -> Option<Rc<Actions<S>>> {
        self.registry.as_ref().and_then(|r| r.default_actions.clone())
    }

    /// Whether a hover callback already fired this frame.
    #[must_use]
    pub fn hover_active(&self) -> bool {
        self.hover_active
    }

    /// Whether any region this frame asked for context menus.
    #[must_use]
    pub fn wants_context_menu(&self) -> bool {
        self.wants_context_menu
    }

    /// Whether a live drag handle is set. A handle whose bag was dropped does not count.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging.as_ref().is_some_and(DragHandle::is_live)
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.registry.is_none()
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

impl<S> fmt::Debug for InteractionRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts = self
            .registry
            .as_ref()
            .map(|r| (r.hits.len(), r.scrolls.len(), r.context_menus.len(), r.default_actions.is_some()));
        f.debug_struct("InteractionRouter")
            .field("regions", &counts)
            .field("drawing", &self.surface.is_some())
            .field("hover_active", &self.hover_active)
            .field("button_down", &self.button_down)
            .field("pointer", &self.pointer)
            .field("modifiers", &self.modifiers)
            .field("dragging", &self.dragging)
            .field("data_pending", &self.data_pending)
            .field("hover_cursor", &self.hover_cursor)
            .finish_non_exhaustive()
    }
}
