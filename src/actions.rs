//! Capability bag attached to a region.
//!
//! An [`Actions`] value is an optional-fields record: each capability is either
//! present or absent, and the router and dispatcher decide what to do with a
//! region by checking which ones are present. Bags are shared through `Rc` so
//! that a dispatcher can keep routing drag events to one after the frame that
//! registered it has been discarded.
//!
//! Callbacks are `Fn`, not `FnMut`; closures that need state should capture
//! `Rc<Cell<_>>` or `Rc<RefCell<_>>` the way browser event handlers do.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use std::fmt;
use std::rc::{Rc, Weak};

use crate::consts::DEFAULT_PRIORITY_FACTOR;
use crate::geom::Point;
use crate::input::{DragEvent, Modifiers};

type Notify = Box<dyn Fn()>;
type PointFn = Box<dyn Fn(Point)>;
type DownFn = Box<dyn Fn(Point, Modifiers)>;
type DragFn = Box<dyn Fn(DragEvent)>;
type ScrollFn = Box<dyn Fn(f64, f64)>;
type DrawFn<S> = Box<dyn Fn(&mut S)>;
type DrawCustomFn<S> = Box<dyn Fn(&mut S, bool)>;

/// Callbacks a region may supply. `S` is the drawing surface type.
pub struct Actions<S> {
    on_click: Option<Notify>,
    on_down: Option<DownFn>,
    on_up: Option<Notify>,
    on_hover: Option<Notify>,
    on_hover_drag: Option<Notify>,
    on_drag: Option<DragFn>,
    on_scroll: Option<ScrollFn>,
    on_context_menu: Option<PointFn>,
    draw: Option<DrawFn<S>>,
    draw_down: Option<DrawFn<S>>,
    draw_custom: Option<DrawCustomFn<S>>,
    drag_cursor: Option<String>,
    hover_cursor: Option<String>,
    priority_factor: f64,
}

impl<S> Default for Actions<S> {
    fn default() -> Self {
        Self {
            on_click: None,
            on_down: None,
            on_up: None,
            on_hover: None,
            on_hover_drag: None,
            on_drag: None,
            on_scroll: None,
            on_context_menu: None,
            draw: None,
            draw_down: None,
            draw_custom: None,
            drag_cursor: None,
            hover_cursor: None,
            priority_factor: DEFAULT_PRIORITY_FACTOR,
        }
    }
}

impl<S> Actions<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builders ---

    /// Called on release over the region.
    #[must_use]
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    /// Called on press with the press point and the modifier keys held.
    #[must_use]
    pub fn on_down(mut self, f: impl Fn(Point, Modifiers) + 'static) -> Self {
        self.on_down = Some(Box::new(f));
        self
    }

    /// Called on release over the region, after `on_click`.
    #[must_use]
    pub fn on_up(mut self, f: impl Fn() + 'static) -> Self {
        self.on_up = Some(Box::new(f));
        self
    }

    /// Called during the draw pass when the pointer is over the region and no drag is held.
    #[must_use]
    pub fn on_hover(mut self, f: impl Fn() + 'static) -> Self {
        self.on_hover = Some(Box::new(f));
        self
    }

    /// Like `on_hover`, but also fires while a drag is held (drop targets).
    #[must_use]
    pub fn on_hover_drag(mut self, f: impl Fn() + 'static) -> Self {
        self.on_hover_drag = Some(Box::new(f));
        self
    }

    /// Makes a press on the region capture the pointer until release. Enough on its own to join hit testing.
    #[must_use]
    pub fn on_drag(mut self, f: impl Fn(DragEvent) + 'static) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    /// Receives scaled wheel deltas.
    #[must_use]
    pub fn on_scroll(mut self, f: impl Fn(f64, f64) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    /// Receives a context-menu request at the given point.
    #[must_use]
    pub fn on_context_menu(mut self, f: impl Fn(Point) + 'static) -> Self {
        self.on_context_menu = Some(Box::new(f));
        self
    }

    /// Drawn every frame, dimmed unless pressed.
    #[must_use]
    pub fn draw(mut self, f: impl Fn(&mut S) + 'static) -> Self {
        self.draw = Some(Box::new(f));
        self
    }

    /// Drawn on top of `draw` only while pressed.
    #[must_use]
    pub fn draw_down(mut self, f: impl Fn(&mut S) + 'static) -> Self {
        self.draw_down = Some(Box::new(f));
        self
    }

    /// Draws itself with full control over press feedback; ignored when `draw` or `draw_down` is set.
    #[must_use]
    pub fn draw_custom(mut self, f: impl Fn(&mut S, bool) + 'static) -> Self {
        self.draw_custom = Some(Box::new(f));
        self
    }

    /// CSS cursor shown while this bag holds a drag.
    #[must_use]
    pub fn drag_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.drag_cursor = Some(cursor.into());
        self
    }

    /// CSS cursor shown after a frame in which this bag's hover callback fired.
    #[must_use]
    pub fn hover_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.hover_cursor = Some(cursor.into());
        self
    }

    /// Scales the region's area for hit resolution; below 1.0 wins more often.
    #[must_use]
    pub fn priority_factor(mut self, factor: f64) -> Self {
        self.priority_factor = factor;
        self
    }

    // --- Capability queries ---

    /// Whether the region takes part in `find` (click, down, up or drag).
    #[must_use]
    pub fn wants_pointer(&self) -> bool {
        self.on_click.is_some() || self.on_down.is_some() || self.on_up.is_some() || self.on_drag.is_some()
    }

    #[must_use]
    pub fn has_hover(&self) -> bool {
        self.on_hover.is_some()
    }

    #[must_use]
    pub fn has_hover_drag(&self) -> bool {
        self.on_hover_drag.is_some()
    }

    #[must_use]
    pub fn has_drag(&self) -> bool {
        self.on_drag.is_some()
    }

    #[must_use]
    pub fn has_scroll(&self) -> bool {
        self.on_scroll.is_some()
    }

    #[must_use]
    pub fn has_context_menu(&self) -> bool {
        self.on_context_menu.is_some()
    }

    /// Whether the router brackets this bag's drawing with press-feedback alpha.
    #[must_use]
    pub fn has_press_visual(&self) -> bool {
        self.draw.is_some() || self.draw_down.is_some()
    }

    #[must_use]
    pub fn has_draw_custom(&self) -> bool {
        self.draw_custom.is_some()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        self.drag_cursor.as_deref()
    }

    #[must_use]
    pub fn hover_cursor_name(&self) -> Option<&str> {
        self.hover_cursor.as_deref()
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.priority_factor
    }

    // --- Invocation ---
    //
    // Each returns whether the capability was present.

    pub fn click(&self) -> bool {
        invoke(self.on_click.as_deref(), |f| f())
    }

    pub fn down(&self, pt: Point, modifiers: Modifiers) -> bool {
        invoke(self.on_down.as_deref(), |f| f(pt, modifiers))
    }

    pub fn up(&self) -> bool {
        invoke(self.on_up.as_deref(), |f| f())
    }

    pub fn hover(&self) -> bool {
        invoke(self.on_hover.as_deref(), |f| f())
    }

    pub fn hover_drag(&self) -> bool {
        invoke(self.on_hover_drag.as_deref(), |f| f())
    }

    pub fn drag(&self, event: DragEvent) -> bool {
        invoke(self.on_drag.as_deref(), |f| f(event))
    }

    pub fn scroll(&self, dx: f64, dy: f64) -> bool {
        invoke(self.on_scroll.as_deref(), |f| f(dx, dy))
    }

    pub fn context_menu(&self, pt: Point) -> bool {
        invoke(self.on_context_menu.as_deref(), |f| f(pt))
    }

    pub fn paint(&self, surface: &mut S) -> bool {
        invoke(self.draw.as_deref(), |f| f(surface))
    }

    pub fn paint_down(&self, surface: &mut S) -> bool {
        invoke(self.draw_down.as_deref(), |f| f(surface))
    }

    pub fn paint_custom(&self, surface: &mut S, pressed: bool) -> bool {
        invoke(self.draw_custom.as_deref(), |f| f(surface, pressed))
    }
}

fn invoke<F: ?Sized>(callback: Option<&F>, call: impl FnOnce(&F)) -> bool {
    match callback {
        Some(f) => {
            call(f);
            true
        }
        None => false,
    }
}

impl<S> fmt::Debug for Actions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let present = [
            ("on_click", self.on_click.is_some()),
            ("on_down", self.on_down.is_some()),
            ("on_up", self.on_up.is_some()),
            ("on_hover", self.on_hover.is_some()),
            ("on_hover_drag", self.on_hover_drag.is_some()),
            ("on_drag", self.on_drag.is_some()),
            ("on_scroll", self.on_scroll.is_some()),
            ("on_context_menu", self.on_context_menu.is_some()),
            ("draw", self.draw.is_some()),
            ("draw_down", self.draw_down.is_some()),
            ("draw_custom", self.draw_custom.is_some()),
        ];
        let names: Vec<&str> = present.iter().filter(|(_, on)| *on).map(|(name, _)| *name).collect();
        f.debug_struct("Actions")
            .field("capabilities", &names)
            .field("drag_cursor", &self.drag_cursor)
            .field("hover_cursor", &self.hover_cursor)
            .field("priority_factor", &self.priority_factor)
            .finish()
    }
}

/// Non-owning reference to the action bag that holds the current drag.
///
/// The router stores this only to know that a drag is in progress; whoever
/// started the drag keeps the strong `Rc`.
pub struct DragHandle<S>(Weak<Actions<S>>);

impl<S> DragHandle<S> {
    #[must_use]
    pub fn new(actions: &Rc<Actions<S>>) -> Self {
        Self(Rc::downgrade(actions))
    }

    /// The captured bag, if its owner still holds it.
    #[must_use]
    pub fn upgrade(&self) -> Option<Rc<Actions<S>>> {
        self.0.upgrade()
    }

    /// Whether the captured bag is still alive.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Whether this handle refers to `actions`.
    #[must_use]
    pub fn refers_to(&self, actions: &Rc<Actions<S>>) -> bool {
        std::ptr::eq(self.0.as_ptr(), Rc::as_ptr(actions))
    }
}

impl<S> Clone for DragHandle<S> {
    fn clone(&self) -> Self {
        Self(Weak::clone(&self.0))
    }
}

impl<S> fmt::Debug for DragHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragHandle").field("live", &self.is_live()).finish()
    }
}
