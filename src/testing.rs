//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::surface::Surface;

/// One call observed by [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Op {
    Save,
    Restore,
    Alpha(f64),
    /// A draw callback ran; carries the alpha in effect at that moment.
    Mark(&'static str, f64),
}

/// Surface that records calls and tracks alpha through save/restore like a canvas.
#[derive(Debug)]
pub(crate) struct Recorder {
    pub ops: Vec<Op>,
    alpha: f64,
    stack: Vec<f64>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self { ops: Vec::new(), alpha: 1.0, stack: Vec::new() }
    }
}

impl Recorder {
    pub fn mark(&mut self, name: &'static str) {
        self.ops.push(Op::Mark(name, self.alpha));
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn marks(&self) -> Vec<(&'static str, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Mark(name, alpha) => Some((*name, *alpha)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn save(&mut self) {
        self.stack.push(self.alpha);
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        if let Some(alpha) = self.stack.pop() {
            self.alpha = alpha;
        }
        self.ops.push(Op::Restore);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.ops.push(Op::Alpha(alpha));
    }
}

/// Shared call counter for callbacks.
#[derive(Debug, Clone, Default)]
pub(crate) struct Counter(Rc<Cell<u32>>);

impl Counter {
    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

/// Shared log of values passed to callbacks.
#[derive(Debug)]
pub(crate) struct Log<T>(Rc<RefCell<Vec<T>>>);

impl<T> Clone for Log<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> Default for Log<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }
}

impl<T: Clone> Log<T> {
    pub fn push(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn entries(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}
