//! Immediate-mode hit-testing and interaction routing for canvas UIs.
//!
//! Every frame the host renderer opens a drawing scope on an
//! [`router::InteractionRouter`], and UI elements register rectangular regions
//! while they draw themselves. Between frames, pointer and wheel events are
//! resolved against the regions of the last completed frame and routed to the
//! callbacks each region supplied. The router also drives press feedback during
//! the draw pass: regions draw dimmed unless the pointer is pressing them.
//!
//! The crate renders nothing itself and owns no DOM listeners. The host wires
//! browser events to a [`dispatch::Dispatcher`] (or its own dispatcher) and
//! acts on the returned [`dispatch::Effect`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`router`] | Frame region registry, press feedback, and hit resolution |
//! | [`frame`] | Scoped drawing guard that always closes the frame |
//! | [`actions`] | Capability bag of callbacks attached to a region |
//! | [`dispatch`] | Pointer/wheel dispatcher that owns the drag lifecycle |
//! | [`input`] | Buttons, modifier keys, wheel deltas, drag events |
//! | [`geom`] | Points and edge-inclusive rectangles |
//! | [`surface`] | Drawing-context seam (save / restore / alpha) |
//! | [`config`] | Tunable alphas and scroll rate |
//! | [`error`] | Router error type |
//! | [`consts`] | Shared numeric defaults |
//! | `web` | `web-sys` glue (feature `web`) |

pub mod actions;
pub mod config;
pub mod consts;
pub mod dispatch;
pub mod error;
pub mod frame;
pub mod geom;
pub mod input;
pub mod router;
pub mod surface;
#[cfg(test)]
mod testing;
#[cfg(feature = "web")]
pub mod web;

pub use actions::{Actions, DragHandle};
pub use config::{ConfigError, RouterConfig};
pub use dispatch::{Dispatcher, Effect};
pub use error::RouterError;
pub use frame::Frame;
pub use geom::{Bounds, Point};
pub use input::{Button, DragEvent, Modifiers, WheelDelta};
pub use router::{InteractionRouter, Region};
pub use surface::Surface;
