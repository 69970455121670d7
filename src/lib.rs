//! Cross-surface window coordination.
//!
//! `span-wm` coordinates movable, resizable, layered windows across one or
//! more display surfaces: it resolves which surface a pointer gesture
//! targets, reparents a window dragged across surface boundaries, keeps
//! z-order as a dense layer renumbering, routes key presses to the active
//! window through scope-qualified combo strings, and groups windows into
//! named channels.
//!
//! The crate is an in-process library: a host rendering layer reports raw
//! pointer and key events into [`window::WindowCoordinator`] and
//! [`input::InputDispatcher`], and reads back window geometry, layer
//! indices and the active window to draw chrome. No rendering, styling or
//! persistence happens here.

pub mod category;
pub mod constants;
pub mod geometry;
pub mod input;
pub mod keyed_store;
pub mod surface;
pub mod tracing_sub;
pub mod window;

pub use category::CategoryIndex;
pub use geometry::{Interval, Rectangle};
pub use input::{DispatchOutcome, InputDispatcher, KeyCaseMode, KeyPress, canonical_combo};
pub use keyed_store::KeyedStore;
pub use surface::{Surface, SurfaceId, SurfaceRegistry};
pub use window::{GestureError, PointerSample, WindowCoordinator, WindowFrame};
