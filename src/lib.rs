//! chart-dragdata: drag-to-edit data points for chart engines.
//!
//! Pointer motion in pixel space is translated into data-space deltas and
//! written back into the host chart's series. A movable marker stands in for
//! the dragged point while the session is live; the real point is rewritten
//! only when the pointer is released inside the drop region.
//!
//! The chart engine, the platform event layer, and styling are external
//! collaborators behind the [`host`] traits; [`host::MemoryChart`] provides a
//! headless implementation for tests.

pub mod api;
pub mod core;
pub mod error;
pub mod events;
pub mod host;
pub mod interaction;
pub mod marker;
pub mod telemetry;

pub use api::{DragBehavior, DragBinding};
pub use error::{DragError, DragResult};
