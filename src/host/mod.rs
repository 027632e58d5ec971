//! Seams toward the external collaborators: the chart engine that owns the
//! data series and render tree, and the surface that materializes the drag
//! marker.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, DataPoint, ElementId, PointRef, Rect};
use crate::marker::MarkerMount;

mod memory;

pub use memory::{MarkerRecord, MemoryChart};

/// Opaque identifier of a live marker clone in the host's render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerId(u64);

impl MarkerId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// What a single draw notification rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawnElement {
    Point {
        series_index: usize,
        point_index: usize,
    },
    Grid,
    Other,
}

/// Per-element draw callback payload from the chart engine.
///
/// The axis ranges are shared by identity: the engine reuses the same `Arc`s
/// for every element of one render pass and allocates fresh ones when axes
/// change, which is what lets the binding skip converter rebuilds cheaply.
#[derive(Debug, Clone)]
pub struct DrawNotification {
    pub element: ElementId,
    pub drawn: DrawnElement,
    pub x_range: Arc<AxisRange>,
    pub y_range: Arc<AxisRange>,
}

/// Contract implemented by the host chart engine.
///
/// The drag layer reads and rewrites series slots through this trait and asks
/// for geometry and re-renders; it never touches engine internals.
pub trait ChartHost {
    fn point(&self, at: PointRef) -> Option<DataPoint>;

    /// Replaces the series slot at `at`. Returns `false` when no such slot
    /// exists.
    fn set_point(&mut self, at: PointRef, value: DataPoint) -> bool;

    /// Requests a full re-render after a committed mutation.
    fn request_render(&mut self);

    /// Bounding box of the plotted grid area, when the chart has one.
    fn grid_bounds(&self) -> Option<Rect>;

    /// Bounding box of the chart container; the drop-region fallback.
    fn container_bounds(&self) -> Rect;

    fn element_bounds(&self, element: ElementId) -> Option<Rect>;

    /// Cosmetic styling hooks. Implementations may no-op.
    fn add_class(&mut self, element: ElementId, class: &str);

    fn remove_class(&mut self, element: ElementId, class: &str);
}

/// Contract for materializing the ephemeral drag marker.
///
/// `create_marker` clones the source element's visual representation,
/// disables pointer interaction on the clone, and inserts it directly after
/// the source (or under the document body, per `mount`) so it stacks on top.
pub trait MarkerSurface {
    fn create_marker(&mut self, source: ElementId, origin: Rect, mount: MarkerMount) -> MarkerId;

    /// Translates the clone by `(offset_x, offset_y)` pixels from its origin.
    fn move_marker(&mut self, marker: MarkerId, offset_x: f64, offset_y: f64);

    /// Removes the clone. Must tolerate already-detached clones.
    fn remove_marker(&mut self, marker: MarkerId);
}
