//! Ephemeral visual stand-in for the point being dragged.

use serde::{Deserialize, Serialize};

use crate::core::{ElementId, Rect};
use crate::host::{MarkerId, MarkerSurface};

/// Where the marker clone is inserted in the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MarkerMount {
    /// Directly after the source element, so the clone stacks on top of it.
    #[default]
    Inline,
    /// Under the document body, outside the chart subtree.
    DocumentBody,
}

/// Lifecycle handle for the drag marker.
///
/// Three states: absent (no `Marker` value exists), active (surface clone
/// alive and tracking), destroyed (clone removed, id released). `destroy` is
/// idempotent; positioning a destroyed marker only updates the tracked
/// coordinates.
#[derive(Debug)]
pub struct Marker {
    id: Option<MarkerId>,
    source: ElementId,
    origin: Rect,
    x: f64,
    y: f64,
}

impl Marker {
    /// Clones the source element on the surface and overlaps it exactly.
    ///
    /// `origin` is the source's bounding box at grab time; every later
    /// position update is computed against it rather than against the clone,
    /// so positioning never compounds its own drift.
    pub fn create<S: MarkerSurface>(
        surface: &mut S,
        source: ElementId,
        origin: Rect,
        mount: MarkerMount,
    ) -> Self {
        let id = surface.create_marker(source, origin, mount);
        surface.move_marker(id, 0.0, 0.0);
        Self {
            id: Some(id),
            source,
            origin,
            x: origin.x,
            y: origin.y,
        }
    }

    /// Moves the marker so its origin corner sits at `(x, y)`.
    pub fn set_position<S: MarkerSurface>(&mut self, surface: &mut S, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        if let Some(id) = self.id {
            surface.move_marker(id, x - self.origin.x, y - self.origin.y);
        }
    }

    /// Removes the clone from the surface. Safe to call more than once.
    pub fn destroy<S: MarkerSurface>(&mut self, surface: &mut S) {
        if let Some(id) = self.id.take() {
            surface.remove_marker(id);
        }
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn origin(&self) -> Rect {
        self.origin
    }

    #[must_use]
    pub fn source(&self) -> ElementId {
        self.source
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }
}
