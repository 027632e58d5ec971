use serde::{Deserialize, Serialize};

use crate::core::{DeltaConverter, ElementId, PointRef};
use crate::events::PointerSample;
use crate::marker::Marker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Which data axes follow the pointer during a drag.
///
/// A disabled axis freezes that coordinate at the dragged element's position:
/// the marker does not move along it and the committed value keeps the old
/// coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragAxes {
    X,
    Y,
    #[default]
    Both,
}

impl DragAxes {
    #[must_use]
    pub fn allows_x(self) -> bool {
        matches!(self, Self::X | Self::Both)
    }

    #[must_use]
    pub fn allows_y(self) -> bool {
        matches!(self, Self::Y | Self::Both)
    }
}

/// State of one drag, from pointer-down on a tagged point to the matching
/// pointer-up.
///
/// The session pins the delta converter active at grab time: even if the
/// chart re-renders with new axis ranges mid-drag, this session's delta math
/// stays self-consistent. At most one session exists per binding.
#[derive(Debug)]
pub struct DragSession {
    element: ElementId,
    point: PointRef,
    grab_offset_x: f64,
    grab_offset_y: f64,
    converter: DeltaConverter,
    marker: Marker,
}

impl DragSession {
    pub(crate) fn begin(
        element: ElementId,
        point: PointRef,
        sample: &PointerSample,
        converter: DeltaConverter,
        marker: Marker,
    ) -> Self {
        let origin = marker.origin();
        Self {
            element,
            point,
            grab_offset_x: sample.client_x - origin.x,
            grab_offset_y: sample.client_y - origin.y,
            converter,
            marker,
        }
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn point(&self) -> PointRef {
        self.point
    }

    #[must_use]
    pub fn converter(&self) -> DeltaConverter {
        self.converter
    }

    #[must_use]
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    pub(crate) fn marker_mut(&mut self) -> &mut Marker {
        &mut self.marker
    }

    /// Marker target position for a pointer sample: pointer minus grab
    /// offset, with disabled axes frozen at the element origin.
    #[must_use]
    pub fn target_position(&self, sample: &PointerSample, axes: DragAxes) -> (f64, f64) {
        let origin = self.marker.origin();
        let x = if axes.allows_x() {
            sample.client_x - self.grab_offset_x
        } else {
            origin.x
        };
        let y = if axes.allows_y() {
            sample.client_y - self.grab_offset_y
        } else {
            origin.y
        };
        (x, y)
    }

    /// Pixel delta between the marker's current position and the dragged
    /// element's original position.
    #[must_use]
    pub fn pixel_delta(&self) -> (f64, f64) {
        let origin = self.marker.origin();
        let (x, y) = self.marker.position();
        (x - origin.x, y - origin.y)
    }

    /// Data-space delta for the current marker position. The vertical axis is
    /// sign-inverted: increasing pixel y means a decreasing chart value.
    #[must_use]
    pub fn data_delta(&self) -> (f64, f64) {
        let (dx_px, dy_px) = self.pixel_delta();
        (
            self.converter.convert_x(dx_px),
            -self.converter.convert_y(dy_px),
        )
    }
}
