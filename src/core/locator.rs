use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{DataPoint, ElementId};
use crate::error::{DragError, DragResult};
use crate::host::ChartHost;

/// Logical coordinate of a data point: series slot plus index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointRef {
    pub series_index: usize,
    pub point_index: usize,
}

impl PointRef {
    #[must_use]
    pub const fn new(series_index: usize, point_index: usize) -> Self {
        Self {
            series_index,
            point_index,
        }
    }
}

/// Bidirectional mapping between rendered point elements and their logical
/// series coordinates.
///
/// Tags are assigned once per point per render pass. An element the render
/// integration reports as a point must be tagged before any pointer event can
/// reference it; `resolve` treats a missing tag as an invariant violation.
#[derive(Debug, Clone, Default)]
pub struct PointLocator {
    tags: IndexMap<ElementId, PointRef>,
}

impl PointLocator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&mut self, element: ElementId, series_index: usize, point_index: usize) {
        self.tags
            .insert(element, PointRef::new(series_index, point_index));
    }

    #[must_use]
    pub fn is_tagged(&self, element: ElementId) -> bool {
        self.tags.contains_key(&element)
    }

    pub fn resolve(&self, element: ElementId) -> DragResult<PointRef> {
        self.tags
            .get(&element)
            .copied()
            .ok_or(DragError::UntaggedElement { element })
    }

    /// Reads the data point behind a tagged element from the host chart.
    pub fn read<H: ChartHost>(&self, chart: &H, element: ElementId) -> DragResult<DataPoint> {
        let point = self.resolve(element)?;
        chart.point(point).ok_or(DragError::PointOutOfBounds {
            series_index: point.series_index,
            point_index: point.point_index,
        })
    }

    /// Writes a data point back into the host chart's series slot.
    pub fn write<H: ChartHost>(
        &self,
        chart: &mut H,
        element: ElementId,
        value: DataPoint,
    ) -> DragResult<()> {
        let point = self.resolve(element)?;
        if !chart.set_point(point, value) {
            return Err(DragError::PointOutOfBounds {
                series_index: point.series_index,
                point_index: point.point_index,
            });
        }
        Ok(())
    }

    /// Drops all tags, e.g. when the host rebuilds its render tree from
    /// scratch and element identifiers are not reused.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
