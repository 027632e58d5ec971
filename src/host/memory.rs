use indexmap::IndexMap;

use crate::core::{DataPoint, ElementId, PointRef, Rect};
use crate::marker::MarkerMount;

use super::{ChartHost, MarkerId, MarkerSurface};

/// Live marker bookkeeping entry kept by [`MemoryChart`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerRecord {
    pub source: ElementId,
    pub mount: MarkerMount,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// In-memory chart host used by tests and headless embedding.
///
/// It records render requests, marker operations, and class changes so test
/// code can assert on the exact side effects of a drag session before a real
/// engine integration exists.
#[derive(Debug, Default)]
pub struct MemoryChart {
    series: Vec<Vec<DataPoint>>,
    container: Rect,
    grid: Option<Rect>,
    bounds: IndexMap<ElementId, Rect>,
    classes: IndexMap<ElementId, Vec<String>>,
    markers: IndexMap<MarkerId, MarkerRecord>,
    next_marker: u64,
    render_requests: usize,
    removed_markers: usize,
}

impl MemoryChart {
    #[must_use]
    pub fn new(container: Rect) -> Self {
        Self {
            container,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_grid(mut self, grid: Rect) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn push_series(&mut self, points: Vec<DataPoint>) {
        self.series.push(points);
    }

    /// Registers the bounding box of a rendered element.
    pub fn place_element(&mut self, element: ElementId, bounds: Rect) {
        self.bounds.insert(element, bounds);
    }

    #[must_use]
    pub fn series(&self, index: usize) -> Option<&[DataPoint]> {
        self.series.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn render_requests(&self) -> usize {
        self.render_requests
    }

    #[must_use]
    pub fn live_markers(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn removed_markers(&self) -> usize {
        self.removed_markers
    }

    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&MarkerRecord> {
        self.markers.get(&id)
    }

    #[must_use]
    pub fn last_marker(&self) -> Option<(MarkerId, &MarkerRecord)> {
        self.markers.last().map(|(id, record)| (*id, record))
    }

    #[must_use]
    pub fn classes(&self, element: ElementId) -> &[String] {
        self.classes.get(&element).map_or(&[], Vec::as_slice)
    }
}

impl ChartHost for MemoryChart {
    fn point(&self, at: PointRef) -> Option<DataPoint> {
        self.series
            .get(at.series_index)?
            .get(at.point_index)
            .cloned()
    }

    fn set_point(&mut self, at: PointRef, value: DataPoint) -> bool {
        match self
            .series
            .get_mut(at.series_index)
            .and_then(|series| series.get_mut(at.point_index))
        {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn request_render(&mut self) {
        self.render_requests += 1;
    }

    fn grid_bounds(&self) -> Option<Rect> {
        self.grid
    }

    fn container_bounds(&self) -> Rect {
        self.container
    }

    fn element_bounds(&self, element: ElementId) -> Option<Rect> {
        self.bounds.get(&element).copied()
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        let classes = self.classes.entry(element).or_default();
        if !classes.iter().any(|entry| entry == class) {
            classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(classes) = self.classes.get_mut(&element) {
            classes.retain(|entry| entry != class);
        }
    }
}

impl MarkerSurface for MemoryChart {
    fn create_marker(&mut self, source: ElementId, _origin: Rect, mount: MarkerMount) -> MarkerId {
        let id = MarkerId::new(self.next_marker);
        self.next_marker += 1;
        self.markers.insert(
            id,
            MarkerRecord {
                source,
                mount,
                offset_x: 0.0,
                offset_y: 0.0,
            },
        );
        id
    }

    fn move_marker(&mut self, marker: MarkerId, offset_x: f64, offset_y: f64) {
        if let Some(record) = self.markers.get_mut(&marker) {
            record.offset_x = offset_x;
            record.offset_y = offset_y;
        }
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        if self.markers.shift_remove(&marker).is_some() {
            self.removed_markers += 1;
        }
    }
}
