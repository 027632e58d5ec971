use thiserror::Error;

use crate::core::ElementId;

pub type DragResult<T> = Result<T, DragError>;

#[derive(Debug, Error)]
pub enum DragError {
    /// A rendered point element reached the drag path without a point tag.
    ///
    /// This indicates a tagging bug in the render integration, not a
    /// recoverable runtime condition.
    #[error("element {element:?} carries no point tag")]
    UntaggedElement { element: ElementId },

    #[error("no data point at series {series_index}, index {point_index}")]
    PointOutOfBounds {
        series_index: usize,
        point_index: usize,
    },

    #[error("invalid axis range: {0}")]
    InvalidAxisRange(String),

    /// A drag was started before any draw notification supplied axis ranges.
    #[error("no axis geometry received before drag start")]
    MissingAxisGeometry,

    #[error("no bounding box known for element {element:?}")]
    UnknownElementBounds { element: ElementId },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
