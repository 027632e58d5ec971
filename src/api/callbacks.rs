use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, DeltaConverter, ElementId, PointRef};

/// Commit-time payload handed to the update callback.
///
/// `proposed` is `old` with the dragged x/y applied and pass-through fields
/// kept. Returning `false` from the callback vetoes the commit; cleanup still
/// runs either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEvent {
    pub element: ElementId,
    pub point: PointRef,
    pub old: DataPoint,
    pub proposed: DataPoint,
    pub converter: DeltaConverter,
    pub dx_px: f64,
    pub dy_px: f64,
}

/// Live-preview payload published while the pointer moves.
///
/// Preview values never mutate the series; they exist so observers bound to
/// the dragged point (tooltips, readouts) can refresh mid-drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewEvent {
    pub element: ElementId,
    pub point: PointRef,
    pub value: DataPoint,
    pub dx_px: f64,
    pub dy_px: f64,
}

pub type UpdateCallback = Box<dyn FnMut(&UpdateEvent) -> bool>;

pub type PreviewObserver = Box<dyn FnMut(&PreviewEvent)>;

/// How a pointer-down was handled. Everything except `Started` is ignored
/// input by design, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownOutcome {
    Started,
    /// A session is already active; the down is a no-op.
    SessionActive,
    /// The target carries no point tag.
    NotDraggable,
    /// Non-primary mouse button.
    IgnoredButton,
    /// The input carried no usable pointer position.
    NoPointer,
}

/// How a pointer-up resolved the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DropOutcome {
    Committed { old: DataPoint, new: DataPoint },
    /// Dropped inside the region but the data delta was zero on both axes.
    NoChange,
    /// The update callback returned `false`.
    Vetoed,
    /// Released outside the drop region (or without a readable position).
    Discarded,
    NoSession,
}
