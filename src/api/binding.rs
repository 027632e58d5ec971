use std::fmt;
use std::sync::Arc;

use crate::core::{AxisRange, DeltaConverter, ElementId, PointLocator};
use crate::error::DragResult;
use crate::host::{ChartHost, MarkerSurface};
use crate::interaction::{DragPhase, DragSession};

use super::{DragBehavior, PreviewEvent, PreviewObserver, UpdateCallback, UpdateEvent};

/// Per-chart drag binding: the orchestration facade host applications talk
/// to.
///
/// One binding owns one host chart and at most one live drag session. Bind a
/// separate instance per chart; sessions are never shared across charts.
pub struct DragBinding<H: ChartHost + MarkerSurface> {
    pub(super) host: H,
    pub(super) behavior: DragBehavior,
    pub(super) locator: PointLocator,
    pub(super) x_range: Option<Arc<AxisRange>>,
    pub(super) y_range: Option<Arc<AxisRange>>,
    pub(super) converter: Option<DeltaConverter>,
    pub(super) session: Option<DragSession>,
    pub(super) update_callback: Option<UpdateCallback>,
    pub(super) preview_observer: Option<PreviewObserver>,
}

impl<H: ChartHost + MarkerSurface + fmt::Debug> fmt::Debug for DragBinding<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragBinding")
            .field("host", &self.host)
            .field("behavior", &self.behavior)
            .field("locator", &self.locator)
            .field("x_range", &self.x_range)
            .field("y_range", &self.y_range)
            .field("converter", &self.converter)
            .field("session", &self.session)
            .field("update_callback", &self.update_callback.as_ref().map(|_| "<callback>"))
            .field("preview_observer", &self.preview_observer.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl<H: ChartHost + MarkerSurface> DragBinding<H> {
    pub fn new(host: H, behavior: DragBehavior) -> DragResult<Self> {
        behavior.validate()?;
        Ok(Self {
            host,
            behavior,
            locator: PointLocator::new(),
            x_range: None,
            y_range: None,
            converter: None,
            session: None,
            update_callback: None,
            preview_observer: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    /// Element currently being dragged, if any.
    #[must_use]
    pub fn dragged_element(&self) -> Option<ElementId> {
        self.session.as_ref().map(DragSession::element)
    }

    #[must_use]
    pub fn behavior(&self) -> &DragBehavior {
        &self.behavior
    }

    pub fn set_behavior(&mut self, behavior: DragBehavior) -> DragResult<()> {
        behavior.validate()?;
        self.behavior = behavior;
        Ok(())
    }

    /// Converter derived from the most recent draw notification.
    #[must_use]
    pub fn converter(&self) -> Option<DeltaConverter> {
        self.converter
    }

    #[must_use]
    pub fn locator(&self) -> &PointLocator {
        &self.locator
    }

    pub fn set_update_callback(
        &mut self,
        callback: impl FnMut(&UpdateEvent) -> bool + 'static,
    ) {
        self.update_callback = Some(Box::new(callback));
    }

    pub fn clear_update_callback(&mut self) {
        self.update_callback = None;
    }

    pub fn set_preview_observer(&mut self, observer: impl FnMut(&PreviewEvent) + 'static) {
        self.preview_observer = Some(Box::new(observer));
    }

    pub fn clear_preview_observer(&mut self) {
        self.preview_observer = None;
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }
}
