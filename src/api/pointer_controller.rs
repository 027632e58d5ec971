use tracing::{debug, trace};

use crate::core::ElementId;
use crate::error::{DragError, DragResult};
use crate::events::{normalize, MouseButton, PointerInput, PointerSample};
use crate::host::{ChartHost, MarkerSurface};
use crate::interaction::DragSession;
use crate::marker::Marker;

use super::{DownOutcome, DragBinding, DropOutcome, PreviewEvent, UpdateEvent};

impl<H: ChartHost + MarkerSurface> DragBinding<H> {
    /// Handles pointer-down on `target`, starting a drag session when the
    /// target is a tagged point and no session is active.
    ///
    /// Secondary buttons, concurrent sessions, and untagged targets are
    /// ignored input; the returned outcome says which gate applied. A tagged
    /// target without axis geometry or a bounding box is an invariant
    /// violation and fails loudly.
    pub fn pointer_down(
        &mut self,
        target: ElementId,
        input: &PointerInput,
    ) -> DragResult<DownOutcome> {
        let Some(sample) = normalize(input) else {
            return Ok(DownOutcome::NoPointer);
        };
        if sample.button != MouseButton::Primary {
            trace!(button = ?sample.button, "ignore non-primary button");
            return Ok(DownOutcome::IgnoredButton);
        }
        if self.session.is_some() {
            trace!("ignore pointer-down while a session is active");
            return Ok(DownOutcome::SessionActive);
        }
        if !self.locator.is_tagged(target) {
            return Ok(DownOutcome::NotDraggable);
        }

        let point = self.locator.resolve(target)?;
        let Some(converter) = self.converter else {
            return Err(DragError::MissingAxisGeometry);
        };
        let origin = self
            .host
            .element_bounds(target)
            .ok_or(DragError::UnknownElementBounds { element: target })?;

        self.host
            .add_class(target, self.behavior.style_classes.dragging.as_str());
        let marker = Marker::create(&mut self.host, target, origin, self.behavior.marker_mount);
        self.session = Some(DragSession::begin(
            target, point, &sample, converter, marker,
        ));
        debug!(
            element = target.raw(),
            series_index = point.series_index,
            point_index = point.point_index,
            "start drag session"
        );
        Ok(DownOutcome::Started)
    }

    /// Handles pointer movement while a session is active; no-op otherwise.
    pub fn pointer_move(&mut self, input: &PointerInput) -> DragResult<()> {
        let Some(sample) = normalize(input) else {
            return Ok(());
        };
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let (x, y) = session.target_position(&sample, self.behavior.axes);
        session.marker_mut().set_position(&mut self.host, x, y);
        trace!(x, y, "move drag marker");

        if self.preview_observer.is_some() && self.behavior.live_preview.allows(sample.kind) {
            let old = self.locator.read(&self.host, session.element())?;
            let (dx_data, dy_data) = session.data_delta();
            let (dx_px, dy_px) = session.pixel_delta();
            let event = PreviewEvent {
                element: session.element(),
                point: session.point(),
                value: old.moved_to(old.x + dx_data, old.y + dy_data),
                dx_px,
                dy_px,
            };
            if let Some(observer) = self.preview_observer.as_mut() {
                observer(&event);
            }
        }
        Ok(())
    }

    /// Resolves the active session on pointer-up, committing or discarding
    /// based on the drop position.
    ///
    /// The marker is destroyed, the dragging class removed, and the binding
    /// returned to idle on every path, including errors.
    pub fn pointer_up(&mut self, input: &PointerInput) -> DragResult<DropOutcome> {
        let Some(mut session) = self.session.take() else {
            return Ok(DropOutcome::NoSession);
        };

        let resolution = match normalize(input) {
            Some(sample) => self.resolve_drop(&session, &sample),
            None => {
                debug!("drag released without a readable pointer position");
                Ok(DropOutcome::Discarded)
            }
        };

        session.marker_mut().destroy(&mut self.host);
        self.host.remove_class(
            session.element(),
            self.behavior.style_classes.dragging.as_str(),
        );
        debug!(element = session.element().raw(), "end drag session");
        resolution
    }

    fn resolve_drop(
        &mut self,
        session: &DragSession,
        sample: &PointerSample,
    ) -> DragResult<DropOutcome> {
        let region = self
            .host
            .grid_bounds()
            .unwrap_or_else(|| self.host.container_bounds());
        if !region.contains(sample.client_x, sample.client_y) {
            debug!(
                x = sample.client_x,
                y = sample.client_y,
                "drop outside region; discarding"
            );
            return Ok(DropOutcome::Discarded);
        }

        let (dx_data, dy_data) = session.data_delta();
        if dx_data == 0.0 && dy_data == 0.0 {
            return Ok(DropOutcome::NoChange);
        }

        let old = self.locator.read(&self.host, session.element())?;
        let proposed = old.moved_to(old.x + dx_data, old.y + dy_data);
        let (dx_px, dy_px) = session.pixel_delta();
        let event = UpdateEvent {
            element: session.element(),
            point: session.point(),
            old: old.clone(),
            proposed: proposed.clone(),
            converter: session.converter(),
            dx_px,
            dy_px,
        };
        if let Some(callback) = self.update_callback.as_mut() {
            if !callback(&event) {
                debug!("update callback vetoed the commit");
                return Ok(DropOutcome::Vetoed);
            }
        }

        self.locator
            .write(&mut self.host, session.element(), proposed.clone())?;
        self.host.request_render();
        debug!(
            dx_data,
            dy_data,
            series_index = session.point().series_index,
            point_index = session.point().point_index,
            "commit dragged point"
        );
        Ok(DropOutcome::Committed {
            old,
            new: proposed,
        })
    }
}
