use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{AxisRange, DeltaConverter};
use crate::error::DragResult;
use crate::host::{ChartHost, DrawNotification, DrawnElement, MarkerSurface};

use super::DragBinding;

impl<H: ChartHost + MarkerSurface> DragBinding<H> {
    /// Feeds one per-element draw notification from the chart engine.
    ///
    /// Point elements get their series tag; the delta converter is refreshed
    /// when the notification carries new axis-range identities. Calling this
    /// for every element of a render pass is cheap: unchanged ranges are
    /// detected by `Arc` identity, not by value.
    pub fn element_drawn(&mut self, notification: &DrawNotification) -> DragResult<()> {
        self.refresh_converter(&notification.x_range, &notification.y_range)?;

        if let DrawnElement::Point {
            series_index,
            point_index,
        } = notification.drawn
        {
            self.locator
                .tag(notification.element, series_index, point_index);
            trace!(
                element = notification.element.raw(),
                series_index,
                point_index,
                "tag point element"
            );
        }
        Ok(())
    }

    /// Drops all point tags, for hosts that rebuild their render tree with
    /// fresh element identifiers.
    pub fn clear_tags(&mut self) {
        self.locator.clear();
    }

    fn refresh_converter(
        &mut self,
        x_range: &Arc<AxisRange>,
        y_range: &Arc<AxisRange>,
    ) -> DragResult<()> {
        let unchanged = match (&self.x_range, &self.y_range) {
            (Some(current_x), Some(current_y)) => {
                Arc::ptr_eq(current_x, x_range) && Arc::ptr_eq(current_y, y_range)
            }
            _ => false,
        };
        if unchanged {
            return Ok(());
        }

        self.converter = Some(DeltaConverter::from_ranges(x_range, y_range)?);
        self.x_range = Some(Arc::clone(x_range));
        self.y_range = Some(Arc::clone(y_range));
        debug!(
            x_min = x_range.min,
            x_max = x_range.max,
            y_min = y_range.min,
            y_max = y_range.max,
            "rebuild delta converter"
        );
        Ok(())
    }
}
