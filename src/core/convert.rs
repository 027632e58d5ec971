use serde::{Deserialize, Serialize};

use crate::error::{DragError, DragResult};

/// Logical bounds and pixel length of one chart axis, as reported by the
/// chart engine for a single render pass.
///
/// A render pass supplies one range per axis; the binding treats the pair as
/// immutable for the lifetime of that pass and rebuilds the delta converter
/// only when the engine hands over new range objects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub axis_length_px: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64, axis_length_px: f64) -> Self {
        Self {
            min,
            max,
            axis_length_px,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.axis_length_px.is_finite()
            && self.axis_length_px > 0.0
            && self.min != self.max
    }
}

/// Linear mapping between pixel-space deltas and data-space deltas.
///
/// Conversion applies only the per-axis ratio `(max - min) / axis_length_px`;
/// no offset term is involved, so the mapping is exact for deltas regardless
/// of where on the axis they occur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeltaConverter {
    min_x: f64,
    min_y: f64,
    x_ratio: f64,
    y_ratio: f64,
}

impl DeltaConverter {
    pub fn from_ranges(x_range: &AxisRange, y_range: &AxisRange) -> DragResult<Self> {
        for (range, name) in [(x_range, "x"), (y_range, "y")] {
            if !range.is_valid() {
                return Err(DragError::InvalidAxisRange(format!(
                    "{name} axis range must have finite non-equal bounds and pixel length > 0"
                )));
            }
        }

        Ok(Self {
            min_x: x_range.min,
            min_y: y_range.min,
            x_ratio: (x_range.max - x_range.min) / x_range.axis_length_px,
            y_ratio: (y_range.max - y_range.min) / y_range.axis_length_px,
        })
    }

    #[must_use]
    pub fn convert_x(self, dx_px: f64) -> f64 {
        dx_px * self.x_ratio
    }

    #[must_use]
    pub fn convert_y(self, dy_px: f64) -> f64 {
        dy_px * self.y_ratio
    }

    #[must_use]
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn min_y(self) -> f64 {
        self.min_y
    }
}
