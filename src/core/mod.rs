pub mod convert;
pub mod locator;
pub mod types;

pub use convert::{AxisRange, DeltaConverter};
pub use locator::{PointLocator, PointRef};
pub use types::{DataPoint, ElementId, Rect};
