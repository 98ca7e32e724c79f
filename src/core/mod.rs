pub mod axis;
pub mod axis_set;
pub mod format;
pub mod interpolate;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisKind, ScaleOptions, XScaleOptions, YScaleOptions};
pub use axis_set::{AxisSet, GridOptions};
pub use interpolate::{ControlPoint, DEFAULT_TENSION, spline_control_points};
pub use scale::{ScaleRole, ScaleSpec, TickScale};
pub use series::{DataSeries, Interpolation};
pub use types::{CanvasSize, GridCellSize, Point};
