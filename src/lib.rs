//! eigengraph turns elementary function descriptions into plot geometry.
//! The crate maps transformed power, trig, exponential and logarithmic
//! functions onto a device-space plane and builds a rectangle overlay that
//! visualises the integral under the curve.

#![forbid(unsafe_code)]

pub mod describe;
pub mod family;
pub mod function;
pub mod geom;
pub mod integral;
pub mod plot;
pub mod render;
pub mod sampling;
pub mod style;
pub mod transform;
pub mod view;

pub use describe::describe;
pub use family::{DomainPolicy, FamilyProfile};
pub use function::{
    Coefficients, Family, Function, FunctionKind, LogKind, SelectionError, TrigKind, catalog,
};
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use integral::{IntegralRect, compute_integral_rectangles};
pub use plot::{Plot, PlotBuilder, PlotCommand};
pub use render::{
    Color, LineStyle, RectStyle, RenderCommand, RenderList, SceneRequest, build_scene,
};
pub use sampling::generate_points;
pub use style::Theme;
pub use transform::CoordinateTransform;
pub use view::{ConfigError, PlaneLayout, Range};
