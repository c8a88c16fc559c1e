//! Rendering primitives and scene assembly.
//!
//! These types are backend-agnostic. A drawing backend walks the
//! [`RenderList`] in order and paints each command.

use log::debug;

use crate::function::Function;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::integral::{IntegralRect, compute_integral_rectangles};
use crate::sampling::generate_points;
use crate::style::Theme;
use crate::view::PlaneLayout;

/// Tension of the smooth curve drawn through sampled points.
pub const CURVE_TENSION: f32 = 0.5;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque light gray.
    pub const LIGHT_GRAY: Self = Self::new(0.827, 0.827, 0.827, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 0.5, 0.0, 1.0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0, 1.0);
    /// Opaque orange.
    pub const ORANGE: Self = Self::new(1.0, 0.647, 0.0, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            fill: Color::new(0.0, 0.0, 0.0, 0.0),
            stroke: Color::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Render command list.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw a straight line.
    Line {
        /// Line start.
        start: ScreenPoint,
        /// Line end.
        end: ScreenPoint,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw a smooth curve through the points.
    Curve {
        /// Points the curve passes through, in order.
        points: Vec<ScreenPoint>,
        /// Curve tension.
        tension: f32,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw the integral overlay.
    Rects {
        /// Rectangles in drawing order.
        rects: Vec<IntegralRect>,
        /// Shared styling.
        style: RectStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Points of the first curve, if any.
    pub fn curve_points(&self) -> Option<&[ScreenPoint]> {
        self.commands.iter().find_map(|command| match command {
            RenderCommand::Curve { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Rectangles of the first integral overlay, if any.
    pub fn integral_rects(&self) -> Option<&[IntegralRect]> {
        self.commands.iter().find_map(|command| match command {
            RenderCommand::Rects { rects, .. } => Some(rects.as_slice()),
            _ => None,
        })
    }
}

/// Scene inputs for one redraw.
#[derive(Debug, Clone, Copy)]
pub struct SceneRequest<'a> {
    /// Function to plot, if one was selected.
    pub function: Option<&'a Function>,
    /// Plane placement.
    pub layout: &'a PlaneLayout,
    /// Colours.
    pub theme: &'a Theme,
    /// Whether to add the integral overlay.
    pub integrate: bool,
}

/// Build the full scene: plane, axes, curve and optional integral overlay.
///
/// Geometry is recomputed from the function model on every call.
pub fn build_scene(request: SceneRequest<'_>) -> RenderList {
    let SceneRequest {
        function,
        layout,
        theme,
        integrate,
    } = request;
    let mut list = RenderList::new();
    list.push(RenderCommand::Rect {
        rect: layout.plane_rect(),
        style: RectStyle {
            fill: theme.background,
            stroke: theme.background,
            stroke_width: 0.0,
        },
    });
    push_axes(&mut list, layout, theme);

    let Some(function) = function else {
        return list;
    };
    let points = generate_points(function, layout);
    if points.len() < 2 {
        debug!("{function}: too few visible points to draw a curve");
        return list;
    }
    let rects = integrate.then(|| compute_integral_rectangles(&points, layout.origin));
    list.push(RenderCommand::Curve {
        points,
        tension: CURVE_TENSION,
        style: LineStyle {
            color: theme.curve(function.family()),
            width: 1.0,
        },
    });
    if let Some(rects) = rects {
        debug!("{function}: {} integral rectangles", rects.len());
        list.push(RenderCommand::Rects {
            rects,
            style: RectStyle {
                fill: theme.integral.with_alpha(0.25),
                stroke: theme.integral,
                stroke_width: 1.0,
            },
        });
    }
    list
}

fn push_axes(list: &mut RenderList, layout: &PlaneLayout, theme: &Theme) {
    let origin = layout.origin;
    let half = layout.axis_half_length;
    let style = LineStyle {
        color: theme.axis,
        width: 1.0,
    };
    list.push(RenderCommand::Line {
        start: ScreenPoint::new(origin.x, origin.y - half),
        end: ScreenPoint::new(origin.x, origin.y + half),
        style,
    });
    list.push(RenderCommand::Line {
        start: ScreenPoint::new(origin.x - half, origin.y),
        end: ScreenPoint::new(origin.x + half, origin.y),
        style,
    });
}
