//! Riemann-sum overlay: rectangles between a sampled curve and the x-axis.
//!
//! The overlay is visual. Rectangles are narrower than the sampling step
//! and may overlap; nothing is merged or simplified.

use crate::geom::{ScreenPoint, ScreenRect};

/// Width of every rectangle, in device units.
pub const RECT_WIDTH: f32 = 0.2;
/// Points closer than this to the x-axis get no rectangle.
pub const AXIS_EPSILON: f32 = 0.001;
/// Points closer than this to the y-axis get no rectangle.
pub const Y_AXIS_CLEARANCE: f32 = 1.2;
/// Gap kept between a rectangle and both the axis and the curve.
pub const INSET: f32 = 1.0;

/// Rectangle in device space, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height, never negative.
    pub height: f32,
}

impl IntegralRect {
    /// Convert into a corner-based rectangle.
    pub fn to_rect(&self) -> ScreenRect {
        ScreenRect::from_origin_size(self.x, self.y, self.width, self.height)
    }
}

/// Build one rectangle per eligible curve point, in point order.
///
/// `origin` is the device position of the axes' intersection. A point is
/// skipped when it practically lies on the x-axis or crowds the y-axis.
pub fn compute_integral_rectangles(
    points: &[ScreenPoint],
    origin: ScreenPoint,
) -> Vec<IntegralRect> {
    points
        .iter()
        .filter(|point| (point.y - origin.y).abs() > AXIS_EPSILON)
        .filter(|point| (point.x - origin.x).abs() > Y_AXIS_CLEARANCE)
        .map(|point| rectangle_for(*point, origin.y))
        .collect()
}

fn rectangle_for(point: ScreenPoint, axis_y: f32) -> IntegralRect {
    let height = ((point.y - axis_y).abs() - 2.0 * INSET).max(0.0);
    let y = if point.y < axis_y {
        point.y + INSET
    } else {
        axis_y + INSET
    };
    IntegralRect {
        x: point.x,
        y,
        width: RECT_WIDTH,
        height,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const ORIGIN: ScreenPoint = ScreenPoint { x: 600.0, y: 300.0 };

    #[test]
    fn rectangle_above_axis_spans_down_to_axis() {
        let rects = compute_integral_rectangles(&[ScreenPoint::new(650.0, 250.0)], ORIGIN);
        assert_eq!(
            rects,
            vec![IntegralRect {
                x: 650.0,
                y: 251.0,
                width: RECT_WIDTH,
                height: 48.0,
            }]
        );
        assert_eq!(rects[0].to_rect().max.y, 299.0);
    }

    #[test]
    fn rectangle_below_axis_spans_up_to_axis() {
        let rects = compute_integral_rectangles(&[ScreenPoint::new(550.0, 340.0)], ORIGIN);
        assert_eq!(rects.len(), 1);
        let rect = rects[0].to_rect();
        assert_eq!(rect.min, ScreenPoint::new(550.0, 301.0));
        assert_abs_diff_eq!(rect.max.y, 339.0);
        assert_abs_diff_eq!(rect.width(), RECT_WIDTH, epsilon = 1e-3);
    }

    #[test]
    fn points_on_the_x_axis_are_skipped() {
        let points = [
            ScreenPoint::new(650.0, 300.0),
            ScreenPoint::new(651.0, 300.0005),
            ScreenPoint::new(652.0, 299.9995),
            ScreenPoint::new(653.0, 300.01),
            ScreenPoint::new(654.0, 299.99),
        ];
        let rects = compute_integral_rectangles(&points, ORIGIN);
        let xs: Vec<f32> = rects.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![653.0, 654.0]);
        assert!(rects.iter().all(|r| r.height == 0.0));
    }

    #[test]
    fn points_near_the_y_axis_are_skipped() {
        let points = [
            ScreenPoint::new(600.0, 200.0),
            ScreenPoint::new(601.1, 200.0),
            ScreenPoint::new(598.9, 200.0),
            ScreenPoint::new(601.5, 200.0),
            ScreenPoint::new(598.5, 400.0),
        ];
        let rects = compute_integral_rectangles(&points, ORIGIN);
        let xs: Vec<f32> = rects.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![601.5, 598.5]);
    }

    #[test]
    fn never_more_rectangles_than_points() {
        let points: Vec<ScreenPoint> = (0..200)
            .map(|i| {
                let x = 590.0 + i as f32 * 0.1;
                ScreenPoint::new(x, 300.0 + (x - 600.0).sin() * 20.0)
            })
            .collect();
        let rects = compute_integral_rectangles(&points, ORIGIN);
        assert!(rects.len() <= points.len());
        assert!(rects.iter().all(|r| r.height >= 0.0 && r.width == RECT_WIDTH));
    }

    #[test]
    fn empty_input_gives_empty_overlay() {
        assert!(compute_integral_rectangles(&[], ORIGIN).is_empty());
    }
}
