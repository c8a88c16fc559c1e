//! Coordinate transforms between math and device space.

use crate::function::Coefficients;
use crate::geom::{Point, ScreenPoint};
use crate::view::PlaneLayout;

/// Multiplier applied to `h` and `k` so shifts stay legible at plot scale.
pub const SHIFT_MULTIPLIER: f64 = 15.0;

/// Transform from raw domain samples into device coordinates.
#[derive(Debug, Clone)]
pub struct CoordinateTransform {
    layout: PlaneLayout,
    a: f64,
    b: f64,
    h: f64,
    k: f64,
    half_scale: f64,
}

impl CoordinateTransform {
    /// Create a transform for a layout, coefficient set and family scale factor.
    pub fn new(layout: PlaneLayout, coefficients: Coefficients, scale_factor: f64) -> Self {
        Self {
            layout,
            a: f64::from(coefficients.a),
            b: f64::from(coefficients.b),
            h: f64::from(coefficients.h) * SHIFT_MULTIPLIER,
            k: f64::from(coefficients.k) * SHIFT_MULTIPLIER,
            half_scale: 2.0 * scale_factor,
        }
    }

    /// Shape function input for a raw domain sample.
    pub fn input(&self, x_raw: f64) -> f64 {
        x_raw / self.half_scale
    }

    /// Map a raw sample and its shape value to device coordinates.
    pub fn to_screen(&self, x_raw: f64, y0: f64) -> (f64, f64) {
        let origin = self.layout.origin;
        let x = x_raw * self.b + origin.x as f64 + self.h;
        let y = origin.y as f64 - (y0 * self.a * self.half_scale + self.k);
        (x, y)
    }

    /// Evaluate `f` at a raw sample and keep the result if it is visible.
    pub fn sample(&self, x_raw: f64, f: impl Fn(f64) -> f64) -> Option<ScreenPoint> {
        let (x, y) = self.to_screen(x_raw, f(self.input(x_raw)));
        self.layout
            .contains(x, y)
            .then(|| ScreenPoint::new(x as f32, y as f32))
    }

    /// Map a device point back to the base function's math coordinates.
    ///
    /// Returns `None` when `a` or `b` is zero, since the mapping collapses.
    pub fn screen_to_math(&self, point: ScreenPoint) -> Option<Point> {
        if self.a == 0.0 || self.b == 0.0 {
            return None;
        }
        let origin = self.layout.origin;
        let x_raw = (point.x as f64 - origin.x as f64 - self.h) / self.b;
        let y0 = (origin.y as f64 - point.y as f64 - self.k) / (self.a * self.half_scale);
        Some(Point::new(self.input(x_raw), y0))
    }
}
