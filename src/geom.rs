//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in math space (y grows upward). [`ScreenPoint`] and
//! [`ScreenRect`] live in device space, where the origin is the top-left
//! corner and y grows downward.

/// A point in math space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in math coordinates.
    pub x: f64,
    /// Y value in math coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new math-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in device space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in device pixels.
    pub x: f32,
    /// Y value in device pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle in device space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: ScreenPoint::new(x, y),
            max: ScreenPoint::new(x + width, y + height),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether a point lies inside the rectangle, edges included.
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_origin_size() {
        let rect = ScreenRect::from_origin_size(10.0, 20.0, 5.0, 8.0);
        assert_eq!(rect.max, ScreenPoint::new(15.0, 28.0));
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 8.0);
        assert!(rect.is_valid());
    }

    #[test]
    fn contains_includes_edges() {
        let rect = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 10.0));
        assert!(rect.contains(ScreenPoint::new(0.0, 10.0)));
        assert!(!rect.contains(ScreenPoint::new(10.5, 5.0)));
        assert!(!rect.contains(ScreenPoint::new(f32::NAN, 5.0)));
    }
}
