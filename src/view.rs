//! Plane layout, sampling ranges, and layout configuration.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::geom::{ScreenPoint, ScreenRect};

/// Upper bound on the number of positions yielded by [`Range::samples`].
pub const MAX_SAMPLES: usize = 1 << 24;

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Range symmetric around zero.
    pub fn symmetric(half: f64) -> Self {
        Self::new(-half, half)
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Sample positions from `min` up to `max` at a fixed step, in ascending order.
    ///
    /// Positions are computed as `min + n * step` so the step does not drift.
    /// At most [`MAX_SAMPLES`] positions are produced.
    pub fn samples(&self, step: f64) -> impl Iterator<Item = f64> + use<> {
        let Range { min, max } = *self;
        let steps = self.span() / step;
        let count = if !(step > 0.0 && steps.is_finite()) {
            0
        } else if steps >= MAX_SAMPLES as f64 {
            warn!("range {min}..={max} at step {step} capped to {MAX_SAMPLES} samples");
            MAX_SAMPLES
        } else {
            (steps.floor() as usize).saturating_add(1)
        };
        (0..count)
            .map(move |n| min + n as f64 * step)
            .filter(move |x| *x <= max)
    }
}

/// Errors raised while loading a [`PlaneLayout`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read layout: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration is not valid JSON for a layout.
    #[error("failed to parse layout: {0}")]
    Json(#[from] serde_json::Error),
    /// The values parse but describe an unusable plane.
    #[error("invalid layout: {0}")]
    Invalid(&'static str),
}

/// Placement of the coordinate plane on the device surface.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "LayoutProp")]
pub struct PlaneLayout {
    /// Device position of the math origin.
    pub origin: ScreenPoint,
    /// Length of each half axis, in pixels.
    pub axis_half_length: f32,
    /// Padding drawn around the axis box.
    pub margin: f32,
}

#[derive(Deserialize)]
#[serde(default)]
struct LayoutProp {
    origin_x: f32,
    origin_y: f32,
    axis_half_length: f32,
    margin: f32,
}

impl Default for LayoutProp {
    fn default() -> Self {
        let layout = PlaneLayout::default();
        Self {
            origin_x: layout.origin.x,
            origin_y: layout.origin.y,
            axis_half_length: layout.axis_half_length,
            margin: layout.margin,
        }
    }
}

impl From<LayoutProp> for PlaneLayout {
    fn from(prop: LayoutProp) -> Self {
        Self {
            origin: ScreenPoint::new(prop.origin_x, prop.origin_y),
            axis_half_length: prop.axis_half_length,
            margin: prop.margin,
        }
    }
}

impl PlaneLayout {
    /// Default origin X.
    pub const ORIGIN_X: f32 = 600.0;
    /// Default origin Y.
    pub const ORIGIN_Y: f32 = 300.0;
    /// Default half axis length.
    pub const AXIS_HALF_LENGTH: f32 = 250.0;
    /// Default margin around the axes.
    pub const MARGIN: f32 = 25.0;
    /// Largest accepted half axis length, in pixels.
    pub const MAX_AXIS_HALF_LENGTH: f32 = 10_000.0;

    /// Create a layout with the default margin.
    pub fn new(origin: ScreenPoint, axis_half_length: f32) -> Self {
        Self {
            origin,
            axis_half_length,
            margin: Self::MARGIN,
        }
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Load a layout from JSON.
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let layout: PlaneLayout = serde_json::from_reader(reader)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Check that the layout describes a usable plane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.origin.is_finite() {
            return Err(ConfigError::Invalid("origin must be finite"));
        }
        if !self.axis_half_length.is_finite() || self.axis_half_length <= 0.0 {
            return Err(ConfigError::Invalid("axis half length must be positive"));
        }
        if self.axis_half_length > Self::MAX_AXIS_HALF_LENGTH {
            return Err(ConfigError::Invalid("axis half length exceeds 10000 pixels"));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(ConfigError::Invalid("margin must be non-negative"));
        }
        Ok(())
    }

    /// Axis bounding box; every plotted point lies inside it.
    pub fn bounds(&self) -> ScreenRect {
        let half = self.axis_half_length;
        ScreenRect::new(
            ScreenPoint::new(self.origin.x - half, self.origin.y - half),
            ScreenPoint::new(self.origin.x + half, self.origin.y + half),
        )
    }

    /// Axis box grown by the margin; the plane background.
    pub fn plane_rect(&self) -> ScreenRect {
        let half = self.axis_half_length + self.margin;
        ScreenRect::from_origin_size(
            self.origin.x - half,
            self.origin.y - half,
            2.0 * half,
            2.0 * half,
        )
    }

    /// Check whether device coordinates are finite and inside the axis box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let half = self.axis_half_length as f64;
        let ox = self.origin.x as f64;
        let oy = self.origin.y as f64;
        x.is_finite()
            && y.is_finite()
            && x >= ox - half
            && x <= ox + half
            && y >= oy - half
            && y <= oy + half
    }
}

impl Default for PlaneLayout {
    fn default() -> Self {
        Self::new(
            ScreenPoint::new(Self::ORIGIN_X, Self::ORIGIN_Y),
            Self::AXIS_HALF_LENGTH,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_ascending_and_bounded() {
        let range = Range::new(-1.0, 1.0);
        let samples: Vec<f64> = range.samples(0.5).collect();
        assert_eq!(samples, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn samples_start_at_min_for_offset_ranges() {
        let range = Range::new(0.02, 1.2);
        let samples: Vec<f64> = range.samples(0.5).collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], 0.02);
        assert!(samples.iter().all(|x| range.contains(*x)));
    }

    #[test]
    fn huge_ranges_are_capped() {
        let range = Range::symmetric(1e30);
        assert_eq!(range.samples(0.5).count(), MAX_SAMPLES);
        assert_eq!(range.samples(0.5).next(), Some(-1e30));
    }

    #[test]
    fn zero_step_yields_nothing() {
        assert_eq!(Range::new(0.0, 1.0).samples(0.0).count(), 0);
    }

    #[test]
    fn layout_bounds_and_plane() {
        let layout = PlaneLayout::default();
        let bounds = layout.bounds();
        assert_eq!(bounds.min, ScreenPoint::new(350.0, 50.0));
        assert_eq!(bounds.max, ScreenPoint::new(850.0, 550.0));
        let plane = layout.plane_rect();
        assert_eq!(plane.width(), 550.0);
        assert_eq!(plane.min, ScreenPoint::new(325.0, 25.0));
    }

    #[test]
    fn contains_rejects_nan() {
        let layout = PlaneLayout::default();
        assert!(layout.contains(600.0, 300.0));
        assert!(!layout.contains(f64::NAN, 300.0));
        assert!(!layout.contains(600.0, f64::INFINITY));
        assert!(!layout.contains(851.0, 300.0));
    }

    #[test]
    fn layout_from_partial_json() {
        let json = r#"{ "origin_x": 400, "axis_half_length": 200 }"#;
        let layout = PlaneLayout::from_reader(json.as_bytes()).expect("valid layout");
        assert_eq!(layout.origin, ScreenPoint::new(400.0, PlaneLayout::ORIGIN_Y));
        assert_eq!(layout.axis_half_length, 200.0);
        assert_eq!(layout.margin, PlaneLayout::MARGIN);
    }

    #[test]
    fn oversized_layout_is_rejected() {
        let json = r#"{ "axis_half_length": 1e30 }"#;
        assert!(matches!(
            PlaneLayout::from_reader(json.as_bytes()),
            Err(ConfigError::Invalid(_))
        ));
        let largest =
            PlaneLayout::new(ScreenPoint::new(0.0, 0.0), PlaneLayout::MAX_AXIS_HALF_LENGTH);
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn margin_only_grows_the_plane() {
        let layout = PlaneLayout::default().with_margin(0.0);
        assert!(layout.validate().is_ok());
        assert_eq!(layout.plane_rect(), layout.bounds());
        assert!(matches!(
            PlaneLayout::default().with_margin(-1.0).validate(),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn layout_rejects_bad_values() {
        let json = r#"{ "axis_half_length": -5 }"#;
        assert!(matches!(
            PlaneLayout::from_reader(json.as_bytes()),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PlaneLayout::from_reader("not json".as_bytes()),
            Err(ConfigError::Json(_))
        ));
    }
}
