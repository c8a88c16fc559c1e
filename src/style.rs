//! Colours used to draw the plane, curves and the integral overlay.

use crate::function::Family;
use crate::render::Color;

/// Visual theme for plots.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Fill behind the axes.
    pub background: Color,
    /// Axis stroke.
    pub axis: Color,
    /// Stroke of the integral rectangles.
    pub integral: Color,
    /// Curve colour per family, in `Power, Trig, Exp, Log` order.
    pub curves: [Color; 4],
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Curve colour for a family.
    pub fn curve(&self, family: Family) -> Color {
        let index = match family {
            Family::Power => 0,
            Family::Trig => 1,
            Family::Exp => 2,
            Family::Log => 3,
        };
        self.curves[index]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::LIGHT_GRAY,
            axis: Color::BLACK,
            integral: Color::ORANGE,
            curves: [Color::BLUE, Color::RED, Color::GREEN, Color::MAGENTA],
        }
    }
}
