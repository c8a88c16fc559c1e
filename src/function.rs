//! Function model: the immutable description of one plotted curve.
//!
//! A [`Function`] pairs a [`FunctionKind`] (base family plus its subtype or
//! extra parameter) with the [`Coefficients`] of the transformation
//! `a·f((1/b)(x - h)) + k`. Models are built once per finalized selection
//! and replaced, never edited.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use thiserror::Error;

/// Exponents offered for power functions.
pub const EXPONENT_RANGE: RangeInclusive<i32> = 1..=5;
/// Bases offered for exponential functions.
pub const BASE_RANGE: RangeInclusive<i32> = 2..=5;
/// Range of each transformation coefficient slider.
pub const COEFFICIENT_RANGE: RangeInclusive<i32> = -3..=3;
/// Catalog entry shown before the user picks a function.
pub const PLACEHOLDER: &str = "Select Function";

/// Base function family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Family {
    /// `x^n`.
    Power,
    /// `sin x`, `cos x`, `tan x`.
    Trig,
    /// `n^x`.
    Exp,
    /// `log x`, `lg x`, `ln x`.
    Log,
}

/// Trigonometric subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum TrigKind {
    #[strum(serialize = "sin x")]
    Sin,
    #[strum(serialize = "cos x")]
    Cos,
    #[strum(serialize = "tan x")]
    Tan,
}

impl TrigKind {
    /// Short subtype name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

/// Logarithm subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum LogKind {
    /// Common logarithm.
    #[strum(serialize = "log x")]
    Log10,
    /// Binary logarithm.
    #[strum(serialize = "lg x")]
    Log2,
    /// Natural logarithm.
    #[strum(serialize = "ln x")]
    Ln,
}

impl LogKind {
    /// Short subtype name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Ln => "ln",
        }
    }
}

/// Base function with its family-specific subtype or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `x^exponent`.
    Power {
        /// Exponent, 1 through 5.
        exponent: i32,
    },
    /// Trigonometric function.
    Trig(TrigKind),
    /// `base^x`.
    Exp {
        /// Base, 2 through 5.
        base: i32,
    },
    /// Logarithmic function.
    Log(LogKind),
}

impl FunctionKind {
    /// Family this kind belongs to.
    pub fn family(&self) -> Family {
        match self {
            Self::Power { .. } => Family::Power,
            Self::Trig(_) => Family::Trig,
            Self::Exp { .. } => Family::Exp,
            Self::Log(_) => Family::Log,
        }
    }

    /// Subtype name for trig and log kinds.
    pub fn subtype(&self) -> Option<&'static str> {
        match self {
            Self::Trig(kind) => Some(kind.name()),
            Self::Log(kind) => Some(kind.name()),
            Self::Power { .. } | Self::Exp { .. } => None,
        }
    }

    /// Exponent for power kinds, base for exponential kinds.
    pub fn extra_param(&self) -> Option<i32> {
        match self {
            Self::Power { exponent } => Some(*exponent),
            Self::Exp { base } => Some(*base),
            Self::Trig(_) | Self::Log(_) => None,
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power { exponent: 1 } => write!(f, "x"),
            Self::Power { exponent } => write!(f, "x^{exponent}"),
            Self::Trig(kind) => write!(f, "{kind}"),
            Self::Exp { base } => write!(f, "{base}^x"),
            Self::Log(kind) => write!(f, "{kind}"),
        }
    }
}

/// Transformation coefficients.
///
/// `a` stretches vertically, `b` stretches horizontally, `h` and `k` shift
/// horizontally and vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coefficients {
    /// Vertical stretch.
    pub a: i32,
    /// Horizontal stretch.
    pub b: i32,
    /// Horizontal shift.
    pub h: i32,
    /// Vertical shift.
    pub k: i32,
}

impl Coefficients {
    /// Create a coefficient set.
    pub fn new(a: i32, b: i32, h: i32, k: i32) -> Self {
        Self { a, b, h, k }
    }

    /// Coefficients that leave the base function unchanged.
    pub fn identity() -> Self {
        Self::new(1, 1, 0, 0)
    }

    fn check_range(&self) -> Result<(), SelectionError> {
        for (name, value) in [('a', self.a), ('b', self.b), ('h', self.h), ('k', self.k)] {
            if !COEFFICIENT_RANGE.contains(&value) {
                return Err(SelectionError::CoefficientOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::identity()
    }
}

/// Errors raised while turning a UI selection into a [`Function`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The placeholder entry (or nothing) was selected.
    #[error("Invalid: select function from drop-down menu")]
    NothingSelected,
    /// The entry is not part of the family's catalog.
    #[error("`{label}` is not a {family} function")]
    UnknownEntry {
        /// Family the entry was looked up in.
        family: Family,
        /// Offending entry.
        label: String,
    },
    /// Exponent or base outside the offered range.
    #[error("{family} parameter {value} is out of range")]
    ExtraParamOutOfRange {
        /// Family the parameter belongs to.
        family: Family,
        /// Offending value.
        value: i32,
    },
    /// A coefficient lies outside the slider range.
    #[error("coefficient {name} = {value} is outside -3..=3")]
    CoefficientOutOfRange {
        /// Coefficient letter.
        name: char,
        /// Offending value.
        value: i32,
    },
}

/// Immutable description of one plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Function {
    kind: FunctionKind,
    coefficients: Coefficients,
}

impl Function {
    /// Create a function model.
    ///
    /// Exponent and base ranges are not checked here; use
    /// [`Function::from_selection`] for untrusted input.
    pub fn new(kind: FunctionKind, coefficients: Coefficients) -> Self {
        Self { kind, coefficients }
    }

    /// Build a model from a family, a catalog entry and slider values.
    pub fn from_selection(
        family: Family,
        label: &str,
        coefficients: Coefficients,
    ) -> Result<Self, SelectionError> {
        let label = label.trim();
        if label.is_empty() || label == PLACEHOLDER {
            return Err(SelectionError::NothingSelected);
        }
        let unknown = || SelectionError::UnknownEntry {
            family,
            label: label.to_string(),
        };
        let kind = match family {
            Family::Power => {
                let exponent = if label == "x" {
                    1
                } else {
                    label
                        .strip_prefix("x^")
                        .and_then(|exp| exp.parse::<i32>().ok())
                        .ok_or_else(unknown)?
                };
                if !EXPONENT_RANGE.contains(&exponent) {
                    return Err(SelectionError::ExtraParamOutOfRange {
                        family,
                        value: exponent,
                    });
                }
                FunctionKind::Power { exponent }
            }
            Family::Trig => FunctionKind::Trig(TrigKind::from_str(label).map_err(|_| unknown())?),
            Family::Exp => {
                let base = label
                    .strip_suffix("^x")
                    .and_then(|base| base.parse::<i32>().ok())
                    .ok_or_else(unknown)?;
                if !BASE_RANGE.contains(&base) {
                    return Err(SelectionError::ExtraParamOutOfRange {
                        family,
                        value: base,
                    });
                }
                FunctionKind::Exp { base }
            }
            Family::Log => FunctionKind::Log(LogKind::from_str(label).map_err(|_| unknown())?),
        };
        coefficients.check_range()?;
        Ok(Self::new(kind, coefficients))
    }

    /// Base family.
    pub fn family(&self) -> Family {
        self.kind.family()
    }

    /// Base function kind.
    pub fn kind(&self) -> FunctionKind {
        self.kind
    }

    /// Subtype name for trig and log functions.
    pub fn subtype(&self) -> Option<&'static str> {
        self.kind.subtype()
    }

    /// Exponent (power) or base (exponential).
    pub fn extra_param(&self) -> Option<i32> {
        self.kind.extra_param()
    }

    /// Transformation coefficients.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Catalog entries offered for a family, in menu order.
pub fn catalog(family: Family) -> Vec<String> {
    match family {
        Family::Power => EXPONENT_RANGE
            .map(|exponent| FunctionKind::Power { exponent }.to_string())
            .collect(),
        Family::Trig => TrigKind::iter().map(|kind| kind.to_string()).collect(),
        Family::Exp => BASE_RANGE
            .map(|base| FunctionKind::Exp { base }.to_string())
            .collect(),
        Family::Log => LogKind::iter().map(|kind| kind.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_entry_parses_back() {
        for family in Family::iter() {
            for label in catalog(family) {
                let function = Function::from_selection(family, &label, Coefficients::default())
                    .expect("catalog entry should be selectable");
                assert_eq!(function.family(), family);
                assert_eq!(function.to_string(), label);
            }
        }
    }

    #[test]
    fn subtype_and_extra_param_follow_family() {
        let power = Function::new(FunctionKind::Power { exponent: 3 }, Coefficients::default());
        assert_eq!(power.extra_param(), Some(3));
        assert_eq!(power.subtype(), None);

        let log = Function::new(FunctionKind::Log(LogKind::Log2), Coefficients::default());
        assert_eq!(log.extra_param(), None);
        assert_eq!(log.subtype(), Some("log2"));
    }

    #[test]
    fn placeholder_is_rejected() {
        let err = Function::from_selection(Family::Trig, PLACEHOLDER, Coefficients::default())
            .unwrap_err();
        assert_eq!(err, SelectionError::NothingSelected);
        assert_eq!(err.to_string(), "Invalid: select function from drop-down menu");
    }

    #[test]
    fn selection_rejects_bad_entries() {
        let coefficients = Coefficients::default();
        assert!(matches!(
            Function::from_selection(Family::Trig, "x^2", coefficients),
            Err(SelectionError::UnknownEntry { .. })
        ));
        assert_eq!(
            Function::from_selection(Family::Power, "x^9", coefficients),
            Err(SelectionError::ExtraParamOutOfRange {
                family: Family::Power,
                value: 9
            })
        );
        assert_eq!(
            Function::from_selection(Family::Exp, "1^x", coefficients),
            Err(SelectionError::ExtraParamOutOfRange {
                family: Family::Exp,
                value: 1
            })
        );
        assert_eq!(
            Function::from_selection(Family::Log, "ln x", Coefficients::new(1, 1, 4, 0)),
            Err(SelectionError::CoefficientOutOfRange { name: 'h', value: 4 })
        );
    }

    #[test]
    fn default_coefficients_are_identity() {
        assert_eq!(Coefficients::default(), Coefficients::new(1, 1, 0, 0));
    }
}
