//! Per-family sampling profiles and shape functions.

use crate::function::{Family, FunctionKind, LogKind, TrigKind};
use crate::view::Range;

/// Offset from the y-axis where logarithmic sampling starts.
pub const LOG_EPSILON: f64 = 0.001;
/// Distance between two domain samples.
pub const DOMAIN_STEP: f64 = 0.5;

/// Where a family's sampling domain lies, before scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainPolicy {
    /// `[-half_length, +half_length]`.
    Symmetric,
    /// `[epsilon, +half_length]`, strictly right of the y-axis.
    PositiveFrom(f64),
}

/// Sampling constants for one family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyProfile {
    /// Visual scale applied to both domain and output.
    pub scale_factor: f64,
    /// Domain sampling step.
    pub step: f64,
    /// Domain placement.
    pub domain: DomainPolicy,
}

impl FamilyProfile {
    /// Raw sampling domain for an axis of the given half length.
    pub fn domain(&self, axis_half_length: f64) -> Range {
        let max = axis_half_length * self.scale_factor;
        match self.domain {
            DomainPolicy::Symmetric => Range::symmetric(max),
            DomainPolicy::PositiveFrom(epsilon) => Range::new(epsilon * self.scale_factor, max),
        }
    }
}

impl Family {
    /// Sampling profile for this family.
    pub fn profile(self) -> FamilyProfile {
        let (scale_factor, domain) = match self {
            Self::Power => (20.0, DomainPolicy::Symmetric),
            Self::Trig => (5.0, DomainPolicy::Symmetric),
            Self::Exp => (10.0, DomainPolicy::Symmetric),
            Self::Log => (20.0, DomainPolicy::PositiveFrom(LOG_EPSILON)),
        };
        FamilyProfile {
            scale_factor,
            step: DOMAIN_STEP,
            domain,
        }
    }
}

impl FunctionKind {
    /// Sampling profile of this kind's family.
    pub fn profile(&self) -> FamilyProfile {
        self.family().profile()
    }

    /// Evaluate the untransformed base function.
    ///
    /// Domain errors come back as non-finite values.
    pub fn eval(&self, t: f64) -> f64 {
        match *self {
            Self::Power { exponent } => t.powi(exponent),
            Self::Trig(TrigKind::Sin) => t.sin(),
            Self::Trig(TrigKind::Cos) => t.cos(),
            Self::Trig(TrigKind::Tan) => t.tan(),
            Self::Exp { base } => f64::from(base).powf(t),
            Self::Log(LogKind::Log10) => t.log10(),
            Self::Log(LogKind::Log2) => t.log2(),
            Self::Log(LogKind::Ln) => t.ln(),
        }
    }
}
