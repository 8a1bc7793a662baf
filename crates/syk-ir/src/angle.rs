//! Rotation angles with an explicit unit.
//!
//! An [`Angle`] carries its unit in the variant, so a value near 2π is never
//! guessed to be degrees or radians. Synthesis normalises once, through
//! [`Angle::to_radians`], before any gate is issued.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::{Mul, Neg};

use crate::error::{IrError, IrResult};

/// A rotation quantity in one of three input shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Angle {
    /// A value in radians.
    Radians(f64),
    /// A value in degrees.
    Degrees(f64),
    /// `numerator / denominator · π` radians.
    FractionOfPi {
        /// Numerator of the fraction.
        numerator: i64,
        /// Denominator of the fraction; must be non-zero.
        denominator: i64,
    },
}

impl Angle {
    /// Angle in radians.
    pub fn radians(value: f64) -> Self {
        Angle::Radians(value)
    }

    /// Angle in degrees.
    pub fn degrees(value: f64) -> Self {
        Angle::Degrees(value)
    }

    /// Angle `numerator/denominator · π`.
    pub fn fraction_of_pi(numerator: i64, denominator: i64) -> Self {
        Angle::FractionOfPi {
            numerator,
            denominator,
        }
    }

    /// Normalise to a canonical radian value.
    ///
    /// Fails for a zero denominator or a non-finite value.
    pub fn to_radians(&self) -> IrResult<f64> {
        let value = match *self {
            Angle::Radians(v) => v,
            Angle::Degrees(v) => v.to_radians(),
            Angle::FractionOfPi {
                numerator,
                denominator,
            } => {
                if denominator == 0 {
                    return Err(IrError::InvalidAngle(format!(
                        "{numerator}/0 · π has a zero denominator"
                    )));
                }
                PI * numerator as f64 / denominator as f64
            }
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(IrError::InvalidAngle(format!("{self} is not finite")))
        }
    }

    /// Normalise to degrees.
    pub fn to_degrees(&self) -> IrResult<f64> {
        self.to_radians().map(f64::to_degrees)
    }
}

impl Default for Angle {
    fn default() -> Self {
        Angle::Radians(0.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Angle::Radians(v) => write!(f, "{v} rad"),
            Angle::Degrees(v) => write!(f, "{v}°"),
            Angle::FractionOfPi {
                numerator,
                denominator,
            } => write!(f, "{numerator}π/{denominator}"),
        }
    }
}

/// Scale an angle; the result is expressed in the same unit where possible.
impl Mul<f64> for Angle {
    type Output = Angle;

    fn mul(self, rhs: f64) -> Angle {
        match self {
            Angle::Radians(v) => Angle::Radians(v * rhs),
            Angle::Degrees(v) => Angle::Degrees(v * rhs),
            Angle::FractionOfPi {
                numerator,
                denominator,
            } => Angle::Radians(PI * numerator as f64 / denominator as f64 * rhs),
        }
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        match self {
            Angle::Radians(v) => Angle::Radians(-v),
            Angle::Degrees(v) => Angle::Degrees(-v),
            Angle::FractionOfPi {
                numerator,
                denominator,
            } => match numerator.checked_neg() {
                Some(numerator) => Angle::FractionOfPi {
                    numerator,
                    denominator,
                },
                // i64::MIN has no positive counterpart
                None => Angle::Radians(-(PI * numerator as f64 / denominator as f64)),
            },
        }
    }
}

impl From<f64> for Angle {
    fn from(radians: f64) -> Self {
        Angle::Radians(radians)
    }
}
