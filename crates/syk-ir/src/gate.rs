//! Gate operations issued against a qubit register.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::qubit::{QubitId, QubitMask};

/// A register operation.
///
/// Single-qubit Clifford gates act on every qubit of a mask in one call.
/// Rotation angles are always radians, with `Rz(φ) = exp(-iφZ/2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard on every selected qubit.
    H(QubitMask),
    /// S gate (sqrt(Z)) on every selected qubit.
    S(QubitMask),
    /// S-dagger gate on every selected qubit.
    Sdg(QubitMask),
    /// Controlled-X.
    Cx {
        /// Control qubit.
        control: QubitId,
        /// Target qubit.
        target: QubitId,
    },
    /// Rotation about Z by `angle` radians.
    Rz {
        /// Rotated qubit.
        qubit: QubitId,
        /// Angle in radians.
        angle: f64,
    },
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H(_) => "h",
            Gate::S(_) => "s",
            Gate::Sdg(_) => "sdg",
            Gate::Cx { .. } => "cx",
            Gate::Rz { .. } => "rz",
        }
    }

    /// The gate undoing this one.
    pub fn inverse(&self) -> Gate {
        match *self {
            Gate::H(mask) => Gate::H(mask),
            Gate::S(mask) => Gate::Sdg(mask),
            Gate::Sdg(mask) => Gate::S(mask),
            Gate::Cx { control, target } => Gate::Cx { control, target },
            Gate::Rz { qubit, angle } => Gate::Rz {
                qubit,
                angle: -angle,
            },
        }
    }

    /// Qubits this gate touches.
    pub fn qubits(&self) -> QubitMask {
        match *self {
            Gate::H(mask) | Gate::S(mask) | Gate::Sdg(mask) => mask,
            Gate::Cx { control, target } => {
                QubitMask::from_bits(bit(control.0) | bit(target.0))
            }
            Gate::Rz { qubit, .. } => QubitMask::from_bits(bit(qubit.0)),
        }
    }
}

fn bit(q: u32) -> u64 {
    1u64.checked_shl(q).unwrap_or(0)
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::H(mask) | Gate::S(mask) | Gate::Sdg(mask) => {
                write!(f, "{}", self.name())?;
                for q in mask.iter() {
                    write!(f, " q{q}")?;
                }
                Ok(())
            }
            Gate::Cx { control, target } => write!(f, "cx {control}, {target}"),
            Gate::Rz { qubit, angle } => write!(f, "rz({angle}) {qubit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names() {
        assert_eq!(Gate::H(QubitMask::from_bits(1)).name(), "h");
        assert_eq!(Gate::Sdg(QubitMask::from_bits(1)).name(), "sdg");
        let cx = Gate::Cx {
            control: QubitId(0),
            target: QubitId(1),
        };
        assert_eq!(cx.name(), "cx");
    }

    #[test]
    fn test_inverse_pairs() {
        let m = QubitMask::from_bits(0b110);
        assert_eq!(Gate::S(m).inverse(), Gate::Sdg(m));
        assert_eq!(Gate::Sdg(m).inverse(), Gate::S(m));
        assert_eq!(Gate::H(m).inverse(), Gate::H(m));
        let rz = Gate::Rz {
            qubit: QubitId(2),
            angle: 0.25,
        };
        assert_eq!(
            rz.inverse(),
            Gate::Rz {
                qubit: QubitId(2),
                angle: -0.25
            }
        );
    }

    #[test]
    fn test_touched_qubits() {
        let cx = Gate::Cx {
            control: QubitId(0),
            target: QubitId(3),
        };
        assert_eq!(cx.qubits().bits(), 0b1001);
    }

    #[test]
    fn test_display() {
        let h = Gate::H(QubitMask::from_bits(0b11));
        assert_eq!(h.to_string(), "h q0 q1");
        let cx = Gate::Cx {
            control: QubitId(0),
            target: QubitId(1),
        };
        assert_eq!(cx.to_string(), "cx q0, q1");
    }
}
