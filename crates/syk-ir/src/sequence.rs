//! Recorded gate sequences.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{IrError, IrResult};
use crate::gate::Gate;
use crate::qubit::{MAX_QUBITS, QubitId, QubitMask};
use crate::register::QubitRegister;

/// An ordered list of gates over a fixed-width register.
///
/// `GateSequence` is itself a [`QubitRegister`]: synthesising into it
/// records the calls instead of executing them. Every call is validated
/// against the width before it is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateSequence {
    num_qubits: u32,
    gates: Vec<Gate>,
}

impl GateSequence {
    /// Create an empty sequence over `num_qubits` qubits.
    pub fn new(num_qubits: u32) -> IrResult<Self> {
        if num_qubits > MAX_QUBITS {
            return Err(IrError::WidthExceeded {
                requested: num_qubits,
            });
        }
        Ok(Self {
            num_qubits,
            gates: vec![],
        })
    }

    /// The recorded gates, in issue order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of recorded gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Number of gates of each kind, keyed by gate name.
    pub fn gate_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for gate in &self.gates {
            *counts.entry(gate.name()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of controlled-X gates.
    pub fn cx_count(&self) -> usize {
        self.gates
            .iter()
            .filter(|g| matches!(g, Gate::Cx { .. }))
            .count()
    }

    /// The sequence that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            num_qubits: self.num_qubits,
            gates: self.gates.iter().rev().map(Gate::inverse).collect(),
        }
    }

    /// Issue every recorded gate against `register`, in order.
    ///
    /// The first backend error stops the replay and is returned as-is.
    pub fn replay<R: QubitRegister + ?Sized>(&self, register: &mut R) -> Result<(), R::Error> {
        for gate in &self.gates {
            register.apply(gate)?;
        }
        Ok(())
    }

    fn check_mask(&self, mask: QubitMask) -> IrResult<()> {
        if mask.width() > self.num_qubits {
            return Err(IrError::MaskOutOfRange {
                mask: mask.bits(),
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_qubit(&self, qubit: QubitId) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }
}

impl QubitRegister for GateSequence {
    type Error = IrError;

    fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    fn h(&mut self, mask: QubitMask) -> IrResult<()> {
        self.check_mask(mask)?;
        self.gates.push(Gate::H(mask));
        Ok(())
    }

    fn s(&mut self, mask: QubitMask) -> IrResult<()> {
        self.check_mask(mask)?;
        self.gates.push(Gate::S(mask));
        Ok(())
    }

    fn sdg(&mut self, mask: QubitMask) -> IrResult<()> {
        self.check_mask(mask)?;
        self.gates.push(Gate::Sdg(mask));
        Ok(())
    }

    fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<()> {
        self.check_qubit(control)?;
        self.check_qubit(target)?;
        if control == target {
            return Err(IrError::DuplicateQubit { qubit: control });
        }
        self.gates.push(Gate::Cx { control, target });
        Ok(())
    }

    fn rz(&mut self, angle: f64, qubit: QubitId) -> IrResult<()> {
        self.check_qubit(qubit)?;
        if !angle.is_finite() {
            return Err(IrError::InvalidAngle(format!("rz({angle}) on {qubit}")));
        }
        self.gates.push(Gate::Rz { qubit, angle });
        Ok(())
    }
}

impl IntoIterator for GateSequence {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.into_iter()
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, thiserror::Error)]
    #[error("backend rejected gate #{0}")]
    struct Rejected(usize);

    /// Accepts `limit` gates, then fails.
    struct FlakyRegister {
        accepted: usize,
        limit: usize,
    }

    impl FlakyRegister {
        fn tick(&mut self) -> Result<(), Rejected> {
            if self.accepted == self.limit {
                return Err(Rejected(self.accepted));
            }
            self.accepted += 1;
            Ok(())
        }
    }

    impl QubitRegister for FlakyRegister {
        type Error = Rejected;

        fn num_qubits(&self) -> u32 {
            4
        }
        fn h(&mut self, _: QubitMask) -> Result<(), Rejected> {
            self.tick()
        }
        fn s(&mut self, _: QubitMask) -> Result<(), Rejected> {
            self.tick()
        }
        fn sdg(&mut self, _: QubitMask) -> Result<(), Rejected> {
            self.tick()
        }
        fn cx(&mut self, _: QubitId, _: QubitId) -> Result<(), Rejected> {
            self.tick()
        }
        fn rz(&mut self, _: f64, _: QubitId) -> Result<(), Rejected> {
            self.tick()
        }
    }

    fn sample() -> GateSequence {
        let mut seq = GateSequence::new(3).unwrap();
        seq.sdg(QubitMask::from_bits(0b010)).unwrap();
        seq.h(QubitMask::from_bits(0b011)).unwrap();
        seq.cx(QubitId(0), QubitId(2)).unwrap();
        seq.rz(0.5, QubitId(2)).unwrap();
        seq
    }

    #[test]
    fn test_records_in_order() {
        let seq = sample();
        let names: Vec<_> = seq.gates().iter().map(Gate::name).collect();
        assert_eq!(names, vec!["sdg", "h", "cx", "rz"]);
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.cx_count(), 1);
        assert_eq!(seq.gate_counts()["rz"], 1);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut seq = GateSequence::new(2).unwrap();
        assert!(matches!(
            seq.h(QubitMask::from_bits(0b100)),
            Err(IrError::MaskOutOfRange { .. })
        ));
        assert!(matches!(
            seq.cx(QubitId(0), QubitId(2)),
            Err(IrError::QubitOutOfRange { .. })
        ));
        assert!(matches!(
            seq.cx(QubitId(1), QubitId(1)),
            Err(IrError::DuplicateQubit { .. })
        ));
        assert!(seq.rz(f64::NAN, QubitId(0)).is_err());
        assert!(seq.is_empty());
    }

    #[test]
    fn test_width_limit() {
        assert!(GateSequence::new(64).is_ok());
        assert!(matches!(
            GateSequence::new(65),
            Err(IrError::WidthExceeded { requested: 65 })
        ));
    }

    #[test]
    fn test_inverse_reverses_and_inverts() {
        let inv = sample().inverse();
        assert_eq!(
            inv.gates(),
            &[
                Gate::Rz {
                    qubit: QubitId(2),
                    angle: -0.5
                },
                Gate::Cx {
                    control: QubitId(0),
                    target: QubitId(2)
                },
                Gate::H(QubitMask::from_bits(0b011)),
                Gate::S(QubitMask::from_bits(0b010)),
            ]
        );
    }

    #[test]
    fn test_replay_into_sequence() {
        let seq = sample();
        let mut copy = GateSequence::new(3).unwrap();
        seq.replay(&mut copy).unwrap();
        assert_eq!(copy, seq);
    }

    #[test]
    fn test_replay_propagates_backend_error() {
        let seq = sample();
        let mut backend = FlakyRegister {
            accepted: 0,
            limit: 2,
        };
        let err = seq.replay(&mut backend).unwrap_err();
        assert_eq!(err.0, 2);
        assert_eq!(backend.accepted, 2);
    }

    proptest! {
        #[test]
        fn prop_double_inverse_is_identity(angles in prop::collection::vec(-10.0f64..10.0, 0..8)) {
            let mut seq = GateSequence::new(2).unwrap();
            for (i, a) in angles.iter().enumerate() {
                seq.rz(*a, QubitId((i % 2) as u32)).unwrap();
                seq.s(QubitMask::from_bits(0b01)).unwrap();
            }
            prop_assert_eq!(seq.inverse().inverse(), seq);
        }
    }
}
