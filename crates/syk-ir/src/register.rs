//! The capability set a qubit register must provide.

use crate::gate::Gate;
use crate::qubit::{QubitId, QubitMask};

/// A mutable qubit register that executes gates in the order they are issued.
///
/// Implementations are backends: a simulator, a hardware queue, or a
/// recorder such as [`GateSequence`](crate::GateSequence). Each call must be
/// observed by the register before the next one is issued; callers never
/// batch or reorder calls.
///
/// Errors are the backend's own. Synthesis code propagates them without
/// retrying, and leaves the register in whatever state the failed call
/// produced.
pub trait QubitRegister {
    /// Error reported by the backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Register width.
    fn num_qubits(&self) -> u32;

    /// Hadamard on every qubit of `mask`.
    fn h(&mut self, mask: QubitMask) -> Result<(), Self::Error>;

    /// S on every qubit of `mask`.
    fn s(&mut self, mask: QubitMask) -> Result<(), Self::Error>;

    /// S-dagger on every qubit of `mask`.
    fn sdg(&mut self, mask: QubitMask) -> Result<(), Self::Error>;

    /// Controlled-X.
    fn cx(&mut self, control: QubitId, target: QubitId) -> Result<(), Self::Error>;

    /// `Rz(angle) = exp(-i·angle·Z/2)`, with `angle` in radians.
    fn rz(&mut self, angle: f64, qubit: QubitId) -> Result<(), Self::Error>;

    /// Dispatch a [`Gate`] to the matching method.
    fn apply(&mut self, gate: &Gate) -> Result<(), Self::Error> {
        match *gate {
            Gate::H(mask) => self.h(mask),
            Gate::S(mask) => self.s(mask),
            Gate::Sdg(mask) => self.sdg(mask),
            Gate::Cx { control, target } => self.cx(control, target),
            Gate::Rz { qubit, angle } => self.rz(angle, qubit),
        }
    }
}

impl<R: QubitRegister + ?Sized> QubitRegister for &mut R {
    type Error = R::Error;

    fn num_qubits(&self) -> u32 {
        (**self).num_qubits()
    }

    fn h(&mut self, mask: QubitMask) -> Result<(), Self::Error> {
        (**self).h(mask)
    }

    fn s(&mut self, mask: QubitMask) -> Result<(), Self::Error> {
        (**self).s(mask)
    }

    fn sdg(&mut self, mask: QubitMask) -> Result<(), Self::Error> {
        (**self).sdg(mask)
    }

    fn cx(&mut self, control: QubitId, target: QubitId) -> Result<(), Self::Error> {
        (**self).cx(control, target)
    }

    fn rz(&mut self, angle: f64, qubit: QubitId) -> Result<(), Self::Error> {
        (**self).rz(angle, qubit)
    }
}
