//! Pauli product rotation (PPR) synthesis.
//!
//! Implements
//!
//!   exp(-i θ P)
//!
//! for a Pauli operator P given as an (x, z) mask pair, using the circuit
//! identity
//!
//!   exp(-i θ Z⊗Z⊗...⊗Z) = CNOT_ladder · Rz(2θ) · CNOT_ladder†
//!
//! with basis rotations applied before/after to turn X and Y factors into Z:
//!   X → H
//!   Y → Sdg, then H
//!   Z → identity
//!
//! The target is the highest qubit in the support; every other support
//! qubit is a control, laddered from least to most significant and then
//! unladdered in reverse.
//!
//! Register calls per rotation: 2·(k−1) CX + 1 Rz, plus 2 H calls when
//! `x ≠ 0` and 2 S-type calls when `x & z ≠ 0`, where k = weight of P.

use tracing::trace;

use syk_ir::{Angle, GateSequence, IrError, QubitId, QubitRegister};

use crate::error::{SimError, SimResult};
use crate::pauli::PauliMask;

/// Issue the gates for `exp(-i · angle · P)` against `register`.
///
/// The rotation is pinned to radians: `Rz(2θ)` with θ = `angle.to_radians()`.
///
/// If `mask` is the identity no gate is issued; callers that consider an
/// identity term an error must check before calling. Width and angle are
/// validated before the first gate. A register failure after that stops
/// synthesis mid-sequence and is returned as [`SimError::Register`]; the
/// register keeps whatever the completed calls did.
pub fn append_ppr<R: QubitRegister + ?Sized>(
    register: &mut R,
    angle: Angle,
    mask: PauliMask,
) -> SimResult<()> {
    if mask.is_identity() {
        return Ok(());
    }

    let n_qubits = register.num_qubits();
    if mask.width() > n_qubits {
        return Err(SimError::QubitOutOfRange {
            required: mask.width(),
            n_qubits,
        });
    }
    let theta = angle.to_radians()?;
    // a finite θ can still double past f64::MAX
    let phi = 2.0 * theta;
    if !phi.is_finite() {
        return Err(IrError::InvalidAngle(format!("rz({phi}) from {angle}")).into());
    }

    let y_mask = mask.y_mask();
    let (target, controls) = control_ladder(mask);
    trace!(pauli = %mask, theta, target, "synthesising PPR");

    // --- Step 1: basis rotations (diagonalise each factor into Z) ---
    if !y_mask.is_empty() {
        register.sdg(y_mask).map_err(SimError::register)?;
    }
    if !mask.x.is_empty() {
        register.h(mask.x).map_err(SimError::register)?;
    }

    // --- Step 2: CNOT ladder collapsing parity onto the target ---
    let target = QubitId(target);
    for &control in &controls {
        register
            .cx(QubitId(control), target)
            .map_err(SimError::register)?;
    }

    // --- Step 3: Rz(2θ) = exp(-iθZ) on the target ---
    register
        .rz(phi, target)
        .map_err(SimError::register)?;

    // --- Step 4: undo CNOT ladder ---
    for &control in controls.iter().rev() {
        register
            .cx(QubitId(control), target)
            .map_err(SimError::register)?;
    }

    // --- Step 5: undo basis rotations ---
    if !mask.x.is_empty() {
        register.h(mask.x).map_err(SimError::register)?;
    }
    if !y_mask.is_empty() {
        register.s(y_mask).map_err(SimError::register)?;
    }

    Ok(())
}

/// Split the support of a non-identity `mask` into the rotation target (its
/// highest qubit) and the controls, in ladder order.
///
/// For the identity, returns `(0, [])`.
pub fn control_ladder(mask: PauliMask) -> (u32, Vec<u32>) {
    let support = mask.support();
    match support.highest() {
        Some(target) => (target, support.without(target).iter().collect()),
        None => (0, vec![]),
    }
}

/// Synthesise `exp(-i · angle · P)` into a fresh `width`-qubit [`GateSequence`].
pub fn ppr_sequence(angle: Angle, mask: PauliMask, width: u32) -> SimResult<GateSequence> {
    let mut sequence = GateSequence::new(width)?;
    append_ppr(&mut sequence, angle, mask)?;
    Ok(sequence)
}

/// Number of register calls [`append_ppr`] issues for `mask`.
pub fn ppr_gate_count(mask: PauliMask) -> usize {
    if mask.is_identity() {
        return 0;
    }
    let ladder = 2 * (mask.weight() as usize - 1);
    let basis = if mask.x.is_empty() { 0 } else { 2 };
    let phase = if mask.y_mask().is_empty() { 0 } else { 2 };
    ladder + 1 + basis + phase
}
