//! Trotter-Suzuki product-formula synthesis.
//!
//! Approximates `exp(-i H t)` by splitting the evolution into `n_steps`
//! slices, each evolved exactly under each term in sequence.
//!
//! # First-order Trotter (Lie-Trotter)
//!
//!   exp(-i H t) ≈ [∏_k exp(-i c_k P_k t/n)]^n
//!
//! Error: O(t² / n).
//!
//! # Second-order Trotter (Suzuki-Trotter)
//!
//!   exp(-i H t) ≈ [S₂(t/n)]^n
//!   S₂(τ) = [∏_k exp(-i c_k P_k τ/2)] · [∏_k exp(-i c_{m-k} P_{m-k} τ/2)]
//!
//! Error: O(t³ / n²).
//!
//! Identity terms only contribute a global phase and are skipped in every
//! pass.

use std::fmt;

use syk_ir::{Angle, GateSequence, QubitRegister};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::hamiltonian::PauliSum;
use crate::synthesis::{append_ppr, ppr_gate_count};

/// Product-formula order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrotterOrder {
    /// Lie-Trotter, one forward pass per step.
    First,
    /// Symmetric Suzuki-Trotter, forward then backward pass per step.
    Second,
}

impl TrotterOrder {
    /// Numeric order.
    pub fn as_u32(self) -> u32 {
        match self {
            TrotterOrder::First => 1,
            TrotterOrder::Second => 2,
        }
    }
}

impl TryFrom<u32> for TrotterOrder {
    type Error = SimError;

    fn try_from(order: u32) -> SimResult<Self> {
        match order {
            1 => Ok(TrotterOrder::First),
            2 => Ok(TrotterOrder::Second),
            other => Err(SimError::InvalidOrder(other)),
        }
    }
}

impl fmt::Display for TrotterOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrotterOrder::First => f.write_str("first-order"),
            TrotterOrder::Second => f.write_str("second-order"),
        }
    }
}

/// Apply `exp(-i c_k P_k dt)` for every non-identity term, in list order.
pub fn apply_terms<R: QubitRegister + ?Sized>(
    register: &mut R,
    hamiltonian: &PauliSum,
    dt: f64,
) -> SimResult<()> {
    for term in hamiltonian.terms().iter().filter(|t| !t.is_identity()) {
        append_ppr(register, Angle::radians(term.coeff * dt), term.mask)?;
    }
    Ok(())
}

/// Apply `exp(-i c_k P_k dt)` for every non-identity term, in reverse list order.
pub fn apply_terms_reversed<R: QubitRegister + ?Sized>(
    register: &mut R,
    hamiltonian: &PauliSum,
    dt: f64,
) -> SimResult<()> {
    for term in hamiltonian.terms().iter().rev().filter(|t| !t.is_identity()) {
        append_ppr(register, Angle::radians(term.coeff * dt), term.mask)?;
    }
    Ok(())
}

/// Trotter product-formula time-evolution synthesiser.
#[derive(Debug, Clone)]
pub struct TrotterEvolution {
    hamiltonian: PauliSum,
    /// Total evolution time t.
    t: f64,
    /// Number of Trotter steps (repetitions).
    n_steps: usize,
    /// Width of a recorded sequence; if None, inferred from the Hamiltonian.
    n_qubits: Option<u32>,
}

impl TrotterEvolution {
    /// Construct a new first- or second-order Trotter synthesiser.
    ///
    /// # Arguments
    /// * `hamiltonian`: the Hamiltonian H = Σ c_k P_k
    /// * `t`: total evolution time
    /// * `n_steps`: number of Trotter slices (higher → more accurate)
    pub fn new(hamiltonian: PauliSum, t: f64, n_steps: usize) -> Self {
        Self {
            hamiltonian,
            t,
            n_steps,
            n_qubits: None,
        }
    }

    /// Override the width used by [`to_gate_sequence`](Self::to_gate_sequence).
    ///
    /// By default the width is inferred from the highest qubit in the
    /// Hamiltonian. Use this to pad extra qubits.
    #[must_use]
    pub fn with_n_qubits(mut self, n: u32) -> Self {
        self.n_qubits = Some(n);
        self
    }

    /// The Hamiltonian being evolved.
    pub fn hamiltonian(&self) -> &PauliSum {
        &self.hamiltonian
    }

    /// Take back the Hamiltonian.
    pub fn into_hamiltonian(self) -> PauliSum {
        self.hamiltonian
    }

    /// Apply a first-order Trotter evolution to `register`.
    ///
    /// Each slice applies every term once with time step `t / n_steps`.
    pub fn first_order<R: QubitRegister + ?Sized>(&self, register: &mut R) -> SimResult<()> {
        first_order_trotter(&self.hamiltonian, register, self.t, self.n_steps)
    }

    /// Apply a second-order Suzuki-Trotter evolution to `register`.
    ///
    /// Each slice is a symmetric product: a forward pass then a reverse
    /// pass, each with time step `t / (2 · n_steps)`.
    pub fn second_order<R: QubitRegister + ?Sized>(&self, register: &mut R) -> SimResult<()> {
        second_order_trotter(&self.hamiltonian, register, self.t, self.n_steps)
    }

    /// Apply the evolution of the given order.
    pub fn evolve<R: QubitRegister + ?Sized>(
        &self,
        register: &mut R,
        order: TrotterOrder,
    ) -> SimResult<()> {
        match order {
            TrotterOrder::First => self.first_order(register),
            TrotterOrder::Second => self.second_order(register),
        }
    }

    /// Record the evolution into a fresh [`GateSequence`].
    pub fn to_gate_sequence(&self, order: TrotterOrder) -> SimResult<GateSequence> {
        let mut sequence = GateSequence::new(self.effective_n_qubits())?;
        self.evolve(&mut sequence, order)?;
        Ok(sequence)
    }

    /// Number of register calls the evolution issues, without issuing them.
    pub fn gate_count(&self, order: TrotterOrder) -> usize {
        let per_pass: usize = self
            .hamiltonian
            .terms()
            .iter()
            .map(|t| ppr_gate_count(t.mask))
            .sum();
        let passes = match order {
            TrotterOrder::First => 1,
            TrotterOrder::Second => 2,
        };
        per_pass * passes * self.n_steps
    }

    fn effective_n_qubits(&self) -> u32 {
        self.n_qubits
            .unwrap_or_else(|| self.hamiltonian.num_qubits())
    }
}

/// First-order evolution of `register` under `hamiltonian` for time `t`.
pub fn first_order_trotter<R: QubitRegister + ?Sized>(
    hamiltonian: &PauliSum,
    register: &mut R,
    t: f64,
    n_steps: usize,
) -> SimResult<()> {
    validate(hamiltonian, t, n_steps, register.num_qubits())?;
    let dt = t / n_steps as f64;
    validate_angles(hamiltonian, dt)?;
    debug!(
        n_terms = hamiltonian.n_terms(),
        n_steps,
        dt,
        "applying first-order Trotter evolution"
    );

    for _ in 0..n_steps {
        apply_terms(register, hamiltonian, dt)?;
    }
    Ok(())
}

/// Second-order evolution of `register` under `hamiltonian` for time `t`.
pub fn second_order_trotter<R: QubitRegister + ?Sized>(
    hamiltonian: &PauliSum,
    register: &mut R,
    t: f64,
    n_steps: usize,
) -> SimResult<()> {
    validate(hamiltonian, t, n_steps, register.num_qubits())?;
    // forward and backward sweeps each take half the slice
    let half_dt = t / (2.0 * n_steps as f64);
    validate_angles(hamiltonian, half_dt)?;
    debug!(
        n_terms = hamiltonian.n_terms(),
        n_steps,
        dt = half_dt,
        "applying second-order Trotter evolution"
    );

    for _ in 0..n_steps {
        apply_terms(register, hamiltonian, half_dt)?;
        apply_terms_reversed(register, hamiltonian, half_dt)?;
    }
    Ok(())
}

/// Evolve `register` under `hamiltonian` for time `t` with an integer order.
///
/// Fails with [`SimError::InvalidOrder`] unless `order` is 1 or 2.
pub fn trotter_evolution<R: QubitRegister + ?Sized>(
    hamiltonian: &PauliSum,
    register: &mut R,
    t: f64,
    n_steps: usize,
    order: u32,
) -> SimResult<()> {
    match TrotterOrder::try_from(order)? {
        TrotterOrder::First => first_order_trotter(hamiltonian, register, t, n_steps),
        TrotterOrder::Second => second_order_trotter(hamiltonian, register, t, n_steps),
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Reject inputs before any gate reaches the register.
fn validate(hamiltonian: &PauliSum, t: f64, n_steps: usize, register_qubits: u32) -> SimResult<()> {
    if hamiltonian.n_terms() == 0 {
        return Err(SimError::EmptyHamiltonian);
    }
    if n_steps == 0 {
        return Err(SimError::InvalidSteps(0));
    }
    if !t.is_finite() {
        return Err(SimError::InvalidTime(t));
    }
    let required = hamiltonian.num_qubits();
    if required > register_qubits {
        return Err(SimError::QubitOutOfRange {
            required,
            n_qubits: register_qubits,
        });
    }
    Ok(())
}

/// Reject any term whose rotation `Rz(2 · c_k · dt)` would not be finite.
fn validate_angles(hamiltonian: &PauliSum, dt: f64) -> SimResult<()> {
    let bad = hamiltonian
        .terms()
        .iter()
        .enumerate()
        .filter(|(_, term)| !term.is_identity())
        .find(|(_, term)| {
            // same product append_ppr doubles into the Rz angle
            let theta = term.coeff * dt;
            !term.coeff.is_finite() || !(2.0 * theta).is_finite()
        });
    match bad {
        Some((index, term)) => Err(SimError::InvalidCoefficient {
            index,
            coeff: term.coeff,
            dt,
        }),
        None => Ok(()),
    }
}
