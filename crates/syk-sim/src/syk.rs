//! The Sachdev–Ye–Kitaev (SYK) model as a Pauli sum.
//!
//! With `n` qubits there are `2n` parity modes γ₀ … γ_{2n−1}. The 4-body
//! Hamiltonian sums `J_{abcd} · γ_a γ_b γ_c γ_d` over strictly increasing
//! quadruples a < b < c < d, in lexicographic order. Each quadruple is
//! split into the pairs (a, b) and (c, d), each pair is mapped through
//! [`pair_to_operator`], and the two operators are multiplied.
//!
//! Restricting to increasing indices visits each unordered quadruple once
//! instead of 4! times, hence the constant 96 = 4·4! in the coefficient:
//!
//!   c = J_{abcd} / 96 · Re(phase₁ · phase₂)
//!
//! Couplings are drawn from N(0, σ²) with σ = sqrt(6 / (2n)³) · J · 24.

use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use syk_ir::MAX_QUBITS;

use crate::error::{SimError, SimResult};
use crate::hamiltonian::{PauliSum, PauliTerm};
use crate::pauli::pair_to_operator;

/// Overcounting correction for ordered quadruples.
const QUADRUPLE_NORMALISATION: f64 = 96.0;

/// Builder for an `n`-qubit SYK Hamiltonian.
///
/// ```rust
/// use syk_sim::syk::SykBuilder;
///
/// let h = SykBuilder::new(3).coupling(1.0).build_seeded(7).unwrap();
/// assert_eq!(h.n_terms(), 15); // C(6, 4)
/// ```
#[derive(Debug, Clone)]
pub struct SykBuilder {
    n_qubits: u32,
    coupling: f64,
    coefficients: Option<Vec<f64>>,
}

impl SykBuilder {
    /// Start a builder for `n_qubits` qubits (`2·n_qubits` parity modes).
    pub fn new(n_qubits: u32) -> Self {
        Self {
            n_qubits,
            coupling: 1.0,
            coefficients: None,
        }
    }

    /// Coupling constant J (default 1.0).
    #[must_use]
    pub fn coupling(mut self, j: f64) -> Self {
        self.coupling = j;
        self
    }

    /// Use these couplings instead of drawing them, one per quadruple in
    /// enumeration order.
    #[must_use]
    pub fn coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Number of qubits.
    pub fn n_qubits(&self) -> u32 {
        self.n_qubits
    }

    /// Number of terms the builder emits: C(2n, 4).
    pub fn n_terms(&self) -> usize {
        n_choose_4(2 * self.n_qubits as usize)
    }

    /// Standard deviation of the drawn couplings.
    pub fn coupling_scale(&self) -> f64 {
        let modes = f64::from(2 * self.n_qubits);
        (6.0 / modes.powi(3)).sqrt() * self.coupling * 24.0
    }

    /// Build with supplied coefficients.
    ///
    /// Fails with [`SimError::MissingCoefficients`] if none were given; use
    /// [`build_with_rng`](Self::build_with_rng) to draw them.
    pub fn build(&self) -> SimResult<PauliSum> {
        let coefficients = self
            .coefficients
            .as_deref()
            .ok_or(SimError::MissingCoefficients)?;
        self.validate()?;
        self.assemble(coefficients.iter().copied())
    }

    /// Build, drawing couplings from `rng` unless coefficients were supplied.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<PauliSum> {
        self.validate()?;
        if let Some(coefficients) = &self.coefficients {
            return self.assemble(coefficients.iter().copied());
        }
        let normal = Normal::new(0.0, self.coupling_scale())
            .map_err(|e| SimError::InvalidCoupling(e.to_string()))?;
        let draws: Vec<f64> = (0..self.n_terms()).map(|_| normal.sample(rng)).collect();
        self.assemble(draws)
    }

    /// Build with couplings drawn from a `StdRng` seeded with `seed`.
    pub fn build_seeded(&self, seed: u64) -> SimResult<PauliSum> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(&mut rng)
    }

    fn validate(&self) -> SimResult<()> {
        if self.n_qubits == 0 || self.n_qubits > MAX_QUBITS {
            return Err(SimError::InvalidConfig(format!(
                "SYK model needs 1..={MAX_QUBITS} qubits, got {}",
                self.n_qubits
            )));
        }
        if !self.coupling.is_finite() {
            return Err(SimError::InvalidCoupling(format!(
                "J = {} is not finite",
                self.coupling
            )));
        }
        // rand_distr's Normal accepts a negative deviation, so reject it here
        if self.coupling < 0.0 {
            return Err(SimError::InvalidCoupling(format!(
                "J = {} is negative",
                self.coupling
            )));
        }
        if let Some(coefficients) = &self.coefficients {
            if coefficients.len() != self.n_terms() {
                return Err(SimError::CoefficientCount {
                    expected: self.n_terms(),
                    got: coefficients.len(),
                });
            }
            if let Some(bad) = coefficients.iter().find(|c| !c.is_finite()) {
                return Err(SimError::InvalidCoupling(format!(
                    "coefficient {bad} is not finite"
                )));
            }
        }
        Ok(())
    }

    fn assemble(&self, couplings: impl IntoIterator<Item = f64>) -> SimResult<PauliSum> {
        let mut hamiltonian = PauliSum::new();
        for (quad, coupling) in majorana_quadruples(self.n_qubits).zip(couplings) {
            let (phase1, op1) = pair_to_operator(quad[0], quad[1])?;
            let (phase2, op2) = pair_to_operator(quad[2], quad[3])?;
            let coeff = coupling / QUADRUPLE_NORMALISATION * (phase1 * phase2).re();
            hamiltonian.push(PauliTerm::new(coeff, op1 * op2));
        }

        debug!(
            n_qubits = self.n_qubits,
            n_terms = hamiltonian.n_terms(),
            scale = self.coupling_scale(),
            "built SYK Hamiltonian"
        );
        Ok(hamiltonian)
    }
}

/// Strictly increasing parity-mode quadruples over `2·n_qubits` modes, in
/// lexicographic order.
pub fn majorana_quadruples(n_qubits: u32) -> impl Iterator<Item = [u32; 4]> {
    (0..2 * n_qubits)
        .combinations(4)
        .map(|c| [c[0], c[1], c[2], c[3]])
}

fn n_choose_4(n: usize) -> usize {
    if n < 4 {
        return 0;
    }
    n * (n - 1) * (n - 2) * (n - 3) / 24
}
