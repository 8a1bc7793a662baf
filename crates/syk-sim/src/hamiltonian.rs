//! Hamiltonian data structures.
//!
//! A Hamiltonian is an ordered sum of weighted Pauli operators:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a [`PauliMask`] and c_k ∈ ℝ. Term order is part of the
//! meaning: product formulas apply terms in list order, and for
//! non-commuting terms a different order gives a different operator.
//!
//! # Example
//!
//! ```rust
//! use syk_sim::hamiltonian::PauliSum;
//!
//! // H = 0.5·X₀X₁ + 0.3·Z₀Z₁
//! let h = PauliSum::from_labels(&[(0.5, "X0 X1"), (0.3, "Z0 Z1")]).unwrap();
//! assert_eq!(h.n_terms(), 2);
//! assert_eq!(h.num_qubits(), 2);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SimResult;
use crate::pauli::PauliMask;

/// A single weighted Pauli term: `coeff · mask`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PauliTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli operator.
    pub mask: PauliMask,
}

impl PauliTerm {
    /// Create a new term.
    pub fn new(coeff: f64, mask: PauliMask) -> Self {
        Self { coeff, mask }
    }

    /// Create a term from Pauli string text (see [`crate::pauli::parse_pauli_string`]).
    pub fn from_label(coeff: f64, label: &str) -> SimResult<Self> {
        Ok(Self::new(coeff, label.parse()?))
    }

    /// True for a pure identity term (a global phase under evolution).
    pub fn is_identity(&self) -> bool {
        self.mask.is_identity()
    }
}

/// An ordered sum of Pauli terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PauliSum {
    terms: Vec<PauliTerm>,
}

impl PauliSum {
    /// Create an empty sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from a list of terms.
    pub fn from_terms(terms: Vec<PauliTerm>) -> Self {
        Self { terms }
    }

    /// Create from `(coefficient, Pauli string)` pairs.
    pub fn from_labels(labels: &[(f64, &str)]) -> SimResult<Self> {
        labels
            .iter()
            .map(|&(coeff, label)| PauliTerm::from_label(coeff, label))
            .collect()
    }

    /// Append a term.
    pub fn push(&mut self, term: PauliTerm) {
        self.terms.push(term);
    }

    /// All terms, in order.
    pub fn terms(&self) -> &[PauliTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if there are no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of term `index`.
    pub fn coefficient(&self, index: usize) -> Option<f64> {
        self.terms.get(index).map(|t| t.coeff)
    }

    /// Operator of term `index`.
    pub fn mask(&self, index: usize) -> Option<PauliMask> {
        self.terms.get(index).map(|t| t.mask)
    }

    /// Sparse Pauli string of term `index`, for diagnostics.
    pub fn pauli_string(&self, index: usize) -> Option<String> {
        self.terms.get(index).map(|t| t.mask.to_sparse_string())
    }

    /// Smallest register width containing every term.
    ///
    /// Returns 0 if the sum is empty or purely identity.
    pub fn num_qubits(&self) -> u32 {
        self.terms
            .iter()
            .map(|t| t.mask.width())
            .max()
            .unwrap_or(0)
    }

    /// Spectral norm upper bound: Σ |c_k|.
    pub fn lambda(&self) -> f64 {
        self.terms.iter().map(|t| t.coeff.abs()).sum()
    }

    /// Iterate over terms.
    pub fn iter(&self) -> std::slice::Iter<'_, PauliTerm> {
        self.terms.iter()
    }
}

impl FromIterator<PauliTerm> for PauliSum {
    fn from_iter<T: IntoIterator<Item = PauliTerm>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PauliSum {
    type Item = &'a PauliTerm;
    type IntoIter = std::slice::Iter<'a, PauliTerm>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for PauliSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:+.6} * {}", term.coeff, term.mask)?;
        }
        Ok(())
    }
}
