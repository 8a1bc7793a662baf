//! Dense-matrix reference backend shared by the integration tests.
//!
//! Qubit `q` is bit `q` of the basis index. Matrices are row-major.

#![allow(dead_code)]

use std::convert::Infallible;

use num_complex::Complex64;
use syk_ir::{QubitId, QubitMask, QubitRegister};
use syk_sim::{PauliMask, PauliSum, Phase};

/// Tolerance for comparing unitaries built from exact gate products.
pub const TOL: f64 = 1e-9;

/// A square complex matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    dim: usize,
    data: Vec<Complex64>,
}

impl Matrix {
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![Complex64::new(0.0, 0.0); dim * dim],
        }
    }

    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = Complex64::new(1.0, 0.0);
        }
        m
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.data[row * self.dim + col]
    }

    pub fn mul(&self, other: &Matrix) -> Matrix {
        let n = self.dim;
        let mut out = Matrix::zeros(n);
        for r in 0..n {
            for k in 0..n {
                let a = self.data[r * n + k];
                if a == Complex64::new(0.0, 0.0) {
                    continue;
                }
                for c in 0..n {
                    out.data[r * n + c] += a * other.data[k * n + c];
                }
            }
        }
        out
    }

    pub fn add(&self, other: &Matrix) -> Matrix {
        Matrix {
            dim: self.dim,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }

    pub fn scale(&self, s: Complex64) -> Matrix {
        Matrix {
            dim: self.dim,
            data: self.data.iter().map(|a| a * s).collect(),
        }
    }

    /// Frobenius norm.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt()
    }

    /// Frobenius distance.
    pub fn distance(&self, other: &Matrix) -> f64 {
        self.add(&other.scale(Complex64::new(-1.0, 0.0))).norm()
    }

    /// Frobenius distance after removing the best global phase.
    pub fn phase_distance(&self, other: &Matrix) -> f64 {
        let overlap: Complex64 = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| b.conj() * a)
            .sum();
        if overlap.norm() < 1e-300 {
            return self.distance(other);
        }
        self.distance(&other.scale(overlap / overlap.norm()))
    }

    fn scale_rows(&mut self, selector: impl Fn(usize) -> bool, factor: Complex64) {
        let n = self.dim;
        for r in (0..n).filter(|&r| selector(r)) {
            for c in 0..n {
                self.data[r * n + c] *= factor;
            }
        }
    }
}

/// Left-multiplies a unitary by every gate it receives, starting from the
/// identity.
#[derive(Debug, Clone)]
pub struct DenseRegister {
    n_qubits: u32,
    unitary: Matrix,
}

impl DenseRegister {
    pub fn new(n_qubits: u32) -> Self {
        Self {
            n_qubits,
            unitary: Matrix::identity(1 << n_qubits),
        }
    }

    pub fn unitary(&self) -> &Matrix {
        &self.unitary
    }

    fn hadamard(&mut self, qubit: u32) {
        let bit = 1usize << qubit;
        let n = self.unitary.dim;
        let s = std::f64::consts::FRAC_1_SQRT_2;
        for r0 in (0..n).filter(|r| r & bit == 0) {
            let r1 = r0 | bit;
            for c in 0..n {
                let a = self.unitary.data[r0 * n + c];
                let b = self.unitary.data[r1 * n + c];
                self.unitary.data[r0 * n + c] = (a + b) * s;
                self.unitary.data[r1 * n + c] = (a - b) * s;
            }
        }
    }
}

impl QubitRegister for DenseRegister {
    type Error = Infallible;

    fn num_qubits(&self) -> u32 {
        self.n_qubits
    }

    fn h(&mut self, mask: QubitMask) -> Result<(), Infallible> {
        for q in mask {
            self.hadamard(q);
        }
        Ok(())
    }

    fn s(&mut self, mask: QubitMask) -> Result<(), Infallible> {
        for q in mask {
            self.unitary
                .scale_rows(|r| r >> q & 1 == 1, Complex64::new(0.0, 1.0));
        }
        Ok(())
    }

    fn sdg(&mut self, mask: QubitMask) -> Result<(), Infallible> {
        for q in mask {
            self.unitary
                .scale_rows(|r| r >> q & 1 == 1, Complex64::new(0.0, -1.0));
        }
        Ok(())
    }

    fn cx(&mut self, control: QubitId, target: QubitId) -> Result<(), Infallible> {
        let cbit = 1usize << control.0;
        let tbit = 1usize << target.0;
        let n = self.unitary.dim;
        for r in (0..n).filter(|r| r & cbit != 0 && r & tbit == 0) {
            let partner = r | tbit;
            for c in 0..n {
                self.unitary.data.swap(r * n + c, partner * n + c);
            }
        }
        Ok(())
    }

    fn rz(&mut self, angle: f64, qubit: QubitId) -> Result<(), Infallible> {
        let q = qubit.0;
        let half = angle / 2.0;
        self.unitary
            .scale_rows(|r| r >> q & 1 == 0, Complex64::from_polar(1.0, -half));
        self.unitary
            .scale_rows(|r| r >> q & 1 == 1, Complex64::from_polar(1.0, half));
        Ok(())
    }
}

/// Matrix of `P(x, z) = i^{|x&z|} X^x Z^z` on `n_qubits` qubits.
pub fn pauli_matrix(mask: PauliMask, n_qubits: u32) -> Matrix {
    let dim = 1usize << n_qubits;
    let x = mask.x.bits() as usize;
    let z = mask.z.bits() as usize;
    let phase = Phase::from_power(mask.y_mask().count()).to_complex();
    let mut m = Matrix::zeros(dim);
    for b in 0..dim {
        let sign = if (z & b).count_ones() % 2 == 0 { 1.0 } else { -1.0 };
        m.data[(b ^ x) * dim + b] = phase * sign;
    }
    m
}

/// `exp(-iθP) = cos θ · I − i sin θ · P`.
pub fn ppr_unitary(mask: PauliMask, theta: f64, n_qubits: u32) -> Matrix {
    let dim = 1usize << n_qubits;
    Matrix::identity(dim)
        .scale(Complex64::new(theta.cos(), 0.0))
        .add(&pauli_matrix(mask, n_qubits).scale(Complex64::new(0.0, -theta.sin())))
}

/// `Σ c_k P_k` as a dense matrix.
pub fn hamiltonian_matrix(hamiltonian: &PauliSum, n_qubits: u32) -> Matrix {
    hamiltonian
        .iter()
        .fold(Matrix::zeros(1 << n_qubits), |acc, term| {
            acc.add(&pauli_matrix(term.mask, n_qubits).scale(Complex64::new(term.coeff, 0.0)))
        })
}

/// Matrix exponential by scaling and squaring a truncated Taylor series.
pub fn expm(a: &Matrix) -> Matrix {
    let mut squarings = 0;
    let mut scale = 1.0;
    while a.norm() * scale > 0.25 {
        scale *= 0.5;
        squarings += 1;
    }
    let a = a.scale(Complex64::new(scale, 0.0));

    let mut result = Matrix::identity(a.dim());
    let mut term = Matrix::identity(a.dim());
    for k in 1..=20 {
        term = term.mul(&a).scale(Complex64::new(1.0 / k as f64, 0.0));
        result = result.add(&term);
    }
    for _ in 0..squarings {
        result = result.mul(&result);
    }
    result
}

/// Exact `exp(-i H t)`.
pub fn exact_evolution(hamiltonian: &PauliSum, n_qubits: u32, t: f64) -> Matrix {
    expm(&hamiltonian_matrix(hamiltonian, n_qubits).scale(Complex64::new(0.0, -t)))
}
