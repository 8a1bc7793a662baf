//! Pauli operators as bitmask pairs.
//!
//! A Pauli operator on `n` qubits is stored as two [`QubitMask`]s: bit `i`
//! of `x` marks an X-type component on qubit `i`, bit `i` of `z` a Z-type
//! component. Both bits set means a Y factor, so
//!
//!   P(x, z) = i^{|x & z|} · X^x · Z^z
//!
//! and no separate Y flag is needed downstream.
//!
//! Parity modes (Majorana operators) are packed two per qubit: mode `2j`
//! maps to `Z…Z X_j` and mode `2j+1` to `Z…Z Y_j`, with the Z string on every
//! qubit below `j`.
//!
//! # Example
//!
//! ```rust
//! use syk_sim::pauli::{pair_to_operator, PauliMask, Phase};
//!
//! let (phase, mask) = pair_to_operator(0, 1).unwrap();
//! assert_eq!(phase, Phase::I);
//! assert_eq!(mask, "Z0".parse::<PauliMask>().unwrap());
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Neg};
use std::str::FromStr;

use syk_ir::{MAX_QUBITS, QubitMask};

use crate::error::{SimError, SimResult};

/// An exact fourth root of unity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// +1
    One,
    /// +i
    I,
    /// −1
    MinusOne,
    /// −i
    MinusI,
}

impl Phase {
    /// `i^k`.
    pub fn from_power(k: u32) -> Self {
        match k % 4 {
            0 => Phase::One,
            1 => Phase::I,
            2 => Phase::MinusOne,
            _ => Phase::MinusI,
        }
    }

    /// The `k` with `self == i^k`, in `0..4`.
    pub fn power(self) -> u32 {
        match self {
            Phase::One => 0,
            Phase::I => 1,
            Phase::MinusOne => 2,
            Phase::MinusI => 3,
        }
    }

    /// Complex conjugate.
    pub fn conj(self) -> Self {
        Self::from_power(4 - self.power())
    }

    /// Real part.
    pub fn re(self) -> f64 {
        match self {
            Phase::One => 1.0,
            Phase::MinusOne => -1.0,
            Phase::I | Phase::MinusI => 0.0,
        }
    }

    /// Imaginary part.
    pub fn im(self) -> f64 {
        match self {
            Phase::I => 1.0,
            Phase::MinusI => -1.0,
            Phase::One | Phase::MinusOne => 0.0,
        }
    }

    /// As a complex number.
    pub fn to_complex(self) -> Complex64 {
        Complex64::new(self.re(), self.im())
    }
}

impl Mul for Phase {
    type Output = Phase;

    fn mul(self, rhs: Phase) -> Phase {
        Phase::from_power(self.power() + rhs.power())
    }
}

impl Neg for Phase {
    type Output = Phase;

    fn neg(self) -> Phase {
        Phase::from_power(self.power() + 2)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::One => "+1",
            Phase::I => "+i",
            Phase::MinusOne => "-1",
            Phase::MinusI => "-i",
        };
        f.write_str(s)
    }
}

/// A Pauli operator without a scalar, as an (x, z) mask pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliMask {
    /// Qubits with an X-type component.
    pub x: QubitMask,
    /// Qubits with a Z-type component.
    pub z: QubitMask,
}

impl PauliMask {
    /// Create from raw mask bits.
    pub const fn new(x: u64, z: u64) -> Self {
        Self {
            x: QubitMask::from_bits(x),
            z: QubitMask::from_bits(z),
        }
    }

    /// The identity operator.
    pub const fn identity() -> Self {
        Self::new(0, 0)
    }

    /// True if no qubit carries a non-identity factor.
    pub fn is_identity(&self) -> bool {
        self.support().is_empty()
    }

    /// Qubits with a non-identity factor (`x | z`).
    pub fn support(&self) -> QubitMask {
        self.x | self.z
    }

    /// Qubits with a Y factor (`x & z`).
    pub fn y_mask(&self) -> QubitMask {
        self.x & self.z
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> u32 {
        self.support().count()
    }

    /// Smallest register width containing the operator.
    pub fn width(&self) -> u32 {
        self.support().width()
    }

    /// True if the two operators commute.
    pub fn commutes_with(&self, other: &PauliMask) -> bool {
        ((self.x & other.z).count() + (self.z & other.x).count()) % 2 == 0
    }

    /// Product `self · other` with its exact phase.
    pub fn mul_with_phase(&self, other: &PauliMask) -> (Phase, PauliMask) {
        let product = *self * *other;
        let exponent = self.y_mask().count()
            + other.y_mask().count()
            + 2 * (self.z & other.x).count()
            + 3 * product.y_mask().count();
        (Phase::from_power(exponent), product)
    }

    /// Sparse text form, e.g. `"X0 Y1 Z3"`; the identity is `"I"`.
    pub fn to_sparse_string(&self) -> String {
        if self.is_identity() {
            return "I".to_string();
        }
        self.support()
            .iter()
            .map(|q| format!("{}{q}", self.letter(q)))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Dense text form over `{X, Y, Z, I}`, qubit 0 rightmost.
    ///
    /// The string is at least `width` characters and always long enough to
    /// hold the operator.
    pub fn to_dense_string(&self, width: u32) -> String {
        let width = width.max(self.width());
        (0..width).rev().map(|q| self.letter(q)).collect()
    }

    fn letter(&self, qubit: u32) -> char {
        match (self.x.contains(qubit), self.z.contains(qubit)) {
            (false, false) => 'I',
            (true, false) => 'X',
            (true, true) => 'Y',
            (false, true) => 'Z',
        }
    }
}

/// Mask product; the phase is discarded. See [`PauliMask::mul_with_phase`].
impl Mul for PauliMask {
    type Output = PauliMask;

    fn mul(self, rhs: PauliMask) -> PauliMask {
        PauliMask {
            x: self.x ^ rhs.x,
            z: self.z ^ rhs.z,
        }
    }
}

impl fmt::Display for PauliMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sparse_string())
    }
}

impl FromStr for PauliMask {
    type Err = SimError;

    fn from_str(s: &str) -> SimResult<Self> {
        parse_pauli_string(s, MAX_QUBITS)
    }
}

// ---------------------------------------------------------------------------
// Parity modes
// ---------------------------------------------------------------------------

/// The Pauli operator for a single parity mode `k`.
///
/// Mode `2j` is `Z_0 … Z_{j-1} X_j`, mode `2j+1` is `Z_0 … Z_{j-1} Y_j`.
pub fn majorana(k: u32) -> SimResult<PauliMask> {
    let j = mode_qubit(k)?;
    let below = QubitMask::low(j)?;
    let site = QubitMask::single(j)?;
    let z = if k % 2 == 1 { below | site } else { below };
    Ok(PauliMask { x: site, z })
}

/// Map an ordered pair of parity modes to `(phase, operator)` with
/// `γ_p · γ_q = phase · operator`.
///
/// Swapping the arguments keeps the operator and negates the phase.
pub fn pair_to_operator(p: u32, q: u32) -> SimResult<(Phase, PauliMask)> {
    if p == q {
        return Err(SimError::SameMode(p));
    }
    let (jp, jq) = (mode_qubit(p)?, mode_qubit(q)?);

    if jp == jq {
        let z = QubitMask::single(jq)?;
        let phase = if q > p { Phase::I } else { Phase::MinusI };
        return Ok((phase, PauliMask { x: QubitMask::EMPTY, z }));
    }

    let (lo, hi) = if p < q { (p, q) } else { (q, p) };
    let (jlo, jhi) = (lo / 2, hi / 2);

    let x = QubitMask::single(jlo)? | QubitMask::single(jhi)?;
    // Z string on every qubit strictly between the endpoints.
    let mut z = QubitMask::low(jhi)? & !QubitMask::low(jlo + 1)?;
    if hi % 2 == 1 {
        z |= QubitMask::single(jhi)?;
    }
    let ordered_phase = if lo % 2 == 0 {
        z |= QubitMask::single(jlo)?;
        Phase::MinusI
    } else {
        Phase::I
    };

    let phase = if p < q { ordered_phase } else { -ordered_phase };
    Ok((phase, PauliMask { x, z }))
}

fn mode_qubit(k: u32) -> SimResult<u32> {
    let j = k / 2;
    if j >= MAX_QUBITS {
        return Err(SimError::ModeOutOfRange(k));
    }
    Ok(j)
}

// ---------------------------------------------------------------------------
// Text codec
// ---------------------------------------------------------------------------

/// Parse a Pauli string over a register of `num_qubits` qubits.
///
/// Two formats are accepted:
/// - sparse: whitespace-separated `{X|Y|Z}{qubit}` tokens, e.g. `"X0 Y1 Z3"`;
/// - dense: a string over `{X, Y, Z, I}` read right to left as qubit 0, 1, 2, …
///
/// Text containing any digit is sparse. Empty text is the identity. The
/// whole string is validated before a mask is built.
pub fn parse_pauli_string(s: &str, num_qubits: u32) -> SimResult<PauliMask> {
    let factors = if s.bytes().any(|b| b.is_ascii_digit()) {
        parse_sparse(s, num_qubits)?
    } else {
        parse_dense(s, num_qubits)?
    };

    let mut mask = PauliMask::identity();
    for (letter, q) in factors {
        let bit = QubitMask::single(q)?;
        if matches!(letter, 'X' | 'Y') {
            mask.x |= bit;
        }
        if matches!(letter, 'Z' | 'Y') {
            mask.z |= bit;
        }
    }
    Ok(mask)
}

fn parse_sparse(s: &str, num_qubits: u32) -> SimResult<Vec<(char, u32)>> {
    let invalid = |reason: String| SimError::InvalidPauliString {
        input: s.to_string(),
        reason,
    };

    let mut seen = QubitMask::EMPTY;
    let mut factors = vec![];
    for token in s.split_whitespace() {
        let mut chars = token.chars();
        let letter = chars.next().unwrap_or(' ');
        if !matches!(letter, 'X' | 'Y' | 'Z') {
            return Err(invalid(format!("token {token:?} must start with X, Y or Z")));
        }
        // plain decimal only: no sign, no leading zeros
        let digits = chars.as_str();
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits.len() == 1 || !digits.starts_with('0'));
        let index: u32 = canonical
            .then(|| digits.parse().ok())
            .flatten()
            .ok_or_else(|| invalid(format!("token {token:?} has no valid qubit index")))?;
        if index >= num_qubits.min(MAX_QUBITS) {
            return Err(invalid(format!(
                "qubit {index} out of range for {num_qubits} qubits"
            )));
        }
        if seen.contains(index) {
            return Err(invalid(format!("qubit {index} appears more than once")));
        }
        seen |= QubitMask::from_bits(1 << index);
        factors.push((letter, index));
    }
    Ok(factors)
}

fn parse_dense(s: &str, num_qubits: u32) -> SimResult<Vec<(char, u32)>> {
    let invalid = |reason: String| SimError::InvalidPauliString {
        input: s.to_string(),
        reason,
    };

    let trimmed = s.trim();
    let mut factors = vec![];
    for (position, letter) in trimmed.chars().rev().enumerate() {
        match letter {
            'I' => {}
            'X' | 'Y' | 'Z' => {
                let q = u32::try_from(position)
                    .ok()
                    .filter(|&q| q < num_qubits.min(MAX_QUBITS))
                    .ok_or_else(|| {
                        invalid(format!(
                            "{letter} at qubit {position} out of range for {num_qubits} qubits"
                        ))
                    })?;
                factors.push((letter, q));
            }
            other => return Err(invalid(format!("unknown Pauli letter {other:?}"))),
        }
    }
    Ok(factors)
}
