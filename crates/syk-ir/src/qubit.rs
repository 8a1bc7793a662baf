//! Qubit indices and fixed-width qubit bitmasks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use crate::error::{IrError, IrResult};

/// Number of qubits a [`QubitMask`] can address.
pub const MAX_QUBITS: u32 = u64::BITS;

/// Index of a qubit within a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// A set of qubits encoded as a bitmask: bit `i` set means qubit `i` is selected.
///
/// The width is fixed at [`MAX_QUBITS`]; every constructor that takes a
/// qubit index checks it against that bound.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct QubitMask(u64);

impl QubitMask {
    /// The empty mask.
    pub const EMPTY: Self = Self(0);

    /// Wrap raw mask bits.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Empty mask.
    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Mask selecting a single qubit.
    pub fn single(qubit: u32) -> IrResult<Self> {
        if qubit >= MAX_QUBITS {
            return Err(IrError::WidthExceeded { requested: qubit });
        }
        Ok(Self(1 << qubit))
    }

    /// Mask selecting every qubit in `qubits`.
    pub fn from_qubits(qubits: impl IntoIterator<Item = u32>) -> IrResult<Self> {
        qubits
            .into_iter()
            .try_fold(Self::EMPTY, |acc, q| Ok(acc | Self::single(q)?))
    }

    /// Mask selecting qubits `0..n`.
    pub fn low(n: u32) -> IrResult<Self> {
        match n {
            0 => Ok(Self::EMPTY),
            n if n < MAX_QUBITS => Ok(Self((1 << n) - 1)),
            n if n == MAX_QUBITS => Ok(Self(u64::MAX)),
            n => Err(IrError::WidthExceeded { requested: n }),
        }
    }

    /// Raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True if no qubit is selected.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if `qubit` is selected.
    #[inline]
    pub fn contains(self, qubit: u32) -> bool {
        qubit < MAX_QUBITS && self.0 & (1 << qubit) != 0
    }

    /// Number of selected qubits.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Highest selected qubit, or `None` for the empty mask.
    #[inline]
    pub const fn highest(self) -> Option<u32> {
        if self.0 == 0 {
            None
        } else {
            Some(MAX_QUBITS - 1 - self.0.leading_zeros())
        }
    }

    /// Smallest register width containing every selected qubit.
    #[inline]
    pub const fn width(self) -> u32 {
        MAX_QUBITS - self.0.leading_zeros()
    }

    /// This mask with `qubit` cleared.
    #[inline]
    pub fn without(self, qubit: u32) -> Self {
        if qubit < MAX_QUBITS {
            Self(self.0 & !(1 << qubit))
        } else {
            self
        }
    }

    /// Iterate selected qubits from least to most significant.
    pub fn iter(self) -> QubitMaskIter {
        QubitMaskIter(self.0)
    }
}

impl fmt::Display for QubitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

impl From<u64> for QubitMask {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl BitOr for QubitMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for QubitMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitXor for QubitMask {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for QubitMask {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl BitOrAssign for QubitMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAndAssign for QubitMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitXorAssign for QubitMask {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl IntoIterator for QubitMask {
    type Item = u32;
    type IntoIter = QubitMaskIter;

    fn into_iter(self) -> QubitMaskIter {
        self.iter()
    }
}

/// Iterator over the set bits of a [`QubitMask`], lowest first.
#[derive(Debug, Clone)]
pub struct QubitMaskIter(u64);

impl Iterator for QubitMaskIter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.0 == 0 {
            return None;
        }
        let q = self.0.trailing_zeros();
        // clear lowest set bit
        self.0 &= self.0 - 1;
        Some(q)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for QubitMaskIter {}
