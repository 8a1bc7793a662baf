//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur when recording or validating register operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit index is not addressable in the register.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Width of the register.
        num_qubits: u32,
    },

    /// A bitmask selects qubits beyond the register width.
    #[error("Mask {mask:#b} selects qubits beyond a {num_qubits}-qubit register")]
    MaskOutOfRange {
        /// The raw mask bits.
        mask: u64,
        /// Width of the register.
        num_qubits: u32,
    },

    /// Two-qubit operation given the same qubit twice.
    #[error("Duplicate qubit {qubit} in two-qubit operation")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
    },

    /// Angle could not be normalised to radians.
    #[error("Invalid angle: {0}")]
    InvalidAngle(String),

    /// Requested width exceeds the fixed mask width.
    #[error("Requested qubit or width {requested} exceeds the 64-qubit mask width")]
    WidthExceeded {
        /// The requested width or qubit index.
        requested: u32,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
