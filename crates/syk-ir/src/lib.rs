//! Register-facing vocabulary for Pauli-rotation synthesis.
//!
//! This crate defines what synthesis code may ask of a qubit register and
//! how those requests are written down. It does not simulate anything.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] and the fixed-width [`QubitMask`] used for
//!   Pauli masks and mask-selected gates
//! - **Angles**: [`Angle`], a rotation quantity whose unit is explicit
//! - **Gates**: [`Gate`], the abstract operation set (H, S, S†, CX, Rz)
//! - **Registers**: [`QubitRegister`], the capability trait a backend implements
//! - **Sequences**: [`GateSequence`], a recording register
//!
//! # Example: Recording Gates
//!
//! ```rust
//! use syk_ir::{GateSequence, QubitId, QubitMask, QubitRegister};
//!
//! let mut seq = GateSequence::new(2).unwrap();
//! seq.h(QubitMask::from_bits(0b11)).unwrap();
//! seq.cx(QubitId(0), QubitId(1)).unwrap();
//! seq.rz(std::f64::consts::PI, QubitId(1)).unwrap();
//!
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.cx_count(), 1);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Operands | Description |
//! |------|----------|-------------|
//! | `H` | mask | Hadamard on each selected qubit |
//! | `S`, `Sdg` | mask | S and S-dagger on each selected qubit |
//! | `CX` | control, target | Controlled-NOT |
//! | `Rz` | qubit, radians | `exp(-iφZ/2)` |

pub mod angle;
pub mod error;
pub mod gate;
pub mod qubit;
pub mod register;
pub mod sequence;

pub use angle::Angle;
pub use error::{IrError, IrResult};
pub use gate::Gate;
pub use qubit::{MAX_QUBITS, QubitId, QubitMask, QubitMaskIter};
pub use register::QubitRegister;
pub use sequence::GateSequence;
