//! `syk-sim`: SYK Hamiltonian construction and time-evolution synthesis.
//!
//! Builds the Sachdev–Ye–Kitaev model as a sum of Pauli operators and turns
//! `exp(-i H t)` into calls on any [`syk_ir::QubitRegister`] using:
//!
//! - **Pauli product rotations**: `exp(-iθP)` as basis change, CNOT ladder
//!   and a single `Rz`
//! - **Trotter-Suzuki** product formulas (first- and second-order)
//!
//! Registers are backends. Recording into a [`syk_ir::GateSequence`] gives a
//! hardware-agnostic gate list; any simulator implementing the trait can be
//! driven directly.
//!
//! # Quick start
//!
//! ```rust
//! use syk_ir::GateSequence;
//! use syk_sim::syk::SykBuilder;
//! use syk_sim::trotter::{TrotterEvolution, TrotterOrder};
//!
//! // 3 qubits, 6 parity modes, C(6, 4) = 15 terms
//! let h = SykBuilder::new(3).coupling(1.0).build_seeded(42).unwrap();
//!
//! let evol = TrotterEvolution::new(h, 1.0 /* t */, 4 /* steps */);
//! let mut seq = GateSequence::new(3).unwrap();
//! evol.evolve(&mut seq, TrotterOrder::Second).unwrap();
//! assert_eq!(seq.len(), evol.gate_count(TrotterOrder::Second));
//! ```

pub mod config;
pub mod error;
pub mod hamiltonian;
pub mod pauli;
pub mod synthesis;
pub mod syk;
pub mod trotter;

pub use config::SimulationConfig;
pub use error::{SimError, SimResult};
pub use hamiltonian::{PauliSum, PauliTerm};
pub use pauli::{PauliMask, Phase, majorana, pair_to_operator, parse_pauli_string};
pub use synthesis::append_ppr;
pub use syk::SykBuilder;
pub use trotter::{TrotterEvolution, TrotterOrder, trotter_evolution};
