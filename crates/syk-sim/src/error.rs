//! Error types for the sim crate.

use thiserror::Error;

/// Errors produced by Hamiltonian construction and time-evolution synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Hamiltonian contains no terms.
    #[error("Hamiltonian is empty: no terms to synthesise")]
    EmptyHamiltonian,

    /// An operator needs more qubits than the register provides.
    #[error("Operator spans {required} qubits but the register only has {n_qubits}")]
    QubitOutOfRange {
        /// Width the operator needs.
        required: u32,
        /// Width of the target register.
        n_qubits: u32,
    },

    /// n_steps must be ≥ 1.
    #[error("n_steps must be at least 1, got {0}")]
    InvalidSteps(usize),

    /// Evolution time must be finite.
    #[error("evolution time must be finite, got {0}")]
    InvalidTime(f64),

    /// Only first- and second-order product formulas exist.
    #[error("Trotter order must be 1 or 2, got {0}")]
    InvalidOrder(u32),

    /// A parity-mode pair needs two distinct modes.
    #[error("parity-mode pair ({0}, {0}) is not a distinct pair")]
    SameMode(u32),

    /// A parity-mode index maps past the widest supported register.
    #[error("parity mode {0} maps beyond the 64-qubit mask width")]
    ModeOutOfRange(u32),

    /// Pauli string text could not be parsed.
    #[error("invalid Pauli string {input:?}: {reason}")]
    InvalidPauliString {
        /// The rejected text.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Supplied coefficient list has the wrong length.
    #[error("expected {expected} coefficients, got {got}")]
    CoefficientCount {
        /// C(2n, 4) for the requested model size.
        expected: usize,
        /// Number actually supplied.
        got: usize,
    },

    /// Coupling or coefficient is not a usable real number.
    #[error("invalid coupling: {0}")]
    InvalidCoupling(String),

    /// A Hamiltonian term would rotate by a non-finite angle.
    #[error("term {index} with coefficient {coeff} gives a non-finite rotation at dt = {dt}")]
    InvalidCoefficient {
        /// Position of the term in the Hamiltonian.
        index: usize,
        /// Its coefficient.
        coeff: f64,
        /// Time step of the pass that would apply it.
        dt: f64,
    },

    /// Deterministic build requested without supplied coefficients.
    #[error("no coefficients supplied; use a random source to draw them")]
    MissingCoefficients,

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// IR-level failure (mask width, angle normalisation, recording).
    #[error("IR error: {0}")]
    Ir(#[from] syk_ir::IrError),

    /// The register backend failed while a gate was being applied.
    ///
    /// The backend's own error is kept as the source; downcast it to
    /// recover the concrete type.
    #[error("register backend error: {0}")]
    Register(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration could not be parsed or written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Wrap a backend error without translating it.
    pub fn register<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        SimError::Register(Box::new(err))
    }
}

/// Result type for simulation synthesis operations.
pub type SimResult<T> = Result<T, SimError>;
