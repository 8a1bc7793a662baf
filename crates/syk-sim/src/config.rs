//! Simulation configuration.
//!
//! A [`SimulationConfig`] describes one SYK time-evolution run: model size,
//! coupling, an optional seed for reproducible couplings, and the product
//! formula parameters. Missing fields take their defaults, so a minimal
//! JSON document only names the qubit count:
//!
//! ```rust
//! use syk_sim::config::SimulationConfig;
//!
//! let config = SimulationConfig::from_json(r#"{ "n_qubits": 3, "seed": 11 }"#).unwrap();
//! assert_eq!(config.order, 2);
//! assert_eq!(config.n_steps, 10);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use syk_ir::{MAX_QUBITS, QubitRegister};

use crate::error::{SimError, SimResult};
use crate::hamiltonian::PauliSum;
use crate::syk::SykBuilder;
use crate::trotter::{TrotterEvolution, TrotterOrder};

/// Parameters of a SYK Trotter simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of qubits (2·n_qubits parity modes).
    #[serde(default = "default_n_qubits")]
    pub n_qubits: u32,

    /// Coupling constant J.
    #[serde(default = "default_coupling")]
    pub coupling: f64,

    /// Seed for drawing couplings; `None` draws from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Total evolution time t.
    #[serde(default = "default_time")]
    pub time: f64,

    /// Number of Trotter steps.
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,

    /// Product-formula order (1 or 2).
    #[serde(default = "default_order")]
    pub order: u32,
}

fn default_n_qubits() -> u32 {
    4
}

fn default_coupling() -> f64 {
    1.0
}

fn default_time() -> f64 {
    1.0
}

fn default_n_steps() -> usize {
    10
}

fn default_order() -> u32 {
    2
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_qubits: default_n_qubits(),
            coupling: default_coupling(),
            seed: None,
            time: default_time(),
            n_steps: default_n_steps(),
            order: default_order(),
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialise to pretty-printed JSON.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every field.
    pub fn validate(&self) -> SimResult<()> {
        // four parity modes are the smallest model with a 4-body term
        if self.n_qubits < 2 || self.n_qubits > MAX_QUBITS {
            return Err(SimError::InvalidConfig(format!(
                "n_qubits must be in 2..={MAX_QUBITS}, got {}",
                self.n_qubits
            )));
        }
        if !self.coupling.is_finite() || self.coupling < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "coupling must be finite and non-negative, got {}",
                self.coupling
            )));
        }
        if !self.time.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "time must be finite, got {}",
                self.time
            )));
        }
        if self.n_steps == 0 {
            return Err(SimError::InvalidConfig("n_steps must be at least 1".into()));
        }
        self.trotter_order()?;
        Ok(())
    }

    /// The configured product-formula order.
    pub fn trotter_order(&self) -> SimResult<TrotterOrder> {
        TrotterOrder::try_from(self.order)
    }

    /// Build the SYK Hamiltonian, seeded if `seed` is set.
    pub fn hamiltonian(&self) -> SimResult<PauliSum> {
        let builder = self.builder();
        match self.seed {
            Some(seed) => builder.build_seeded(seed),
            None => builder.build_with_rng(&mut rand::thread_rng()),
        }
    }

    /// Build the SYK Hamiltonian with couplings drawn from `rng`.
    pub fn hamiltonian_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> SimResult<PauliSum> {
        self.builder().build_with_rng(rng)
    }

    /// A Trotter synthesiser for `hamiltonian` with this configuration's
    /// time and step count.
    pub fn evolution(&self, hamiltonian: PauliSum) -> TrotterEvolution {
        TrotterEvolution::new(hamiltonian, self.time, self.n_steps).with_n_qubits(self.n_qubits)
    }

    /// Build the Hamiltonian and evolve `register` under it.
    ///
    /// Returns the Hamiltonian that was simulated.
    pub fn run<R: QubitRegister + ?Sized>(&self, register: &mut R) -> SimResult<PauliSum> {
        self.validate()?;
        let order = self.trotter_order()?;
        let hamiltonian = self.hamiltonian()?;
        info!(
            n_qubits = self.n_qubits,
            n_terms = hamiltonian.n_terms(),
            n_steps = self.n_steps,
            %order,
            "running SYK evolution"
        );
        let evolution = self.evolution(hamiltonian);
        evolution.evolve(register, order)?;
        Ok(evolution.into_hamiltonian())
    }

    fn builder(&self) -> SykBuilder {
        SykBuilder::new(self.n_qubits).coupling(self.coupling)
    }
}
