//! SYK Demo Suite
//!
//! Console helpers shared by the demo binaries, plus a summary of a
//! recorded gate sequence.

use std::collections::BTreeMap;

use console::style;
use syk_ir::{GateSequence, QubitRegister};
use syk_sim::{PauliSum, SimulationConfig};

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// What a simulation run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub n_qubits: u32,
    pub n_terms: usize,
    pub lambda: f64,
    pub total_gates: usize,
    pub gate_counts: BTreeMap<&'static str, usize>,
}

impl RunSummary {
    /// Summarise a run of `config` that recorded `sequence` for `hamiltonian`.
    pub fn new(config: &SimulationConfig, hamiltonian: &PauliSum, sequence: &GateSequence) -> Self {
        Self {
            n_qubits: sequence.num_qubits().max(config.n_qubits),
            n_terms: hamiltonian.n_terms(),
            lambda: hamiltonian.lambda(),
            total_gates: sequence.len(),
            gate_counts: sequence.gate_counts(),
        }
    }

    /// Print the summary as result lines.
    pub fn print(&self) {
        print_result("Qubits", self.n_qubits);
        print_result("Hamiltonian terms", self.n_terms);
        print_result("λ = Σ|c|", format!("{:.6}", self.lambda));
        print_result("Total gates", self.total_gates);
        for (name, count) in &self.gate_counts {
            print_result(&format!("  {name}"), count);
        }
    }
}
