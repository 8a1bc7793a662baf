//! SYK Time-Evolution Demo
//!
//! Builds a random SYK Hamiltonian, Trotterises `exp(-iHt)` into Pauli
//! product rotations and reports the resulting gate sequence.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use syk_demos::{RunSummary, print_header, print_result, print_section, print_success};
use syk_ir::GateSequence;
use syk_sim::SimulationConfig;

#[derive(Parser, Debug)]
#[command(name = "demo-syk")]
#[command(about = "Synthesise Trotterised SYK time evolution")]
struct Args {
    /// JSON configuration file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of qubits (2n parity modes)
    #[arg(short, long)]
    n_qubits: Option<u32>,

    /// Coupling constant J
    #[arg(short = 'j', long)]
    coupling: Option<f64>,

    /// Seed for the couplings
    #[arg(short, long)]
    seed: Option<u64>,

    /// Total evolution time
    #[arg(short, long)]
    time: Option<f64>,

    /// Number of Trotter steps
    #[arg(long)]
    steps: Option<usize>,

    /// Product-formula order (1 or 2)
    #[arg(short, long)]
    order: Option<u32>,

    /// Print the Hamiltonian terms
    #[arg(long)]
    show_terms: bool,

    /// Emit the gate sequence as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn load_config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                SimulationConfig::from_json(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(n) = self.n_qubits {
            config.n_qubits = n;
        }
        if let Some(j) = self.coupling {
            config.coupling = j;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(t) = self.time {
            config.time = t;
        }
        if let Some(steps) = self.steps {
            config.n_steps = steps;
        }
        if let Some(order) = self.order {
            config.order = order;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG wins unless -v was given
    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = args.load_config()?;
    info!(?config, "loaded configuration");

    let start = Instant::now();
    let mut sequence = GateSequence::new(config.n_qubits)?;
    let hamiltonian = config.run(&mut sequence)?;
    let elapsed = start.elapsed();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sequence)?);
        return Ok(());
    }

    print_header("SYK Trotter Synthesis");

    print_section("Configuration");
    print_result("Qubits", config.n_qubits);
    print_result("Parity modes", 2 * config.n_qubits);
    print_result("Coupling J", config.coupling);
    print_result(
        "Seed",
        config
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string()),
    );
    print_result("Time t", config.time);
    print_result("Trotter steps", config.n_steps);
    print_result("Order", config.trotter_order()?);

    if args.show_terms {
        print_section("Hamiltonian");
        for term in &hamiltonian {
            println!("  {:+.6}  {}", term.coeff, term.mask.to_dense_string(config.n_qubits));
        }
    }

    print_section("Gate Sequence");
    RunSummary::new(&config, &hamiltonian, &sequence).print();
    print_result("Synthesis time", format!("{elapsed:.2?}"));

    println!();
    print_success("Synthesis complete");
    Ok(())
}
