//! Tests for simulation configuration.

use rand::SeedableRng;
use rand::rngs::StdRng;
use syk_ir::{GateSequence, QubitRegister};
use syk_sim::trotter::TrotterOrder;
use syk_sim::{SimError, SimulationConfig};

#[test]
fn defaults() {
    let config = SimulationConfig::default();
    assert_eq!(config.n_qubits, 4);
    assert_eq!(config.coupling, 1.0);
    assert_eq!(config.seed, None);
    assert_eq!(config.time, 1.0);
    assert_eq!(config.n_steps, 10);
    assert_eq!(config.order, 2);
    assert!(config.validate().is_ok());
    assert_eq!(config.trotter_order().unwrap(), TrotterOrder::Second);
}

#[test]
fn missing_fields_take_defaults() {
    let config = SimulationConfig::from_json(r#"{ "n_qubits": 3, "seed": 11, "order": 1 }"#).unwrap();
    assert_eq!(config.n_qubits, 3);
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.order, 1);
    assert_eq!(config.n_steps, 10);
    assert_eq!(config.coupling, 1.0);

    let empty = SimulationConfig::from_json("{}").unwrap();
    assert_eq!(empty, SimulationConfig::default());
}

#[test]
fn json_round_trip() {
    let config = SimulationConfig {
        n_qubits: 5,
        coupling: 0.5,
        seed: Some(99),
        time: 2.5,
        n_steps: 7,
        order: 1,
    };
    let json = config.to_json().unwrap();
    assert_eq!(SimulationConfig::from_json(&json).unwrap(), config);
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        SimulationConfig::from_json("{ n_qubits: 3 }"),
        Err(SimError::Json(_))
    ));
    assert!(matches!(
        SimulationConfig::from_json(r#"{ "n_qubits": "three" }"#),
        Err(SimError::Json(_))
    ));
}

#[test]
fn validation_rejects_bad_fields() {
    let cases = [
        r#"{ "n_qubits": 1 }"#,
        r#"{ "n_qubits": 65 }"#,
        r#"{ "coupling": -1.0 }"#,
        r#"{ "n_steps": 0 }"#,
    ];
    for json in cases {
        assert!(
            matches!(
                SimulationConfig::from_json(json),
                Err(SimError::InvalidConfig(_))
            ),
            "{json} accepted"
        );
    }
    assert!(matches!(
        SimulationConfig::from_json(r#"{ "order": 3 }"#),
        Err(SimError::InvalidOrder(3))
    ));

    let config = SimulationConfig {
        time: f64::NAN,
        ..SimulationConfig::default()
    };
    assert!(matches!(config.validate(), Err(SimError::InvalidConfig(_))));
}

#[test]
fn seeded_hamiltonian_is_reproducible() {
    let config = SimulationConfig {
        n_qubits: 3,
        seed: Some(4),
        ..SimulationConfig::default()
    };
    let a = config.hamiltonian().unwrap();
    let b = config.hamiltonian().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.n_terms(), 15);

    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(config.hamiltonian_with_rng(&mut rng).unwrap(), a);
}

#[test]
fn run_records_configured_evolution() {
    let config = SimulationConfig {
        n_qubits: 3,
        seed: Some(21),
        n_steps: 2,
        order: 1,
        ..SimulationConfig::default()
    };
    let mut seq = GateSequence::new(3).unwrap();
    let h = config.run(&mut seq).unwrap();
    assert_eq!(h, config.hamiltonian().unwrap());

    let evol = config.evolution(h);
    assert_eq!(seq.len(), evol.gate_count(TrotterOrder::First));
    assert_eq!(seq, evol.to_gate_sequence(TrotterOrder::First).unwrap());
    assert_eq!(seq.num_qubits(), 3);
}

#[test]
fn run_rejects_narrow_register() {
    let config = SimulationConfig {
        n_qubits: 4,
        seed: Some(1),
        ..SimulationConfig::default()
    };
    let mut seq = GateSequence::new(2).unwrap();
    assert!(matches!(
        config.run(&mut seq),
        Err(SimError::QubitOutOfRange { n_qubits: 2, .. })
    ));
    assert!(seq.is_empty());
}
