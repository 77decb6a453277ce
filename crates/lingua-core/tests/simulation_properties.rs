//! Simulation property tests
//!
//! End-to-end checks of the structural invariants the engine promises:
//! vocabulary consistency, bounded weights and frequencies, additive runs,
//! edge accumulation, and the behavior of the error-rate extremes.

use lingua_core::{GrammarRule, SimError, SimulationConfig, Simulator};

fn config() -> SimulationConfig {
    SimulationConfig {
        population_size: 10,
        mutation_rate: 0.1,
        communication_frequency: 0.5,
        error_rate: 0.1,
        seed: 42,
        history_limit: Some(100),
    }
}

/// Count of distinct words across the initial population
fn initial_unique_words(simulator: &Simulator) -> usize {
    use std::collections::BTreeSet;
    simulator
        .agents()
        .iter()
        .flat_map(|a| a.vocabulary().words().map(|(w, _)| w.to_string()))
        .collect::<BTreeSet<_>>()
        .len()
}

#[test]
fn test_vocabulary_invariant_holds_throughout() {
    let mut simulator = Simulator::new(SimulationConfig {
        mutation_rate: 0.3,
        error_rate: 0.3,
        ..config()
    })
    .unwrap();

    for _ in 0..30 {
        simulator.step_generation();
        for agent in simulator.agents() {
            assert!(agent.vocabulary().is_consistent());
            assert!(agent
                .vocabulary()
                .words()
                .all(|(_, weight)| (0.0..=1.0).contains(&weight)));
            assert!(agent
                .grammar_rules()
                .iter()
                .all(|rule| (0.1..=1.0).contains(&rule.frequency)));
        }
    }
}

#[test]
fn test_grammar_rules_keep_creation_order() {
    let mut simulator = Simulator::new(SimulationConfig {
        mutation_rate: 0.4,
        ..config()
    })
    .unwrap();
    simulator.run_simulation(25);

    for agent in simulator.agents() {
        let creations: Vec<u64> = agent
            .grammar_rules()
            .iter()
            .map(|rule: &GrammarRule| rule.generation_created)
            .collect();
        let mut sorted = creations.clone();
        sorted.sort_unstable();
        assert_eq!(creations, sorted);
    }
}

#[test]
fn test_zero_error_rate_never_corrupts() {
    let mut simulator = Simulator::new(SimulationConfig {
        error_rate: 0.0,
        communication_frequency: 1.0,
        ..config()
    })
    .unwrap();
    simulator.run_simulation(10);

    // Every exchange succeeded, so every receiving agent's lifetime rate is
    // exactly 1.0 and the interpreted content always matches the sent one.
    for agent in simulator.agents() {
        if agent.total_communications() > 0 {
            assert_eq!(agent.communication_success_rate(), 1.0);
        }
        for received in agent.history() {
            assert!(received.success);
            assert_eq!(received.interpreted_content, received.message.content);
        }
    }
}

#[test]
fn test_full_error_rate_blocks_success_but_not_learning() {
    let mut simulator = Simulator::new(SimulationConfig {
        error_rate: 1.0,
        communication_frequency: 1.0,
        mutation_rate: 0.0,
        ..config()
    })
    .unwrap();
    let before = initial_unique_words(&simulator);
    simulator.run_simulation(10);

    for agent in simulator.agents() {
        assert_eq!(agent.successful_communications(), 0);
    }
    assert_eq!(simulator.network().edge_count(), 0);

    // Corrupted tokens are still learned; with mutation disabled, words are
    // never removed, so the population lexicon can only grow.
    let stats = simulator.generation_stats().last().unwrap();
    assert!(stats.total_unique_words >= before);
    assert_eq!(stats.avg_communication_success, 0.0);
}

#[test]
fn test_stable_population_keeps_words_and_builds_edges() {
    let mut simulator = Simulator::new(SimulationConfig {
        population_size: 10,
        mutation_rate: 0.0,
        communication_frequency: 1.0,
        error_rate: 0.0,
        ..config()
    })
    .unwrap();
    let before = initial_unique_words(&simulator);
    simulator.run_simulation(5);

    let stats = simulator.generation_stats().last().unwrap();
    assert!(stats.total_unique_words >= before);
    assert!(simulator.network().edge_count() >= 1);
}

#[test]
fn test_density_is_bounded_and_non_decreasing() {
    let mut simulator = Simulator::new(SimulationConfig {
        communication_frequency: 0.8,
        ..config()
    })
    .unwrap();
    simulator.run_simulation(30);

    let mut previous = 0.0;
    for stats in simulator.generation_stats() {
        assert!((0.0..=1.0).contains(&stats.network_density));
        assert!(stats.network_density >= previous);
        previous = stats.network_density;
    }
}

#[test]
fn test_history_stays_bounded() {
    let mut simulator = Simulator::new(SimulationConfig {
        history_limit: Some(5),
        communication_frequency: 1.0,
        ..config()
    })
    .unwrap();
    simulator.run_simulation(50);

    for agent in simulator.agents() {
        assert!(agent.history().count() <= 5);
    }
}

#[test]
fn test_unknown_agent_sample_is_recoverable() {
    let simulator = Simulator::new(config()).unwrap();
    match simulator.agent_language_sample(999, 5) {
        Err(SimError::UnknownAgent(id)) => assert_eq!(id, 999),
        other => panic!("expected UnknownAgent, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_export_writes_and_reloads() {
    use lingua_core::output::{read_export, write_export};

    let mut simulator = Simulator::new(config()).unwrap();
    simulator.run_simulation(5);

    let path = std::env::temp_dir().join("lingua_core_export_test.json");
    let export = simulator.export();
    write_export(&export, &path).unwrap();
    let reloaded = read_export(&path).unwrap();

    assert_eq!(export, reloaded);
    assert_eq!(reloaded.simulation_parameters.generations, 5);
    assert_eq!(reloaded.generation_statistics.len(), 5);
    assert_eq!(reloaded.final_agent_data.len(), 10);
}

#[test]
fn test_export_field_names_match_contract() {
    let mut simulator = Simulator::new(config()).unwrap();
    simulator.run_simulation(1);

    let json = serde_json::to_value(simulator.export()).unwrap();
    let stats = &json["generation_statistics"][0];
    for field in [
        "generation",
        "avg_vocabulary_size",
        "avg_grammar_rules",
        "avg_language_complexity",
        "avg_communication_success",
        "total_unique_words",
        "network_density",
    ] {
        assert!(!stats[field].is_null(), "missing stats field {}", field);
    }

    let agent = &json["final_agent_data"][0];
    for field in [
        "agent_id",
        "generation",
        "vocabulary_size",
        "grammar_rules_count",
        "language_complexity",
        "communication_success_rate",
        "unique_words_created",
        "grammar_rules_created",
    ] {
        assert!(!agent[field].is_null(), "missing agent field {}", field);
    }
}
