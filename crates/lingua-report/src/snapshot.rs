//! Export Document Types
//!
//! Serialization structs for the full-run export. The document is a plain
//! nested key/value record so external tools can reload and re-inspect a
//! completed run without re-simulating it.

use serde::{Deserialize, Serialize};

use crate::stats::GenerationStats;

/// Run configuration as recorded in the export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub population_size: usize,
    pub mutation_rate: f32,
    pub communication_frequency: f32,
    pub error_rate: f32,
    /// Seed the run's random number generator was started from
    pub seed: u64,
    /// Generations completed when the export was taken
    pub generations: u64,
}

/// Final summary row for one agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub agent_id: usize,
    pub generation: u64,
    pub vocabulary_size: usize,
    pub grammar_rules_count: usize,
    pub language_complexity: f32,
    pub communication_success_rate: f64,
    pub unique_words_created: u64,
    pub grammar_rules_created: u64,
}

/// Complete record of a finished run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationExport {
    pub simulation_parameters: SimulationParameters,
    pub generation_statistics: Vec<GenerationStats>,
    pub final_agent_data: Vec<AgentSummary>,
}
