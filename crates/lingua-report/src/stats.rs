//! Per-Generation Statistics
//!
//! Population-wide aggregates captured after every generation. The ordered
//! sequence of these snapshots is append-only and is the canonical input to
//! all downstream reporting and visualization.

use serde::{Deserialize, Serialize};

/// Statistics snapshot for a single generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation index this snapshot was taken after
    pub generation: u64,
    /// Mean vocabulary size across the population
    pub avg_vocabulary_size: f64,
    /// Mean grammar rule count across the population
    pub avg_grammar_rules: f64,
    /// Mean language complexity across the population
    pub avg_language_complexity: f64,
    /// Mean lifetime communication success rate across the population
    pub avg_communication_success: f64,
    /// Count of distinct words across all vocabularies (set union)
    pub total_unique_words: usize,
    /// Interaction graph density (edges / possible edges)
    pub network_density: f64,
}
