//! Language Samples
//!
//! Read-only inspection of one agent's current language, for display and
//! diagnostics. Sampling never mutates simulation state.

use serde::{Deserialize, Serialize};

/// One grammar rule as reported in a sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSample {
    pub pattern: String,
    pub replacement: String,
    pub frequency: f32,
}

/// A snapshot of one agent's language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageSample {
    pub agent_id: usize,
    pub generation: u64,
    /// Highest-weighted words, descending
    pub vocabulary_sample: Vec<String>,
    /// The agent's first grammar rules, in creation order
    pub grammar_rules_sample: Vec<RuleSample>,
    pub total_vocabulary_size: usize,
    pub total_grammar_rules: usize,
    pub language_complexity: f32,
}
