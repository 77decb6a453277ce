//! Grammar Rules
//!
//! Weighted pattern-to-replacement text substitutions applied while a
//! message is rendered. Rules are agent-local and fire in creation order,
//! so earlier substitutions can feed later patterns within one message.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rules below this frequency are eligible for removal during evolution;
/// perturbation never drives a surviving rule below it.
pub const MIN_RULE_FREQUENCY: f32 = 0.1;

/// Upper bound on the frequency of a freshly synthesized rule
const MAX_SYNTHESIZED_FREQUENCY: f32 = 0.8;

/// Candidate patterns for synthesized rules
const RULE_PATTERNS: &[&str] = &["the", "a", "and", "or", "but", "is", "are", "was", "were"];

/// Candidate replacements for synthesized rules
const RULE_REPLACEMENTS: &[&str] = &[
    "da", "an", "und", "oder", "aber", "ist", "sind", "war", "waren",
];

/// An ordered pattern→replacement substitution with a firing probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarRule {
    pub pattern: String,
    pub replacement: String,
    /// Probability the rule fires on a given message, in [0.1, 1.0]
    pub frequency: f32,
    /// Generation at which this rule was created
    pub generation_created: u64,
}

impl GrammarRule {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        frequency: f32,
        generation_created: u64,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
            frequency: frequency.clamp(MIN_RULE_FREQUENCY, 1.0),
            generation_created,
        }
    }

    /// Synthesize a brand-new rule from the candidate lexicon.
    pub fn synthesize(rng: &mut SmallRng, generation: u64) -> Self {
        let pattern = RULE_PATTERNS[rng.gen_range(0..RULE_PATTERNS.len())];
        let replacement = RULE_REPLACEMENTS[rng.gen_range(0..RULE_REPLACEMENTS.len())];
        let frequency = rng.gen_range(MIN_RULE_FREQUENCY..MAX_SYNTHESIZED_FREQUENCY);
        Self::new(pattern, replacement, frequency, generation)
    }

    /// Nudge the firing frequency by a small signed offset. A surviving rule
    /// stays inside [0.1, 1.0].
    pub fn perturb_frequency(&mut self, delta: f32) {
        self.frequency = (self.frequency + delta).clamp(MIN_RULE_FREQUENCY, 1.0);
    }

    /// The starter rules every agent begins with.
    pub fn starter_set() -> Vec<GrammarRule> {
        vec![
            GrammarRule::new("greeting", "hello", 1.0, 0),
            GrammarRule::new("farewell", "goodbye", 1.0, 0),
            GrammarRule::new("agreement", "yes", 1.0, 0),
            GrammarRule::new("disagreement", "no", 1.0, 0),
            GrammarRule::new("question_marker", "?", 0.8, 0),
            GrammarRule::new("statement_marker", ".", 0.9, 0),
        ]
    }
}
