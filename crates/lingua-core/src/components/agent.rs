//! Agent Component
//!
//! An independent simulated entity owning a private, evolving language.
//! Agents never read or write each other's state; all cross-agent influence
//! arrives through immutable [`Message`] values.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

use lingua_report::AgentSummary;

use crate::actions::message::{Message, MessageKind};
use crate::systems::drift::{drift_content, drift_word};

use super::grammar::{GrammarRule, MIN_RULE_FREQUENCY};
use super::vocabulary::{Vocabulary, LOW_WEIGHT_THRESHOLD};

/// Unique identifier for an agent, dense in `0..population_size`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A received message together with how it was interpreted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedMessage {
    pub message: Message,
    /// Content after any transit corruption; what the agent actually learned
    pub interpreted_content: String,
    pub success: bool,
}

// Language complexity is a weighted linear combination of vocabulary size,
// grammar rule count, and total meaning count.
const VOCAB_COMPLEXITY_WEIGHT: f32 = 0.1;
const GRAMMAR_COMPLEXITY_WEIGHT: f32 = 0.2;
const MEANING_COMPLEXITY_WEIGHT: f32 = 0.05;

/// An independent agent with a private, evolving language.
///
/// Agents are created once at simulation start and mutate in place for the
/// simulation's lifetime; they are never destroyed mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    id: AgentId,
    generation: u64,
    vocabulary: Vocabulary,
    grammar_rules: Vec<GrammarRule>,
    history: VecDeque<ReceivedMessage>,
    history_limit: Option<usize>,
    successful_communications: u64,
    total_communications: u64,
    unique_words_created: u64,
    grammar_rules_created: u64,
    language_complexity: f32,
}

impl Agent {
    /// Create an agent with a seed vocabulary and the starter grammar.
    pub fn new<I, S>(id: AgentId, seed_words: I, history_limit: Option<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut agent = Self {
            id,
            generation: 0,
            vocabulary: Vocabulary::from_seed_words(seed_words),
            grammar_rules: GrammarRule::starter_set(),
            history: VecDeque::new(),
            history_limit,
            successful_communications: 0,
            total_communications: 0,
            unique_words_created: 0,
            grammar_rules_created: 0,
            language_complexity: 0.0,
        };
        agent.language_complexity = agent.calculate_complexity();
        agent
    }

    /// Compose a message of the given category for a target agent. The raw
    /// content is rendered through this agent's grammar pipeline; both forms
    /// are kept on the message.
    pub fn generate_message(
        &self,
        rng: &mut SmallRng,
        kind: MessageKind,
        receiver: AgentId,
    ) -> Message {
        let original_content = kind.compose(rng, &self.vocabulary);
        let content = self.apply_grammar_rules(rng, &original_content);
        Message {
            sender: self.id,
            receiver,
            kind,
            generation: self.generation,
            content,
            original_content,
        }
    }

    /// Run the grammar pipeline over raw content. Rules fire in creation
    /// order, each an independent draw at its own frequency, and a firing
    /// rule replaces the first occurrence of its pattern. Order matters:
    /// earlier substitutions can feed later patterns.
    fn apply_grammar_rules(&self, rng: &mut SmallRng, content: &str) -> String {
        let mut rendered = content.to_string();
        for rule in &self.grammar_rules {
            if rng.gen::<f32>() < rule.frequency && rendered.contains(&rule.pattern) {
                rendered = rendered.replacen(&rule.pattern, &rule.replacement, 1);
            }
        }
        rendered
    }

    /// Interpret an incoming message. With probability `error_rate` the
    /// content is corrupted in transit and the exchange counts as failed;
    /// either way the agent learns from what it heard, and the exchange is
    /// appended to the history log.
    pub fn receive_message(
        &mut self,
        rng: &mut SmallRng,
        message: &Message,
        error_rate: f32,
    ) -> bool {
        self.total_communications += 1;

        let (interpreted_content, success) = if rng.gen::<f32>() < error_rate {
            (drift_content(rng, &message.content), false)
        } else {
            (message.content.clone(), true)
        };

        self.learn_from(&interpreted_content);
        self.push_history(ReceivedMessage {
            message: message.clone(),
            interpreted_content,
            success,
        });

        if success {
            self.successful_communications += 1;
        }
        success
    }

    fn learn_from(&mut self, content: &str) {
        for word in content.split_whitespace() {
            if self.vocabulary.learn(word) {
                self.unique_words_created += 1;
            }
        }
        self.language_complexity = self.calculate_complexity();
    }

    fn push_history(&mut self, received: ReceivedMessage) {
        self.history.push_back(received);
        if let Some(limit) = self.history_limit {
            while self.history.len() > limit {
                self.history.pop_front();
            }
        }
    }

    /// One generation of drift: vocabulary spellings wander, weak entries
    /// die out, grammar rules mutate, and occasionally a new rule appears.
    pub fn evolve_language(&mut self, rng: &mut SmallRng, mutation_rate: f32) {
        self.mutate_vocabulary(rng, mutation_rate);
        self.mutate_grammar(rng, mutation_rate);
        self.language_complexity = self.calculate_complexity();
        self.generation += 1;
    }

    fn mutate_vocabulary(&mut self, rng: &mut SmallRng, mutation_rate: f32) {
        let entries: Vec<(String, f32)> = self
            .vocabulary
            .words()
            .map(|(word, weight)| (word.to_string(), weight))
            .collect();

        for (word, weight) in entries {
            if rng.gen::<f32>() >= mutation_rate {
                continue;
            }
            if weight < LOW_WEIGHT_THRESHOLD {
                self.vocabulary.remove(&word);
            } else {
                // Renaming, not duplicating: weight and meanings move with
                // the new spelling.
                let drifted = drift_word(rng, &word);
                self.vocabulary.rename(&word, &drifted);
            }
        }
    }

    fn mutate_grammar(&mut self, rng: &mut SmallRng, mutation_rate: f32) {
        let mut kept = Vec::with_capacity(self.grammar_rules.len());
        for mut rule in self.grammar_rules.drain(..) {
            if rng.gen::<f32>() < mutation_rate {
                if rule.frequency < MIN_RULE_FREQUENCY {
                    continue;
                }
                rule.pattern = drift_word(rng, &rule.pattern);
                rule.replacement = drift_word(rng, &rule.replacement);
                rule.perturb_frequency(rng.gen_range(-0.1..0.1));
            }
            kept.push(rule);
        }
        self.grammar_rules = kept;

        if rng.gen::<f32>() < mutation_rate * 2.0 {
            let rule = GrammarRule::synthesize(rng, self.generation);
            self.grammar_rules.push(rule);
            self.grammar_rules_created += 1;
        }
    }

    fn calculate_complexity(&self) -> f32 {
        self.vocabulary.len() as f32 * VOCAB_COMPLEXITY_WEIGHT
            + self.grammar_rules.len() as f32 * GRAMMAR_COMPLEXITY_WEIGHT
            + self.vocabulary.total_meanings() as f32 * MEANING_COMPLEXITY_WEIGHT
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Generations this agent has lived through
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Grammar rules in creation order
    pub fn grammar_rules(&self) -> &[GrammarRule] {
        &self.grammar_rules
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn grammar_rule_count(&self) -> usize {
        self.grammar_rules.len()
    }

    pub fn language_complexity(&self) -> f32 {
        self.language_complexity
    }

    /// Received messages retained for diagnostics, oldest first
    pub fn history(&self) -> impl Iterator<Item = &ReceivedMessage> {
        self.history.iter()
    }

    pub fn total_communications(&self) -> u64 {
        self.total_communications
    }

    pub fn successful_communications(&self) -> u64 {
        self.successful_communications
    }

    pub fn unique_words_created(&self) -> u64 {
        self.unique_words_created
    }

    pub fn grammar_rules_created(&self) -> u64 {
        self.grammar_rules_created
    }

    /// Lifetime success rate; exactly 0.0 before any communication.
    pub fn communication_success_rate(&self) -> f64 {
        if self.total_communications == 0 {
            0.0
        } else {
            self.successful_communications as f64 / self.total_communications as f64
        }
    }

    /// Final summary row for the export document.
    pub fn summary(&self) -> AgentSummary {
        AgentSummary {
            agent_id: self.id.0,
            generation: self.generation,
            vocabulary_size: self.vocabulary_size(),
            grammar_rules_count: self.grammar_rule_count(),
            language_complexity: self.language_complexity,
            communication_success_rate: self.communication_success_rate(),
            unique_words_created: self.unique_words_created,
            grammar_rules_created: self.grammar_rules_created,
        }
    }
}
