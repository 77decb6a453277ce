//! Vocabulary Component
//!
//! An agent's known words, each carrying a confidence weight in [0, 1] and a
//! set of associated meanings. The weight map and the meaning map always
//! hold exactly the same keys, and every meaning set is non-empty.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Weight assigned to a word heard for the first time
pub const INITIAL_WORD_WEIGHT: f32 = 0.1;

/// Weight gained each time a known word is heard again
pub const REINFORCEMENT_STEP: f32 = 0.05;

/// Words below this weight are eligible for removal during evolution
pub const LOW_WEIGHT_THRESHOLD: f32 = 0.1;

/// An agent's private lexicon.
///
/// Backed by ordered maps so iteration is deterministic; ranking ties break
/// by lexicographic order rather than incidental insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    words: BTreeMap<String, f32>,
    meanings: BTreeMap<String, BTreeSet<String>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vocabulary from seed words, each at full confidence and
    /// carrying itself as its only meaning.
    pub fn from_seed_words<I, S>(seed_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::new();
        for word in seed_words {
            let word = word.into();
            vocabulary
                .meanings
                .insert(word.clone(), BTreeSet::from([word.clone()]));
            vocabulary.words.insert(word, 1.0);
        }
        vocabulary
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn weight(&self, word: &str) -> Option<f32> {
        self.words.get(word).copied()
    }

    pub fn meanings(&self, word: &str) -> Option<&BTreeSet<String>> {
        self.meanings.get(word)
    }

    /// All words with their weights, in lexicographic order.
    pub fn words(&self) -> impl Iterator<Item = (&str, f32)> {
        self.words.iter().map(|(word, &weight)| (word.as_str(), weight))
    }

    /// Learn a word from a received message: unknown words enter at a low
    /// initial weight with a singleton meaning set, known words are
    /// reinforced with saturation at 1.0. Returns `true` when the word was
    /// newly coined.
    pub fn learn(&mut self, word: &str) -> bool {
        if let Some(weight) = self.words.get_mut(word) {
            *weight = (*weight + REINFORCEMENT_STEP).min(1.0);
            false
        } else {
            self.words.insert(word.to_string(), INITIAL_WORD_WEIGHT);
            self.meanings
                .insert(word.to_string(), BTreeSet::from([word.to_string()]));
            true
        }
    }

    /// Replace a word's spelling while preserving its weight and meaning
    /// set. A collision with an existing entry overwrites it: drift can
    /// converge a mutated form onto another known word.
    pub fn rename(&mut self, old: &str, new: &str) {
        if old == new {
            return;
        }
        if let (Some(weight), Some(meanings)) =
            (self.words.remove(old), self.meanings.remove(old))
        {
            self.words.insert(new.to_string(), weight);
            self.meanings.insert(new.to_string(), meanings);
        }
    }

    /// Drop a word from both maps.
    pub fn remove(&mut self, word: &str) {
        self.words.remove(word);
        self.meanings.remove(word);
    }

    /// The `n` highest-weighted words, descending, ties broken by
    /// lexicographic order.
    pub fn top_words(&self, n: usize) -> Vec<(&str, f32)> {
        let mut ranked: Vec<(&str, f32)> = self.words().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        ranked.truncate(n);
        ranked
    }

    /// Total meanings across all words, for the complexity score.
    pub fn total_meanings(&self) -> usize {
        self.meanings.values().map(|set| set.len()).sum()
    }

    /// Structural invariant: weight keys and meaning keys are identical and
    /// every meaning set is non-empty.
    pub fn is_consistent(&self) -> bool {
        self.words.len() == self.meanings.len()
            && self
                .words
                .keys()
                .all(|word| self.meanings.get(word).is_some_and(|set| !set.is_empty()))
    }
}
