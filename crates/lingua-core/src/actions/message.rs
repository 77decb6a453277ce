//! Messages
//!
//! Category-tagged messages built from the sender's current vocabulary.
//! Each category owns its content shape as a pure function of a vocabulary;
//! there is no stringly-typed dispatch on category names.

use rand::rngs::SmallRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::agent::AgentId;
use crate::components::vocabulary::Vocabulary;

/// Openers a greeting can use
const GREETINGS: &[&str] = &["hello", "hi", "hey"];

/// Interrogative words that start a question
const INTERROGATIVES: &[&str] = &["what", "how", "why", "when", "where"];

/// Politeness marker that starts a request
const POLITENESS_MARKER: &str = "please";

/// The five message categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Greeting,
    Question,
    Statement,
    Request,
    Response,
}

impl MessageKind {
    /// All categories, for uniform sampling.
    pub const ALL: [MessageKind; 5] = [
        MessageKind::Greeting,
        MessageKind::Question,
        MessageKind::Statement,
        MessageKind::Request,
        MessageKind::Response,
    ];

    /// Compose raw (pre-grammar) content for this category. Content words
    /// are sampled from the highest-weighted vocabulary entries, ties broken
    /// lexicographically.
    pub fn compose(self, rng: &mut SmallRng, vocabulary: &Vocabulary) -> String {
        match self {
            MessageKind::Greeting => pick(rng, GREETINGS).to_string(),
            MessageKind::Question => {
                let opener = pick(rng, INTERROGATIVES);
                match sample_ranked(rng, vocabulary, 0, 5) {
                    Some(word) => format!("{} {}", opener, word),
                    None => opener.to_string(),
                }
            }
            MessageKind::Statement => {
                let subject = sample_ranked(rng, vocabulary, 0, 3);
                let predicate = sample_ranked(rng, vocabulary, 3, 6);
                match (subject, predicate) {
                    (Some(subject), Some(predicate)) => format!("{} {}", subject, predicate),
                    (Some(subject), None) => subject,
                    _ => String::new(),
                }
            }
            MessageKind::Request => match sample_ranked(rng, vocabulary, 0, 4) {
                Some(word) => format!("{} {}", POLITENESS_MARKER, word),
                None => POLITENESS_MARKER.to_string(),
            },
            MessageKind::Response => sample_ranked(rng, vocabulary, 0, 2).unwrap_or_default(),
        }
    }
}

/// Pick one element uniformly.
fn pick<'a>(rng: &mut SmallRng, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Sample one word uniformly from the weight-ranked band `[lo, hi)` of the
/// vocabulary, falling back to whatever range exists when the vocabulary is
/// smaller. Returns `None` only for an empty vocabulary.
fn sample_ranked(
    rng: &mut SmallRng,
    vocabulary: &Vocabulary,
    lo: usize,
    hi: usize,
) -> Option<String> {
    let ranked = vocabulary.top_words(hi);
    if ranked.is_empty() {
        return None;
    }
    let lo = lo.min(ranked.len() - 1);
    let idx = rng.gen_range(lo..ranked.len());
    Some(ranked[idx].0.to_string())
}

/// An immutable record of one sender→receiver exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: AgentId,
    pub receiver: AgentId,
    pub kind: MessageKind,
    /// Sender's generation at send time
    pub generation: u64,
    /// Rendered content, after the sender's grammar rules
    pub content: String,
    /// Raw content before the grammar pipeline, kept for diagnostics
    pub original_content: String,
}
