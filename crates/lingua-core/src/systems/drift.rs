//! Language Drift
//!
//! A single word-corruption operator models both transit noise between
//! agents and spontaneous drift inside one agent's language.

use rand::rngs::SmallRng;
use rand::Rng;

/// Probability that any given word of a corrupted message is mutated
const WORD_CORRUPTION_CHANCE: f32 = 0.3;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// The four single-character edits drift can apply to a word
#[derive(Debug, Clone, Copy)]
enum EditOp {
    Substitute,
    Insert,
    Delete,
    Transpose,
}

const EDIT_OPS: [EditOp; 4] = [
    EditOp::Substitute,
    EditOp::Insert,
    EditOp::Delete,
    EditOp::Transpose,
];

fn random_letter(rng: &mut SmallRng) -> char {
    ALPHABET[rng.gen_range(0..ALPHABET.len())] as char
}

/// Apply one random single-character edit at a uniformly chosen position.
/// Words of length one are returned unchanged.
pub fn drift_word(rng: &mut SmallRng, word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 {
        return word.to_string();
    }

    match EDIT_OPS[rng.gen_range(0..EDIT_OPS.len())] {
        EditOp::Substitute => {
            let pos = rng.gen_range(0..chars.len());
            chars[pos] = random_letter(rng);
        }
        EditOp::Insert => {
            let pos = rng.gen_range(0..=chars.len());
            chars.insert(pos, random_letter(rng));
        }
        EditOp::Delete => {
            let pos = rng.gen_range(0..chars.len());
            chars.remove(pos);
        }
        EditOp::Transpose => {
            let pos = rng.gen_range(0..chars.len() - 1);
            chars.swap(pos, pos + 1);
        }
    }
    chars.into_iter().collect()
}

/// Corrupt message content word by word: each whitespace token is drifted
/// with a fixed chance, the rest pass through unchanged.
pub fn drift_content(rng: &mut SmallRng, content: &str) -> String {
    content
        .split_whitespace()
        .map(|word| {
            if rng.gen::<f32>() < WORD_CORRUPTION_CHANCE {
                drift_word(rng, word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
