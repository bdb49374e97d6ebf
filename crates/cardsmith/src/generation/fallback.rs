//! Deterministic, network-free flashcard generation.

use crate::card::FlashcardCandidate;
use crate::text::{extract_concepts, find_context, Segmenter};

use super::{CONFIDENCE_BLANK, CONFIDENCE_CONCEPT, CONFIDENCE_PLACEHOLDER};

/// Replaces the blanked word in fill-in-the-blank questions.
pub const BLANK_MARKER: &str = "______";

/// Answer used for padding cards.
pub const PLACEHOLDER_ANSWER: &str = "Please review your study notes for this concept.";

/// Sentences need more than this many words to be blanked.
const MIN_BLANK_SENTENCE_WORDS: usize = 5;

/// Blanked words must be longer than this many characters.
const MIN_BLANK_WORD_CHARS: usize = 4;

/// Local generator that always yields exactly the requested number of cards.
///
/// Half of the cards (rounded down) come from concepts, the rest from
/// fill-in-the-blank sentences, and any shortfall is padded with review
/// placeholders.
#[derive(Debug, Clone, Default)]
pub struct FallbackGenerator {
    segmenter: Segmenter,
}

impl FallbackGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmenter(segmenter: Segmenter) -> Self {
        Self { segmenter }
    }

    /// Generate exactly `count` candidates from `notes`.
    pub fn generate(&self, notes: &str, count: usize) -> Vec<FlashcardCandidate> {
        let sentences = self.segmenter.segment(notes);
        let mut cards = Vec::new();

        for concept in extract_concepts(notes).iter().take(count / 2) {
            let answer = find_context(concept, &sentences)
                .map(str::to_string)
                .unwrap_or_else(|| format!("This relates to {}", concept));
            cards.push(FlashcardCandidate::new(
                format!("What is {}?", concept),
                answer,
                CONFIDENCE_CONCEPT,
            ));
        }

        for sentence in &sentences {
            if cards.len() >= count {
                break;
            }
            if let Some(card) = blank_card(sentence) {
                cards.push(card);
            }
        }

        while cards.len() < count {
            cards.push(FlashcardCandidate::new(
                format!("Review question {}", cards.len() + 1),
                PLACEHOLDER_ANSWER,
                CONFIDENCE_PLACEHOLDER,
            ));
        }

        cards
    }
}

/// Build a fill-in-the-blank card by blanking the first long alphabetic word.
fn blank_card(sentence: &str) -> Option<FlashcardCandidate> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() <= MIN_BLANK_SENTENCE_WORDS {
        return None;
    }

    let word = words.iter().find(|w| {
        w.chars().count() > MIN_BLANK_WORD_CHARS && w.chars().all(char::is_alphabetic)
    })?;
    let blanked = sentence.replacen(word, BLANK_MARKER, 1);

    Some(FlashcardCandidate::new(
        format!("Fill in the blank: {}", blanked),
        *word,
        CONFIDENCE_BLANK,
    ))
}
