//! Sentence scoring and key-sentence selection.
//!
//! Scores are additive and unnormalised. They are only meaningful for
//! ranking sentences of the same document against each other.

use std::cmp::Ordering;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::segmenter::split_sentences;

static CAPITALIZED_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+\b").unwrap());
static NUMBER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Academic cue phrases, grouped by category. A category contributes once
/// no matter how many of its phrases appear.
pub const CUE_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "definition",
        &["define", "definition", "meaning", "refers to", "is defined as"],
    ),
    ("process", &["process", "procedure", "method", "steps", "stages"]),
    (
        "cause_effect",
        &["because", "therefore", "as a result", "leads to", "causes"],
    ),
    (
        "comparison",
        &["compared to", "unlike", "similar to", "different from"],
    ),
    (
        "importance",
        &["important", "significant", "crucial", "essential", "key"],
    ),
];

/// Default number of key sentences kept when condensing notes.
pub const DEFAULT_KEY_SENTENCES: usize = 15;

/// A sentence paired with its importance score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub sentence: String,
    pub score: f64,
}

/// Score a sentence for flashcard-worthiness.
///
/// `full_text` is the document the sentence came from. The heuristic is
/// currently sentence-local and does not consult it.
pub fn score_sentence(sentence: &str, _full_text: &str) -> f64 {
    let mut score = 0.0;

    let word_count = sentence.split_whitespace().count();
    if (5..=25).contains(&word_count) {
        score += 1.0;
    } else if word_count < 5 {
        score -= 0.5;
    }

    score += 0.5 * matched_categories(sentence).len() as f64;
    score += 0.2 * CAPITALIZED_WORD.find_iter(sentence).count() as f64;
    score += 0.3 * NUMBER_TOKEN.find_iter(sentence).count() as f64;

    if sentence.trim_end().ends_with('?') {
        score += 0.5;
    }

    score
}

/// Names of the cue categories present in a sentence.
pub fn matched_categories(sentence: &str) -> Vec<&'static str> {
    let lower = sentence.to_lowercase();
    CUE_CATEGORIES
        .iter()
        .filter(|(_, phrases)| phrases.iter().any(|p| lower.contains(p)))
        .map(|(name, _)| *name)
        .collect()
}

/// Score every sentence of `text`, best first.
///
/// The sort is stable, so equally scored sentences keep document order.
pub fn rank_sentences(text: &str) -> Vec<SentenceScore> {
    let mut scored: Vec<SentenceScore> = split_sentences(text)
        .into_iter()
        .map(|sentence| {
            let score = score_sentence(&sentence, text);
            SentenceScore { sentence, score }
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored
}

/// Select the `max_count` most important sentences, best first.
pub fn select_key_sentences(text: &str, max_count: usize) -> Vec<String> {
    rank_sentences(text)
        .into_iter()
        .take(max_count)
        .map(|s| s.sentence)
        .collect()
}

/// Condense notes to their key sentences, joined on single spaces.
pub fn preprocess_notes(text: &str, max_sentences: usize) -> String {
    let joined = select_key_sentences(text, max_sentences).join(" ");
    WHITESPACE.replace_all(&joined, " ").trim().to_string()
}
