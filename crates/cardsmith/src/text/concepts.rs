//! Key-concept extraction.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static CAPITALIZED_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*\b").unwrap());
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)""#).unwrap());
static PARENTHETICAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Concepts must be longer than this many characters.
pub const MIN_CONCEPT_CHARS: usize = 2;

/// Concepts must be shorter than this many characters.
pub const MAX_CONCEPT_CHARS: usize = 50;

/// Extract candidate key terms from text.
///
/// Capitalized runs, double-quoted terms and parenthesized terms are
/// unioned and deduplicated. The result keeps first-discovery order
/// (capitalized runs, then quoted, then parenthetical) so repeated calls
/// on the same text agree.
pub fn extract_concepts(text: &str) -> Vec<String> {
    let mut concepts: IndexSet<String> = IndexSet::new();

    for m in CAPITALIZED_RUN.find_iter(text) {
        concepts.insert(m.as_str().to_string());
    }
    for pattern in [&*QUOTED, &*PARENTHETICAL] {
        for caps in pattern.captures_iter(text) {
            if let Some(inner) = caps.get(1) {
                concepts.insert(inner.as_str().to_string());
            }
        }
    }

    concepts.into_iter().filter(|c| is_valid_concept(c)).collect()
}

/// Whether a term has an acceptable concept length.
pub fn is_valid_concept(term: &str) -> bool {
    let len = term.chars().count();
    len > MIN_CONCEPT_CHARS && len < MAX_CONCEPT_CHARS
}

/// First sentence mentioning `concept`, compared case-insensitively.
pub fn find_context<'a>(concept: &str, sentences: &'a [String]) -> Option<&'a str> {
    let needle = concept.to_lowercase();
    sentences
        .iter()
        .find(|s| s.to_lowercase().contains(&needle))
        .map(String::as_str)
}
