//! Parsing of free-text model output into question/answer pairs.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::card::FlashcardCandidate;

use super::CONFIDENCE_PARSED;

/// Both sides of a parsed pair must be longer than this after trimming.
const MIN_PARSED_CHARS: usize = 5;

/// Start of any labelled pair, or end of input.
const NEXT_LABEL: &str = r"(?P<next>\b\d+\.\s*Q:|\bQ:|(?i:\bQuestion:)|\z)";

// Each pattern captures a question, an answer, and the start of the next
// pair so scanning can resume there.
static PAIR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // 1. Q: ... A: ...
        r"(?s)\b\d+\.\s*Q:\s*(?P<q>.+?)\s*\bA:\s*(?P<a>.+?)\s*",
        // Q: ... A: ...
        r"(?s)\bQ:\s*(?P<q>.+?)\s*\bA:\s*(?P<a>.+?)\s*",
        // Question: ... Answer: ...
        r"(?is)\bQuestion:\s*(?P<q>.+?)\s*\bAnswer:\s*(?P<a>.+?)\s*",
    ]
    .iter()
    .map(|pair| Regex::new(&format!("{pair}{NEXT_LABEL}")).unwrap())
    .collect()
});

// A question label inside a captured question means an earlier pair had no
// answer; only the text after the last label belongs to this pair.
static QUESTION_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d+\.\s*Q:|\bQ:|(?i:\bQuestion:)").unwrap());

/// Parse generated text into flashcard candidates.
///
/// A JSON array of `{"question": .., "answer": ..}` objects (optionally in a
/// markdown code block) is accepted first. Otherwise every labelled-pair
/// pattern is tried in turn, and each match that does not overlap an
/// already accepted one is kept. Results follow their order in the text.
pub fn parse_generated_flashcards(text: &str) -> Vec<FlashcardCandidate> {
    if let Some(cards) = parse_json_cards(text) {
        if !cards.is_empty() {
            return cards;
        }
    }

    let mut accepted: Vec<(Range<usize>, String, String)> = Vec::new();
    for pattern in PAIR_PATTERNS.iter() {
        for (span, question, answer) in scan_pairs(pattern, text) {
            let overlaps = accepted
                .iter()
                .any(|(taken, _, _)| span.start < taken.end && taken.start < span.end);
            if !overlaps {
                accepted.push((span, question, answer));
            }
        }
    }

    accepted.sort_by_key(|(span, _, _)| span.start);
    accepted
        .into_iter()
        .filter_map(|(_, question, answer)| make_candidate(&question, &answer))
        .collect()
}

/// Find all pairs for one pattern, resuming each search at the next label.
fn scan_pairs(pattern: &Regex, text: &str) -> Vec<(Range<usize>, String, String)> {
    let mut pairs = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = pattern.captures_at(text, pos) else {
            break;
        };
        let (Some(whole), Some(q), Some(a)) = (caps.get(0), caps.name("q"), caps.name("a")) else {
            break;
        };

        let end = caps.name("next").map_or(whole.end(), |next| next.start());
        pairs.push((
            whole.start()..end,
            last_question(q.as_str()).to_string(),
            a.as_str().to_string(),
        ));

        if end <= pos {
            break;
        }
        pos = end;
    }

    pairs
}

/// Text after the last question label in `question`, or all of it.
fn last_question(question: &str) -> &str {
    match QUESTION_LABEL.find_iter(question).last() {
        Some(label) => &question[label.end()..],
        None => question,
    }
}

/// Parse a JSON array of question/answer objects.
fn parse_json_cards(text: &str) -> Option<Vec<FlashcardCandidate>> {
    let json_str = if text.contains("```json") {
        text.split("```json")
            .nth(1)
            .and_then(|s| s.split("```").next())
            .map(|s| s.trim())
            .unwrap_or(text)
    } else {
        text.trim()
    };

    let items: Vec<Value> = serde_json::from_str(json_str).ok()?;
    Some(
        items
            .iter()
            .filter_map(|item| {
                let question = item.get("question")?.as_str()?;
                let answer = item.get("answer")?.as_str()?;
                make_candidate(question, answer)
            })
            .collect(),
    )
}

fn make_candidate(question: &str, answer: &str) -> Option<FlashcardCandidate> {
    let question = question.trim();
    let answer = answer.trim();
    if question.chars().count() > MIN_PARSED_CHARS && answer.chars().count() > MIN_PARSED_CHARS {
        Some(FlashcardCandidate::new(question, answer, CONFIDENCE_PARSED))
    } else {
        None
    }
}
