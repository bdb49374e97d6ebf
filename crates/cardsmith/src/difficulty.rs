//! Heuristic difficulty classification.

use crate::card::{Difficulty, FlashcardCandidate};

/// Verbs that mark a question as demanding higher-order thinking.
pub const COMPLEX_VERBS: [&str; 5] = ["analyze", "evaluate", "synthesize", "compare", "contrast"];

/// Classify a question/answer pair.
///
/// Hard if the question contains a complex verb or the answer runs past 20
/// words; medium if either side runs past 10 words; easy otherwise.
pub fn classify(question: &str, answer: &str) -> Difficulty {
    let question_words = question.split_whitespace().count();
    let answer_words = answer.split_whitespace().count();
    let lower = question.to_lowercase();

    if COMPLEX_VERBS.iter().any(|verb| lower.contains(verb)) || answer_words > 20 {
        Difficulty::Hard
    } else if question_words > 10 || answer_words > 10 {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Set the difficulty of each candidate in place.
pub fn classify_all(cards: &mut [FlashcardCandidate]) {
    for card in cards {
        card.difficulty = classify(&card.question, &card.answer);
    }
}
