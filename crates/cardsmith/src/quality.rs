//! Quality validation of flashcard candidates.

use std::collections::HashSet;

use crate::card::FlashcardCandidate;

/// Minimum trimmed question length, in characters.
pub const MIN_QUESTION_CHARS: usize = 5;

/// Minimum trimmed answer length, in characters.
pub const MIN_ANSWER_CHARS: usize = 3;

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    QuestionTooShort,
    AnswerTooShort,
    DuplicateQuestion,
}

/// Drop short and duplicate candidates, preserving order.
///
/// A candidate is dropped if its trimmed question is shorter than
/// [`MIN_QUESTION_CHARS`], its trimmed answer shorter than
/// [`MIN_ANSWER_CHARS`], or its question case-insensitively repeats one
/// already kept. Kept candidates are never modified.
pub fn validate(candidates: Vec<FlashcardCandidate>) -> Vec<FlashcardCandidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|card| check(card, &mut seen).is_ok())
        .collect()
}

/// Check one candidate against the questions kept so far.
///
/// On success the candidate's question is recorded in `seen`.
pub fn check(card: &FlashcardCandidate, seen: &mut HashSet<String>) -> Result<(), Rejection> {
    let question = card.question.trim();
    if question.chars().count() < MIN_QUESTION_CHARS {
        return Err(Rejection::QuestionTooShort);
    }
    if card.answer.trim().chars().count() < MIN_ANSWER_CHARS {
        return Err(Rejection::AnswerTooShort);
    }
    if !seen.insert(question.to_lowercase()) {
        return Err(Rejection::DuplicateQuestion);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(question: &str, answer: &str) -> FlashcardCandidate {
        FlashcardCandidate::new(question, answer, 0.5)
    }

    #[test]
    fn test_drops_short_cards() {
        let kept = validate(vec![
            card("Why?", "Because of gravity."),
            card("What is ATP?", "No"),
            card("  What   ", "ATP"),
            card("What is ATP?", "  ATP  "),
        ]);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].answer, "  ATP  ");
    }

    #[test]
    fn test_first_duplicate_wins() {
        let kept = validate(vec![
            card("What is ATP?", "Energy currency"),
            card("what is atp?", "Adenosine triphosphate"),
            card("  WHAT IS ATP?  ", "Something else"),
            card("What is ADP?", "Spent ATP"),
        ]);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].answer, "Energy currency");
        assert_eq!(kept[1].question, "What is ADP?");
    }

    #[test]
    fn test_rejected_short_card_does_not_block_later_duplicate() {
        let kept = validate(vec![
            card("What is ATP?", "No"),
            card("What is ATP?", "Energy currency"),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].answer, "Energy currency");
    }

    #[test]
    fn test_check_reports_reason() {
        let mut seen = HashSet::new();
        assert_eq!(check(&card("Hi", "Hello"), &mut seen), Err(Rejection::QuestionTooShort));
        assert_eq!(check(&card("Hello there", "Hi"), &mut seen), Err(Rejection::AnswerTooShort));
        assert_eq!(check(&card("Hello there", "Hey"), &mut seen), Ok(()));
        assert_eq!(
            check(&card("HELLO THERE", "Hey"), &mut seen),
            Err(Rejection::DuplicateQuestion)
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(validate(Vec::new()).is_empty());
    }
}
