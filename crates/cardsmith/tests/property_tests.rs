//! Property-based tests for Cardsmith.
//!
//! These tests use proptest to generate random notes and candidates and
//! verify that generation, validation and classification keep their
//! invariants under all inputs.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p cardsmith --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p cardsmith --test property_tests
//! ```

use std::collections::HashSet;

use proptest::prelude::*;

use cardsmith::generation::{parse_generated_flashcards, FallbackGenerator};
use cardsmith::text::{extract_concepts, split_sentences, MAX_CONCEPT_CHARS, MIN_CONCEPT_CHARS};
use cardsmith::{
    classify, validate, CardsmithError, Difficulty, FlashcardCandidate, FlashcardPipeline,
    GeneratorConfig,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Sentences built from capitalized and lowercase words.
fn note_like() -> impl Strategy<Value = String> {
    prop::collection::vec("[A-Z][a-z]{2,10}( [a-z]{1,12}){2,14}[.?!]", 0..8)
        .prop_map(|sentences| sentences.join(" "))
}

/// Arbitrary printable text, including quotes and parentheses.
fn any_text() -> impl Strategy<Value = String> {
    "\\PC{0,300}"
}

fn candidate() -> impl Strategy<Value = FlashcardCandidate> {
    (
        prop_oneof!["[ a-zA-Z?]{0,12}", "(What|Why|How) (is|are) [a-z]{1,6}\\?"],
        "[ a-z]{0,8}",
    )
        .prop_map(|(question, answer)| FlashcardCandidate::new(question, answer, 0.5))
}

// =============================================================================
// Fallback Properties
// =============================================================================

mod fallback_tests {
    use super::*;

    proptest! {
        /// Fallback output length always equals the requested count.
        #[test]
        fn yields_exactly_count(notes in any_text(), count in 0usize..40) {
            let cards = FallbackGenerator::new().generate(&notes, count);
            prop_assert_eq!(cards.len(), count);
        }

        /// Fallback output is a pure function of its input.
        #[test]
        fn is_deterministic(notes in note_like(), count in 1usize..12) {
            let generator = FallbackGenerator::new();
            prop_assert_eq!(generator.generate(&notes, count), generator.generate(&notes, count));
        }

        /// Confidence reflects one of the three fallback provenances.
        #[test]
        fn confidences_are_fallback_levels(notes in note_like(), count in 1usize..12) {
            for card in FallbackGenerator::new().generate(&notes, count) {
                prop_assert!([0.1, 0.3, 0.4].contains(&card.confidence));
            }
        }
    }
}

// =============================================================================
// Validator Properties
// =============================================================================

mod validator_tests {
    use super::*;

    proptest! {
        /// Every kept card meets the length minimums and questions are unique.
        #[test]
        fn kept_cards_meet_invariants(cards in prop::collection::vec(candidate(), 0..30)) {
            let kept = validate(cards);
            let mut seen = HashSet::new();
            for card in &kept {
                prop_assert!(card.question.trim().chars().count() >= 5);
                prop_assert!(card.answer.trim().chars().count() >= 3);
                prop_assert!(seen.insert(card.question.trim().to_lowercase()));
            }
        }

        /// Kept cards are an unmodified subsequence of the input.
        #[test]
        fn preserves_order_without_edits(cards in prop::collection::vec(candidate(), 0..30)) {
            let kept = validate(cards.clone());
            let mut remaining = cards.iter();
            for card in &kept {
                prop_assert!(remaining.any(|original| original == card));
            }
        }

        /// Validating twice changes nothing.
        #[test]
        fn is_idempotent(cards in prop::collection::vec(candidate(), 0..30)) {
            let once = validate(cards);
            prop_assert_eq!(validate(once.clone()), once);
        }
    }
}

// =============================================================================
// Classifier Properties
// =============================================================================

mod classifier_tests {
    use super::*;

    proptest! {
        /// Classification depends only on its inputs.
        #[test]
        fn is_pure(question in any_text(), answer in any_text()) {
            prop_assert_eq!(classify(&question, &answer), classify(&question, &answer));
        }

        /// A complex verb in the question always means hard.
        #[test]
        fn complex_verb_is_hard(
            prefix in "[a-z ]{0,40}",
            verb in prop::sample::select(vec!["analyze", "evaluate", "synthesize", "compare", "contrast"]),
            answer in "[a-z ]{0,80}",
        ) {
            let question = format!("{}{}", prefix, verb);
            prop_assert_eq!(classify(&question, &answer), Difficulty::Hard);
        }

        /// Short plain questions with short answers are easy.
        #[test]
        fn short_pairs_are_easy(
            question in prop::collection::vec("[b-z]{1,4}", 1..=10),
            answer in prop::collection::vec("[b-z]{1,4}", 1..=10),
        ) {
            let question = question.join(" ");
            prop_assert_eq!(classify(&question, &answer.join(" ")), Difficulty::Easy);
        }
    }
}

// =============================================================================
// Text Properties
// =============================================================================

mod text_tests {
    use super::*;

    proptest! {
        /// Concepts are unique and within the length bounds.
        #[test]
        fn concepts_are_bounded_and_unique(text in any_text()) {
            let concepts = extract_concepts(&text);
            let unique: HashSet<_> = concepts.iter().collect();
            prop_assert_eq!(unique.len(), concepts.len());
            for concept in &concepts {
                let len = concept.chars().count();
                prop_assert!(len > MIN_CONCEPT_CHARS && len < MAX_CONCEPT_CHARS);
            }
        }

        /// Sentences are trimmed and non-empty.
        #[test]
        fn sentences_are_trimmed(text in any_text()) {
            for sentence in split_sentences(&text) {
                prop_assert!(!sentence.is_empty());
                prop_assert_eq!(sentence.trim(), sentence.as_str());
            }
        }

        /// A labelled pair with long enough sides parses back to itself.
        #[test]
        fn labelled_pair_round_trip(
            question in "[B-PR-Z][a-z]{5,20}\\?",
            answer in "[B-PR-Z][a-z]{5,20}\\.",
        ) {
            let cards = parse_generated_flashcards(&format!("Q: {} A: {}", question, answer));
            prop_assert_eq!(cards.len(), 1);
            prop_assert_eq!(&cards[0].question, &question);
            prop_assert_eq!(&cards[0].answer, &answer);
        }
    }
}

// =============================================================================
// Pipeline Properties
// =============================================================================

mod pipeline_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Offline runs either return at most `count` valid cards or report
        /// insufficient content; they never fail otherwise.
        #[test]
        fn offline_run_is_total(notes in note_like(), count in 1usize..10) {
            let pipeline = FlashcardPipeline::new(GeneratorConfig::new());
            match pipeline.run(&notes, count) {
                Ok(outcome) => {
                    prop_assert!(outcome.flashcards.len() <= count);
                    prop_assert_eq!(outcome.report.generated, outcome.flashcards.len());
                    prop_assert_eq!(
                        outcome.report.rejected + outcome.report.generated,
                        count
                    );
                }
                Err(CardsmithError::InsufficientContent { required, produced }) => {
                    prop_assert!(produced < required);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }
}
