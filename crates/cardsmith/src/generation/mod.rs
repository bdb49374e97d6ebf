//! Flashcard generation strategies.
//!
//! Strategies are tried in a fixed order by the pipeline. Each may return
//! fewer cards than requested, or fail; neither is fatal. The
//! [`FallbackGenerator`] is not a strategy: it always produces exactly the
//! requested number of cards and never touches the network.

mod fallback;
mod free_text;
mod keyword;
mod parser;
mod question;

pub use fallback::{FallbackGenerator, BLANK_MARKER, PLACEHOLDER_ANSWER};
pub use free_text::FreeTextStrategy;
pub use keyword::{template_question, KeywordStrategy, QUESTION_TEMPLATES};
pub use parser::parse_generated_flashcards;
pub use question::QuestionStrategy;

use crate::card::FlashcardCandidate;
use crate::error::Result;

/// Confidence of pairs parsed from free-text model output.
pub const CONFIDENCE_PARSED: f64 = 0.7;
/// Confidence of model-generated questions for a single sentence.
pub const CONFIDENCE_QUESTION: f64 = 0.8;
/// Confidence of keyword-template cards.
pub const CONFIDENCE_KEYWORD: f64 = 0.6;
/// Confidence of fallback fill-in-the-blank cards.
pub const CONFIDENCE_BLANK: f64 = 0.4;
/// Confidence of fallback concept cards.
pub const CONFIDENCE_CONCEPT: f64 = 0.3;
/// Confidence of fallback placeholder cards.
pub const CONFIDENCE_PLACEHOLDER: f64 = 0.1;

/// One way of turning notes into flashcard candidates.
pub trait GenerationStrategy: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Produce up to `count` candidates from `notes`.
    ///
    /// Returning fewer than `count` is allowed. Errors mark the strategy as
    /// having produced nothing for this request.
    fn generate(&self, notes: &str, count: usize) -> Result<Vec<FlashcardCandidate>>;
}
