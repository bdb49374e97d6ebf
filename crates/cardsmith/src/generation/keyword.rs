//! Keyword-template generation, no model involved.

use crate::card::FlashcardCandidate;
use crate::error::Result;
use crate::text::{extract_concepts, find_context, Segmenter};

use super::{GenerationStrategy, CONFIDENCE_KEYWORD};

/// Question templates, rotated across a batch. `{}` is the concept.
pub const QUESTION_TEMPLATES: [&str; 5] = [
    "What is {}?",
    "Define {}.",
    "Explain the concept of {}.",
    "What do you know about {}?",
    "Describe {}.",
];

/// Fill the template for the `index`-th card of a batch.
pub fn template_question(concept: &str, index: usize) -> String {
    QUESTION_TEMPLATES[index % QUESTION_TEMPLATES.len()].replace("{}", concept)
}

/// Builds template questions about extracted concepts, answered by the
/// first sentence that mentions each concept.
#[derive(Debug, Clone, Default)]
pub struct KeywordStrategy {
    segmenter: Segmenter,
}

impl KeywordStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmenter(segmenter: Segmenter) -> Self {
        Self { segmenter }
    }
}

impl GenerationStrategy for KeywordStrategy {
    fn name(&self) -> &str {
        "keyword_template"
    }

    fn generate(&self, notes: &str, count: usize) -> Result<Vec<FlashcardCandidate>> {
        let sentences = self.segmenter.segment(notes);
        let mut cards = Vec::new();

        for concept in extract_concepts(notes).iter().take(count) {
            let Some(context) = find_context(concept, &sentences) else {
                continue;
            };
            let question = template_question(concept, cards.len());
            cards.push(FlashcardCandidate::new(
                question,
                context.trim(),
                CONFIDENCE_KEYWORD,
            ));
        }

        Ok(cards)
    }
}
