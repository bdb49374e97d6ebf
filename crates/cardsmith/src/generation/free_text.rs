//! Free-text generation: one prompt, parse whatever comes back.

use std::sync::Arc;
use std::time::Duration;

use crate::card::FlashcardCandidate;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::llm::{flashcard_prompt, GenerationParameters, InferenceProvider, InferenceRequest};

use super::parser::parse_generated_flashcards;
use super::GenerationStrategy;

/// Asks a text-generation model for a batch of flashcards in one call.
pub struct FreeTextStrategy {
    provider: Arc<dyn InferenceProvider>,
    model: String,
    timeout: Duration,
}

impl FreeTextStrategy {
    /// Create the strategy using the configured text model and timeout.
    pub fn new(provider: Arc<dyn InferenceProvider>, config: &GeneratorConfig) -> Self {
        Self {
            provider,
            model: config.text_model.clone(),
            timeout: config.text_timeout,
        }
    }
}

impl GenerationStrategy for FreeTextStrategy {
    fn name(&self) -> &str {
        "free_text"
    }

    fn generate(&self, notes: &str, count: usize) -> Result<Vec<FlashcardCandidate>> {
        let request = InferenceRequest::new(
            &self.model,
            flashcard_prompt(notes, count),
            GenerationParameters::free_text(),
            self.timeout,
        );

        let text = self.provider.generate(&request)?;
        let cards = parse_generated_flashcards(&text);
        tracing::debug!(
            provider = self.provider.name(),
            parsed = cards.len(),
            "parsed free-text generation"
        );
        Ok(cards)
    }
}
