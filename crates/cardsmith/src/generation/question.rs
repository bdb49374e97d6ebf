//! Per-sentence question generation.

use std::sync::Arc;
use std::time::Duration;

use crate::card::FlashcardCandidate;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::llm::{question_prompt, GenerationParameters, InferenceProvider, InferenceRequest};
use crate::text::{is_substantial, Segmenter};

use super::{GenerationStrategy, CONFIDENCE_QUESTION};

/// Generated questions must be longer than this after trimming.
const MIN_QUESTION_CHARS: usize = 10;

/// Asks a question-generation model for one question per sentence; the
/// sentence itself becomes the answer.
pub struct QuestionStrategy {
    provider: Arc<dyn InferenceProvider>,
    segmenter: Segmenter,
    model: String,
    timeout: Duration,
}

impl QuestionStrategy {
    /// Create the strategy using the configured question model, timeout
    /// and sentence boundary rules.
    pub fn new(provider: Arc<dyn InferenceProvider>, config: &GeneratorConfig) -> Self {
        Self {
            provider,
            segmenter: Segmenter::with_mode(config.segmenter_mode),
            model: config.question_model.clone(),
            timeout: config.question_timeout,
        }
    }
}

impl GenerationStrategy for QuestionStrategy {
    fn name(&self) -> &str {
        "question_generation"
    }

    /// Considers only the first `count` sentences; short ones are skipped
    /// without being replaced.
    fn generate(&self, notes: &str, count: usize) -> Result<Vec<FlashcardCandidate>> {
        let mut cards = Vec::new();

        for sentence in self.segmenter.segment(notes).iter().take(count) {
            if !is_substantial(sentence) {
                continue;
            }

            let request = InferenceRequest::new(
                &self.model,
                question_prompt(sentence),
                GenerationParameters::question(),
                self.timeout,
            );
            let reply = self.provider.generate(&request)?;
            let question = reply.trim();

            if question.chars().count() > MIN_QUESTION_CHARS {
                cards.push(FlashcardCandidate::new(
                    question,
                    sentence.trim(),
                    CONFIDENCE_QUESTION,
                ));
            }
        }

        Ok(cards)
    }
}
