//! The flashcard pipeline and its public API.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::card::{Flashcard, FlashcardCandidate};
use crate::config::GeneratorConfig;
use crate::difficulty::classify_all;
use crate::error::{CardsmithError, Result};
use crate::generation::{
    FallbackGenerator, FreeTextStrategy, GenerationStrategy, KeywordStrategy, QuestionStrategy,
};
use crate::llm::{HuggingFaceProvider, InferenceProvider};
use crate::quality::validate;
use crate::text::{preprocess_notes, Segmenter};

/// Source name recorded when the fallback generator produced the cards.
pub const FALLBACK_SOURCE: &str = "fallback";

/// Largest number of cards a single request may ask for.
pub const MAX_CARDS_PER_REQUEST: usize = 100;

/// Stage of a pipeline run, used in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Preprocessing,
    /// Trying the strategy at this position.
    Generating(usize),
    Fallback,
    Validating,
    Classifying,
    Done,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStage::Preprocessing => f.write_str("preprocessing"),
            PipelineStage::Generating(index) => write!(f, "generating[{}]", index),
            PipelineStage::Fallback => f.write_str("fallback"),
            PipelineStage::Validating => f.write_str("validating"),
            PipelineStage::Classifying => f.write_str("classifying"),
            PipelineStage::Done => f.write_str("done"),
        }
    }
}

/// Outcome of one strategy attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyAttempt {
    /// Strategy name.
    pub strategy: String,
    /// Number of candidates it returned (0 on failure).
    pub produced: usize,
    /// Error message if the strategy failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Summary of how a set of flashcards was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Winning strategy name, or `fallback`.
    pub source: String,
    /// Number of cards requested.
    pub requested: usize,
    /// Number of cards returned after validation.
    pub generated: usize,
    /// Number of candidates dropped by validation.
    pub rejected: usize,
    /// Strategy attempts in the order they were tried.
    pub attempts: Vec<StrategyAttempt>,
    /// SHA-256 of the raw notes, hex encoded.
    pub notes_sha256: String,
    /// When the run finished.
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    /// Whether the cards came from the fallback generator.
    pub fn used_fallback(&self) -> bool {
        self.source == FALLBACK_SOURCE
    }
}

/// Flashcards plus the report describing how they were made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub flashcards: Vec<Flashcard>,
    pub report: GenerationReport,
}

/// Unvalidated candidates and where they came from.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    pub source: String,
    pub candidates: Vec<FlashcardCandidate>,
    pub attempts: Vec<StrategyAttempt>,
}

/// Turns study notes into validated, classified flashcards.
///
/// Strategies are tried in order; the first one that yields at least the
/// requested number of candidates wins. If none does, the local fallback
/// generator fills the request.
pub struct FlashcardPipeline {
    config: GeneratorConfig,
    provider: Option<Arc<dyn InferenceProvider>>,
    strategies: Vec<Box<dyn GenerationStrategy>>,
    fallback: FallbackGenerator,
}

impl FlashcardPipeline {
    /// Create a pipeline with no provider; every request uses fallback
    /// generation.
    pub fn new(config: GeneratorConfig) -> Self {
        let fallback = FallbackGenerator::with_segmenter(Segmenter::with_mode(config.segmenter_mode));
        Self {
            config,
            provider: None,
            strategies: Vec::new(),
            fallback,
        }
    }

    /// Create a pipeline, connecting to the hosted inference API when a
    /// credential is configured.
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        let provider = HuggingFaceProvider::from_config(&config)?;
        let pipeline = Self::new(config);

        Ok(match provider {
            Some(provider) => pipeline.with_provider(provider),
            None => {
                tracing::info!("no inference credential configured, using fallback generation");
                pipeline
            }
        })
    }

    /// Use an inference provider with the default strategy order.
    pub fn with_provider(self, provider: impl InferenceProvider + 'static) -> Self {
        self.with_shared_provider(Arc::new(provider))
    }

    /// Use a shared inference provider with the default strategy order:
    /// free-text, per-sentence question, keyword template.
    pub fn with_shared_provider(mut self, provider: Arc<dyn InferenceProvider>) -> Self {
        self.strategies = vec![
            Box::new(FreeTextStrategy::new(Arc::clone(&provider), &self.config)),
            Box::new(QuestionStrategy::new(Arc::clone(&provider), &self.config)),
            Box::new(KeywordStrategy::with_segmenter(self.segmenter())),
        ];
        self.provider = Some(provider);
        self
    }

    /// Replace the strategy list.
    pub fn with_strategies(mut self, strategies: Vec<Box<dyn GenerationStrategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Segmenter shared by the local generators.
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::with_mode(self.config.segmenter_mode)
    }

    /// Name of the configured provider, if any.
    pub fn provider_name(&self) -> Option<&str> {
        self.provider.as_deref().map(|p| p.name())
    }

    /// Names of the configured strategies, in the order they are tried.
    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Minimum number of validated cards a request for `count` must yield.
    pub fn required_cards(&self, count: usize) -> usize {
        self.config.min_cards.min(count)
    }

    /// Generate `count` flashcards from `notes`.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if `count` is zero or above
    /// [`MAX_CARDS_PER_REQUEST`], `InsufficientContent` if fewer
    /// than [`required_cards`](Self::required_cards) survive validation.
    pub fn generate_flashcards(&self, notes: &str, count: usize) -> Result<Vec<Flashcard>> {
        self.run(notes, count).map(|outcome| outcome.flashcards)
    }

    /// Generate flashcards and a report of how they were produced.
    pub fn run(&self, notes: &str, count: usize) -> Result<GenerationOutcome> {
        if count == 0 {
            return Err(CardsmithError::InvalidRequest(
                "at least one flashcard must be requested".to_string(),
            ));
        }
        if count > MAX_CARDS_PER_REQUEST {
            return Err(CardsmithError::InvalidRequest(format!(
                "at most {} flashcards can be requested, got {}",
                MAX_CARDS_PER_REQUEST, count
            )));
        }

        tracing::debug!(stage = %PipelineStage::Preprocessing, chars = notes.len());
        let prepared = self.prepare_notes(notes);

        let CandidateSet {
            source,
            candidates,
            attempts,
        } = self.generate_candidates(&prepared, count);
        let total = candidates.len();

        tracing::debug!(stage = %PipelineStage::Validating, candidates = total);
        let mut cards = validate(candidates);
        let rejected = total - cards.len();

        let required = self.required_cards(count);
        if cards.len() < required {
            tracing::warn!(
                required,
                produced = cards.len(),
                "too few flashcards survived validation"
            );
            return Err(CardsmithError::InsufficientContent {
                required,
                produced: cards.len(),
            });
        }

        tracing::debug!(stage = %PipelineStage::Classifying, cards = cards.len());
        classify_all(&mut cards);

        let report = GenerationReport {
            source,
            requested: count,
            generated: cards.len(),
            rejected,
            attempts,
            notes_sha256: notes_digest(notes),
            generated_at: Utc::now(),
        };
        tracing::debug!(stage = %PipelineStage::Done, generated = report.generated);

        Ok(GenerationOutcome {
            flashcards: cards.into_iter().map(Flashcard::from).collect(),
            report,
        })
    }

    /// Condense notes to key sentences when preprocessing is enabled.
    ///
    /// Notes that condense to nothing are passed through unchanged.
    pub fn prepare_notes(&self, notes: &str) -> String {
        if !self.config.preprocess {
            return notes.to_string();
        }

        let condensed = preprocess_notes(notes, self.config.key_sentence_limit);
        if condensed.is_empty() {
            notes.to_string()
        } else {
            condensed
        }
    }

    /// Try each strategy in order, falling back when none yields `count`.
    ///
    /// Strategy failures are logged and recorded, never returned.
    pub fn generate_candidates(&self, notes: &str, count: usize) -> CandidateSet {
        let mut attempts = Vec::with_capacity(self.strategies.len());

        for (index, strategy) in self.strategies.iter().enumerate() {
            tracing::debug!(stage = %PipelineStage::Generating(index), strategy = strategy.name());

            match strategy.generate(notes, count) {
                Ok(mut candidates) => {
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name().to_string(),
                        produced: candidates.len(),
                        error: None,
                    });

                    if candidates.len() >= count {
                        candidates.truncate(count);
                        tracing::info!(strategy = strategy.name(), "strategy produced flashcards");
                        return CandidateSet {
                            source: strategy.name().to_string(),
                            candidates,
                            attempts,
                        };
                    }
                    tracing::debug!(
                        strategy = strategy.name(),
                        produced = candidates.len(),
                        requested = count,
                        "strategy fell short"
                    );
                }
                Err(e) => {
                    if e.is_recoverable() {
                        tracing::warn!(strategy = strategy.name(), error = %e, "strategy failed");
                    } else {
                        tracing::error!(strategy = strategy.name(), error = %e, "strategy failed");
                    }
                    attempts.push(StrategyAttempt {
                        strategy: strategy.name().to_string(),
                        produced: 0,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        tracing::debug!(stage = %PipelineStage::Fallback, requested = count);
        tracing::info!(strategy = FALLBACK_SOURCE, "strategy produced flashcards");
        CandidateSet {
            source: FALLBACK_SOURCE.to_string(),
            candidates: self.fallback.generate(notes, count),
            attempts,
        }
    }
}

/// Hex-encoded SHA-256 of the notes.
pub fn notes_digest(notes: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(notes.as_bytes());
    format!("{:x}", hasher.finalize())
}
