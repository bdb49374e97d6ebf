//! Cardsmith: turn free-form study notes into question/answer flashcards.
//!
//! Notes are condensed to their key sentences, handed to a chain of
//! generation strategies backed by a hosted text-generation API, and, when
//! those come up short or no credential is configured, to a local fallback
//! generator that always fills the request.
//!
//! # Core Principles
//!
//! - **Always answers**: external failures degrade to local generation
//! - **Quality gated**: short and duplicate cards are dropped before return
//! - **Traceable**: every run reports which strategy produced its cards
//!
//! # Example
//!
//! ```no_run
//! use cardsmith::{FlashcardPipeline, GeneratorConfig};
//!
//! let pipeline = FlashcardPipeline::from_config(GeneratorConfig::from_env()).unwrap();
//! let cards = pipeline
//!     .generate_flashcards("Chlorophyll is the green pigment that captures light energy.", 3)
//!     .unwrap();
//!
//! for card in cards {
//!     println!("{} -> {} ({})", card.question, card.answer, card.difficulty_level);
//! }
//! ```

pub mod card;
pub mod config;
pub mod deck;
pub mod difficulty;
pub mod error;
pub mod generation;
pub mod llm;
pub mod pipeline;
pub mod quality;
pub mod text;

pub use card::{Difficulty, Flashcard, FlashcardCandidate};
pub use config::GeneratorConfig;
pub use deck::{deck_path, Deck};
pub use difficulty::classify;
pub use error::{CardsmithError, Result};
pub use generation::{FallbackGenerator, GenerationStrategy};
pub use llm::{HuggingFaceProvider, InferenceProvider, MockProvider};
pub use pipeline::{
    CandidateSet, FlashcardPipeline, GenerationOutcome, GenerationReport, PipelineStage,
    StrategyAttempt,
};
pub use quality::validate;
