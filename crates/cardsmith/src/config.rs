//! Generator configuration.
//!
//! A [`GeneratorConfig`] is built once at startup and handed to the
//! pipeline. Nothing below the pipeline reads the environment.

use std::time::Duration;

use crate::text::SegmenterMode;

/// Default inference API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default model for free-text flashcard generation.
pub const DEFAULT_TEXT_MODEL: &str = "microsoft/DialoGPT-medium";

/// Default model for per-sentence question generation.
pub const DEFAULT_QUESTION_MODEL: &str = "valhalla/t5-small-qg-hl";

/// Environment variables read by [`GeneratorConfig::from_env`].
pub const ENV_API_KEY: &str = "HUGGINGFACE_API_KEY";
pub const ENV_API_KEY_ALIAS: &str = "HUGGING_FACE_API_KEY";
pub const ENV_API_BASE_URL: &str = "CARDSMITH_API_BASE_URL";
pub const ENV_TEXT_MODEL: &str = "CARDSMITH_TEXT_MODEL";
pub const ENV_QUESTION_MODEL: &str = "CARDSMITH_QUESTION_MODEL";
pub const ENV_MIN_CARDS: &str = "CARDSMITH_MIN_CARDS";

/// Configuration for flashcard generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Base URL of the inference API; the model id is appended as a path.
    pub api_base_url: String,

    /// Bearer credential. `None` routes every request to fallback generation.
    pub api_key: Option<String>,

    /// Model used for free-text generation.
    pub text_model: String,

    /// Model used for per-sentence question generation.
    pub question_model: String,

    /// Timeout for a free-text generation call.
    pub text_timeout: Duration,

    /// Timeout for a single per-sentence question call.
    pub question_timeout: Duration,

    /// Minimum number of validated cards a request must yield.
    pub min_cards: usize,

    /// Condense notes to their key sentences before generation.
    pub preprocess: bool,

    /// Number of key sentences kept when preprocessing.
    pub key_sentence_limit: usize,

    /// Sentence boundary rules used by every generator.
    pub segmenter_mode: SegmenterMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            question_model: DEFAULT_QUESTION_MODEL.to_string(),
            text_timeout: Duration::from_secs(30),
            question_timeout: Duration::from_secs(15),
            min_cards: 3,
            preprocess: true,
            key_sentence_limit: 15,
            segmenter_mode: SegmenterMode::Unicode,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default settings and no credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. An unparseable
    /// `CARDSMITH_MIN_CARDS` keeps the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let default = Self::default();

        Self {
            api_base_url: get(ENV_API_BASE_URL).unwrap_or(default.api_base_url),
            api_key: get(ENV_API_KEY).or_else(|| get(ENV_API_KEY_ALIAS)),
            text_model: get(ENV_TEXT_MODEL).unwrap_or(default.text_model),
            question_model: get(ENV_QUESTION_MODEL).unwrap_or(default.question_model),
            min_cards: get(ENV_MIN_CARDS)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default.min_cards),
            ..default
        }
    }

    /// Set the bearer credential.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the inference API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the minimum number of validated cards.
    pub fn with_min_cards(mut self, min_cards: usize) -> Self {
        self.min_cards = min_cards;
        self
    }

    /// Enable or disable key-sentence preprocessing.
    pub fn with_preprocess(mut self, preprocess: bool) -> Self {
        self.preprocess = preprocess;
        self
    }

    /// Set the sentence boundary rules.
    pub fn with_segmenter_mode(mut self, mode: SegmenterMode) -> Self {
        self.segmenter_mode = mode;
        self
    }

    /// Whether external strategies can be attempted at all.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
