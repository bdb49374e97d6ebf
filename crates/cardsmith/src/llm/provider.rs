//! Inference provider trait and request types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Generation parameters forwarded to the inference endpoint.
///
/// Unset fields are omitted from the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_new_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_full_text: Option<bool>,
}

impl GenerationParameters {
    /// Parameters for free-text flashcard generation.
    pub fn free_text() -> Self {
        Self {
            max_new_tokens: Some(400),
            temperature: Some(0.7),
            do_sample: Some(true),
            return_full_text: Some(false),
            ..Default::default()
        }
    }

    /// Parameters for single-sentence question generation.
    pub fn question() -> Self {
        Self {
            max_length: Some(100),
            temperature: Some(0.8),
            ..Default::default()
        }
    }
}

/// One call to a text-generation model.
#[derive(Debug, Clone, PartialEq)]
pub struct InferenceRequest {
    /// Model identifier, appended to the API base URL.
    pub model: String,

    /// Prompt text sent as `inputs`.
    pub inputs: String,

    pub parameters: GenerationParameters,

    /// Upper bound on the whole request.
    pub timeout: Duration,
}

impl InferenceRequest {
    /// Create a new request.
    pub fn new(
        model: impl Into<String>,
        inputs: impl Into<String>,
        parameters: GenerationParameters,
        timeout: Duration,
    ) -> Self {
        Self {
            model: model.into(),
            inputs: inputs.into(),
            parameters,
            timeout,
        }
    }
}

/// Trait for external text-generation capabilities.
///
/// Implementations must be thread-safe (Send + Sync) so one provider can
/// back several pipelines.
pub trait InferenceProvider: Send + Sync {
    /// Run the model and return the generated text.
    ///
    /// Network failures, timeouts and non-success statuses are reported as
    /// `CardsmithError::Transport`; unreadable bodies as
    /// `CardsmithError::Parse`.
    fn generate(&self, request: &InferenceRequest) -> Result<String>;

    /// Get the name of this provider (for logging/debugging).
    fn name(&self) -> &str;
}
