//! Hugging Face Inference API provider implementation.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;

use crate::config::GeneratorConfig;
use crate::error::{CardsmithError, Result};

use super::provider::{InferenceProvider, InferenceRequest};

/// Client-wide timeout; individual requests carry their own, shorter bound.
const CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

/// Hugging Face hosted inference provider.
pub struct HuggingFaceProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HuggingFaceProvider {
    /// Create a provider for the given base URL and bearer credential.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(CLIENT_TIMEOUT)
            .build()
            .map_err(|e| CardsmithError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a provider from configuration.
    ///
    /// Returns `Ok(None)` when no credential is configured.
    pub fn from_config(config: &GeneratorConfig) -> Result<Option<Self>> {
        match config.api_key.as_deref() {
            Some(key) => Self::new(&config.api_base_url, key).map(Some),
            None => Ok(None),
        }
    }

    /// Endpoint URL for a model.
    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model.trim_start_matches('/'))
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|e| CardsmithError::Config(format!("Invalid API key: {}", e)))?,
        );
        Ok(headers)
    }
}

impl InferenceProvider for HuggingFaceProvider {
    fn generate(&self, request: &InferenceRequest) -> Result<String> {
        let endpoint = self.endpoint(&request.model);
        let body = json!({
            "inputs": request.inputs,
            "parameters": request.parameters,
        });

        tracing::debug!(model = %request.model, timeout = ?request.timeout, "sending inference request");

        let response = self
            .client
            .post(&endpoint)
            .headers(self.build_headers()?)
            .timeout(request.timeout)
            .json(&body)
            .send()
            .map_err(|e| CardsmithError::Transport {
                endpoint: endpoint.clone(),
                status: e.status().map(|s| s.as_u16()),
                message: if e.is_timeout() {
                    format!("request timed out after {:?}", request.timeout)
                } else {
                    e.to_string()
                },
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(CardsmithError::Transport {
                endpoint,
                status: Some(status.as_u16()),
                message: format!("API error ({}): {}", status, error_text),
            });
        }

        let text = response.text().map_err(|e| CardsmithError::Transport {
            endpoint: endpoint.clone(),
            status: Some(status.as_u16()),
            message: format!("Failed to read response body: {}", e),
        })?;

        parse_generated_text(&text)
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

/// Response shapes returned by the inference API.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse {
    Batch(Vec<GeneratedText>),
    Error { error: String },
    Single(GeneratedText),
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

/// Extract the generated text from a response body.
///
/// An empty batch yields an empty string, which callers treat as "nothing
/// generated" rather than a failure.
fn parse_generated_text(body: &str) -> Result<String> {
    let parsed: ApiResponse = serde_json::from_str(body)
        .map_err(|e| CardsmithError::Parse(format!("Failed to parse API response: {}", e)))?;

    match parsed {
        ApiResponse::Batch(items) => Ok(items
            .into_iter()
            .next()
            .map(|item| item.generated_text)
            .unwrap_or_default()),
        ApiResponse::Single(item) => Ok(item.generated_text),
        ApiResponse::Error { error } => Err(CardsmithError::Parse(format!(
            "API reported an error: {}",
            error
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_response() {
        let body = r#"[{"generated_text": "Q: What is ATP? A: The energy currency."}]"#;
        assert_eq!(
            parse_generated_text(body).unwrap(),
            "Q: What is ATP? A: The energy currency."
        );
    }

    #[test]
    fn test_parse_empty_batch() {
        assert_eq!(parse_generated_text("[]").unwrap(), "");
    }

    #[test]
    fn test_parse_single_object() {
        let body = r#"{"generated_text": "What does chlorophyll capture?"}"#;
        assert_eq!(
            parse_generated_text(body).unwrap(),
            "What does chlorophyll capture?"
        );
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "Model is currently loading"}"#;
        let err = parse_generated_text(body).unwrap_err();
        assert!(matches!(err, CardsmithError::Parse(_)));
        assert!(err.to_string().contains("currently loading"));
    }

    #[test]
    fn test_parse_object_without_text() {
        let err = parse_generated_text(r#"{"foo": 1}"#).unwrap_err();
        assert!(matches!(err, CardsmithError::Parse(_)));

        let err = parse_generated_text(r#"[{"score": 0.9}]"#).unwrap_err();
        assert!(matches!(err, CardsmithError::Parse(_)));
    }

    #[test]
    fn test_parse_malformed_body() {
        let err = parse_generated_text("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, CardsmithError::Parse(_)));
    }

    #[test]
    fn test_endpoint_joins_model() {
        let provider = HuggingFaceProvider::new("https://example.test/models/", "key").unwrap();
        assert_eq!(
            provider.endpoint("valhalla/t5-small-qg-hl"),
            "https://example.test/models/valhalla/t5-small-qg-hl"
        );
    }

    #[test]
    fn test_from_config_without_key() {
        let provider = HuggingFaceProvider::from_config(&GeneratorConfig::default()).unwrap();
        assert!(provider.is_none());
    }
}
