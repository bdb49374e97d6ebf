//! HTTP tests for the Hugging Face provider against a local mock server.

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;

use cardsmith::llm::{GenerationParameters, InferenceRequest};
use cardsmith::{CardsmithError, FlashcardPipeline, GeneratorConfig, HuggingFaceProvider, InferenceProvider};

const TEXT_MODEL: &str = "microsoft/DialoGPT-medium";
const QUESTION_MODEL: &str = "valhalla/t5-small-qg-hl";

fn request(model: &str, inputs: &str) -> InferenceRequest {
    InferenceRequest::new(model, inputs, GenerationParameters::free_text(), Duration::from_secs(5))
}

#[test]
fn test_posts_inputs_with_bearer_token() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/microsoft/DialoGPT-medium")
        .match_header("authorization", "Bearer test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "inputs": "Explain ATP",
            "parameters": {
                "max_new_tokens": 400,
                "do_sample": true,
                "return_full_text": false
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"generated_text": "Q: What is ATP? A: The energy currency of cells."}]"#)
        .create();

    let provider = HuggingFaceProvider::new(server.url(), "test-key").unwrap();
    let text = provider.generate(&request(TEXT_MODEL, "Explain ATP")).unwrap();

    assert_eq!(text, "Q: What is ATP? A: The energy currency of cells.");
    mock.assert();
}

#[test]
fn test_trailing_slash_in_base_url() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/valhalla/t5-small-qg-hl")
        .with_status(200)
        .with_body(r#"{"generated_text": "What does chlorophyll capture?"}"#)
        .create();

    let provider = HuggingFaceProvider::new(format!("{}/", server.url()), "key").unwrap();
    let text = provider.generate(&request(QUESTION_MODEL, "generate question: x")).unwrap();

    assert_eq!(text, "What does chlorophyll capture?");
    mock.assert();
}

#[test]
fn test_error_status_is_transport_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/microsoft/DialoGPT-medium")
        .with_status(503)
        .with_body(r#"{"error": "Model is currently loading"}"#)
        .create();

    let provider = HuggingFaceProvider::new(server.url(), "key").unwrap();
    let err = provider.generate(&request(TEXT_MODEL, "notes")).unwrap_err();

    match err {
        CardsmithError::Transport { status, message, .. } => {
            assert_eq!(status, Some(503));
            assert!(message.contains("Model is currently loading"));
        }
        other => panic!("expected transport error, got {}", other),
    }
}

#[test]
fn test_error_body_is_parse_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/microsoft/DialoGPT-medium")
        .with_status(200)
        .with_body(r#"{"error": "Input is too long"}"#)
        .create();

    let provider = HuggingFaceProvider::new(server.url(), "key").unwrap();
    let err = provider.generate(&request(TEXT_MODEL, "notes")).unwrap_err();

    assert!(matches!(err, CardsmithError::Parse(_)));
    assert!(err.is_recoverable());
}

#[test]
fn test_unreachable_endpoint_is_transport_error() {
    let provider = HuggingFaceProvider::new("http://127.0.0.1:1", "key").unwrap();
    let err = provider.generate(&request(TEXT_MODEL, "notes")).unwrap_err();

    assert!(matches!(err, CardsmithError::Transport { status: None, .. }));
}

#[test]
fn test_pipeline_over_http_falls_through_to_questions() {
    let mut server = Server::new();
    let text_mock = server
        .mock("POST", "/microsoft/DialoGPT-medium")
        .with_status(503)
        .with_body(r#"{"error": "Model is currently loading"}"#)
        .create();
    let first = server
        .mock("POST", "/valhalla/t5-small-qg-hl")
        .match_body(Matcher::Regex("generate question: Photosynthesis".to_string()))
        .with_status(200)
        .with_body(r#"[{"generated_text": "What do plants convert sunlight into?"}]"#)
        .create();
    let second = server
        .mock("POST", "/valhalla/t5-small-qg-hl")
        .match_body(Matcher::Regex("generate question: Chlorophyll".to_string()))
        .with_status(200)
        .with_body(r#"[{"generated_text": "Which pigment captures light energy?"}]"#)
        .create();

    let config = GeneratorConfig::new()
        .with_base_url(server.url())
        .with_api_key("test-key")
        .with_preprocess(false);
    let pipeline = FlashcardPipeline::from_config(config).unwrap();
    assert_eq!(pipeline.provider_name(), Some("huggingface"));

    let notes = "Photosynthesis is the process by which plants convert sunlight into energy. \
        Chlorophyll is the green pigment that captures light energy.";
    let outcome = pipeline.run(notes, 2).unwrap();

    assert_eq!(outcome.report.source, "question_generation");
    assert_eq!(outcome.flashcards[0].question, "What do plants convert sunlight into?");
    assert_eq!(outcome.flashcards[1].question, "Which pigment captures light energy?");
    assert!(outcome.report.attempts[0].error.as_deref().unwrap().contains("503"));

    text_mock.assert();
    first.assert();
    second.assert();
}
