//! Mock inference provider for testing.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use crate::error::{CardsmithError, Result};
use crate::text::split_sentences;

use super::prompts::{prompt_context, QUESTION_PREFIX};
use super::provider::{InferenceProvider, InferenceRequest};

/// A canned reply for the mock provider.
#[derive(Debug, Clone, PartialEq)]
pub enum MockReply {
    /// Return this text as the generated output.
    Text(String),
    /// Fail as if the endpoint were unreachable.
    TransportError(String),
    /// Fail as if the response body were malformed.
    ParseError(String),
}

impl MockReply {
    /// Shorthand for a text reply.
    pub fn text(text: impl Into<String>) -> Self {
        MockReply::Text(text.into())
    }

    fn into_result(self, model: &str) -> Result<String> {
        match self {
            MockReply::Text(text) => Ok(text),
            MockReply::TransportError(message) => Err(CardsmithError::Transport {
                endpoint: format!("mock://{}", model),
                status: None,
                message,
            }),
            MockReply::ParseError(message) => Err(CardsmithError::Parse(message)),
        }
    }
}

/// Mock provider that returns predictable responses for testing.
///
/// Replies are resolved per model: queued replies first, then a standing
/// reply, then a deterministic echo built from the request inputs.
pub struct MockProvider {
    queued: Mutex<HashMap<String, VecDeque<MockReply>>>,
    standing: HashMap<String, MockReply>,
    calls: Mutex<Vec<InferenceRequest>>,
}

impl MockProvider {
    /// Create a new mock provider that echoes its inputs.
    pub fn new() -> Self {
        Self {
            queued: Mutex::new(HashMap::new()),
            standing: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a one-shot reply for `model`.
    pub fn with_reply(self, model: impl Into<String>, reply: MockReply) -> Self {
        lock(&self.queued)
            .entry(model.into())
            .or_default()
            .push_back(reply);
        self
    }

    /// Answer every otherwise unscripted request to `model` with `reply`.
    pub fn always(mut self, model: impl Into<String>, reply: MockReply) -> Self {
        self.standing.insert(model.into(), reply);
        self
    }

    /// Requests received so far, in order.
    pub fn calls(&self) -> Vec<InferenceRequest> {
        lock(&self.calls).clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    fn echo(inputs: &str) -> String {
        if let Some(sentence) = inputs.strip_prefix(QUESTION_PREFIX) {
            return echo_question(sentence);
        }

        split_sentences(prompt_context(inputs))
            .iter()
            .map(|sentence| format!("Q: {}\nA: {}", echo_question(sentence), sentence))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InferenceProvider for MockProvider {
    fn generate(&self, request: &InferenceRequest) -> Result<String> {
        lock(&self.calls).push(request.clone());

        let queued = lock(&self.queued)
            .get_mut(&request.model)
            .and_then(VecDeque::pop_front);

        match queued.or_else(|| self.standing.get(&request.model).cloned()) {
            Some(reply) => reply.into_result(&request.model),
            None => Ok(Self::echo(&request.inputs)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Question naming the opening words of a sentence.
fn echo_question(sentence: &str) -> String {
    let lead: Vec<&str> = sentence.split_whitespace().take(4).collect();
    format!("Which statement begins with \"{}\"?", lead.join(" "))
}
