//! External text-generation integration.
//!
//! Generation strategies talk to models through the [`InferenceProvider`]
//! trait. The pipeline works fully without a provider, falling back to
//! local generation.
//!
//! # Providers
//!
//! - **Hugging Face** - hosted inference API (requires `HUGGINGFACE_API_KEY`)
//! - **Mock** - deterministic replies for tests and dry runs

mod huggingface;
mod mock;
mod prompts;
mod provider;

pub use huggingface::HuggingFaceProvider;
pub use mock::{MockProvider, MockReply};
pub use prompts::{flashcard_prompt, question_prompt, PROMPT_CONTEXT_CHARS};
pub use provider::{GenerationParameters, InferenceProvider, InferenceRequest};
