//! Prompt templates for inference calls.

/// Characters of notes embedded in the free-text prompt.
pub const PROMPT_CONTEXT_CHARS: usize = 1000;

/// Prefix expected by question-generation models.
pub const QUESTION_PREFIX: &str = "generate question: ";

/// Build the prompt asking for `count` flashcards from `notes`.
pub fn flashcard_prompt(notes: &str, count: usize) -> String {
    let context: String = notes.chars().take(PROMPT_CONTEXT_CHARS).collect();

    format!(
        "Generate {count} study flashcards from the notes below. \
         Focus only on academic content. \
         Write each flashcard as \"Q: <question>\" followed by \"A: <answer>\".\n\
         Context:\n{context}"
    )
}

/// Build the input for generating a question from one sentence.
pub fn question_prompt(sentence: &str) -> String {
    format!("{QUESTION_PREFIX}{}", sentence.trim())
}

/// Recover the notes embedded in a [`flashcard_prompt`].
pub fn prompt_context(prompt: &str) -> &str {
    prompt
        .split_once("Context:\n")
        .map_or(prompt, |(_, context)| context)
}
