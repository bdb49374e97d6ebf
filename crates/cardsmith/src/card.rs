//! Flashcard types.

use serde::{Deserialize, Serialize};

/// Estimated difficulty of a flashcard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Lowercase label used at the API boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated, not-yet-validated question/answer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashcardCandidate {
    /// The question side of the card.
    pub question: String,

    /// The answer side of the card.
    pub answer: String,

    /// Difficulty; `Medium` until classified.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Provenance confidence (0.0-1.0).
    pub confidence: f64,
}

impl FlashcardCandidate {
    /// Create a new candidate with the default difficulty.
    pub fn new(question: impl Into<String>, answer: impl Into<String>, confidence: f64) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty: Difficulty::default(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }
}

/// A validated, classified flashcard as handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    pub difficulty_level: Difficulty,
    pub confidence: f64,
}

impl From<FlashcardCandidate> for Flashcard {
    fn from(candidate: FlashcardCandidate) -> Self {
        Self {
            question: candidate.question,
            answer: candidate.answer,
            difficulty_level: candidate.difficulty,
            confidence: candidate.confidence,
        }
    }
}
