//! Deck files: a generation report plus its flashcards, saved as JSON.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::card::Flashcard;
use crate::error::{CardsmithError, Result};
use crate::pipeline::{GenerationOutcome, GenerationReport};

/// Extension appended to the notes file stem for deck files.
pub const DECK_EXTENSION: &str = "deck.json";

/// An exported set of flashcards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub report: GenerationReport,
    pub flashcards: Vec<Flashcard>,
}

impl From<GenerationOutcome> for Deck {
    fn from(outcome: GenerationOutcome) -> Self {
        Self {
            report: outcome.report,
            flashcards: outcome.flashcards,
        }
    }
}

impl Deck {
    /// Save the deck as pretty-printed JSON, creating parent directories.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use cardsmith::Deck;
    /// # fn example(deck: &Deck) -> cardsmith::Result<()> {
    /// deck.save("biology.deck.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CardsmithError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            CardsmithError::Persistence(format!("Failed to create file '{}': {}", path.display(), e))
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|e| {
            CardsmithError::Persistence(format!("Failed to serialize deck: {}", e))
        })?;

        Ok(())
    }

    /// Render the deck as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a deck from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a deck from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            CardsmithError::Persistence(format!("Failed to open file '{}': {}", path.display(), e))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            CardsmithError::Persistence(format!(
                "Failed to parse deck '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

/// Default deck location for a notes file: `<stem>.deck.json` alongside it.
pub fn deck_path(notes_path: impl AsRef<Path>) -> PathBuf {
    let notes_path = notes_path.as_ref();
    let stem = notes_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "notes".to_string());

    notes_path.with_file_name(format!("{}.{}", stem, DECK_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Difficulty;
    use chrono::Utc;
    use tempfile::tempdir;

    fn sample_deck() -> Deck {
        Deck {
            report: GenerationReport {
                source: "fallback".to_string(),
                requested: 1,
                generated: 1,
                rejected: 0,
                attempts: Vec::new(),
                notes_sha256: "abc".to_string(),
                generated_at: Utc::now(),
            },
            flashcards: vec![Flashcard {
                question: "What is Photosynthesis?".to_string(),
                answer: "A process in plants".to_string(),
                difficulty_level: Difficulty::Easy,
                confidence: 0.3,
            }],
        }
    }

    #[test]
    fn test_deck_path() {
        assert_eq!(
            deck_path("notes/biology.txt"),
            PathBuf::from("notes/biology.deck.json")
        );
        assert_eq!(deck_path("lecture"), PathBuf::from("lecture.deck.json"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("biology.deck.json");
        let deck = sample_deck();

        deck.save(&path).unwrap();
        let loaded = Deck::load(&path).unwrap();
        assert_eq!(loaded, deck);

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"difficulty_level\": \"easy\""));
    }

    #[test]
    fn test_json_text_round_trip() {
        let deck = sample_deck();
        let json = deck.to_json().unwrap();
        assert!(json.contains("\"source\": \"fallback\""));
        assert_eq!(Deck::from_json(&json).unwrap(), deck);

        let err = Deck::from_json("{\"report\": 1}").unwrap_err();
        assert!(matches!(err, CardsmithError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Deck::load(dir.path().join("missing.deck.json")).unwrap_err();
        assert!(matches!(err, CardsmithError::Persistence(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.deck.json");
        fs::write(&path, "{not json").unwrap();
        assert!(matches!(Deck::load(&path), Err(CardsmithError::Persistence(_))));
    }
}
