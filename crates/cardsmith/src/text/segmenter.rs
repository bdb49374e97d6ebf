//! Sentence segmentation.
//!
//! The default mode follows Unicode sentence boundaries (UAX #29). When that
//! yields nothing for non-blank input, segmentation degrades to a plain
//! regex split after `.`, `!` and `?`.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum length, in characters, of a sentence considered substantial.
pub const MIN_SENTENCE_CHARS: usize = 20;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?]+)\s+").unwrap());

/// How sentence boundaries are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SegmenterMode {
    /// Unicode sentence boundaries, with a lazy regex fallback.
    #[default]
    Unicode,
    /// Split after terminal punctuation followed by whitespace.
    Regex,
}

/// Splits text into trimmed, non-empty sentences in source order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    mode: SegmenterMode,
}

impl Segmenter {
    /// Create a segmenter using Unicode sentence boundaries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter with an explicit mode.
    pub fn with_mode(mode: SegmenterMode) -> Self {
        Self { mode }
    }

    /// The configured mode.
    pub fn mode(&self) -> SegmenterMode {
        self.mode
    }

    /// Split `text` into sentences.
    ///
    /// Every sentence is returned regardless of length; use [`substantial`]
    /// where short fragments should be ignored.
    pub fn segment(&self, text: &str) -> Vec<String> {
        match self.mode {
            SegmenterMode::Regex => regex_split(text),
            SegmenterMode::Unicode => {
                let sentences = unicode_split(text);
                if sentences.is_empty() && !text.trim().is_empty() {
                    tracing::debug!("unicode segmentation found no sentences, using regex split");
                    regex_split(text)
                } else {
                    sentences
                }
            }
        }
    }
}

/// Split `text` into sentences with the default segmenter.
pub fn split_sentences(text: &str) -> Vec<String> {
    Segmenter::new().segment(text)
}

/// Keep only sentences of at least [`MIN_SENTENCE_CHARS`] characters.
pub fn substantial(sentences: &[String]) -> Vec<String> {
    sentences
        .iter()
        .filter(|s| is_substantial(s))
        .cloned()
        .collect()
}

/// Whether a sentence is long enough to carry a flashcard on its own.
pub fn is_substantial(sentence: &str) -> bool {
    sentence.trim().chars().count() >= MIN_SENTENCE_CHARS
}

fn unicode_split(text: &str) -> Vec<String> {
    text.unicode_sentences()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn regex_split(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for caps in SENTENCE_END.captures_iter(text) {
        let Some(terminator) = caps.get(1) else {
            continue;
        };
        let sentence = text[start..terminator.end()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        start = caps.get(0).map_or(terminator.end(), |m| m.end());
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "
        Photosynthesis is the process by which plants convert sunlight into energy.
        Chlorophyll is the green pigment that captures light energy.
        The process occurs in the chloroplasts of plant cells.
        Carbon dioxide and water are the raw materials for photosynthesis.
        Oxygen is released as a byproduct of this process.
        ";

    #[test]
    fn test_unicode_split_notes() {
        let sentences = split_sentences(NOTES);
        assert_eq!(sentences.len(), 5);
        assert!(sentences.iter().all(|s| s.len() > 20));
        assert_eq!(
            sentences[0],
            "Photosynthesis is the process by which plants convert sunlight into energy."
        );
    }

    #[test]
    fn test_regex_split_matches_unicode_on_simple_text() {
        let text = "Cats are nice. Dogs bark loudly! Why do birds sing?";
        let unicode = Segmenter::new().segment(text);
        let regex = Segmenter::with_mode(SegmenterMode::Regex).segment(text);

        assert_eq!(regex, vec!["Cats are nice.", "Dogs bark loudly!", "Why do birds sing?"]);
        assert_eq!(unicode, regex);
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        assert_eq!(split_sentences("Cats are nice"), vec!["Cats are nice"]);
        assert_eq!(
            Segmenter::with_mode(SegmenterMode::Regex).segment("Cats are nice"),
            vec!["Cats are nice"]
        );
    }

    #[test]
    fn test_punctuation_only_falls_back_to_regex_split() {
        let text = "?! ...";
        assert!(unicode_split(text).is_empty());

        let segmenter = Segmenter::new();
        assert_eq!(segmenter.mode(), SegmenterMode::Unicode);
        assert_eq!(segmenter.segment(text), vec!["?!", "..."]);
        assert_eq!(
            segmenter.segment(text),
            Segmenter::with_mode(SegmenterMode::Regex).segment(text)
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
        assert!(Segmenter::with_mode(SegmenterMode::Regex).segment("").is_empty());
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        assert_eq!(split_sentences(NOTES), split_sentences(NOTES));
    }

    #[test]
    fn test_substantial_filter() {
        let sentences = split_sentences("Short one. This sentence is long enough to keep.");
        let kept = substantial(&sentences);
        assert_eq!(kept, vec!["This sentence is long enough to keep."]);
    }
}
