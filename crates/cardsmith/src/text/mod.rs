//! Note text processing: segmentation, scoring, concepts and analysis.

pub mod analysis;
pub mod concepts;
pub mod scorer;
pub mod segmenter;

pub use analysis::{
    extract_definitions, extract_process_steps, generate_question_stems, identify_question_types,
    Definition, ProcessStep, QuestionTypes,
};
pub use concepts::{
    extract_concepts, find_context, is_valid_concept, MAX_CONCEPT_CHARS, MIN_CONCEPT_CHARS,
};
pub use scorer::{
    matched_categories, preprocess_notes, rank_sentences, score_sentence, select_key_sentences,
    SentenceScore, CUE_CATEGORIES, DEFAULT_KEY_SENTENCES,
};
pub use segmenter::{
    is_substantial, split_sentences, substantial, Segmenter, SegmenterMode, MIN_SENTENCE_CHARS,
};
