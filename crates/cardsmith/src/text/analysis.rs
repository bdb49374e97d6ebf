//! Structural analysis of notes: definitions, process steps and the kinds
//! of questions a sentence can support.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::segmenter::split_sentences;

static DEFINITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(.+?)\s+is defined as\s+(.+?)(?:\.|$)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+refers to\s+(.+?)(?:\.|$)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+means\s+(.+?)(?:\.|$)").unwrap(),
        Regex::new(r"(?i)(.+?)\s+is\s+(.+?)(?:\.|$)").unwrap(),
        Regex::new(r"(.+?):\s+(.+?)(?:\.|$)").unwrap(),
    ]
});

static STEP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(Step \d+):\s+(.+?)(?:\.|$)").unwrap(),
        Regex::new(r"(\d+)\.\s+(.+?)(?:\.|$)").unwrap(),
        Regex::new(r"(?i)\b(First|Second|Third|Fourth|Fifth|Next|Then|Finally),?\s+(.+?)(?:\.|$)")
            .unwrap(),
    ]
});

static PROCESS_CONTEXT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bprocess").unwrap());
static ROLE_CONTEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:function|role)").unwrap());

static FACTUAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:is|are|was|were|called)\b").unwrap());
static CONCEPTUAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:because|since|due to|reason)\b").unwrap());
static ANALYTICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:compared|unlike|similar|different)\b").unwrap());
static APPLICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:example|used for|applied|practice)\b").unwrap());

/// A concept paired with its definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub concept: String,
    pub definition: String,
}

impl Definition {
    /// Question asking for this definition.
    pub fn question(&self) -> String {
        format!("What is {}?", self.concept)
    }
}

/// One step of a described process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessStep {
    /// The step marker as written ("Step 2", "3", "Finally").
    pub marker: String,
    pub content: String,
}

impl ProcessStep {
    /// Question asking what happens at this step.
    pub fn question(&self) -> String {
        format!("What happens in {}?", self.marker.to_lowercase())
    }
}

/// Sentences bucketed by the kind of question they support.
///
/// A sentence may appear in several buckets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionTypes {
    /// What/when/where material: facts and namings.
    pub factual: Vec<String>,
    /// Why/how material: causes and reasons.
    pub conceptual: Vec<String>,
    /// Comparisons and relationships.
    pub analytical: Vec<String>,
    /// Examples and uses.
    pub application: Vec<String>,
}

impl QuestionTypes {
    pub fn is_empty(&self) -> bool {
        self.factual.is_empty()
            && self.conceptual.is_empty()
            && self.analytical.is_empty()
            && self.application.is_empty()
    }
}

/// Extract concept/definition pairs.
///
/// Concepts must span 2 to 5 words and definitions must be longer than 10
/// characters. Each concept is reported once, with its first definition.
pub fn extract_definitions(text: &str) -> Vec<Definition> {
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut definitions = Vec::new();

    for sentence in split_sentences(text) {
        for pattern in DEFINITION_PATTERNS.iter() {
            for caps in pattern.captures_iter(&sentence) {
                let (Some(concept), Some(definition)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let concept = concept.as_str().trim();
                let definition = definition.as_str().trim();

                let words = concept.split_whitespace().count();
                if !(2..=5).contains(&words) || definition.chars().count() <= 10 {
                    continue;
                }
                if seen.insert(concept.to_lowercase()) {
                    definitions.push(Definition {
                        concept: concept.to_string(),
                        definition: definition.to_string(),
                    });
                }
            }
        }
    }

    definitions
}

/// Question stems for `concept`.
///
/// Ten general stems come first. A context that mentions a process adds
/// three process stems, and one that mentions a function or role adds three
/// more.
pub fn generate_question_stems(concept: &str, context: &str) -> Vec<String> {
    let mut stems = vec![
        format!("What is {concept}?"),
        format!("Define {concept}."),
        format!("Explain {concept}."),
        format!("Describe {concept}."),
        format!("What do you know about {concept}?"),
        format!("How would you explain {concept}?"),
        format!("What are the key features of {concept}?"),
        format!("Why is {concept} important?"),
        format!("How does {concept} work?"),
        format!("What is the purpose of {concept}?"),
    ];

    if PROCESS_CONTEXT.is_match(context) {
        stems.push(format!("What are the steps in {concept}?"));
        stems.push(format!("How does the {concept} process work?"));
        stems.push(format!("What happens during {concept}?"));
    }
    if ROLE_CONTEXT.is_match(context) {
        stems.push(format!("What is the function of {concept}?"));
        stems.push(format!("What role does {concept} play?"));
        stems.push(format!("How does {concept} contribute to the larger system?"));
    }

    stems
}

/// Extract process steps from numbered lines, `Step N:` labels and ordinal
/// words.
///
/// Steps are matched line by line, since numbered lists rarely survive
/// sentence segmentation intact.
pub fn extract_process_steps(text: &str) -> Vec<ProcessStep> {
    let mut steps = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        for pattern in STEP_PATTERNS.iter() {
            let found: Vec<ProcessStep> = pattern
                .captures_iter(line)
                .filter_map(|caps| {
                    let marker = caps.get(1)?.as_str().trim();
                    let content = caps.get(2)?.as_str().trim();
                    (!content.is_empty()).then(|| ProcessStep {
                        marker: marker.to_string(),
                        content: content.to_string(),
                    })
                })
                .collect();

            if !found.is_empty() {
                steps.extend(found);
                break;
            }
        }
    }

    steps
}

/// Bucket sentences by the question types they can support.
pub fn identify_question_types(text: &str) -> QuestionTypes {
    let mut types = QuestionTypes::default();

    for sentence in split_sentences(text) {
        if FACTUAL.is_match(&sentence) {
            types.factual.push(sentence.clone());
        }
        if CONCEPTUAL.is_match(&sentence) {
            types.conceptual.push(sentence.clone());
        }
        if ANALYTICAL.is_match(&sentence) {
            types.analytical.push(sentence.clone());
        }
        if APPLICATION.is_match(&sentence) {
            types.application.push(sentence);
        }
    }

    types
}
