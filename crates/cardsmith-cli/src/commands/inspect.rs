//! Inspect command - show what the text analysis finds in a notes file.

use std::path::PathBuf;

use colored::Colorize;
use cardsmith::text::{
    extract_concepts, extract_definitions, extract_process_steps, find_context,
    generate_question_stems, identify_question_types, matched_categories, rank_sentences,
    split_sentences,
};

use super::read_notes;

pub fn run(file: PathBuf, limit: usize, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let notes = read_notes(&file)?;

    let ranked: Vec<_> = rank_sentences(&notes).into_iter().take(limit).collect();
    let concepts = extract_concepts(&notes);
    let definitions = extract_definitions(&notes);
    let steps = extract_process_steps(&notes);
    let question_types = identify_question_types(&notes);
    let sentences = split_sentences(&notes);
    let stems: Vec<(String, Vec<String>)> = concepts
        .iter()
        .take(limit)
        .map(|concept| {
            let context = find_context(concept, &sentences).unwrap_or_default();
            (concept.clone(), generate_question_stems(concept, context))
        })
        .collect();

    if json_output {
        let report = serde_json::json!({
            "file": file.display().to_string(),
            "key_sentences": ranked,
            "concepts": concepts,
            "definitions": definitions,
            "process_steps": steps,
            "question_types": question_types,
            "question_stems": stems,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", "Analysis of".cyan().bold(), file.display().to_string().white());
    println!();

    println!("{}", "Key sentences:".yellow().bold());
    for scored in &ranked {
        let cues = matched_categories(&scored.sentence);
        let cues = if cues.is_empty() {
            String::new()
        } else {
            format!(" ({})", cues.join(", "))
        };
        println!(
            "  {} {}{}",
            format!("{:>5.1}", scored.score).cyan(),
            scored.sentence,
            cues.dimmed()
        );
    }
    println!();

    println!("{} {}", "Concepts:".yellow().bold(), concepts.len());
    if !concepts.is_empty() {
        println!("  {}", concepts.join(", "));
    }
    println!();

    if !definitions.is_empty() {
        println!("{}", "Definitions:".yellow().bold());
        for definition in &definitions {
            println!("  {}: {}", definition.concept.white().bold(), definition.definition);
        }
        println!();
    }

    if !steps.is_empty() {
        println!("{}", "Process steps:".yellow().bold());
        for step in &steps {
            println!("  {} {}", step.marker.white().bold(), step.content);
        }
        println!();
    }

    if !stems.is_empty() {
        println!("{}", "Question stems:".yellow().bold());
        for (concept, concept_stems) in &stems {
            println!("  {}", concept.white().bold());
            for stem in concept_stems.iter().take(3) {
                println!("    {}", stem.dimmed());
            }
        }
        println!();
    }

    if !question_types.is_empty() {
        println!("{}", "Question types:".yellow().bold());
        for (label, bucket) in [
            ("factual", &question_types.factual),
            ("conceptual", &question_types.conceptual),
            ("analytical", &question_types.analytical),
            ("application", &question_types.application),
        ] {
            println!("  {:<12} {}", label, bucket.len());
        }
    }

    Ok(())
}
