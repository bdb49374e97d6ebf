//! Generate command - turn a notes file into a flashcard deck.

use std::path::PathBuf;

use colored::Colorize;
use cardsmith::{
    deck_path, Deck, Difficulty, FlashcardPipeline, GenerationReport, GeneratorConfig,
    MockProvider,
};

use super::{is_stdin, read_notes};

/// Options collected from the command line.
pub struct GenerateOptions {
    pub file: PathBuf,
    pub count: usize,
    pub min_cards: Option<usize>,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub mock_llm: bool,
    pub preprocess: bool,
}

pub fn run(options: GenerateOptions) -> Result<(), Box<dyn std::error::Error>> {
    let notes = read_notes(&options.file)?;

    let mut config = GeneratorConfig::from_env().with_preprocess(options.preprocess);
    if let Some(min_cards) = options.min_cards {
        config = config.with_min_cards(min_cards);
    }

    let pipeline = if options.mock_llm {
        FlashcardPipeline::new(config).with_provider(MockProvider::new())
    } else {
        FlashcardPipeline::from_config(config)?
    };

    if !options.json {
        let mode = pipeline.provider_name().unwrap_or("offline");
        println!(
            "{} {} ({} cards, {})",
            "Generating flashcards from".cyan().bold(),
            options.file.display().to_string().white(),
            options.count,
            mode
        );
    }

    let deck = Deck::from(pipeline.run(&notes, options.count)?);

    // With --json or stdin input a deck file is only written when --output is given.
    let output_path = match options.output {
        Some(path) => Some(path),
        None if options.json || is_stdin(&options.file) => None,
        None => Some(deck_path(&options.file)),
    };

    if options.json {
        println!("{}", deck.to_json()?);
    } else {
        print_deck(&deck);
    }

    if let Some(path) = output_path {
        deck.save(&path)?;
        if !options.json {
            println!();
            println!("{} {}", "Deck saved to:".green(), path.display());
        }
    }

    Ok(())
}

fn print_deck(deck: &Deck) {
    println!();
    for (i, card) in deck.flashcards.iter().enumerate() {
        let level = match card.difficulty_level {
            Difficulty::Easy => card.difficulty_level.to_string().green(),
            Difficulty::Medium => card.difficulty_level.to_string().yellow(),
            Difficulty::Hard => card.difficulty_level.to_string().red(),
        };
        println!(
            "{} {} [{}, {:.1}]",
            format!("{:>3}.", i + 1).dimmed(),
            card.question.white().bold(),
            level,
            card.confidence
        );
        println!("     {}", card.answer);
    }
    println!();
    print_report(&deck.report);
}

fn print_report(report: &GenerationReport) {
    println!("{}", "Summary:".yellow().bold());
    println!("  Source:    {}", report.source.cyan());
    println!(
        "  Cards:     {}/{}",
        report.generated.to_string().white().bold(),
        report.requested
    );
    if report.rejected > 0 {
        println!("  Rejected:  {}", report.rejected.to_string().red());
    }
    for attempt in &report.attempts {
        match &attempt.error {
            Some(error) => println!("  {} {}: {}", "x".red(), attempt.strategy, error),
            None => println!(
                "  {} {}: {} produced",
                "-".dimmed(),
                attempt.strategy,
                attempt.produced
            ),
        }
    }
}
