//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cardsmith: turn study notes into flashcards
#[derive(Parser)]
#[command(name = "cardsmith")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging unless RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate flashcards from a notes file
    Generate {
        /// Path to the notes file, or "-" for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of flashcards to request
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Minimum number of cards that must survive validation
        #[arg(long)]
        min_cards: Option<usize>,

        /// Output path for the deck (default: <file>.deck.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the deck as JSON to stdout
        #[arg(long)]
        json: bool,

        /// Use the deterministic mock model instead of the inference API
        #[arg(long)]
        mock_llm: bool,

        /// Send the notes unchanged instead of condensing them to key sentences
        #[arg(long)]
        no_preprocess: bool,
    },

    /// Show what the text analysis finds in a notes file
    Inspect {
        /// Path to the notes file, or "-" for stdin
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of key sentences to show
        #[arg(short, long, default_value = "15")]
        limit: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
