//! Cardsmith CLI - flashcard generation from study notes.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            file,
            count,
            min_cards,
            output,
            json,
            mock_llm,
            no_preprocess,
        } => commands::generate::run(commands::generate::GenerateOptions {
            file,
            count,
            min_cards,
            output,
            json,
            mock_llm,
            preprocess: !no_preprocess,
        }),

        Commands::Inspect { file, limit, json } => commands::inspect::run(file, limit, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
