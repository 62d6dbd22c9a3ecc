use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use text_search::TextIndexBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Substring search and word completion over a text file", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every occurrence of a pattern with surrounding context.
    Search {
        /// Text file to index.
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Pattern to look for; normalized like the text.
        pattern: String,
        /// Characters of context on each side of a match.
        #[arg(long, default_value_t = 20)]
        context: usize,
    },
    /// Complete a prefix from the vocabulary of the text.
    Suggest {
        /// Text file to index.
        #[arg(value_name = "FILE")]
        file: PathBuf,
        prefix: String,
        /// Maximum number of suggestions.
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Edit budget used when no word starts with the prefix (0 disables the retry).
        #[arg(long, default_value_t = 1)]
        max_edits: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "text_search=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match Args::parse().command {
        Command::Search {
            file,
            pattern,
            context,
        } => {
            let index = TextIndexBuilder::new()
                .context_radius(context)
                .build_from_path(&file)
                .with_context(|| format!("Failed to index {}", file.display()))?;
            let occurrences = index.occurrences(&pattern);
            if occurrences.is_empty() {
                println!("no occurrences of {pattern:?}");
            }
            for occurrence in occurrences {
                println!("{:>10}  {}", occurrence.start, occurrence.context.replace('\n', " "));
            }
        }
        Command::Suggest {
            file,
            prefix,
            limit,
            max_edits,
        } => {
            let index = TextIndexBuilder::new()
                .suggest_limit(limit)
                .fallback_edits(max_edits)
                .build_from_path(&file)
                .with_context(|| format!("Failed to index {}", file.display()))?;
            let suggestions = index.suggest(&prefix);
            for word in &suggestions.words {
                println!("{word}");
            }
            tracing::info!(
                found = suggestions.words.len(),
                fuzzy = suggestions.fuzzy,
                elapsed = ?suggestions.elapsed,
                "suggest"
            );
        }
    }
    Ok(())
}
