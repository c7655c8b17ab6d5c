use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use docterm::config::Config;
use docterm::matrix::{DocTermBuilder, DocTermMatrix, Document, Encoding};
use docterm::output::{self, terminal, OutputFormat};

/// docterm: binary document-term matrices from small text corpora.
///
/// Each document becomes a row, each distinct word a column, and each cell
/// records whether the word occurs in the document.
#[derive(Parser)]
#[command(name = "docterm", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a matrix from inline documents and/or text files
    Build {
        /// Inline document as NAME=TEXT (repeatable)
        #[arg(long = "doc", value_name = "NAME=TEXT")]
        docs: Vec<String>,

        /// Text file; the document is named after the file stem (repeatable)
        #[arg(long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        /// Count occurrences instead of recording presence
        #[arg(long)]
        counts: bool,

        /// Drop English stop words (overrides DOCTERM_STOP_WORDS)
        #[arg(long)]
        stop_words: bool,

        /// Output format (overrides DOCTERM_FORMAT)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Build the two-sentence bag-of-words example
    Demo {
        /// Output format (overrides DOCTERM_FORMAT)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docterm=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Build {
            docs,
            files,
            counts,
            stop_words,
            format,
        } => {
            let documents = docterm::corpus::collect_documents(&docs, &files)?;
            info!(documents = documents.len(), "Collected corpus");

            let encoding = if counts {
                Encoding::Count
            } else {
                Encoding::Binary
            };
            let builder = DocTermBuilder::new()
                .stop_words(stop_words || config.stop_words)
                .encoding(encoding);

            let matrix = builder.build(&documents)?;
            emit(&matrix, format.unwrap_or(config.format))?;
        }

        Commands::Demo { format } => {
            let documents = docterm::corpus::sample_documents();
            let format = format.unwrap_or(config.format);

            if format == OutputFormat::Table {
                for Document { name, text } in &documents {
                    println!("  {} {}", format!("{name}:").bold(), text);
                }
            }

            let matrix = DocTermBuilder::new().build(&documents)?;
            emit(&matrix, format)?;

            if format == OutputFormat::Table {
                println!(
                    "{}",
                    "Both sentences contain the same words, so their rows are identical.".dimmed()
                );
            }
        }
    }

    Ok(())
}

fn emit(matrix: &DocTermMatrix, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            terminal::display_matrix(matrix);
            terminal::display_summary(matrix);
        }
        OutputFormat::Json => println!("{}", output::to_json(matrix)?),
    }
    Ok(())
}
