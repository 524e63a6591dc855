//! CLI binary for termtally.

use std::fs;
use std::path::Path;

use clap::Parser;
use termtally::{resolve, ResolveConfig};
use tracing_subscriber::EnvFilter;

/// termtally: search the web for flashcard pages and majority-vote the answer.
#[derive(Parser)]
#[command(name = "termtally", version, about)]
struct Cli {
    /// Questions to resolve, or a single path to a file with one question
    /// per line. If the first argument names a readable file, questions
    /// are read from it instead.
    inputs: Vec<String>,

    /// Log failed questions and keep going instead of aborting the run.
    #[arg(long)]
    keep_going: bool,

    /// Maximum candidate pages considered per question.
    #[arg(long, default_value_t = 5)]
    max_sources: usize,

    /// Maximum concurrent page fetches per question.
    #[arg(long, default_value_t = 5)]
    concurrency: usize,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 8)]
    timeout: u64,

    /// Custom User-Agent (defaults to a rotating browser User-Agent).
    #[arg(long)]
    user_agent: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing — quiet by default, overridable with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("termtally=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ResolveConfig {
        max_sources: cli.max_sources,
        concurrency: cli.concurrency,
        timeout_seconds: cli.timeout,
        user_agent: cli.user_agent.clone(),
    };

    let questions = load_questions(&cli.inputs)?;

    for question in &questions {
        match resolve(question, &config).await {
            Ok(resolution) => {
                println!("{}", resolution.answer);
                if let Some(warning) = resolution.warning {
                    tracing::error!(question = %question, error = %warning, "candidate fetch failed");
                    if !cli.keep_going {
                        anyhow::bail!("aborting run after fetch failure: {warning}");
                    }
                }
            }
            Err(err) => {
                tracing::error!(question = %question, error = %err, "resolution failed");
                if !cli.keep_going {
                    return Err(err.into());
                }
                // Keep the one-line-per-question output contract.
                println!();
            }
        }
    }

    Ok(())
}

/// Build the question list from CLI inputs.
///
/// If the first input names a readable file, its non-empty trimmed lines
/// are the questions and the remaining arguments are ignored. Otherwise
/// the arguments themselves are the questions; an empty argument (after
/// trimming) ends the sequence.
fn load_questions(inputs: &[String]) -> anyhow::Result<Vec<String>> {
    if let Some(first) = inputs.first() {
        if Path::new(first).is_file() {
            let content = fs::read_to_string(first)?;
            return Ok(content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect());
        }
    }

    Ok(inputs
        .iter()
        .map(|q| q.trim())
        .take_while(|q| !q.is_empty())
        .map(str::to_owned)
        .collect())
}
