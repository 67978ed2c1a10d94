//! Waymark quiz entry point.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use waymark_quiz::answers::LineAnswers;
use waymark_quiz::problem::shuffle_problems;
use waymark_quiz::reader::{CsvProblemReader, ProblemReader};
use waymark_quiz::{QuizError, run_quiz};

/// Timed quiz over question/answer pairs from a CSV file.
#[derive(Debug, Parser)]
#[command(name = "waymark-quiz", version, about, long_about = None)]
struct Cli {
    /// CSV file with one `question,answer` pair per line.
    #[arg(long, default_value = "problems.csv")]
    file: PathBuf,

    /// Time limit for the whole quiz, in seconds.
    #[arg(long, default_value_t = 30)]
    limit: u64,

    /// Ask the questions in random order.
    #[arg(long, default_value_t = false)]
    shuffle: bool,
}

#[tokio::main]
async fn main() -> Result<(), QuizError> {
    // Diagnostics go to stderr so they never interleave with the prompts.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut problems = CsvProblemReader::open(&cli.file)
        .and_then(|mut reader| reader.read_all())
        .inspect_err(|e| {
            tracing::error!(error = %e, file = %cli.file.display(), "unable to load problems");
        })?;
    if cli.shuffle {
        shuffle_problems(&mut problems, &mut rand::rng());
    }

    println!("Timeout in {} seconds", cli.limit);

    let mut answers = LineAnswers::stdin();
    let mut stdout = std::io::stdout();
    let report = run_quiz(
        &problems,
        &mut answers,
        &mut stdout,
        Duration::from_secs(cli.limit),
    )
    .await?;

    println!("\n{report}");

    // A timed-out read may still be parked on stdin; the runtime would wait
    // for it on shutdown.
    std::process::exit(0);
}
