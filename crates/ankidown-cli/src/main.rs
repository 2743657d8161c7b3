//! Export every Anki deck to Markdown files.
//!
//! Talks to AnkiConnect, so Anki has to be running with the add-on
//! installed. Without arguments it reads from `http://localhost:8765` and
//! writes to `./markdown_output`.

use std::path::PathBuf;
use std::process::ExitCode;

use ankidown_engine::export::{DEFAULT_MAX_TITLE_LEN, DEFAULT_OUTPUT_DIR};
use ankidown_engine::{AnkiClient, DEFAULT_URL, Engine, ExportOptions, ExportReport};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Export Anki decks to Markdown files, one file per note.
#[derive(Parser, Debug)]
#[command(name = "ankidown")]
#[command(version, about, long_about = None)]
struct Args {
    /// AnkiConnect URL
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Directory to write the deck tree into
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Maximum characters of a note title used in its filename
    #[arg(long, default_value_t = DEFAULT_MAX_TITLE_LEN)]
    max_title_length: usize,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(&args).await {
        Ok(report) => {
            if !report.decks.is_empty() {
                info!(
                    "Exported {} notes from {} decks into {}",
                    report.file_count(),
                    report.decks.len(),
                    args.output.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> ankidown_engine::Result<ExportReport> {
    let client = AnkiClient::builder().url(&args.url).build();
    let engine = Engine::from_client(client);

    let options = ExportOptions::new(&args.output).max_title_len(args.max_title_length);
    engine.markdown(options).run().await
}
