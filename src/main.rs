use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod aggregator;
mod console;
mod errors;
mod models;
mod recorder;
mod report;
mod store;
mod tracker;
mod traits;

#[derive(Parser)]
#[command(
    name = "finance-tracker",
    version,
    about = "Record income and expenses to a CSV file and summarize them"
)]
struct Cli {
    /// CSV file holding the transactions
    #[arg(short, long, env = "FINANCE_TRACKER_FILE", default_value = store::DEFAULT_STORE_PATH)]
    file: PathBuf,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    let store = store::CsvStore::new(cli.file);
    debug!(path = %store.path().display(), "using transaction store");
    let prompt = console::StdInPrompt::new();

    let mut tracker = tracker::Tracker::new(store, prompt, io::stdout());

    tracker.run()?;

    Ok(())
}
