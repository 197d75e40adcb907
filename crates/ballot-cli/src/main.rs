//! Ballot terminal frontend.
//!
//! Runs the widget runtime against the in-memory host backend. Type a
//! candidate name (or `/select <name>`) to toggle it, `/vote` to cast a vote,
//! `/refresh` to reload both lists, `/quit` to exit.

use std::io::BufReader;

use ballot_app::{
    App, Runtime, RuntimeConfig, RuntimeError,
    channel::{command_channel, event_queue},
};
use ballot_cli::{TerminalDriver, TerminalError, input};
use ballot_harness::{BackendConfig, MemoryBackend};
use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::ParseError};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "ballot")]
#[command(about = "Pick a candidate, cast a vote, watch the tally")]
struct Args {
    /// Comma-separated candidate names (defaults to the built-in language list)
    #[arg(long, value_delimiter = ',')]
    candidates: Option<Vec<String>>,

    /// Comma-separated votes already recorded by the host
    #[arg(long, value_delimiter = ',')]
    votes: Option<Vec<String>>,

    /// Log filter, e.g. `debug` or `ballot_app=trace` (default: RUST_LOG or `info`)
    #[arg(long)]
    log_filter: Option<String>,

    /// Do not ask the host for snapshots at start-up
    #[arg(long)]
    no_initial_snapshot: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid log filter: {0}")]
    LogFilter(#[from] ParseError),

    #[error("failed to start input thread: {0}")]
    Input(#[from] std::io::Error),

    #[error(transparent)]
    Runtime(#[from] RuntimeError<TerminalError>),
}

fn init_tracing(log_filter: Option<&str>) -> Result<(), CliError> {
    let filter = match log_filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let args = Args::parse();
    init_tracing(args.log_filter.as_deref())?;

    let mut backend_config = BackendConfig::default();
    if let Some(candidates) = args.candidates {
        backend_config.candidates = candidates;
    }
    if let Some(votes) = args.votes {
        backend_config.initial_votes = votes;
    }

    let (host, events) = event_queue();
    let (command_tx, command_rx) = command_channel();

    let backend = MemoryBackend::new(backend_config, host.clone());
    let backend_task = tokio::spawn(backend.serve(command_rx));
    // Detached: a read still blocked on stdin must not hold up exit.
    let _input = input::spawn_reader(BufReader::new(std::io::stdin()), host)?;

    let config = RuntimeConfig { request_snapshots_on_start: !args.no_initial_snapshot };
    let driver = TerminalDriver::new(events, command_tx, std::io::stdout());
    let mut runtime = Runtime::with_config(driver, App::new(), config);

    let result = runtime.run().await;

    // The driver dropped its command sender on stop; the backend drains and exits.
    if let Ok(backend) = backend_task.await {
        info!(votes = backend.votes().len(), "host backend stopped");
    }

    result.map_err(CliError::from)
}
