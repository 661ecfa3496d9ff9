// Runbook - tabbed command-line cheat sheets for the terminal
//
// Sections (Git, SQL, Docker, Kafka by default) render as tabs; each
// section's tasks render as cards of numbered command steps. Activating a
// step - Enter/Space or a mouse click - copies its literal text to the
// clipboard and highlights it briefly.
//
// Architecture:
// - Content store: ordered sections/tasks/steps, loaded once (built-in or
//   from a JSON/TOML file), never mutated
// - TUI (ratatui): tab bar + section content, rebuilt every frame
// - Clipboard: arboard with an OSC 52 escape-sequence fallback
// - Logging: tracing captured to an in-memory buffer while the TUI owns
//   the terminal, replayed to stderr on exit

mod cli;
mod config;
mod logging;
mod runbook;
mod tui;
mod util;

use anyhow::{Context, Result};
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use runbook::Runbook;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI first; the `config` subcommand exits early
    let Some(args) = cli::handle_cli() else {
        return Ok(());
    };

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // Load configuration and apply CLI overrides (highest precedence)
    let mut config = Config::load();
    if let Some(file) = args.file {
        config.runbook_path = Some(file);
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    // Create log buffer for TUI mode
    let log_buffer = LogBuffer::new();

    // Initialize tracing: logs go to the buffer while the TUI owns the
    // terminal; optionally also to rotating JSON files.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("runbook={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must stay alive for the program's lifetime so file logs flush
    let _file_guard = init_logging(&config, filter, log_buffer.clone());

    // Load the content store
    let runbook = match &config.runbook_path {
        Some(path) => Runbook::load(path)
            .with_context(|| format!("failed to load runbook {}", path.display()))?,
        None => Runbook::builtin(),
    };
    tracing::info!(sections = runbook.len(), "runbook loaded");

    // Run the TUI; this blocks until the user quits (presses 'q')
    let result = tui::run_tui(runbook, &config).await;

    // The terminal is restored now; replay anything worth seeing
    for entry in log_buffer.warnings() {
        eprintln!(
            "{} {:5} {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level,
            entry.target,
            entry.message
        );
    }

    result
}

/// Set up the tracing subscriber: buffer layer always, file layer when
/// enabled. Returns the appender guard that must outlive the program.
fn init_logging(
    config: &Config,
    filter: EnvFilter,
    log_buffer: LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let file_parts = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen on a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                Some((non_blocking, guard))
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    let (file_layer, guard) = match file_parts {
        Some((non_blocking, guard)) => (
            // JSON format for structured log parsing
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer))
        .with(file_layer)
        .init();

    guard
}
