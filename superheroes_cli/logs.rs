use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "superheroes.log";

/// Sets up logging for the application.
///
/// Two layers are installed: one writing to a daily rotating file in the
/// `logs/` directory, and one writing to stderr, since stdout carries the
/// rendered screens.
///
/// Log levels are controlled by the `RUST_LOG` environment variable and
/// default to `info`, with `debug` for the superheroes crates.
///
/// The returned guard flushes the file writer when dropped, keep it alive
/// for the whole run.
pub fn setup_logging() -> WorkerGuard {
    let (non_blocking_file, guard) = file_writer(LOG_DIR);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_target(true);

    let default_filter = "info,superheroes=debug";

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    guard
}

/// Non-blocking writer to the daily log file in `dir`.
/// Buffered lines reach the file once the guard is dropped.
fn file_writer(dir: impl AsRef<Path>) -> (NonBlocking, WorkerGuard) {
    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    tracing_appender::non_blocking(file_appender)
}
