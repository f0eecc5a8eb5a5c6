use std::fs;

use larder_core::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "larder=info";

/// Keeps the file writer alive; dropping it flushes pending lines.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("LARDER_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr. For commands that never take over the terminal.
pub fn init_stderr() -> LoggingGuard {
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .init();

    LoggingGuard { _file_guard: None }
}

/// Log to a daily file so output does not land on the TUI.
pub fn init_file() -> LoggingGuard {
    let log_dir = AppConfig::log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create log directory {}: {e}", log_dir.display());
    }

    let appender = tracing_appender::rolling::daily(&log_dir, "larder.log");
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(appender);

    let layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(layer)
        .init();

    tracing::debug!(log_dir = %log_dir.display(), "file logging initialized");

    LoggingGuard {
        _file_guard: Some(file_guard),
    }
}
