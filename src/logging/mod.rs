// Logging module - tracing subscriber setup
//
// The typing screen owns the terminal (raw mode + alternate screen), so log
// lines must never reach stdout while it runs. When file logging is enabled
// events go to a rolling JSON file through a non-blocking writer; otherwise
// only the level filter is installed and events are dropped.

use crate::config::{LogRotation, LoggingConfig};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the configured level, scoped to this crate
pub fn filter_directive(level: &str) -> String {
    format!("typist={}", level.trim().to_lowercase())
}

/// Install the global subscriber
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// The returned guard must be kept alive for the duration of the program to
/// ensure buffered logs are flushed.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    if !config.file_enabled {
        tracing_subscriber::registry().with(filter).init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        tracing_subscriber::registry().with(filter).init();
        return None;
    }

    let file_appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    };

    // Writes happen on a background thread
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    tracing::debug!(
        dir = %config.file_dir.display(),
        rotation = config.file_rotation.as_str(),
        "File logging enabled"
    );

    Some(guard)
}
