//! Logging - tracing subscriber setup
//!
//! Logs go to stderr and, when the data directory is usable, to a daily
//! rolling file under `<data dir>/logs`. `RUST_LOG` overrides the filter.

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::helpers::{get_or_create_data_dir, is_development};

const LOG_FILE_PREFIX: &str = "portfolio.log";

fn default_filter() -> EnvFilter {
    let level = if is_development() { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portfolio_gui={level},portfolio={level},warn")))
}

/// Install the global subscriber. Keep the guard alive until exit so the
/// file writer flushes.
pub fn init_tracing() -> Option<WorkerGuard> {
    let (file_layer, guard, file_error) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        warn!(error = %e, "Data directory unavailable, logging to stderr only");
    }

    guard
}
