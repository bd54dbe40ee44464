//! Logging and observability helpers.

use std::fs;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use crate::config::user_directory;

const LOG_FILE_PREFIX: &str = "driver-catalog.log";

/// Sends catalog logs to a daily file under the user directory.
///
/// `RUST_LOG` replaces the default `driver_catalog=info` filter. Safe to call
/// more than once; later calls keep the first subscriber.
pub fn init_tracing() {
    let log_dir = user_directory().join("logs");
    let _ = fs::create_dir_all(&log_dir);

    let file_appender: RollingFileAppender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("driver_catalog=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}
