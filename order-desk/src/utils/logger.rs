//! Logging Infrastructure
//!
//! Console output by default; daily-rolling files when a log directory is
//! configured and exists.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
///
/// `log_level` accepts anything `EnvFilter` understands, e.g. `debug` or
/// `order_desk=debug,warn`.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|path| path.exists())
        .map(|path| tracing_appender::rolling::daily(path, "order-desk"));

    // Console output goes to stderr: stdout carries the JSON protocol
    match (file_appender, json.unwrap_or(false)) {
        (Some(appender), true) => subscriber.json().with_writer(appender).init(),
        (Some(appender), false) => subscriber.with_ansi(false).with_writer(appender).init(),
        (None, true) => subscriber.json().with_writer(std::io::stderr).init(),
        (None, false) => subscriber.with_writer(std::io::stderr).init(),
    }
}
