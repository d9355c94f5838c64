use std::fs::OpenOptions;

use tracing_subscriber::EnvFilter;

/// Initialize tracing. The TUI owns the terminal, so log output only goes
/// somewhere when `COURIER_LOG_FILE` names a file; otherwise tracing calls
/// are no-ops. Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let Ok(log_path) = std::env::var("COURIER_LOG_FILE") else {
        return;
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}
