use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Filter directives, e.g. `COMMENTBOX_LOG=commentbox_core=debug`
const LOG_FILTER_ENV: &str = "COMMENTBOX_LOG";
/// When set, debug logs are also appended to this file
const LOG_FILE_ENV: &str = "COMMENTBOX_LOG_FILE";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the rendered thread, logs go to stderr
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let file = std::env::var(LOG_FILE_ENV)
        .ok()
        .and_then(|path| match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: failed to open log file {}: {}", path, e);
                None
            }
        });

    if let Some(file) = file {
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true)
            .with_filter(tracing_subscriber::filter::LevelFilter::DEBUG);
        registry.with(file_layer).init();
    } else {
        registry.init();
    }
}
