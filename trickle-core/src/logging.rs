use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_FILTER: &str = "warn";

/// Initialize diagnostics logging on stderr.
///
/// stdout may be carrying pass-through data, so nothing is ever logged there.
/// - Filtering comes from `RUST_LOG` (defaults to "warn")
/// - JSON with flattened event fields when stderr is not a terminal
/// - Compact human-readable lines otherwise
pub fn init_logging() {
    match default_log_mode() {
        LogMode::Pretty => init_pretty_logging(),
        LogMode::Json => init_json_logging(),
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

fn init_pretty_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .compact()
        .init();
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Json,
    Pretty,
}
