//! Startup configuration.
//!
//! Command-line arguments are validated once and resolved into a single
//! immutable [`MeterConfig`], which is handed to every component that needs
//! it. Invalid combinations fail here, before anything is read.

mod capture;
mod error;
pub mod range;
mod resolve;
mod threshold;

#[cfg(test)]
mod tests;

pub use capture::*;
pub use error::ConfigError;
pub use threshold::*;

use crate::ingest::Pattern;
use crate::measure::Domain;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BUCKET_SIZE_MIB: u64 = 100;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ModeConfig {
    /// Copy stdin in bucket-sized chunks.
    Copy,
    /// Read stdin line by line, counting characters.
    Scan { pattern: Option<Pattern> },
    /// Count frames from a capture device.
    Capture(CaptureConfig),
}

impl ModeConfig {
    pub fn domain(&self) -> Domain {
        match self {
            ModeConfig::Scan { .. } => Domain::Chars,
            ModeConfig::Copy | ModeConfig::Capture(_) => Domain::Bytes,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModeConfig::Copy => "run",
            ModeConfig::Scan { .. } => "scan",
            ModeConfig::Capture(_) => "packet",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Line,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeterConfig {
    pub mode: ModeConfig,
    /// Upper bound on bytes transferred per copy poll.
    pub bucket_size: u64,
    pub interval: Duration,
    pub color: bool,
    pub memory_stats: bool,
    pub pass_through: bool,
    pub threshold: ThresholdConfig,
    pub log_file: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            mode: ModeConfig::Copy,
            bucket_size: DEFAULT_BUCKET_SIZE_MIB * crate::measure::MIB,
            interval: DEFAULT_INTERVAL,
            color: true,
            memory_stats: false,
            pass_through: false,
            threshold: ThresholdConfig::unused(),
            log_file: None,
            output: OutputFormat::Line,
        }
    }
}
