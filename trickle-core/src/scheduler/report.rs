use crate::conf::ModeConfig;
use crate::measure::Scaled;
use crate::memstats::MemorySnapshot;
use crate::scheduler::Elapsed;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeTag {
    Copy,
    Scan,
    Capture,
}

impl From<&ModeConfig> for ModeTag {
    fn from(mode: &ModeConfig) -> Self {
        match mode {
            ModeConfig::Copy => ModeTag::Copy,
            ModeConfig::Scan { .. } => ModeTag::Scan,
            ModeConfig::Capture(_) => ModeTag::Capture,
        }
    }
}

impl fmt::Display for ModeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModeTag::Copy => "[B]",
            ModeTag::Scan => "[S]",
            ModeTag::Capture => "[P]",
        })
    }
}

/// One tick's measurements, handed to the sinks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub mode: ModeTag,
    pub elapsed: Elapsed,
    /// The interval that just ended.
    pub rate: Scaled,
    /// Lifetime total before this interval was folded in.
    pub total: Scaled,
    /// Intervals flagged so far; present when a threshold is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<u64>,
    /// Word matches so far; present when a word is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<MemorySnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub elapsed: Elapsed,
    pub total: Scaled,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<u64>,
}
