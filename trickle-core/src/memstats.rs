use crate::measure::{Domain, scale};
use serde::Serialize;
use std::fmt;
use std::fs;

const PROC_STATUS: &str = "/proc/self/status";

/// Process memory usage in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySnapshot {
    pub resident: u64,
    pub peak_resident: u64,
    pub virtual_size: u64,
}

impl MemorySnapshot {
    /// `None` where `/proc/self/status` is unavailable.
    pub fn read() -> Option<Self> {
        let status = fs::read_to_string(PROC_STATUS).ok()?;
        Self::parse_status(&status)
    }

    pub fn parse_status(status: &str) -> Option<Self> {
        let field = |name: &str| {
            status.lines().find_map(|line| {
                let kib = line
                    .strip_prefix(name)?
                    .strip_prefix(':')?
                    .trim()
                    .strip_suffix("kB")?
                    .trim()
                    .parse::<u64>()
                    .ok()?;
                Some(kib * 1024)
            })
        };

        Some(Self {
            resident: field("VmRSS")?,
            peak_resident: field("VmHWM")?,
            virtual_size: field("VmSize")?,
        })
    }
}

impl fmt::Display for MemorySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rss: {} Hwm: {} Vm: {}",
            scale(self.resident, Domain::Bytes),
            scale(self.peak_resident, Domain::Bytes),
            scale(self.virtual_size, Domain::Bytes)
        )
    }
}
