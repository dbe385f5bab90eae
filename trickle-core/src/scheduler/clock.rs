use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{Duration, Instant};

/// Time since the scheduler started, shown as `HH:MM:SS`.
///
/// Hours keep counting past 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(pub Duration);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.0.as_secs();
        write!(
            f,
            "{:02}:{:02}:{:02}",
            secs / 3600,
            secs / 60 % 60,
            secs % 60
        )
    }
}

impl Serialize for Elapsed {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Next tick deadline after `now`. Ticks missed while the loop was blocked
/// are dropped rather than fired back to back.
pub fn next_deadline(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let behind = now.saturating_duration_since(previous);
    let missed = behind.as_nanos() / interval.as_nanos().max(1);
    let steps = u32::try_from(missed + 1).unwrap_or(u32::MAX);
    previous + interval * steps
}
