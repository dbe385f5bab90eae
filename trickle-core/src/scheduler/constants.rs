use std::time::Duration;

/// Sleep when the active source has nothing ready.
pub const IDLE_BACKOFF: Duration = Duration::from_millis(2);
