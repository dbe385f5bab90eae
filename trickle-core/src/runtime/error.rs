use crate::ingest::CaptureError;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum MeterError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error("capture feed closed")]
    FeedClosed,

    #[error("failed to write report: {0}")]
    Sink(#[source] io::Error),

    #[error("failed to open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("packet capture is not available in this build (enable the `capture` feature)")]
    CaptureUnavailable,
}
