//! Capture feed.
//!
//! A background thread owns the capture device. It opens the device,
//! applies the filter, and only then starts receiving; every frame is handed
//! to the scheduler as an owned [`Chunk`] over an unbounded channel. The
//! thread never touches the accumulator.

#[cfg(feature = "capture")]
mod pcap_source;

#[cfg(feature = "capture")]
pub use pcap_source::PcapSource;

use crate::ingest::{COPY_BUFFER_SIZE, Intake, Poll, copy_bucket};
use crate::runtime::MeterError;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to open capture device '{device}': {reason}")]
    Open { device: String, reason: String },

    #[error("failed to apply capture filter '{expression}': {reason}")]
    Filter { expression: String, reason: String },

    #[error("capture receive failed: {reason}")]
    Receive { reason: String },

    #[error("failed to spawn capture thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("capture thread exited unexpectedly")]
    FeederExited,
}

/// One captured frame's payload, owned by whoever holds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk(Vec<u8>);

impl Chunk {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_reader(self) -> io::Cursor<Vec<u8>> {
        io::Cursor::new(self.0)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// A device that yields raw frames.
pub trait FrameSource {
    fn apply_filter(&mut self, expression: &str) -> Result<(), CaptureError>;

    /// Next frame, or `None` when the read timed out with nothing captured.
    fn next_frame(&mut self) -> Result<Option<Vec<u8>>, CaptureError>;
}

/// Scheduler side of the feed.
pub struct CaptureFeed {
    rx: Receiver<Chunk>,
    handle: Option<JoinHandle<Result<(), CaptureError>>>,
    stop: Arc<AtomicBool>,
    bucket_size: u64,
    buf: Vec<u8>,
}

impl CaptureFeed {
    /// Take one chunk if one is ready. Never blocks.
    pub fn poll(&mut self) -> Result<Poll, MeterError> {
        match self.rx.try_recv() {
            Ok(chunk) => {
                let transfer = copy_bucket(
                    &mut chunk.into_reader(),
                    &mut io::sink(),
                    self.bucket_size,
                    &mut self.buf,
                )?;
                Ok(Poll::Ingested(Intake::bytes(transfer.bytes)))
            }
            Err(TryRecvError::Empty) => Ok(Poll::Idle),
            Err(TryRecvError::Disconnected) => Err(self.closed()),
        }
    }

    fn closed(&mut self) -> MeterError {
        match self.handle.take().map(JoinHandle::join) {
            Some(Ok(Err(e))) => MeterError::Capture(e),
            _ => MeterError::FeedClosed,
        }
    }

    pub fn shutdown(mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Start the feeder thread.
///
/// Returns once the device is open and the filter (if any) is applied, or
/// with the error that prevented either. No frame is received before the
/// filter is in place.
pub fn spawn_feeder<S, F>(
    open: F,
    filter: Option<String>,
    bucket_size: u64,
    stop: Arc<AtomicBool>,
) -> Result<CaptureFeed, CaptureError>
where
    S: FrameSource,
    F: FnOnce() -> Result<S, CaptureError> + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<Chunk>();
    let (ready_tx, ready_rx) = mpsc::sync_channel::<Result<(), CaptureError>>(1);
    let thread_stop = stop.clone();

    let handle = thread::Builder::new()
        .name("capture-feeder".to_string())
        .spawn(move || {
            let mut source = match prepare(open, filter.as_deref()) {
                Ok(source) => {
                    let _ = ready_tx.send(Ok(()));
                    source
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return Ok(());
                }
            };

            let result = feed(&mut source, &tx, &thread_stop);
            if let Err(e) = &result {
                tracing::error!(error = %e, "capture feed stopped");
            }
            result
        })
        .map_err(CaptureError::Spawn)?;

    match ready_rx.recv() {
        Ok(Ok(())) => Ok(CaptureFeed {
            rx,
            handle: Some(handle),
            stop,
            bucket_size,
            buf: vec![0; COPY_BUFFER_SIZE],
        }),
        Ok(Err(e)) => {
            let _ = handle.join();
            Err(e)
        }
        Err(_) => Err(CaptureError::FeederExited),
    }
}

fn prepare<S, F>(open: F, filter: Option<&str>) -> Result<S, CaptureError>
where
    S: FrameSource,
    F: FnOnce() -> Result<S, CaptureError>,
{
    let mut source = open()?;
    if let Some(expression) = filter {
        source.apply_filter(expression)?;
        tracing::info!(filter = expression, "capture filter applied");
    }
    Ok(source)
}

fn feed<S: FrameSource>(
    source: &mut S,
    tx: &Sender<Chunk>,
    stop: &AtomicBool,
) -> Result<(), CaptureError> {
    while !stop.load(Ordering::Relaxed) {
        let Some(frame) = source.next_frame()? else {
            continue;
        };

        // Receiver gone: the scheduler has finished.
        if tx.send(Chunk::from(frame)).is_err() {
            break;
        }
    }
    Ok(())
}
