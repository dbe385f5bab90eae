//! Ingestion sources.
//!
//! Exactly one source is active for the life of the process. The scheduler
//! calls [`Source::poll`] whenever no tick is due; each poll ingests at most
//! one unit (a bucket, a batch of lines, or one captured frame) and says how
//! much it took in.
//!
//! stdin  -> DirectCopy -> Intake (bytes)
//! stdin  -> LineScan   -> Intake (characters, word matches)
//! device -> feeder thread -> channel -> CaptureFeed -> Intake (bytes)

pub mod capture;
mod copy;
mod matcher;
mod scan;

#[cfg(test)]
mod tests;

pub use capture::{CaptureError, CaptureFeed, Chunk, FrameSource, spawn_feeder};
pub use copy::DirectCopy;
pub use matcher::{Matcher, Pattern};
pub use scan::{LineScan, SCAN_BATCH_LINES};

use crate::runtime::MeterError;
use std::io::{self, Read, Write};

pub(crate) const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// What one poll took in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Intake {
    /// Bytes, or characters in scan mode.
    pub magnitude: u64,
    /// Completed word matches (scan mode only).
    pub matches: u64,
}

impl Intake {
    pub fn bytes(n: u64) -> Self {
        Self {
            magnitude: n,
            matches: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    Ingested(Intake),
    /// Nothing was ready.
    Idle,
    EndOfStream,
}

pub enum Source<R, W> {
    DirectCopy(DirectCopy<R, W>),
    LineScan(LineScan<R, W>),
    CaptureFeed(CaptureFeed),
}

impl<R, W> Source<R, W>
where
    R: io::BufRead,
    W: Write,
{
    pub fn poll(&mut self) -> Result<Poll, MeterError> {
        match self {
            Source::DirectCopy(source) => source.poll(),
            Source::LineScan(source) => source.poll(),
            Source::CaptureFeed(source) => source.poll(),
        }
    }

    /// Stop background work owned by the source.
    pub fn shutdown(self) {
        if let Source::CaptureFeed(feed) = self {
            feed.shutdown();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Drained {
    Filled,
    EndOfStream,
    WouldBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transfer {
    pub bytes: u64,
    pub drained: Drained,
}

/// Move up to `limit` bytes from `input` to `output`.
///
/// Returns early at end of stream or when the input would block; bytes
/// moved before that point are still counted.
pub(crate) fn copy_bucket<R, W>(
    input: &mut R,
    output: &mut W,
    limit: u64,
    buf: &mut [u8],
) -> io::Result<Transfer>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut copied = 0u64;

    loop {
        let remaining = limit - copied;
        if remaining == 0 {
            return Ok(Transfer {
                bytes: copied,
                drained: Drained::Filled,
            });
        }

        let want = remaining.min(buf.len() as u64) as usize;
        match input.read(&mut buf[..want]) {
            Ok(0) => {
                return Ok(Transfer {
                    bytes: copied,
                    drained: Drained::EndOfStream,
                });
            }
            Ok(n) => {
                output.write_all(&buf[..n])?;
                copied += n as u64;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => {
                return Ok(Transfer {
                    bytes: copied,
                    drained: Drained::WouldBlock,
                });
            }
            Err(e) => return Err(e),
        }
    }
}
