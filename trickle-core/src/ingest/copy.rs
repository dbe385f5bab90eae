use crate::ingest::{COPY_BUFFER_SIZE, Drained, Intake, Poll, copy_bucket};
use crate::runtime::MeterError;
use std::io::{self, Read, Write};

/// Drains the input one bucket per poll, relaying it to `output` when
/// pass-through is on.
///
/// A poll blocks until the bucket is full, the input ends, or the input
/// reports it would block.
pub struct DirectCopy<R, W> {
    input: R,
    output: W,
    pass_through: bool,
    bucket_size: u64,
    buf: Vec<u8>,
    exhausted: bool,
}

impl<R: Read, W: Write> DirectCopy<R, W> {
    pub fn new(input: R, output: W, pass_through: bool, bucket_size: u64) -> Self {
        Self {
            input,
            output,
            pass_through,
            bucket_size,
            buf: vec![0; COPY_BUFFER_SIZE],
            exhausted: false,
        }
    }

    pub fn poll(&mut self) -> Result<Poll, MeterError> {
        if self.exhausted {
            return Ok(Poll::EndOfStream);
        }

        let transfer = if self.pass_through {
            let transfer = copy_bucket(
                &mut self.input,
                &mut self.output,
                self.bucket_size,
                &mut self.buf,
            )?;
            self.output.flush()?;
            transfer
        } else {
            copy_bucket(
                &mut self.input,
                &mut io::sink(),
                self.bucket_size,
                &mut self.buf,
            )?
        };

        if transfer.drained == Drained::EndOfStream {
            self.exhausted = true;
        }

        Ok(match (transfer.bytes, transfer.drained) {
            (0, Drained::EndOfStream) => Poll::EndOfStream,
            (0, Drained::WouldBlock) => Poll::Idle,
            (n, _) => Poll::Ingested(Intake::bytes(n)),
        })
    }
}
