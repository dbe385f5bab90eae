use std::io::{self, Read, Write};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

/// A stdin stand-in that delivers its data at once, then stays open (reads
/// report "would block") until `hold` has passed, then ends.
pub struct HeldInput {
    data: Vec<u8>,
    pos: usize,
    until: Instant,
}

impl HeldInput {
    pub fn new(data: Vec<u8>, hold: Duration) -> Self {
        Self {
            data,
            pos: 0,
            until: Instant::now() + hold,
        }
    }
}

impl Read for HeldInput {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.pos < self.data.len() {
            let n = (self.data.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            return Ok(n);
        }

        if Instant::now() < self.until {
            thread::sleep(Duration::from_micros(500));
            return Err(io::ErrorKind::WouldBlock.into());
        }
        Ok(0)
    }
}

/// A stdout stand-in the test can read back after the run.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> Vec<u8> {
        self.0.lock().unwrap().clone()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
