mod clock_tests;

use crate::render::ReportSink;
use crate::scheduler::{Report, Summary};
use std::io::{self, Read};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Default)]
pub(crate) struct Recorded {
    pub reports: Vec<Report>,
    pub summary: Option<Summary>,
}

/// Keeps every report where the test can see it after `run` consumes the
/// scheduler.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink(pub Arc<Mutex<Recorded>>);

impl ReportSink for RecordingSink {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        self.0.lock().unwrap().reports.push(report.clone());
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        self.0.lock().unwrap().summary = Some(summary.clone());
        Ok(())
    }
}

/// Yields `data` once, reports "would block" until `hold` has passed, then
/// ends.
pub(crate) struct HeldReader {
    data: Option<Vec<u8>>,
    until: Instant,
}

impl HeldReader {
    pub(crate) fn new(data: Vec<u8>, hold: Duration) -> Self {
        Self {
            data: Some(data),
            until: Instant::now() + hold,
        }
    }
}

impl Read for HeldReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(mut data) = self.data.take() {
            let n = data.len().min(buf.len());
            buf[..n].copy_from_slice(&data[..n]);
            if n < data.len() {
                self.data = Some(data.split_off(n));
            }
            return Ok(n);
        }

        if Instant::now() < self.until {
            thread::sleep(Duration::from_micros(200));
            return Err(io::ErrorKind::WouldBlock.into());
        }
        Ok(0)
    }
}
