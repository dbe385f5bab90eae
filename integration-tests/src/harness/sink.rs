use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use trickle_core::render::{ReportSink, render_plain};
use trickle_core::scheduler::{Report, Summary};

#[derive(Debug, Default)]
pub struct Recorded {
    pub reports: Vec<Report>,
    pub summary: Option<Summary>,
}

impl Recorded {
    pub fn lines(&self) -> Vec<String> {
        self.reports.iter().map(render_plain).collect()
    }
}

/// Records every report the scheduler emits.
#[derive(Clone, Default)]
pub struct RecordingSink(Arc<Mutex<Recorded>>);

impl RecordingSink {
    pub fn recorded(&self) -> MutexGuard<'_, Recorded> {
        self.0.lock().unwrap()
    }
}

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
