//! Report presentation.
//!
//! The scheduler hands every [`Report`] to a [`ReportSink`]. Sinks in this
//! module redraw a status line on a terminal, write JSON lines, or append to
//! a log file; a [`SinkSet`] fans a report out to several of them.

mod json;
mod line;
mod log_file;
mod terminal;

#[cfg(test)]
mod tests;

pub use json::JsonSink;
pub use line::{render_colored, render_plain, render_summary};
pub use log_file::LogFileSink;
pub use terminal::TerminalSink;

use crate::scheduler::{Report, Summary};
use std::io;

pub trait ReportSink {
    fn emit(&mut self, report: &Report) -> io::Result<()>;

    /// Called once after the last report.
    fn finish(&mut self, _summary: &Summary) -> io::Result<()> {
        Ok(())
    }
}

impl<T: ReportSink + ?Sized> ReportSink for Box<T> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        (**self).emit(report)
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        (**self).finish(summary)
    }
}

#[derive(Default)]
pub struct SinkSet {
    sinks: Vec<Box<dyn ReportSink>>,
}

impl SinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: ReportSink + 'static>(&mut self, sink: S) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportSink for SinkSet {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        self.sinks.iter_mut().try_for_each(|sink| sink.emit(report))
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        self.sinks.iter_mut().try_for_each(|sink| sink.finish(summary))
    }
}
