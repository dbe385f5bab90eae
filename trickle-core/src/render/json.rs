use crate::render::ReportSink;
use crate::scheduler::{Report, Summary};
use serde::Serialize;
use std::io::{self, Write};

/// One JSON object per line.
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

#[derive(Serialize)]
struct SummaryLine<'a> {
    summary: &'a Summary,
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        self.write_line(report)
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        self.write_line(&SummaryLine { summary })
    }
}
