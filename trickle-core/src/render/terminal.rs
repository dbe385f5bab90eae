use crate::render::line::{render_colored, render_plain, render_summary};
use crate::render::ReportSink;
use crate::scheduler::{Report, Summary};
use std::io::{self, Write};

/// Redraws a single status line in place.
pub struct TerminalSink<W: Write> {
    out: W,
    color: bool,
    // Visible width of the previous line, blanked before the next draw.
    last_width: usize,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            last_width: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TerminalSink<W> {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        let plain = render_plain(report);
        let width = plain.chars().count();
        let line = if self.color {
            render_colored(report)
        } else {
            plain
        };

        write!(self.out, "\r{}\r{}", " ".repeat(self.last_width), line)?;
        self.out.flush()?;
        self.last_width = width;
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", render_summary(summary))?;
        self.out.flush()
    }
}
