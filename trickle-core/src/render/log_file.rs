use crate::render::ReportSink;
use crate::render::line::render_plain;
use crate::scheduler::Report;
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Appends one plain-text line per report.
///
/// Write failures are logged and skipped so a full disk never stops the
/// measurement.
pub struct LogFileSink {
    path: PathBuf,
    file: File,
}

impl LogFileSink {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn log_line(report: &Report) -> String {
    format!(
        "[ {} ] {}\n",
        Local::now().format(LOG_TIME_FORMAT),
        render_plain(report)
    )
}

impl ReportSink for LogFileSink {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        if let Err(e) = self.file.write_all(log_line(report).as_bytes()) {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to append report to log file");
        }
        Ok(())
    }
}
