use crate::ingest::{Intake, Pattern, Poll};
use crate::runtime::MeterError;
use std::io::{self, BufRead, Write};

/// Lines read per poll at most.
pub const SCAN_BATCH_LINES: usize = 512;

/// Reads the input line by line, counting characters and word matches.
///
/// Line terminators are not counted. The match cursor carries across lines
/// within one poll and starts over on the next poll. Once the input ends the
/// source stays idle; scan mode runs until interrupted.
pub struct LineScan<R, W> {
    input: R,
    output: W,
    pass_through: bool,
    pattern: Option<Pattern>,
    // Partial line kept across polls when the input would block mid-line.
    line: Vec<u8>,
    exhausted: bool,
}

impl<R: BufRead, W: Write> LineScan<R, W> {
    pub fn new(input: R, output: W, pass_through: bool, pattern: Option<Pattern>) -> Self {
        Self {
            input,
            output,
            pass_through,
            pattern,
            line: Vec::new(),
            exhausted: false,
        }
    }

    pub fn poll(&mut self) -> Result<Poll, MeterError> {
        if self.exhausted {
            return Ok(Poll::Idle);
        }

        let mut matcher = self.pattern.as_ref().map(Pattern::matcher);
        let mut intake = Intake::default();
        let mut lines = 0;

        while lines < SCAN_BATCH_LINES {
            match self.input.read_until(b'\n', &mut self.line) {
                Ok(0) => {
                    self.exhausted = true;
                    tracing::debug!("scan input ended");
                    if self.line.is_empty() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => return Err(e.into()),
            }

            if self.pass_through {
                self.output.write_all(&self.line)?;
            }

            let text = String::from_utf8_lossy(strip_terminator(&self.line));
            intake.magnitude += text.chars().count() as u64;
            if let Some(matcher) = matcher.as_mut() {
                intake.matches += matcher.count(&text);
            }

            self.line.clear();
            lines += 1;

            if self.exhausted {
                break;
            }
        }

        if self.pass_through {
            self.output.flush()?;
        }

        Ok(if lines == 0 {
            Poll::Idle
        } else {
            Poll::Ingested(intake)
        })
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
