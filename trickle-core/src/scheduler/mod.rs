//! Sampling scheduler.
//!
//! A single loop owns the accumulator. Each iteration does one of:
//! - report, when the tick deadline has passed
//! - one poll of the active source otherwise
//!
//! A report scales the current interval (with threshold evaluation) and the
//! lifetime total (without), counts a violation if flagged, folds the
//! interval into the total and hands the result to the sink. The loop ends
//! at end of input or on interrupt, after one last report.

mod clock;
mod constants;
mod report;

#[cfg(test)]
mod tests;

pub use clock::{Elapsed, next_deadline};
pub use constants::IDLE_BACKOFF;
pub use report::{ModeTag, Report, Summary};

use crate::conf::{MeterConfig, ModeConfig, ThresholdConfig};
use crate::ingest::{Poll, Source};
use crate::measure::{Accumulator, Domain, scale, scale_against};
use crate::memstats::MemorySnapshot;
use crate::render::ReportSink;
use crate::runtime::MeterError;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

pub struct Scheduler<R, W, K> {
    source: Source<R, W>,
    sink: K,
    mode: ModeTag,
    domain: Domain,
    interval: Duration,
    threshold: ThresholdConfig,
    count_matches: bool,
    memory_stats: bool,
    accumulator: Accumulator,
    violations: u64,
    started: Instant,
    stop: Arc<AtomicBool>,
}

impl<R, W, K> Scheduler<R, W, K>
where
    R: BufRead,
    W: Write,
    K: ReportSink,
{
    pub fn new(config: &MeterConfig, source: Source<R, W>, sink: K) -> Self {
        Self {
            source,
            sink,
            mode: ModeTag::from(&config.mode),
            domain: config.mode.domain(),
            interval: config.interval,
            threshold: config.threshold,
            count_matches: matches!(&config.mode, ModeConfig::Scan { pattern: Some(_) }),
            memory_stats: config.memory_stats,
            accumulator: Accumulator::new(),
            violations: 0,
            started: Instant::now(),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_stop(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = stop;
        self
    }

    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.stop.clone()
    }

    pub fn run(mut self) -> Result<Summary, MeterError> {
        tracing::info!(
            mode = %self.mode,
            interval_ms = self.interval.as_millis() as u64,
            "scheduler started"
        );

        self.started = Instant::now();
        let outcome = self.drive().and_then(|()| self.finish());
        self.source.shutdown();
        outcome
    }

    fn drive(&mut self) -> Result<(), MeterError> {
        let mut deadline = self.started + self.interval;

        loop {
            if self.stop.load(Ordering::Relaxed) {
                tracing::info!("stop requested");
                return Ok(());
            }

            let now = Instant::now();
            if now >= deadline {
                self.report(now)?;
                deadline = next_deadline(deadline, self.interval, now);
                continue;
            }

            match self.source.poll()? {
                Poll::Ingested(intake) => {
                    self.accumulator.accumulate(intake.magnitude);
                    self.accumulator.record_matches(intake.matches);
                }
                Poll::Idle => {
                    let until_tick = deadline.saturating_duration_since(Instant::now());
                    thread::sleep(IDLE_BACKOFF.min(until_tick));
                }
                Poll::EndOfStream => {
                    tracing::info!(
                        total = self.accumulator.lifetime() + self.accumulator.current(),
                        "end of stream"
                    );
                    return Ok(());
                }
            }
        }
    }

    fn report(&mut self, now: Instant) -> Result<(), MeterError> {
        let rate = scale_against(self.accumulator.current(), self.domain, &self.threshold);
        let total = scale(self.accumulator.lifetime(), self.domain);

        if rate.over_threshold {
            self.violations += 1;
        }

        self.accumulator.fold();

        let report = Report {
            mode: self.mode,
            elapsed: Elapsed(now.saturating_duration_since(self.started)),
            rate,
            total,
            violations: self.threshold.is_active().then_some(self.violations),
            matches: self.count_matches.then(|| self.accumulator.matches()),
            memory: if self.memory_stats {
                MemorySnapshot::read()
            } else {
                None
            },
        };

        self.sink.emit(&report).map_err(MeterError::Sink)
    }

    fn finish(&mut self) -> Result<Summary, MeterError> {
        let now = Instant::now();
        self.report(now)?;

        let summary = Summary {
            elapsed: Elapsed(now.saturating_duration_since(self.started)),
            total: scale(self.accumulator.lifetime(), self.domain),
            violations: self.threshold.is_active().then_some(self.violations),
            matches: self.count_matches.then(|| self.accumulator.matches()),
        };

        self.sink.finish(&summary).map_err(MeterError::Sink)?;
        Ok(summary)
    }
}
