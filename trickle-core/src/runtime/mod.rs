//! Process wiring: stdin/stdout, sinks, the capture feeder, interrupts.

mod error;

pub use error::MeterError;

use crate::conf::{CaptureConfig, MeterConfig, ModeConfig, OutputFormat};
use crate::ingest::{COPY_BUFFER_SIZE, CaptureFeed, DirectCopy, LineScan, Source};
use crate::render::{JsonSink, LogFileSink, SinkSet, TerminalSink};
use crate::scheduler::{Scheduler, Summary};
use std::io::{self, BufRead, BufWriter, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Run the meter on stdin (or the capture device) until the input ends or
/// the process is interrupted.
pub fn run(config: &MeterConfig) -> Result<Summary, MeterError> {
    tracing::info!(
        mode = config.mode.name(),
        bucket_size = config.bucket_size,
        pass_through = config.pass_through,
        "starting meter"
    );

    let stop = install_interrupt_handler()?;
    let sink = build_sink(config)?;

    let output = BufWriter::with_capacity(COPY_BUFFER_SIZE, io::stdout());
    let source = build_source(config, io::stdin().lock(), output, stop.clone())?;

    Scheduler::new(config, source, sink).with_stop(stop).run()
}

pub fn build_source<R, W>(
    config: &MeterConfig,
    input: R,
    output: W,
    stop: Arc<AtomicBool>,
) -> Result<Source<R, W>, MeterError>
where
    R: BufRead,
    W: Write,
{
    Ok(match &config.mode {
        ModeConfig::Copy => Source::DirectCopy(DirectCopy::new(
            input,
            output,
            config.pass_through,
            config.bucket_size,
        )),
        ModeConfig::Scan { pattern } => Source::LineScan(LineScan::new(
            input,
            output,
            config.pass_through,
            pattern.clone(),
        )),
        ModeConfig::Capture(capture) => {
            if config.pass_through {
                tracing::warn!("--pipe has no effect in packet mode");
            }
            Source::CaptureFeed(open_capture(capture, config.bucket_size, stop)?)
        }
    })
}

#[cfg(feature = "capture")]
fn open_capture(
    capture: &CaptureConfig,
    bucket_size: u64,
    stop: Arc<AtomicBool>,
) -> Result<CaptureFeed, MeterError> {
    use crate::ingest::capture::PcapSource;

    let device = capture.device.clone();
    let promiscuous = capture.promiscuous;
    let filter = capture.filter.as_ref().and_then(|f| f.expression());

    let feed = crate::ingest::spawn_feeder(
        move || PcapSource::open(&device, promiscuous, bucket_size),
        filter,
        bucket_size,
        stop,
    )?;
    Ok(feed)
}

#[cfg(not(feature = "capture"))]
fn open_capture(
    _capture: &CaptureConfig,
    _bucket_size: u64,
    _stop: Arc<AtomicBool>,
) -> Result<CaptureFeed, MeterError> {
    Err(MeterError::CaptureUnavailable)
}

fn build_sink(config: &MeterConfig) -> Result<SinkSet, MeterError> {
    let mut sinks = SinkSet::new();

    match config.output {
        OutputFormat::Line => sinks.push(TerminalSink::new(io::stderr(), config.color)),
        OutputFormat::Json => sinks.push(JsonSink::new(io::stderr())),
    }

    if let Some(path) = &config.log_file {
        let log = LogFileSink::open(path).map_err(|source| MeterError::LogFile {
            path: path.clone(),
            source,
        })?;
        sinks.push(log);
    }

    Ok(sinks)
}

/// First interrupt asks the scheduler to finish; a second one exits at once.
fn install_interrupt_handler() -> Result<Arc<AtomicBool>, MeterError> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = stop.clone();

    ctrlc::set_handler(move || {
        if flag.swap(true, Ordering::Relaxed) {
            std::process::exit(130);
        }
        tracing::info!("interrupt received, finishing");
    })?;

    Ok(stop)
}
