use integration_tests::harness::{HeldInput, RecordingSink, meter_config};
use pretty_assertions::assert_eq;
use std::fs;
use std::io::{self, BufReader};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;
use trickle_core::render::{LogFileSink, SinkSet};
use trickle_core::runtime::build_source;
use trickle_core::scheduler::Scheduler;

#[test]
fn every_report_is_appended_to_the_log() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("meter.log");
    fs::write(&path, "previous run\n").unwrap();

    let log_arg = path.to_str().unwrap();
    let config = meter_config(&["-i", "100ms", "--log", log_arg, "run"]).unwrap();
    assert_eq!(config.log_file.as_deref(), Some(path.as_path()));

    let recording = RecordingSink::default();
    let mut sinks = SinkSet::new();
    sinks.push(recording.clone());
    sinks.push(LogFileSink::open(&path).unwrap());

    let input = BufReader::new(HeldInput::new(vec![1; 2048], Duration::from_millis(350)));
    let source = build_source(&config, input, io::sink(), Arc::new(AtomicBool::new(false))).unwrap();

    // Act
    Scheduler::new(&config, source, sinks).run().unwrap();

    // Assert
    let contents = fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("previous run"));

    let logged: Vec<String> = lines
        .map(|line| line.split_once(" ] ").unwrap().1.to_string())
        .collect();
    assert_eq!(logged, recording.recorded().lines());
}
