use crate::cli::Cli;
use crate::conf::*;
use crate::ingest::Pattern;
use crate::measure::{KIB, MIB};
use clap::Parser;
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::time::Duration;

fn resolve(args: &[&str]) -> Result<MeterConfig, ConfigError> {
    let argv = std::iter::once("trickle").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).expect("arguments should parse");
    MeterConfig::from_cli(&cli)
}

#[test]
fn defaults_to_copy_mode() {
    let cfg = resolve(&[]).unwrap();

    assert_eq!(cfg, MeterConfig::default());
    assert_eq!(cfg.bucket_size, 100 * MIB);
    assert_eq!(cfg.interval, Duration::from_millis(1000));
}

#[test]
fn run_subcommand_is_copy_mode() {
    assert_eq!(resolve(&["run"]).unwrap().mode, ModeConfig::Copy);
}

#[test]
fn global_flags_resolve() {
    let cfg = resolve(&[
        "-w", "-p", "-v", "--json", "--log", "out.log", "-s", "8", "-i", "250ms",
    ])
    .unwrap();

    assert!(!cfg.color);
    assert!(cfg.pass_through);
    assert!(cfg.memory_stats);
    assert_eq!(cfg.output, OutputFormat::Json);
    assert_eq!(cfg.log_file, Some(PathBuf::from("out.log")));
    assert_eq!(cfg.bucket_size, 8 * MIB);
    assert_eq!(cfg.interval, Duration::from_millis(250));
}

#[test]
fn byte_threshold_resolves() {
    let cfg = resolve(&["--upper", "--kib", "5", "run"]).unwrap();
    assert_eq!(cfg.threshold, ThresholdConfig::upper(5 * KIB));
}

#[test]
fn scan_mode_with_word_and_char_threshold() {
    let cfg = resolve(&["scan", "--word", "ab", "--lower", "--hun", "2"]).unwrap();

    assert_eq!(
        cfg.mode,
        ModeConfig::Scan {
            pattern: Pattern::new("ab")
        }
    );
    assert_eq!(cfg.threshold, ThresholdConfig::lower(200));
}

#[test]
fn conflicting_modes_fail() {
    let err = resolve(&["--upper", "--lower", "--byt", "1"]).unwrap_err();
    assert!(matches!(err, ConfigError::ConflictingThresholdModes));
}

#[test]
fn two_units_fail() {
    let err = resolve(&["--upper", "--kib", "1", "--mib", "1"]).unwrap_err();
    assert!(matches!(err, ConfigError::MultipleThresholdUnits { .. }));
}

#[test]
fn orphaned_unit_fails() {
    let err = resolve(&["--kib", "1"]).unwrap_err();
    assert!(matches!(err, ConfigError::OrphanedThresholdUnit { .. }));
}

#[test]
fn byte_unit_in_scan_mode_fails() {
    let err = resolve(&["scan", "--upper", "--kib", "1"]).unwrap_err();
    assert!(matches!(err, ConfigError::UnitDomainMismatch { mode: "scan", .. }));
}

#[test]
fn empty_word_fails() {
    let err = resolve(&["scan", "--word", ""]).unwrap_err();
    assert!(matches!(err, ConfigError::EmptyPattern));
}

#[test]
fn bad_interval_fails() {
    let err = resolve(&["--interval", "soon"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidInterval { .. }));

    let err = resolve(&["--interval", "0s"]).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { label: "interval", .. }));
}

#[test]
fn zero_bucket_size_fails() {
    let err = resolve(&["--size", "0"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid size: 0MiB (must be between 1MiB and 1048576MiB)"
    );
}

#[test]
fn packet_mode_with_filter() {
    let cfg = resolve(&[
        "packet",
        "--device",
        "eth0",
        "--promis",
        "--filter",
        "--protocol",
        "tcp",
        "--port",
        "443",
    ])
    .unwrap();

    let ModeConfig::Capture(capture) = cfg.mode else {
        panic!("expected capture mode");
    };
    assert_eq!(capture.device, "eth0");
    assert!(capture.promiscuous);
    assert_eq!(
        capture.filter.and_then(|f| f.expression()).as_deref(),
        Some("tcp and port 443")
    );
}

#[test]
fn filter_options_require_filter_flag() {
    let err = resolve(&["packet", "--device", "eth0", "--port", "443"]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::FilterOptionWithoutFilter { option: "port" }
    ));
}

#[test]
fn blank_device_fails() {
    let err = resolve(&["packet", "--device", " "]).unwrap_err();
    assert!(matches!(err, ConfigError::MissingDevice));
}

#[test]
fn invalid_filter_host_fails() {
    let err = resolve(&[
        "packet",
        "--device",
        "eth0",
        "--filter",
        "--dsthost",
        "300.1.1.1",
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost { which: "dsthost", .. }));
}
