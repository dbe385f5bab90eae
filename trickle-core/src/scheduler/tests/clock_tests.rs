use crate::scheduler::{Elapsed, next_deadline};
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

#[test]
fn elapsed_renders_as_clock() {
    assert_eq!(Elapsed(Duration::ZERO).to_string(), "00:00:00");
    assert_eq!(Elapsed(Duration::from_millis(5_999)).to_string(), "00:00:05");
    assert_eq!(Elapsed(Duration::from_secs(3_661)).to_string(), "01:01:01");
}

#[test]
fn elapsed_hours_do_not_wrap() {
    assert_eq!(Elapsed(Duration::from_secs(25 * 3_600)).to_string(), "25:00:00");
    assert_eq!(
        Elapsed(Duration::from_secs(100 * 3_600 + 59)).to_string(),
        "100:00:59"
    );
}

#[test]
fn elapsed_serializes_as_clock_string() {
    let json = serde_json::to_string(&Elapsed(Duration::from_secs(62))).unwrap();
    assert_eq!(json, "\"00:01:02\"");
}

#[test]
fn next_deadline_advances_one_interval_when_on_time() {
    let start = Instant::now();
    let interval = Duration::from_millis(100);

    assert_eq!(
        next_deadline(start, interval, start),
        start + interval
    );
    assert_eq!(
        next_deadline(start, interval, start + Duration::from_millis(40)),
        start + interval
    );
}

#[test]
fn next_deadline_skips_missed_ticks() {
    let start = Instant::now();
    let interval = Duration::from_millis(100);

    assert_eq!(
        next_deadline(start, interval, start + Duration::from_millis(100)),
        start + Duration::from_millis(200)
    );
    assert_eq!(
        next_deadline(start, interval, start + Duration::from_millis(350)),
        start + Duration::from_millis(400)
    );
}
