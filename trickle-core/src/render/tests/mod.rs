
use crate::measure::{Domain, MIB, scale, scale_against};
use crate::conf::ThresholdConfig;
use crate::scheduler::{Elapsed, ModeTag, Report, Summary};
use std::time::Duration;

pub(crate) fn copy_report() -> Report {
    Report {
        mode: ModeTag::Copy,
        elapsed: Elapsed(Duration::from_secs(5)),
        rate: scale(5 * MIB, Domain::Bytes),
        total: scale(0, Domain::Bytes),
        violations: None,
        matches: None,
        memory: None,
    }
}

pub(crate) fn scan_report() -> Report {
    Report {
        mode: ModeTag::Scan,
        elapsed: Elapsed(Duration::from_secs(1)),
        rate: scale_against(11, Domain::Chars, &ThresholdConfig::lower(100)),
        total: scale(150, Domain::Chars),
        violations: Some(2),
        matches: Some(3),
        memory: None,
    }
}

pub(crate) fn copy_summary() -> Summary {
    Summary {
        elapsed: Elapsed(Duration::from_secs(6)),
        total: scale(5 * MIB, Domain::Bytes),
        violations: None,
        matches: None,
    }
}
