use crate::conf::ThresholdConfig;
use serde::Serialize;
use std::fmt;

pub const KIB: u64 = 1 << 10;
pub const MIB: u64 = 1 << 20;
pub const GIB: u64 = 1 << 30;
pub const TIB: u64 = 1 << 40;

pub const HUNDRED: u64 = 100;
pub const MILLION: u64 = 1_000_000;
pub const BILLION: u64 = 1_000_000_000;

const MEASURE_PLACES: i32 = 2;

/// What a magnitude counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Bytes,
    Chars,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Byte,
    KiB,
    MiB,
    GiB,
    TiB,
    Char,
    HundredChar,
    MillionChar,
    BillionChar,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Byte => "Byte",
            Unit::KiB => "KiB",
            Unit::MiB => "MiB",
            Unit::GiB => "GiB",
            Unit::TiB => "TiB",
            Unit::Char => "Char",
            Unit::HundredChar => "Hundred Char",
            Unit::MillionChar => "Million Char",
            Unit::BillionChar => "Billion Char",
        }
    }

    pub fn divisor(self) -> u64 {
        match self {
            Unit::Byte | Unit::Char => 1,
            Unit::KiB => KIB,
            Unit::MiB => MIB,
            Unit::GiB => GIB,
            Unit::TiB => TIB,
            Unit::HundredChar => HUNDRED,
            Unit::MillionChar => MILLION,
            Unit::BillionChar => BILLION,
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            Unit::Byte | Unit::KiB | Unit::MiB | Unit::GiB | Unit::TiB => Domain::Bytes,
            _ => Domain::Chars,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// (exclusive upper bound, unit) in ascending order; anything past the last
// bound lands in the domain's top unit.
const BYTE_BRACKETS: &[(u64, Unit)] = &[
    (KIB, Unit::Byte),
    (MIB, Unit::KiB),
    (GIB, Unit::MiB),
    (TIB, Unit::GiB),
];

const CHAR_BRACKETS: &[(u64, Unit)] = &[
    (HUNDRED, Unit::Char),
    (MILLION, Unit::HundredChar),
    (BILLION, Unit::MillionChar),
];

impl Domain {
    /// Bracket for `magnitude`. A value equal to a boundary belongs to the
    /// bracket above it.
    pub fn bracket(self, magnitude: u64) -> Unit {
        let (brackets, top) = match self {
            Domain::Bytes => (BYTE_BRACKETS, Unit::TiB),
            Domain::Chars => (CHAR_BRACKETS, Unit::BillionChar),
        };

        brackets
            .iter()
            .find(|(bound, _)| magnitude < *bound)
            .map(|(_, unit)| *unit)
            .unwrap_or(top)
    }
}

/// A magnitude divided into its display unit, rounded to two places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scaled {
    pub measure: f64,
    pub unit: Unit,
    pub over_threshold: bool,
}

impl Scaled {
    pub fn zero(domain: Domain) -> Self {
        scale(0, domain)
    }
}

impl fmt::Display for Scaled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit.domain() {
            Domain::Bytes => write!(f, "{:.2} {}", self.measure, self.unit),
            Domain::Chars => write!(f, "{} {}", self.measure, self.unit),
        }
    }
}

/// Scale a magnitude without evaluating any threshold.
pub fn scale(magnitude: u64, domain: Domain) -> Scaled {
    let unit = domain.bracket(magnitude);
    let measure = magnitude as f64 / unit.divisor() as f64;

    Scaled {
        measure: round_half_up(measure, MEASURE_PLACES),
        unit,
        over_threshold: false,
    }
}

/// Scale a current-interval magnitude and flag it against `threshold`.
pub fn scale_against(magnitude: u64, domain: Domain, threshold: &ThresholdConfig) -> Scaled {
    Scaled {
        over_threshold: threshold.is_violated_by(magnitude),
        ..scale(magnitude, domain)
    }
}

/// `floor(x * 10^places + 0.5) / 10^places`
pub fn round_half_up(value: f64, places: i32) -> f64 {
    let shift = 10f64.powi(places);
    (value * shift + 0.5).floor() / shift
}
