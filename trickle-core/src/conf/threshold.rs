use crate::conf::ConfigError;
use crate::conf::range::{RangeConstraint, out_of_range};
use crate::measure::{BILLION, Domain, GIB, HUNDRED, KIB, MIB, MILLION, TIB};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdMode {
    #[default]
    None,
    /// Flag intervals strictly above the magnitude.
    Upper,
    /// Flag intervals strictly below the magnitude.
    Lower,
}

impl fmt::Display for ThresholdMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThresholdMode::None => "none",
            ThresholdMode::Upper => "upper",
            ThresholdMode::Lower => "lower",
        })
    }
}

/// Unit option a threshold magnitude was given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MagnitudeUnit {
    Byte,
    KiB,
    MiB,
    GiB,
    TiB,
    Char,
    Hundred,
    Million,
    Billion,
}

impl MagnitudeUnit {
    pub fn flag(self) -> &'static str {
        match self {
            MagnitudeUnit::Byte => "byt",
            MagnitudeUnit::KiB => "kib",
            MagnitudeUnit::MiB => "mib",
            MagnitudeUnit::GiB => "gib",
            MagnitudeUnit::TiB => "tib",
            MagnitudeUnit::Char => "cha",
            MagnitudeUnit::Hundred => "hun",
            MagnitudeUnit::Million => "mil",
            MagnitudeUnit::Billion => "bil",
        }
    }

    pub fn multiplier(self) -> u64 {
        match self {
            MagnitudeUnit::Byte | MagnitudeUnit::Char => 1,
            MagnitudeUnit::KiB => KIB,
            MagnitudeUnit::MiB => MIB,
            MagnitudeUnit::GiB => GIB,
            MagnitudeUnit::TiB => TIB,
            MagnitudeUnit::Hundred => HUNDRED,
            MagnitudeUnit::Million => MILLION,
            MagnitudeUnit::Billion => BILLION,
        }
    }

    pub fn domain(self) -> Domain {
        match self {
            MagnitudeUnit::Byte
            | MagnitudeUnit::KiB
            | MagnitudeUnit::MiB
            | MagnitudeUnit::GiB
            | MagnitudeUnit::TiB => Domain::Bytes,
            _ => Domain::Chars,
        }
    }
}

impl fmt::Display for MagnitudeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.flag())
    }
}

/// Threshold options as given on the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct ThresholdRequest {
    pub upper: bool,
    pub lower: bool,
    pub magnitudes: Vec<(MagnitudeUnit, u64)>,
}

/// A resolved threshold: one comparison mode and one raw magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ThresholdConfig {
    mode: ThresholdMode,
    magnitude: u64,
}

impl ThresholdConfig {
    pub fn unused() -> Self {
        Self::default()
    }

    pub fn upper(magnitude: u64) -> Self {
        Self {
            mode: ThresholdMode::Upper,
            magnitude,
        }
    }

    pub fn lower(magnitude: u64) -> Self {
        Self {
            mode: ThresholdMode::Lower,
            magnitude,
        }
    }

    /// Validate a request for a stream counting `domain`.
    ///
    /// Rejects both modes at once, more than one unit, a mode without a
    /// unit, a unit without a mode, and units from the other domain.
    pub fn resolve(
        request: &ThresholdRequest,
        domain: Domain,
        mode_name: &'static str,
    ) -> Result<Self, ConfigError> {
        let mode = match (request.upper, request.lower) {
            (true, true) => return Err(ConfigError::ConflictingThresholdModes),
            (true, false) => ThresholdMode::Upper,
            (false, true) => ThresholdMode::Lower,
            (false, false) => ThresholdMode::None,
        };

        let (unit, value) = match (mode, request.magnitudes.as_slice()) {
            (ThresholdMode::None, []) => return Ok(Self::unused()),
            (ThresholdMode::None, [(unit, _), ..]) => {
                return Err(ConfigError::OrphanedThresholdUnit { unit: *unit });
            }
            (mode, []) => return Err(ConfigError::MissingThresholdUnit { mode }),
            (_, [single]) => *single,
            (_, many) => {
                return Err(ConfigError::MultipleThresholdUnits {
                    units: many.iter().map(|(unit, _)| *unit).collect(),
                });
            }
        };

        if unit.domain() != domain {
            return Err(ConfigError::UnitDomainMismatch {
                unit,
                mode: mode_name,
            });
        }

        let magnitude = value.checked_mul(unit.multiplier()).ok_or_else(|| {
            out_of_range(
                value,
                &RangeConstraint {
                    min: 0,
                    max: u64::MAX / unit.multiplier(),
                    label: unit.flag(),
                    units: None,
                },
            )
        })?;

        Ok(Self { mode, magnitude })
    }

    pub fn mode(&self) -> ThresholdMode {
        self.mode
    }

    /// The configured magnitude in raw bytes or characters, whichever unit supplied it.
    pub fn magnitude(&self) -> u64 {
        self.magnitude
    }

    pub fn is_active(&self) -> bool {
        self.mode != ThresholdMode::None
    }

    pub fn is_violated_by(&self, magnitude: u64) -> bool {
        match self.mode {
            ThresholdMode::None => false,
            ThresholdMode::Upper => magnitude > self.magnitude,
            ThresholdMode::Lower => magnitude < self.magnitude,
        }
    }
}
