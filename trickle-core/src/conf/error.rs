use crate::conf::{MagnitudeUnit, ThresholdMode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Threshold
    #[error("threshold accepts --upper or --lower, not both")]
    ConflictingThresholdModes,

    #[error("threshold accepts exactly one unit option, got {}", join_units(.units))]
    MultipleThresholdUnits { units: Vec<MagnitudeUnit> },

    #[error("--{mode} requires exactly one unit option")]
    MissingThresholdUnit { mode: ThresholdMode },

    #[error("{unit} must be used together with --upper or --lower")]
    OrphanedThresholdUnit { unit: MagnitudeUnit },

    #[error("{unit} cannot be used in {mode} mode")]
    UnitDomainMismatch {
        unit: MagnitudeUnit,
        mode: &'static str,
    },

    // Ranges
    #[error("invalid {label}: {value}{units} (must be between {min}{units} and {max}{units})")]
    OutOfRange {
        label: &'static str,
        value: String,
        min: String,
        max: String,
        units: &'static str,
    },

    #[error("invalid interval '{value}': {source}")]
    InvalidInterval {
        value: String,
        #[source]
        source: humantime::DurationError,
    },

    // Scan
    #[error("--word must not be empty")]
    EmptyPattern,

    // Capture
    #[error("packet mode requires a capture device")]
    MissingDevice,

    #[error("--{option} is only available together with --filter")]
    FilterOptionWithoutFilter { option: &'static str },

    #[error("unsupported capture filter protocol '{value}' (expected tcp, udp or icmp)")]
    UnsupportedProtocol { value: String },

    #[error("--{which} must be an IPv4 address, got '{value}'")]
    InvalidHost { which: &'static str, value: String },
}

fn join_units(units: &[MagnitudeUnit]) -> String {
    units
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
