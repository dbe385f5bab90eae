use crate::conf::ConfigError;
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
    pub label: &'static str,
    pub units: Option<&'static str>,
}

pub const BUCKET_SIZE_MIB: RangeConstraint<u64> = RangeConstraint {
    min: 1,
    max: 1024 * 1024,
    label: "size",
    units: Some("MiB"),
};

pub const INTERVAL_MS: RangeConstraint<u128> = RangeConstraint {
    min: 1,
    max: 24 * 60 * 60 * 1000,
    label: "interval",
    units: Some("ms"),
};

pub const CAPTURE_PORT: RangeConstraint<u32> = RangeConstraint {
    min: 1,
    max: 65_535,
    label: "port",
    units: None,
};

pub fn validate_range<T>(value: T, constraint: &RangeConstraint<T>) -> Result<T, ConfigError>
where
    T: PartialOrd + Display + Copy,
{
    if value < constraint.min || value > constraint.max {
        return Err(out_of_range(value, constraint));
    }
    Ok(value)
}

pub(crate) fn out_of_range<T>(value: T, constraint: &RangeConstraint<T>) -> ConfigError
where
    T: Display,
{
    ConfigError::OutOfRange {
        label: constraint.label,
        value: value.to_string(),
        min: constraint.min.to_string(),
        max: constraint.max.to_string(),
        units: constraint.units.unwrap_or(""),
    }
}
