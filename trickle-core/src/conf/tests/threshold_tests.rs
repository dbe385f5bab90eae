use crate::conf::*;
use crate::measure::{Domain, KIB};
use pretty_assertions::assert_eq;

fn request(upper: bool, lower: bool, magnitudes: &[(MagnitudeUnit, u64)]) -> ThresholdRequest {
    ThresholdRequest {
        upper,
        lower,
        magnitudes: magnitudes.to_vec(),
    }
}

#[test]
fn no_mode_and_no_unit_is_unused() {
    let t = ThresholdConfig::resolve(&request(false, false, &[]), Domain::Bytes, "run").unwrap();

    assert_eq!(t, ThresholdConfig::unused());
    assert!(!t.is_active());
}

#[test]
fn unit_is_multiplied_into_raw_magnitude() {
    let t = ThresholdConfig::resolve(
        &request(true, false, &[(MagnitudeUnit::KiB, 3)]),
        Domain::Bytes,
        "run",
    )
    .unwrap();

    assert_eq!(t.mode(), ThresholdMode::Upper);
    assert_eq!(t.magnitude(), 3 * KIB);
}

#[test]
fn char_units_resolve_in_char_domain() {
    let t = ThresholdConfig::resolve(
        &request(false, true, &[(MagnitudeUnit::Hundred, 4)]),
        Domain::Chars,
        "scan",
    )
    .unwrap();

    assert_eq!(t, ThresholdConfig::lower(400));
}

#[test]
fn both_modes_are_rejected() {
    let err = ThresholdConfig::resolve(
        &request(true, true, &[(MagnitudeUnit::Byte, 1)]),
        Domain::Bytes,
        "run",
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::ConflictingThresholdModes));
}

#[test]
fn two_units_are_rejected() {
    let err = ThresholdConfig::resolve(
        &request(
            true,
            false,
            &[(MagnitudeUnit::KiB, 1), (MagnitudeUnit::MiB, 1)],
        ),
        Domain::Bytes,
        "run",
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::MultipleThresholdUnits { .. }));
    assert_eq!(
        err.to_string(),
        "threshold accepts exactly one unit option, got --kib, --mib"
    );
}

#[test]
fn unit_without_mode_is_rejected() {
    let err = ThresholdConfig::resolve(
        &request(false, false, &[(MagnitudeUnit::GiB, 1)]),
        Domain::Bytes,
        "run",
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ConfigError::OrphanedThresholdUnit {
            unit: MagnitudeUnit::GiB
        }
    ));
}

#[test]
fn mode_without_unit_is_rejected() {
    let err =
        ThresholdConfig::resolve(&request(false, true, &[]), Domain::Bytes, "run").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingThresholdUnit {
            mode: ThresholdMode::Lower
        }
    ));
}

#[test]
fn unit_from_other_domain_is_rejected() {
    let err = ThresholdConfig::resolve(
        &request(true, false, &[(MagnitudeUnit::KiB, 1)]),
        Domain::Chars,
        "scan",
    )
    .unwrap_err();

    assert_eq!(err.to_string(), "--kib cannot be used in scan mode");
}

#[test]
fn overflowing_magnitude_is_rejected() {
    let err = ThresholdConfig::resolve(
        &request(true, false, &[(MagnitudeUnit::TiB, u64::MAX)]),
        Domain::Bytes,
        "run",
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::OutOfRange { label: "tib", .. }));
}
