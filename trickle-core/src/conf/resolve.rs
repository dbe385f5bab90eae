use crate::cli::{Cli, MeterArgs, ModeCmd, PacketArgs, ScanArgs};
use crate::conf::range::{BUCKET_SIZE_MIB, INTERVAL_MS, out_of_range, validate_range};
use crate::conf::{
    CaptureConfig, CaptureFilter, ConfigError, MagnitudeUnit, MeterConfig, ModeConfig,
    OutputFormat, ThresholdConfig, ThresholdRequest,
};
use crate::ingest::Pattern;
use crate::measure::MIB;
use std::time::Duration;

impl MeterConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let meter = &cli.meter;

        let mode = match &cli.mode {
            None | Some(ModeCmd::Run) => ModeConfig::Copy,
            Some(ModeCmd::Scan(scan)) => resolve_scan(scan)?,
            Some(ModeCmd::Packet(packet)) => resolve_packet(packet)?,
        };

        let threshold = ThresholdConfig::resolve(
            &threshold_request(meter, &cli.mode),
            mode.domain(),
            mode.name(),
        )?;

        let bucket_size = validate_range(meter.size, &BUCKET_SIZE_MIB)? * MIB;

        Ok(Self {
            mode,
            bucket_size,
            interval: parse_interval(&meter.interval)?,
            color: !meter.white,
            memory_stats: meter.memview,
            pass_through: meter.pipe,
            threshold,
            log_file: meter.log.clone(),
            output: if meter.json {
                OutputFormat::Json
            } else {
                OutputFormat::Line
            },
        })
    }
}

fn parse_interval(value: &str) -> Result<Duration, ConfigError> {
    let interval =
        humantime::parse_duration(value).map_err(|source| ConfigError::InvalidInterval {
            value: value.to_string(),
            source,
        })?;

    let millis = interval.as_millis();
    if millis < INTERVAL_MS.min || millis > INTERVAL_MS.max {
        return Err(out_of_range(millis, &INTERVAL_MS));
    }
    Ok(interval)
}

fn resolve_scan(scan: &ScanArgs) -> Result<ModeConfig, ConfigError> {
    let pattern = match scan.word.as_deref() {
        None => None,
        Some(word) => Some(Pattern::new(word).ok_or(ConfigError::EmptyPattern)?),
    };
    Ok(ModeConfig::Scan { pattern })
}

fn resolve_packet(packet: &PacketArgs) -> Result<ModeConfig, ConfigError> {
    if packet.device.trim().is_empty() {
        return Err(ConfigError::MissingDevice);
    }

    let filter = if packet.filter {
        Some(CaptureFilter::parse(
            packet.protocol.as_deref(),
            packet.port,
            packet.srchost.as_deref(),
            packet.dsthost.as_deref(),
        )?)
    } else {
        let stray = [
            ("protocol", packet.protocol.is_some()),
            ("port", packet.port.is_some()),
            ("srchost", packet.srchost.is_some()),
            ("dsthost", packet.dsthost.is_some()),
        ]
        .into_iter()
        .find(|(_, given)| *given);

        if let Some((option, _)) = stray {
            return Err(ConfigError::FilterOptionWithoutFilter { option });
        }
        None
    };

    Ok(ModeConfig::Capture(CaptureConfig {
        device: packet.device.clone(),
        promiscuous: packet.promis,
        filter,
    }))
}

fn threshold_request(meter: &MeterArgs, mode: &Option<ModeCmd>) -> ThresholdRequest {
    let mut given = vec![
        (MagnitudeUnit::Byte, meter.byt),
        (MagnitudeUnit::KiB, meter.kib),
        (MagnitudeUnit::MiB, meter.mib),
        (MagnitudeUnit::GiB, meter.gib),
        (MagnitudeUnit::TiB, meter.tib),
    ];

    if let Some(ModeCmd::Scan(scan)) = mode {
        given.extend([
            (MagnitudeUnit::Char, scan.cha),
            (MagnitudeUnit::Hundred, scan.hun),
            (MagnitudeUnit::Million, scan.mil),
            (MagnitudeUnit::Billion, scan.bil),
        ]);
    }

    ThresholdRequest {
        upper: meter.upper,
        lower: meter.lower,
        magnitudes: given
            .into_iter()
            .filter_map(|(unit, value)| value.map(|v| (unit, v)))
            .collect(),
    }
}
