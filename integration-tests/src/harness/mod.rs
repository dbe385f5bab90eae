mod input;
mod sink;
pub mod tracing;

pub use input::{HeldInput, SharedBuffer};
pub use sink::{Recorded, RecordingSink};
pub use tracing::{CapturedEvent, init_test_tracing};

use clap::Parser;
use trickle_core::cli::Cli;
use trickle_core::conf::{ConfigError, MeterConfig};

/// Resolve a config the way the binary would, from arguments after the
/// program name.
pub fn meter_config(args: &[&str]) -> Result<MeterConfig, ConfigError> {
    let argv = std::iter::once("trickle").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).unwrap_or_else(|e| panic!("bad test arguments: {e}"));
    MeterConfig::from_cli(&cli)
}
