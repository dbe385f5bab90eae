//! Command-line surface.
//!
//! Global options apply to every mode; each subcommand selects one
//! ingestion mode and carries the options only that mode understands.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "trickle",
    version,
    about = "trickle: measure the throughput of a stream flowing through a pipe"
)]
pub struct Cli {
    #[command(flatten)]
    pub meter: MeterArgs,

    #[command(subcommand)]
    pub mode: Option<ModeCmd>,
}

#[derive(Args, Debug, Clone)]
pub struct MeterArgs {
    /// Reporting interval (e.g. 1000ms, 2s)
    #[arg(short = 'i', long, default_value = "1000ms", global = true)]
    pub interval: String,

    /// Relay the input to stdout unchanged
    #[arg(short = 'p', long, global = true)]
    pub pipe: bool,

    /// Bucket size in MiB read per poll
    #[arg(short = 's', long, default_value_t = 100, global = true)]
    pub size: u64,

    /// Show process memory usage in every report
    #[arg(short = 'v', long, global = true)]
    pub memview: bool,

    /// Disable colored output
    #[arg(short = 'w', long, global = true)]
    pub white: bool,

    /// Append every report to this file
    #[arg(long, global = true)]
    pub log: Option<PathBuf>,

    /// Emit reports as JSON lines instead of redrawing a status line
    #[arg(long, global = true)]
    pub json: bool,

    /// Count intervals above the threshold
    #[arg(short = 'u', long, global = true)]
    pub upper: bool,

    /// Count intervals below the threshold
    #[arg(short = 'l', long, global = true)]
    pub lower: bool,

    /// Threshold in bytes
    #[arg(long, global = true)]
    pub byt: Option<u64>,

    /// Threshold in KiB
    #[arg(long, global = true)]
    pub kib: Option<u64>,

    /// Threshold in MiB
    #[arg(long, global = true)]
    pub mib: Option<u64>,

    /// Threshold in GiB
    #[arg(long, global = true)]
    pub gib: Option<u64>,

    /// Threshold in TiB
    #[arg(long, global = true)]
    pub tib: Option<u64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ModeCmd {
    /// Measure bytes read from stdin (default)
    Run,

    /// Count characters line by line, optionally counting a word
    Scan(ScanArgs),

    /// Measure packets captured from a network device
    Packet(PacketArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Count occurrences of this word
    #[arg(long)]
    pub word: Option<String>,

    /// Threshold in characters
    #[arg(long)]
    pub cha: Option<u64>,

    /// Threshold in hundreds of characters
    #[arg(long)]
    pub hun: Option<u64>,

    /// Threshold in millions of characters
    #[arg(long)]
    pub mil: Option<u64>,

    /// Threshold in billions of characters
    #[arg(long)]
    pub bil: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct PacketArgs {
    /// Capture device name
    #[arg(long)]
    pub device: String,

    /// Capture in promiscuous mode
    #[arg(long)]
    pub promis: bool,

    /// Enable the capture filter options below
    #[arg(long)]
    pub filter: bool,

    /// Filter: port number
    #[arg(long)]
    pub port: Option<u32>,

    /// Filter: protocol (tcp, udp, icmp)
    #[arg(long)]
    pub protocol: Option<String>,

    /// Filter: destination IPv4 host
    #[arg(long)]
    pub dsthost: Option<String>,

    /// Filter: source IPv4 host
    #[arg(long)]
    pub srchost: Option<String>,
}
