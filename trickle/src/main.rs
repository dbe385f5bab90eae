use clap::Parser;
use trickle_core::cli::Cli;
use trickle_core::conf::MeterConfig;
use trickle_core::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();

    let config = match MeterConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("trickle: {e}");
            std::process::exit(1);
        }
    };

    trickle_core::runtime::run(&config)?;

    Ok(())
}
