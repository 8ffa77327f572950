mod cli;
mod config;
mod convert_cmd;
mod logging;
mod times_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Times(args) => {
            let config = config::SolarConfig::load_optional(cli.config.as_deref())?;
            times_cmd::run(&args, &config)
        }
        Command::Jdn(args) => convert_cmd::jdn(&args),
        Command::Hms(args) => convert_cmd::hms(&args),
        Command::Dms(args) => convert_cmd::dms(&args),
    }
}
