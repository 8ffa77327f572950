use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Algorithm;

/// Sunrise, sunset and twilight times.
#[derive(Parser)]
#[command(
    name = "solar-times",
    version,
    about = "Sunrise, sunset and twilight times in UTC"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute sunrise and sunset for a date and place.
    Times(TimesArgs),
    /// Print the Julian Day Number of a date.
    Jdn(JdnArgs),
    /// Split decimal hours into hours, minutes and seconds.
    Hms(HmsArgs),
    /// Split decimal degrees into degrees, arcminutes and arcseconds.
    Dms(DmsArgs),
}

/// Arguments for the `times` subcommand.
#[derive(clap::Args)]
pub struct TimesArgs {
    /// Calendar date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,

    /// Named location from the config file, or the built-in `gothenburg`.
    #[arg(short, long, conflicts_with_all = ["lat", "lng"])]
    pub location: Option<String>,

    /// Latitude in degrees, north positive.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Zenith: official, civil, nautical, astronomical or an angle in degrees.
    #[arg(short, long)]
    pub zenith: Option<String>,

    /// Which solver to run.
    #[arg(short, long, value_enum)]
    pub algorithm: Option<Algorithm>,
}

/// Arguments for the `jdn` subcommand.
#[derive(clap::Args)]
pub struct JdnArgs {
    /// Calendar date (YYYY-MM-DD).
    #[arg(short, long)]
    pub date: NaiveDate,
}

/// Arguments for the `hms` subcommand.
#[derive(clap::Args)]
pub struct HmsArgs {
    /// Decimal hours.
    #[arg(allow_negative_numbers = true)]
    pub hours: f64,
}

/// Arguments for the `dms` subcommand.
#[derive(clap::Args)]
pub struct DmsArgs {
    /// Decimal degrees.
    #[arg(allow_negative_numbers = true)]
    pub degrees: f64,
}
