//! Conversion commands: Julian Day Number and sexagesimal splits.

use anyhow::Result;
use chrono::Datelike;
use solar_times::time;
use tracing::debug;

use crate::cli::{DmsArgs, HmsArgs, JdnArgs};

pub fn jdn(args: &JdnArgs) -> Result<()> {
    let jdn = time::julian_day_number(args.date.year(), args.date.month(), args.date.day());
    debug!(date = %args.date, jdn, "julian day number");
    println!("{jdn}");
    Ok(())
}

pub fn hms(args: &HmsArgs) -> Result<()> {
    let hms = time::hours_to_hms(args.hours);
    debug!(hours = args.hours, ?hms, "split hours");
    println!("{} {} {:.4}", hms.hours, hms.minutes, hms.seconds);
    Ok(())
}

pub fn dms(args: &DmsArgs) -> Result<()> {
    let dms = time::degrees_to_dms(args.degrees);
    debug!(degrees = args.degrees, ?dms, "split degrees");
    println!("{dms}");
    Ok(())
}
