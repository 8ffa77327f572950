//! Times command: sunrise and sunset for one date and place.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use solar_times::{GeoCoordinate, NO_EVENT, Zenith, hour_angle, sunrise_equation, time};
use tracing::{debug, info_span, warn};

use crate::cli::TimesArgs;
use crate::config::{Algorithm, SolarConfig};

/// Run the times command.
pub fn run(args: &TimesArgs, config: &SolarConfig) -> Result<()> {
    let _cmd = info_span!("times", date = %args.date).entered();

    let (label, location) = resolve_location(args, config)?;
    let zenith = config.zenith(args.zenith.as_deref())?;
    let algorithm = config.algorithm(args.algorithm);
    debug!(
        location = %label,
        latitude = location.latitude,
        longitude = location.longitude,
        zenith = zenith.angle(),
        ?algorithm,
        "resolved inputs"
    );

    println!(
        "{} {label} ({}, {}) zenith {}°",
        args.date,
        location.latitude,
        location.longitude,
        zenith.angle()
    );
    for line in report_lines(args.date, location, zenith, algorithm)? {
        println!("{line}");
    }
    Ok(())
}

fn resolve_location(args: &TimesArgs, config: &SolarConfig) -> Result<(String, GeoCoordinate)> {
    match (args.lat, args.lng, &args.location) {
        (Some(latitude), Some(longitude), _) => {
            let location = GeoCoordinate::checked(latitude, longitude)
                .context("invalid --lat/--lng")?;
            Ok(("custom".to_string(), location))
        }
        (_, _, Some(name)) => Ok((name.clone(), config.location(name)?)),
        _ => Ok((
            crate::config::BUILTIN_LOCATION.to_string(),
            config.location(crate::config::BUILTIN_LOCATION)?,
        )),
    }
}

/// One line per solver, in the order the user asked for.
fn report_lines(
    date: NaiveDate,
    location: GeoCoordinate,
    zenith: Zenith,
    algorithm: Algorithm,
) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    if matches!(algorithm, Algorithm::Equation | Algorithm::Both) {
        let (sunrise, sunset) =
            sunrise_equation::sunrise_and_sunset_for_date(date, location, zenith);
        lines.push(format!(
            "sunrise equation: sunrise {}, sunset {}",
            format_event(date, location.longitude, sunrise, "sunrise")?,
            format_event(date, location.longitude, sunset, "sunset")?
        ));
    }

    if matches!(algorithm, Algorithm::HourAngle | Algorithm::Both) {
        let (sunrise, sunset) = hour_angle::sunrise_and_sunset(
            date.year(),
            date.month(),
            date.day(),
            location.latitude,
            location.longitude,
            zenith.angle(),
        );
        lines.push(format!(
            "hour angle:       sunrise {}, sunset {}",
            format_event(date, location.longitude, sunrise, "sunrise")?,
            format_event(date, location.longitude, sunset, "sunset")?
        ));
    }

    Ok(lines)
}

/// `HH:MM:SS UTC`, with the UTC date appended when it is not `date`.
#[allow(clippy::float_cmp)]
fn format_event(date: NaiveDate, longitude: f64, hours: f64, event: &str) -> Result<String> {
    if hours == NO_EVENT {
        warn!(%date, event, "event does not occur (polar day or night)");
        return Ok("none".to_string());
    }

    let Some(instant) = time::event_to_utc_datetime(date, longitude, hours)? else {
        return Ok("none".to_string());
    };
    let clock = instant.format("%H:%M:%S UTC");
    if instant.date_naive() == date {
        Ok(clock.to_string())
    } else {
        Ok(format!("{clock} ({})", instant.date_naive()))
    }
}
