//! Calendar and time-of-day conversions shared by both solvers.
//!
//! Julian Day Numbers follow the integer formula of Fliegel & Van Flandern
//! (1968) for the proleptic Gregorian calendar. The day-of-year formula is the
//! one from the Almanac for Computers (1990) used by the hour-angle solver.
//! Dates are never validated: out-of-range months or days flow straight into
//! the arithmetic.

#![allow(clippy::many_single_char_names)]

#[cfg(feature = "chrono")]
use crate::math::{normalize_hours_0_to_24, round};
use crate::math::trunc;
#[cfg(feature = "chrono")]
use crate::sunrise_equation::transit_hours_since_midnight;
use crate::types::{Dms, Hms};
#[cfg(feature = "chrono")]
use crate::{Error, NO_EVENT, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};

/// Seconds per hour (3,600)
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Minutes per hour, and arcminutes per degree (60)
const MINUTES_PER_HOUR: f64 = 60.0;

/// Converts a Gregorian calendar date to its Julian Day Number.
///
/// The month term `(month - 14) / 12` is the formula's -1/0 switch between
/// January/February and the rest of the year and truncates toward zero; every
/// other division floors, so years before -4800 still count consistently.
///
/// # Example
/// ```
/// # use solar_times::time::julian_day_number;
/// assert_eq!(julian_day_number(2021, 12, 26), 2_459_575);
/// assert_eq!(julian_day_number(2000, 1, 1), 2_451_545);
/// ```
#[must_use]
pub const fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let a = (m - 14) / 12;

    (1461 * (y + 4800 + a)).div_euclid(4) + (367 * (m - 2 - 12 * a)).div_euclid(12)
        - (3 * (y + 4900 + a).div_euclid(100)).div_euclid(4)
        + d
        - 32075
}

/// Approximate day of the year (1-based) using integer arithmetic only.
///
/// Every century year is treated as a leap year, which is part of the formula.
///
/// # Example
/// ```
/// # use solar_times::time::day_of_year;
/// assert_eq!(day_of_year(2021, 3, 1), 60);
/// assert_eq!(day_of_year(2020, 3, 1), 61);
/// ```
#[must_use]
pub const fn day_of_year(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    let d = day as i64;

    let n1 = (275 * m).div_euclid(9);
    let n2 = (m + 9).div_euclid(12);
    let n3 = 1 + (y - 4 * y.div_euclid(4) + 2).div_euclid(3);

    n1 - (n2 * n3) + d - 30
}

/// Splits decimal hours into whole hours, whole minutes and seconds.
///
/// Components are truncated toward zero, so negative input yields negative
/// components rather than an error.
///
/// # Example
/// ```
/// # use solar_times::time::hours_to_hms;
/// let hms = hours_to_hms(18.5);
/// assert_eq!((hms.hours, hms.minutes), (18, 30));
/// assert!(hms.seconds.abs() < 1e-9);
/// ```
#[must_use]
pub fn hours_to_hms(hours: f64) -> Hms {
    let (whole, minutes, seconds) = split_sexagesimal(hours);
    Hms {
        hours: whole,
        minutes,
        seconds,
    }
}

/// Joins hours, minutes and seconds into decimal hours.
#[must_use]
pub fn hms_to_hours(hours: i32, minutes: i32, seconds: f64) -> f64 {
    join_sexagesimal(hours, minutes, seconds)
}

/// Splits decimal degrees into whole degrees, whole arcminutes and arcseconds.
///
/// Same truncation policy as [`hours_to_hms`].
///
/// # Example
/// ```
/// # use solar_times::time::degrees_to_dms;
/// let dms = degrees_to_dms(57.706377);
/// assert_eq!((dms.degrees, dms.minutes), (57, 42));
/// assert!((dms.seconds - 22.9572).abs() < 1e-6);
/// ```
#[must_use]
pub fn degrees_to_dms(degrees: f64) -> Dms {
    let (whole, minutes, seconds) = split_sexagesimal(degrees);
    Dms {
        degrees: whole,
        minutes,
        seconds,
    }
}

/// Joins degrees, arcminutes and arcseconds into decimal degrees.
#[must_use]
pub fn dms_to_degrees(degrees: i32, minutes: i32, seconds: f64) -> f64 {
    join_sexagesimal(degrees, minutes, seconds)
}

fn split_sexagesimal(value: f64) -> (i32, i32, f64) {
    let whole = trunc(value);
    let fraction = value - whole;
    let minutes = trunc(fraction * MINUTES_PER_HOUR);
    let seconds = (fraction * SECONDS_PER_HOUR) % MINUTES_PER_HOUR;
    (whole as i32, minutes as i32, seconds)
}

fn join_sexagesimal(whole: i32, minutes: i32, seconds: f64) -> f64 {
    f64::from(whole) + (f64::from(minutes) / MINUTES_PER_HOUR + seconds / SECONDS_PER_HOUR)
}

/// Julian Day Number of any chrono date-like value.
///
/// # Example
/// ```
/// # use solar_times::time::julian_day_number_from_date;
/// # use chrono::NaiveDate;
/// let date = NaiveDate::from_ymd_opt(2021, 12, 26).unwrap();
/// assert_eq!(julian_day_number_from_date(date), 2_459_575);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn julian_day_number_from_date<D: Datelike>(date: D) -> i64 {
    julian_day_number(date.year(), date.month(), date.day())
}

/// Places decimal hours on the UTC time line, counted from midnight at the
/// start of `date`.
///
/// Returns `Ok(None)` for [`NO_EVENT`]. Values below 0 or at/above 24 land on
/// the previous or following day as given; no occurrence is chosen. Solver
/// results should go through [`event_to_utc_datetime`] instead.
///
/// # Errors
/// Returns `ComputationError` if `hours` is not finite or the resulting
/// instant is outside chrono's range.
///
/// # Example
/// ```
/// # use solar_times::time::hours_to_utc_datetime;
/// # use chrono::{NaiveDate, Timelike};
/// let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let sunrise = hours_to_utc_datetime(date, 7.925).unwrap().unwrap();
/// assert_eq!((sunrise.hour(), sunrise.minute(), sunrise.second()), (7, 55, 30));
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::float_cmp, clippy::needless_pass_by_value)]
pub fn hours_to_utc_datetime<D: Datelike>(
    date: D,
    hours: f64,
) -> Result<Option<DateTime<Utc>>> {
    if hours == NO_EVENT {
        return Ok(None);
    }
    if !hours.is_finite() {
        return Err(Error::computation_error("event time is not finite"));
    }

    let midnight = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .ok_or(Error::invalid_date("date is not representable"))?
        .and_utc();

    let millis = round(hours * SECONDS_PER_HOUR * 1000.0) as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|offset| midnight.checked_add_signed(offset))
        .map(Some)
        .ok_or(Error::computation_error("event time is outside the supported range"))
}

/// Places a solver result at `longitude` on the UTC time line as the
/// occurrence that belongs to `date`.
///
/// Both solvers only fix an event modulo one day: the sunrise equation can
/// return -4.6 or 34.0 for Tokyo, the hour-angle solver wraps into [0, 24).
/// The result is shifted by whole days into the 24 hours centered on the solar
/// transit of `date`, so sunrise and sunset of one date always end up less
/// than a day apart, in order, whichever solver produced them.
///
/// # Errors
/// Same as [`hours_to_utc_datetime`].
///
/// # Example
/// ```
/// # use solar_times::{sunrise_equation, time::event_to_utc_datetime, ZENITH_OFFICIAL};
/// # use chrono::{NaiveDate, Timelike};
/// let date = NaiveDate::from_ymd_opt(2022, 6, 21).unwrap();
/// let (_, sunset) = sunrise_equation::sunrise_and_sunset(2022, 6, 21, 35.68, 139.69, ZENITH_OFFICIAL);
/// assert!(sunset > 24.0);
///
/// let instant = event_to_utc_datetime(date, 139.69, sunset).unwrap().unwrap();
/// assert_eq!(instant.date_naive(), date);
/// assert_eq!(instant.hour(), 10);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::float_cmp, clippy::needless_pass_by_value)]
pub fn event_to_utc_datetime<D: Datelike>(
    date: D,
    longitude: f64,
    hours: f64,
) -> Result<Option<DateTime<Utc>>> {
    if hours == NO_EVENT {
        return Ok(None);
    }

    let transit = transit_hours_since_midnight(date.year(), date.month(), date.day(), longitude);
    let window_start = transit - 12.0;
    hours_to_utc_datetime(date, window_start + normalize_hours_0_to_24(hours - window_start))
}
