//! Solar hour angle solver.
//!
//! Computes one event at a time from the day of the year, using the
//! low-precision solar coordinates of the Almanac for Computers (1990). Each
//! event is evaluated at its own approximate local time (06:00 for sunrise,
//! 18:00 for sunset), so sunrise and sunset are independent calls.
//!
//! Results are always UTC decimal hours in [0, 24), which far from Greenwich
//! can be the previous or following UTC day. Use
//! [`crate::time::event_to_utc_datetime`] to place them.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    acos, asin, atan, cos, cos_deg, degrees_to_radians, floor, normalize_degrees_0_to_360,
    normalize_hours_0_to_24, radians_to_degrees, sin_deg, tan,
};
use crate::time::day_of_year;
use crate::{NO_EVENT, SolarEvent, Zenith};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Sine of the obliquity of the ecliptic used by the model
const SIN_OBLIQUITY: f64 = 0.39782;

/// Cosine of the obliquity, as the right ascension scale factor
const COS_OBLIQUITY: f64 = 0.91764;

/// Calculate sunrise or sunset with the solar hour angle method.
///
/// # Arguments
/// * `year` - Year (can be negative for BCE)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `zenith` - Zenith angle defining the event, in degrees (90.83333° for official sunrise)
/// * `event` - Whether to compute the sunrise or the sunset
///
/// # Returns
/// UTC decimal hours in [0, 24), or [`NO_EVENT`] when the sun does not cross
/// the zenith angle on that date. Inputs are not validated.
///
/// # Example
/// ```
/// use solar_times::{hour_angle, SolarEvent, GOTHENBURG, ZENITH_OFFICIAL};
///
/// let sunrise = hour_angle::sunrise_or_sunset(
///     2021, 12, 26,
///     GOTHENBURG.latitude,
///     GOTHENBURG.longitude,
///     ZENITH_OFFICIAL,
///     SolarEvent::Sunrise,
/// );
///
/// // NOAA: 07:55:51 UTC
/// assert!((sunrise - (7.0 + 55.0 / 60.0 + 51.0 / 3600.0)).abs() < 10.0 / 3600.0);
/// ```
#[must_use]
pub fn sunrise_or_sunset(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: f64,
    event: SolarEvent,
) -> f64 {
    let n = day_of_year(year, month, day) as f64;

    // Longitude as an hour offset, and the approximate time of the event
    let longitude_hours = longitude / 15.0;
    let approx_local_hour = if event.is_sunrise() { 6.0 } else { 18.0 };
    let t = n + (approx_local_hour - longitude_hours) / 24.0;

    // Mean anomaly
    let m = 0.9856 * t - 3.289;

    // True longitude
    let l = (m + 1.916 * sin_deg(m) + 0.020 * sin_deg(2.0 * m) + 282.634 + 360.0) % 360.0;

    // Right ascension, moved into the same quadrant as the true longitude
    let mut ra = normalize_degrees_0_to_360(radians_to_degrees(atan(
        COS_OBLIQUITY * tan(degrees_to_radians(l)),
    )));
    ra += floor(l / 90.0) * 90.0 - floor(ra / 90.0) * 90.0;
    let ra_hours = ra / 15.0;

    // Declination
    let sin_declination = SIN_OBLIQUITY * sin_deg(l);
    let cos_declination = cos(asin(sin_declination));

    let cos_h = hour_angle_cosine(zenith, sin_declination, cos_declination, latitude);
    let Some(hour_angle) = hour_angle_degrees(cos_h) else {
        return NO_EVENT;
    };

    let h = if event.is_sunrise() {
        360.0 - hour_angle
    } else {
        hour_angle
    } / 15.0;

    // Local mean time of the event, then back to UTC
    let local_mean_time = h + ra_hours - 0.06571 * t - 6.622;
    normalize_hours_0_to_24(local_mean_time - longitude_hours)
}

/// Calculate sunrise or sunset for a predefined zenith.
#[must_use]
pub fn sunrise_or_sunset_for_zenith(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
    event: SolarEvent,
) -> f64 {
    sunrise_or_sunset(year, month, day, latitude, longitude, zenith.angle(), event)
}

/// Calculate both events with two independent evaluations.
///
/// Returns `(sunrise, sunset)`; either may be [`NO_EVENT`].
///
/// # Example
/// ```
/// use solar_times::{hour_angle, GOTHENBURG, ZENITH_OFFICIAL};
///
/// let (sunrise, sunset) = hour_angle::sunrise_and_sunset(
///     2022, 6, 21,
///     GOTHENBURG.latitude,
///     GOTHENBURG.longitude,
///     ZENITH_OFFICIAL,
/// );
/// assert!(sunrise < sunset);
/// ```
#[must_use]
pub fn sunrise_and_sunset(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: f64,
) -> (f64, f64) {
    let solve =
        |event| sunrise_or_sunset(year, month, day, latitude, longitude, zenith, event);
    (solve(SolarEvent::Sunrise), solve(SolarEvent::Sunset))
}

/// Calculate sunrise or sunset for any chrono date-like value.
///
/// Only the calendar date is used; time of day and time zone are ignored.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use solar_times::{hour_angle, SolarEvent, Zenith, GOTHENBURG};
///
/// let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let sunset =
///     hour_angle::sunrise_or_sunset_for_date(date, GOTHENBURG, Zenith::Official, SolarEvent::Sunset);
/// assert!(sunset > 14.5 && sunset < 14.7);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_or_sunset_for_date<D: Datelike>(
    date: D,
    location: crate::GeoCoordinate,
    zenith: Zenith,
    event: SolarEvent,
) -> f64 {
    sunrise_or_sunset(
        date.year(),
        date.month(),
        date.day(),
        location.latitude,
        location.longitude,
        zenith.angle(),
        event,
    )
}

/// Cosine of the local hour angle at which the sun reaches `zenith`.
///
/// Above 1 the sun stays below the zenith angle all day; below -1 it stays above.
pub(crate) fn hour_angle_cosine(
    zenith: f64,
    sin_declination: f64,
    cos_declination: f64,
    latitude: f64,
) -> f64 {
    (cos_deg(zenith) - sin_declination * sin_deg(latitude)) / (cos_declination * cos_deg(latitude))
}

/// Hour angle in degrees, or `None` when the cosine is out of range (or NaN).
pub(crate) fn hour_angle_degrees(cos_h: f64) -> Option<f64> {
    (-1.0..=1.0)
        .contains(&cos_h)
        .then(|| radians_to_degrees(acos(cos_h)))
}
