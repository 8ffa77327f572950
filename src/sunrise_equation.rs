//! Sunrise equation solver.
//!
//! Computes sunrise and sunset together from a single solar transit, following
//! the sunrise equation as presented at <https://en.wikipedia.org/wiki/Sunrise_equation>.
//! The model uses a fixed obliquity of 23.44° and a three-term equation of
//! center; agreement with the NOAA calculator is typically within a minute at
//! mid latitudes.
//!
//! Results are UTC decimal hours relative to the Julian day of the date, which
//! is centered on the prime meridian. Far from Greenwich a sunrise can
//! therefore come out below 0 or a sunset at/above 24; both are still correct
//! modulo one day. Use [`crate::time::event_to_utc_datetime`] to place them on
//! the right UTC day.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::hour_angle::{hour_angle_cosine, hour_angle_degrees};
use crate::math::{asin, cos, floor, normalize_hours_0_to_24, sin_deg};
use crate::time::julian_day_number;
use crate::{NO_EVENT, Zenith};
#[cfg(feature = "chrono")]
use chrono::Datelike;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 TT)
const J2000_JDN: f64 = 2_451_545.0;

/// Fractional day offset for leap seconds and terrestrial time
const TT_OFFSET_DAYS: f64 = 0.0008;

/// Argument of perihelion of the Earth, in degrees
const PERIHELION_ARGUMENT: f64 = 102.9372;

/// Obliquity of the ecliptic used by the model, in degrees
const OBLIQUITY: f64 = 23.44;

/// Calculate sunrise and sunset with the sunrise equation.
///
/// # Arguments
/// * `year` - Year (can be negative for BCE)
/// * `month` - Month (1-12)
/// * `day` - Day of month (1-31)
/// * `latitude` - Observer latitude in degrees (-90 to +90)
/// * `longitude` - Observer longitude in degrees (-180 to +180)
/// * `zenith` - Zenith angle defining the event, in degrees (90.83333° for official sunrise)
///
/// # Returns
/// `(sunrise, sunset)` as UTC decimal hours. Both are [`NO_EVENT`] when the sun
/// never crosses the zenith angle on that date (polar day or polar night).
/// Inputs are not validated.
///
/// # Example
/// ```
/// use solar_times::{sunrise_equation, GOTHENBURG, ZENITH_OFFICIAL};
///
/// let (sunrise, sunset) = sunrise_equation::sunrise_and_sunset(
///     2022, 1, 1,
///     GOTHENBURG.latitude,
///     GOTHENBURG.longitude,
///     ZENITH_OFFICIAL,
/// );
///
/// // NOAA: 07:55 and 14:36 UTC
/// assert!((sunrise - (7.0 + 55.0 / 60.0)).abs() < 60.0 / 3600.0);
/// assert!((sunset - (14.0 + 36.0 / 60.0)).abs() < 60.0 / 3600.0);
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
    let transit = calculate_transit(year, month, day, longitude);
    let cos_h = hour_angle_cosine(
        zenith,
        transit.sin_declination,
        transit.cos_declination,
        latitude,
    );

    // cos(H) > 1: never rises to the zenith angle; cos(H) < -1: never sets below it
    let Some(hour_angle) = hour_angle_degrees(cos_h) else {
        return (NO_EVENT, NO_EVENT);
    };

    let julian_rise = transit.julian_date - hour_angle / 360.0;
    let julian_set = transit.julian_date + hour_angle / 360.0;

    (
        (julian_rise % 1.0) * 24.0 - 12.0,
        (julian_set % 1.0) * 24.0 + 12.0,
    )
}

/// Calculate sunrise and sunset for a predefined zenith.
///
/// # Example
/// ```
/// use solar_times::{sunrise_equation, Zenith, GOTHENBURG};
///
/// let (dawn, dusk) = sunrise_equation::sunrise_and_sunset_for_zenith(
///     2022, 3, 20,
///     GOTHENBURG.latitude,
///     GOTHENBURG.longitude,
///     Zenith::Civil,
/// );
/// assert!(dawn < dusk);
/// ```
#[must_use]
pub fn sunrise_and_sunset_for_zenith(
    year: i32,
    month: u32,
    day: u32,
    latitude: f64,
    longitude: f64,
    zenith: Zenith,
) -> (f64, f64) {
    sunrise_and_sunset(year, month, day, latitude, longitude, zenith.angle())
}

/// Calculate sunrise and sunset for any chrono date-like value.
///
/// Only the calendar date is used; time of day and time zone are ignored.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use solar_times::{sunrise_equation, Zenith, GOTHENBURG};
///
/// let date = NaiveDate::from_ymd_opt(2021, 12, 26).unwrap();
/// let (sunrise, sunset) =
///     sunrise_equation::sunrise_and_sunset_for_date(date, GOTHENBURG, Zenith::Official);
/// assert!(sunrise > 7.9 && sunrise < 8.0);
/// assert!(sunset > 14.4 && sunset < 14.6);
/// ```
#[cfg(feature = "chrono")]
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn sunrise_and_sunset_for_date<D: Datelike>(
    date: D,
    location: crate::GeoCoordinate,
    zenith: Zenith,
) -> (f64, f64) {
    sunrise_and_sunset(
        date.year(),
        date.month(),
        date.day(),
        location.latitude,
        location.longitude,
        zenith.angle(),
    )
}

/// Calculate the solar transit (solar noon) as UTC decimal hours in [0, 24).
///
/// This is the instant halfway between the sunrise and sunset returned by
/// [`sunrise_and_sunset`], and it exists on every date, including polar days
/// and nights.
///
/// # Example
/// ```
/// use solar_times::{sunrise_equation, GOTHENBURG};
///
/// let noon = sunrise_equation::solar_transit(2022, 1, 1, GOTHENBURG.longitude);
/// assert!(noon > 11.2 && noon < 11.3);
/// ```
#[must_use]
pub fn solar_transit(year: i32, month: u32, day: u32, longitude: f64) -> f64 {
    normalize_hours_0_to_24(transit_hours_since_midnight(year, month, day, longitude))
}

/// Solar transit in UTC hours from midnight at the start of the date, not
/// wrapped. Ranges from about 0 at longitude 180°E to about 24 at 180°W.
pub(crate) fn transit_hours_since_midnight(
    year: i32,
    month: u32,
    day: u32,
    longitude: f64,
) -> f64 {
    let transit = calculate_transit(year, month, day, longitude);
    let jdn = julian_day_number(year, month, day) as f64;
    // The Julian day starts at noon
    (transit.julian_date - jdn) * 24.0 + 12.0
}

/// Solar transit and declination for one date and longitude.
#[derive(Debug, Clone, Copy)]
struct Transit {
    /// Julian date of the solar transit
    julian_date: f64,
    sin_declination: f64,
    cos_declination: f64,
}

fn calculate_transit(year: i32, month: u32, day: u32, longitude: f64) -> Transit {
    let jdn = julian_day_number(year, month, day) as f64;
    let n = floor(jdn - J2000_JDN + TT_OFFSET_DAYS);

    // Mean solar time
    let js = n - longitude / 360.0;

    // Solar mean anomaly
    let m = (357.5291 + 0.98560028 * js) % 360.0;

    // Equation of the center
    let c = 1.9148 * sin_deg(m) + 0.0200 * sin_deg(2.0 * m) + 0.0003 * sin_deg(3.0 * m);

    // Ecliptic longitude
    let l = (m + c + 180.0 + PERIHELION_ARGUMENT) % 360.0;

    let julian_date = J2000_JDN + js + 0.0053 * sin_deg(m) - 0.0069 * sin_deg(2.0 * l);

    let sin_declination = sin_deg(l) * sin_deg(OBLIQUITY);
    let cos_declination = cos(asin(sin_declination));

    Transit {
        julian_date,
        sin_declination,
        cos_declination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::hms_to_hours;
    use crate::{GOTHENBURG, ZENITH_OFFICIAL};

    const SECOND: f64 = 1.0 / 3600.0;

    fn gothenburg(year: i32, month: u32, day: u32) -> (f64, f64) {
        sunrise_and_sunset(
            year,
            month,
            day,
            GOTHENBURG.latitude,
            GOTHENBURG.longitude,
            ZENITH_OFFICIAL,
        )
    }

    #[test]
    fn test_gothenburg_winter() {
        let (sunrise, sunset) = gothenburg(2021, 12, 26);
        assert!((sunrise - hms_to_hours(7, 55, 51.0)).abs() < 10.0 * SECOND);
        assert!((sunset - hms_to_hours(14, 29, 11.0)).abs() < 10.0 * SECOND);

        let (sunrise, sunset) = gothenburg(2021, 1, 1);
        assert!((sunrise - hms_to_hours(7, 55, 19.0)).abs() < 10.0 * SECOND);
        assert!((sunset - hms_to_hours(14, 35, 47.0)).abs() < 10.0 * SECOND);
    }

    #[test]
    fn test_gothenburg_summer() {
        let (sunrise, sunset) = gothenburg(2021, 6, 1);
        assert!((sunrise - hms_to_hours(2, 21, 25.0)).abs() < 30.0 * SECOND);
        assert!((sunset - hms_to_hours(19, 58, 4.0)).abs() < 60.0 * SECOND);
    }

    #[test]
    fn test_transit_is_midpoint() {
        for (month, day) in [(1, 1), (3, 20), (6, 21), (9, 23), (12, 21)] {
            let (sunrise, sunset) = gothenburg(2022, month, day);
            let noon = solar_transit(2022, month, day, GOTHENBURG.longitude);
            assert!(
                (noon - (sunrise + sunset) / 2.0).abs() < 1e-6,
                "{month}-{day}: noon {noon}, rise {sunrise}, set {sunset}"
            );
        }
    }

    #[test]
    fn test_transit_is_normalized() {
        for longitude in [-179.0, -77.0, 0.0, 11.9676197, 139.69, 179.0] {
            let noon = solar_transit(2022, 6, 21, longitude);
            assert!((0.0..24.0).contains(&noon), "{longitude}: {noon}");
        }
        // Solar noon near the date line is around midnight UTC
        let east = solar_transit(2022, 6, 21, 179.0);
        assert!(east < 0.2, "{east}");
    }

    #[test]
    fn test_far_from_greenwich_is_correct_modulo_a_day() {
        // Washington D.C. area, January 1888: the raw sunrise is negative
        let (sunrise, sunset) =
            sunrise_and_sunset(1888, 1, 13, 38.83333333, -77.0, ZENITH_OFFICIAL);
        assert!(sunrise < 0.0);
        assert!((sunrise + 24.0 - hms_to_hours(12, 25, 46.0)).abs() < 120.0 * SECOND);
        assert!((sunset - hms_to_hours(22, 7, 38.0)).abs() < 120.0 * SECOND);

        // San Francisco, June: sunset falls after midnight UTC
        let (_, sunset) =
            sunrise_and_sunset(2023, 6, 21, 37.7749, -122.4194, ZENITH_OFFICIAL);
        assert!(sunset > 24.0);
        assert!((sunset - 24.0 - 3.58).abs() < 0.05);
    }

    #[test]
    fn test_transit_since_midnight_follows_longitude() {
        let washington = transit_hours_since_midnight(1888, 1, 13, -77.0);
        assert!((washington - 17.2856).abs() < 0.001, "{washington}");

        let tokyo = transit_hours_since_midnight(2022, 6, 21, 139.69);
        assert!((tokyo - 2.7145).abs() < 0.001, "{tokyo}");

        // Unwrapped on both sides of the date line
        let east = transit_hours_since_midnight(2022, 6, 21, 179.0);
        let west = transit_hours_since_midnight(2022, 6, 21, -179.0);
        assert!(east < 1.0 && west > 23.0, "{east} {west}");
        assert!((solar_transit(2022, 6, 21, -179.0) - west).abs() < 1e-9);
    }

    #[test]
    fn test_twilight_ordering() {
        let [official, civil, nautical, astronomical] = [
            Zenith::Official,
            Zenith::Civil,
            Zenith::Nautical,
            Zenith::Astronomical,
        ]
        .map(|zenith| {
            sunrise_and_sunset_for_zenith(
                2022,
                3,
                20,
                GOTHENBURG.latitude,
                GOTHENBURG.longitude,
                zenith,
            )
        });

        assert!(astronomical.0 < nautical.0);
        assert!(nautical.0 < civil.0);
        assert!(civil.0 < official.0);

        assert!(official.1 < civil.1);
        assert!(civil.1 < nautical.1);
        assert!(nautical.1 < astronomical.1);
    }

    #[test]
    fn test_polar_day_and_night() {
        // Svalbard: midnight sun in June, polar night in December
        assert_eq!(
            sunrise_and_sunset(2023, 6, 21, 78.0, 15.0, ZENITH_OFFICIAL),
            (NO_EVENT, NO_EVENT)
        );
        assert_eq!(
            sunrise_and_sunset(2023, 12, 21, 78.0, 15.0, ZENITH_OFFICIAL),
            (NO_EVENT, NO_EVENT)
        );
        // South pole, either solstice
        assert_eq!(
            sunrise_and_sunset(2022, 6, 21, -90.0, 0.0, ZENITH_OFFICIAL),
            (NO_EVENT, NO_EVENT)
        );
        assert_eq!(
            sunrise_and_sunset(2022, 12, 21, -90.0, 0.0, ZENITH_OFFICIAL),
            (NO_EVENT, NO_EVENT)
        );
    }

    #[test]
    fn test_arctic_circle_boundary() {
        // Just south of the circle the sun still sets at midsummer
        let (sunrise, sunset) = sunrise_and_sunset(2022, 6, 21, 65.0, 0.0, ZENITH_OFFICIAL);
        assert!(sunrise > 0.9 && sunrise < 1.1);
        assert!(sunset > 22.9 && sunset < 23.2);

        let (sunrise, sunset) = sunrise_and_sunset(2022, 6, 21, 66.0, 0.0, ZENITH_OFFICIAL);
        assert_eq!((sunrise, sunset), (NO_EVENT, NO_EVENT));
    }

    #[test]
    fn test_results_are_finite() {
        for latitude in (-90..=90).step_by(5) {
            for month in 1..=12 {
                let latitude = f64::from(latitude);
                let (sunrise, sunset) =
                    sunrise_and_sunset(2024, month, 15, latitude, 0.0, ZENITH_OFFICIAL);
                assert!(sunrise.is_finite() && sunset.is_finite(), "{latitude} {month}");
            }
        }
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_for_date_matches_numeric_api() {
        use chrono::NaiveDate;

        let date = NaiveDate::from_ymd_opt(2022, 9, 1).unwrap();
        assert_eq!(
            sunrise_and_sunset_for_date(date, GOTHENBURG, Zenith::Official),
            gothenburg(2022, 9, 1)
        );
    }
}
