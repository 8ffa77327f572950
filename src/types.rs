//! Core data types for sunrise/sunset calculations.

use core::fmt;

use crate::error::{check_coordinates, check_zenith_angle};
use crate::Result;

/// Official sunrise/sunset zenith (accounts for refraction and the sun's radius).
pub const ZENITH_OFFICIAL: f64 = 90.83333;
/// Civil twilight zenith (sun 6° below the horizon).
pub const ZENITH_CIVIL: f64 = 96.0;
/// Nautical twilight zenith (sun 12° below the horizon).
pub const ZENITH_NAUTICAL: f64 = 102.0;
/// Astronomical twilight zenith (sun 18° below the horizon).
pub const ZENITH_ASTRONOMICAL: f64 = 108.0;

/// Value returned by the solvers when the requested event does not occur on
/// that date at that location (polar day or polar night).
pub const NO_EVENT: f64 = -1.0;

/// Maps a solver result to `None` when it is the [`NO_EVENT`] sentinel.
///
/// # Example
/// ```
/// # use solar_times::{event_time, NO_EVENT};
/// assert_eq!(event_time(NO_EVENT), None);
/// assert_eq!(event_time(7.5), Some(7.5));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn event_time(hours: f64) -> Option<f64> {
    if hours == NO_EVENT {
        None
    } else {
        Some(hours)
    }
}

/// Which crossing of the zenith threshold to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    /// Morning crossing, sun rising through the threshold.
    Sunrise,
    /// Evening crossing, sun setting through the threshold.
    Sunset,
}

impl SolarEvent {
    /// Builds the event from a "want sunrise" flag.
    #[must_use]
    pub const fn from_want_sunrise(want_sunrise: bool) -> Self {
        if want_sunrise {
            Self::Sunrise
        } else {
            Self::Sunset
        }
    }

    /// Returns `true` for [`SolarEvent::Sunrise`].
    #[must_use]
    pub const fn is_sunrise(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Predefined zenith angles for sunrise/sunset calculations.
///
/// Corresponds to the usual twilight definitions; any other angle can be given with `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Zenith {
    /// Standard sunrise/sunset (90.83333°)
    #[default]
    Official,
    /// Civil twilight (96°)
    Civil,
    /// Nautical twilight (102°)
    Nautical,
    /// Astronomical twilight (108°)
    Astronomical,
    /// Custom zenith angle in degrees
    Custom(f64),
}

impl Zenith {
    /// Gets the zenith angle in degrees for this definition.
    #[must_use]
    pub const fn angle(&self) -> f64 {
        match self {
            Self::Official => ZENITH_OFFICIAL,
            Self::Civil => ZENITH_CIVIL,
            Self::Nautical => ZENITH_NAUTICAL,
            Self::Astronomical => ZENITH_ASTRONOMICAL,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom zenith with the specified angle.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if the angle is outside 0 to 180 degrees.
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith_angle(degrees).map(Self::Custom)
    }

    /// Looks up one of the named definitions (`official`, `civil`, `nautical`,
    /// `astronomical`), ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            ("official", Self::Official),
            ("civil", Self::Civil),
            ("nautical", Self::Nautical),
            ("astronomical", Self::Astronomical),
        ]
        .into_iter()
        .find_map(|(key, zenith)| name.eq_ignore_ascii_case(key).then_some(zenith))
    }
}

/// A point on Earth in plain degrees.
///
/// `new` performs no validation, matching the solvers which accept any input;
/// use [`GeoCoordinate::checked`] where the range matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate without range checks.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a coordinate after checking latitude and longitude ranges.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }
}

/// Göteborg: 57° 42' 22.9572" N, 11° 58' 3.43092" E
pub const GOTHENBURG: GeoCoordinate = GeoCoordinate::new(57.706_377, 11.967_619_7);

/// A time split into whole hours, whole minutes and fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hms {
    /// Whole hours
    pub hours: i32,
    /// Whole minutes
    pub minutes: i32,
    /// Seconds, including the fractional part
    pub seconds: f64,
}

impl Hms {
    /// Converts back to decimal hours.
    #[must_use]
    pub fn to_hours(&self) -> f64 {
        crate::time::hms_to_hours(self.hours, self.minutes, self.seconds)
    }

    /// Converts to a `chrono::NaiveTime`, truncating sub-nanosecond precision.
    ///
    /// # Errors
    /// Returns `ComputationError` if any component is outside a single day.
    #[cfg(feature = "chrono")]
    pub fn to_naive_time(&self) -> Result<chrono::NaiveTime> {
        let out_of_range =
            || crate::Error::computation_error("time components are outside a single day");
        let hours = u32::try_from(self.hours).map_err(|_| out_of_range())?;
        let minutes = u32::try_from(self.minutes).map_err(|_| out_of_range())?;
        if !(0.0..60.0).contains(&self.seconds) {
            return Err(out_of_range());
        }
        let whole = crate::math::trunc(self.seconds);
        let nanos = ((self.seconds - whole) * 1e9) as u32;
        chrono::NaiveTime::from_hms_nano_opt(hours, minutes, whole as u32, nanos)
            .ok_or_else(out_of_range)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours,
            self.minutes,
            self.seconds as i32
        )
    }
}

/// An angle split into whole degrees, whole arcminutes and fractional arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees
    pub degrees: i32,
    /// Whole arcminutes
    pub minutes: i32,
    /// Arcseconds, including the fractional part
    pub seconds: f64,
}

impl Dms {
    /// Converts back to decimal degrees.
    #[must_use]
    pub fn to_degrees(&self) -> f64 {
        crate::time::dms_to_degrees(self.degrees, self.minutes, self.seconds)
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {}' {:.4}\"", self.degrees, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_zenith_angles() {
        assert_eq!(Zenith::Official.angle(), 90.83333);
        assert_eq!(Zenith::Civil.angle(), 96.0);
        assert_eq!(Zenith::Nautical.angle(), 102.0);
        assert_eq!(Zenith::Astronomical.angle(), 108.0);
        assert_eq!(Zenith::default(), Zenith::Official);

        let custom = Zenith::custom(93.5).unwrap();
        assert_eq!(custom.angle(), 93.5);

        assert!(Zenith::custom(-1.0).is_err());
        assert!(Zenith::custom(180.5).is_err());
    }

    #[test]
    fn test_zenith_from_name() {
        assert_eq!(Zenith::from_name("official"), Some(Zenith::Official));
        assert_eq!(Zenith::from_name("Civil"), Some(Zenith::Civil));
        assert_eq!(Zenith::from_name("NAUTICAL"), Some(Zenith::Nautical));
        assert_eq!(Zenith::from_name("astronomical"), Some(Zenith::Astronomical));
        assert_eq!(Zenith::from_name("golden-hour"), None);
    }

    #[test]
    fn test_solar_event_from_flag() {
        assert_eq!(SolarEvent::from_want_sunrise(true), SolarEvent::Sunrise);
        assert_eq!(SolarEvent::from_want_sunrise(false), SolarEvent::Sunset);
        assert!(SolarEvent::Sunrise.is_sunrise());
        assert!(!SolarEvent::Sunset.is_sunrise());
    }

    #[test]
    fn test_event_time_sentinel() {
        assert_eq!(event_time(NO_EVENT), None);
        assert_eq!(event_time(0.0), Some(0.0));
        assert_eq!(event_time(23.99), Some(23.99));
        // Only the exact sentinel means "no event"
        assert_eq!(event_time(-1.5), Some(-1.5));
    }

    #[test]
    fn test_geo_coordinate() {
        assert_eq!(GOTHENBURG.latitude, 57.706377);
        assert_eq!(GOTHENBURG.longitude, 11.9676197);

        let unchecked = GeoCoordinate::new(123.0, 456.0);
        assert_eq!(unchecked.latitude, 123.0);

        assert!(GeoCoordinate::checked(38.83333, -77.0).is_ok());
        assert_eq!(
            GeoCoordinate::checked(91.0, 0.0),
            Err(Error::invalid_latitude(91.0))
        );
        assert_eq!(
            GeoCoordinate::checked(0.0, -181.0),
            Err(Error::invalid_longitude(-181.0))
        );
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_display() {
        let hms = Hms {
            hours: 7,
            minutes: 5,
            seconds: 9.75,
        };
        assert_eq!(hms.to_string(), "07:05:09");

        let dms = Dms {
            degrees: 57,
            minutes: 42,
            seconds: 22.9572,
        };
        assert_eq!(dms.to_string(), "57° 42' 22.9572\"");
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_hms_to_naive_time() {
        use chrono::Timelike;

        let time = Hms {
            hours: 14,
            minutes: 36,
            seconds: 12.5,
        }
        .to_naive_time()
        .unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (14, 36, 12));
        assert_eq!(time.nanosecond(), 500_000_000);

        let negative = Hms {
            hours: -1,
            minutes: -30,
            seconds: 0.0,
        };
        assert!(negative.to_naive_time().is_err());

        let too_late = Hms {
            hours: 24,
            minutes: 0,
            seconds: 0.0,
        };
        assert!(too_late.to_naive_time().is_err());
    }
}
