//! # Solar Times Library
//!
//! Sunrise, sunset and twilight times for any date and place, computed with two
//! independent low-precision algorithms.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! This library provides implementations of two complementary algorithms:
//! - **Sunrise equation**: solar transit plus hour angle, both events from one evaluation
//! - **Solar hour angle**: Almanac for Computers method, one event per evaluation
//!
//! Both agree with each other and with the NOAA calculator to within a minute or
//! two at mid latitudes. Neither models elevation, atmospheric conditions or ΔT.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Infallible solvers: a missing event is reported as [`NO_EVENT`], never as an error
//! - Thread-safe: pure functions over plain numbers
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `chrono` (default): Enable date-based convenience API and UTC `DateTime` conversion
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! solar-times = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! solar-times = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-times = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Sunrise equation: <https://en.wikipedia.org/wiki/Sunrise_equation>
//! - Nautical Almanac Office (1990). Almanac for Computers. United States Naval Observatory.
//! - Fliegel, H. F.; Van Flandern, T. C. (1968). A machine algorithm for processing calendar dates.
//!   Communications of the ACM, 11(10), 657.
//!
//! ## Quick Start
//!
//! ### Sunrise and sunset (numeric API)
//! ```rust
//! use solar_times::{sunrise_equation, GOTHENBURG, ZENITH_OFFICIAL};
//!
//! let (sunrise, sunset) = sunrise_equation::sunrise_and_sunset(
//!     2022, 6, 21,
//!     GOTHENBURG.latitude,
//!     GOTHENBURG.longitude,
//!     ZENITH_OFFICIAL,
//! );
//!
//! println!("Sunrise: {} UTC", solar_times::time::hours_to_hms(sunrise));
//! println!("Sunset: {} UTC", solar_times::time::hours_to_hms(sunset));
//! ```
//!
//! ### One event at a time
//! ```rust
//! use solar_times::{hour_angle, event_time, SolarEvent, Zenith};
//!
//! // Civil dawn at Longyearbyen in midwinter never happens
//! let dawn = hour_angle::sunrise_or_sunset_for_zenith(
//!     2022, 12, 21,
//!     78.22, 15.65,
//!     Zenith::Civil,
//!     SolarEvent::Sunrise,
//! );
//! assert_eq!(event_time(dawn), None);
//! ```
//!
//! ### As UTC timestamps (requires chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::NaiveDate;
//! use solar_times::{sunrise_equation, time, Zenith, GOTHENBURG};
//!
//! let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let (sunrise, _) = sunrise_equation::sunrise_and_sunset_for_date(date, GOTHENBURG, Zenith::Official);
//!
//! match time::event_to_utc_datetime(date, GOTHENBURG.longitude, sunrise).unwrap() {
//!     Some(instant) => println!("Sunrise: {instant}"),
//!     None => println!("No sunrise (polar day/night)"),
//! }
//! # }
//! ```
//!
//! ## Time Representation
//!
//! All results are UTC decimal hours counted from midnight at the start of the
//! given date, correct modulo one day. The sunrise equation can return values
//! outside [0, 24) far from Greenwich; the hour-angle solver always wraps into
//! [0, 24). [`time::event_to_utc_datetime`] turns either into the instant that
//! belongs to the requested date.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons against the sentinel and reference values
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::math::{degrees_to_radians, radians_to_degrees};
pub use crate::types::{
    Dms, GOTHENBURG, GeoCoordinate, Hms, NO_EVENT, SolarEvent, ZENITH_ASTRONOMICAL, ZENITH_CIVIL,
    ZENITH_NAUTICAL, ZENITH_OFFICIAL, Zenith, event_time,
};

// Algorithm modules
pub mod hour_angle;
pub mod sunrise_equation;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;
