//! Sunrise and sunset as UTC timestamps with chrono.

use chrono::{Days, NaiveDate};
use solar_times::{GeoCoordinate, SolarEvent, Zenith, hour_angle, sunrise_equation, time};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // San Francisco: sunset falls after midnight UTC in summer
    let location = GeoCoordinate::checked(37.7749, -122.4194)?;
    let start = NaiveDate::from_ymd_opt(2023, 6, 19).ok_or("invalid date")?;

    for offset in 0..5 {
        let date = start + Days::new(offset);
        let (sunrise, sunset) =
            sunrise_equation::sunrise_and_sunset_for_date(date, location, Zenith::Official);

        let sunrise = time::event_to_utc_datetime(date, location.longitude, sunrise)?;
        let sunset = time::event_to_utc_datetime(date, location.longitude, sunset)?;

        match (sunrise, sunset) {
            (Some(sunrise), Some(sunset)) => {
                println!("{date}: sunrise {sunrise}, sunset {sunset}");
            }
            _ => println!("{date}: no sunrise/sunset (polar day/night)"),
        }
    }

    // The hour-angle solver wraps into [0, 24); placement puts dusk on the next UTC day
    let dusk =
        hour_angle::sunrise_or_sunset_for_date(start, location, Zenith::Civil, SolarEvent::Sunset);
    if let Some(dusk) = time::event_to_utc_datetime(start, location.longitude, dusk)? {
        println!("\nCivil dusk in San Francisco on {start}: {dusk}");
    }

    Ok(())
}
