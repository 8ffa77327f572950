//! Basic example showing sunrise, sunset and twilight with the numeric API.

use solar_times::{GOTHENBURG, Zenith, event_time, sunrise_equation, time};

fn main() {
    let (year, month, day) = (2022, 3, 20);
    println!(
        "Gothenburg ({}, {}) on {year}-{month:02}-{day:02}, UTC\n",
        time::degrees_to_dms(GOTHENBURG.latitude),
        time::degrees_to_dms(GOTHENBURG.longitude)
    );

    for (label, zenith) in [
        ("Official", Zenith::Official),
        ("Civil", Zenith::Civil),
        ("Nautical", Zenith::Nautical),
        ("Astronomical", Zenith::Astronomical),
    ] {
        let (rise, set) = sunrise_equation::sunrise_and_sunset_for_zenith(
            year,
            month,
            day,
            GOTHENBURG.latitude,
            GOTHENBURG.longitude,
            zenith,
        );

        match (event_time(rise), event_time(set)) {
            (Some(rise), Some(set)) => println!(
                "{label:>13}: {} - {}",
                time::hours_to_hms(rise),
                time::hours_to_hms(set)
            ),
            _ => println!("{label:>13}: does not occur"),
        }
    }

    let noon = sunrise_equation::solar_transit(year, month, day, GOTHENBURG.longitude);
    println!("\n   Solar noon: {}", time::hours_to_hms(noon));
    println!(
        "  Julian day number: {}",
        time::julian_day_number(year, month, day)
    );
}
