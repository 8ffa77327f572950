//! Example demonstrating usage without chrono.
//!
//! Build with `--no-default-features --features libm` to run the same code
//! on the pure Rust math backend.

use solar_times::{NO_EVENT, SolarEvent, ZENITH_OFFICIAL, hour_angle, time};

fn main() {
    // Longyearbyen, Svalbard: polar night in December, midnight sun in June
    let (latitude, longitude) = (78.22, 15.65);

    for (month, day) in [(3, 20), (6, 21), (9, 23), (12, 21)] {
        let sunrise = hour_angle::sunrise_or_sunset(
            2024,
            month,
            day,
            latitude,
            longitude,
            ZENITH_OFFICIAL,
            SolarEvent::Sunrise,
        );

        if sunrise == NO_EVENT {
            println!("2024-{month:02}-{day:02}: no sunrise");
        } else {
            let hms = time::hours_to_hms(sunrise);
            println!(
                "2024-{month:02}-{day:02}: sunrise {:02}:{:02} UTC",
                hms.hours, hms.minutes
            );
        }
    }
}
