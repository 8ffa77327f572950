//! Polar day and polar night are reported with the NO_EVENT sentinel.

use solar_times::{
    NO_EVENT, SolarEvent, ZENITH_OFFICIAL, Zenith, event_time, hour_angle, sunrise_equation,
};

const SOLSTICES: [(u32, u32); 2] = [(6, 21), (12, 21)];

#[test]
fn test_high_latitudes_at_solstices() {
    for latitude in [70.0, 80.0, 90.0, -70.0, -80.0, -90.0] {
        for (month, day) in SOLSTICES {
            let by_equation = sunrise_equation::sunrise_and_sunset(
                2022,
                month,
                day,
                latitude,
                0.0,
                ZENITH_OFFICIAL,
            );
            let by_hour_angle =
                hour_angle::sunrise_and_sunset(2022, month, day, latitude, 0.0, ZENITH_OFFICIAL);

            assert_eq!(
                by_equation,
                (NO_EVENT, NO_EVENT),
                "sunrise equation at {latitude} on {month}-{day}"
            );
            assert_eq!(
                by_hour_angle,
                (NO_EVENT, NO_EVENT),
                "hour angle at {latitude} on {month}-{day}"
            );
        }
    }
}

#[test]
fn test_north_pole_every_month() {
    for month in 1..=12 {
        for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
            let hours =
                hour_angle::sunrise_or_sunset(2022, month, 1, 90.0, 0.0, ZENITH_OFFICIAL, event);
            assert_eq!(event_time(hours), None, "month {month} {event:?}");
        }
    }
}

#[test]
fn test_sunrise_equation_reports_both_or_neither() {
    for degrees in (60..=90).step_by(2) {
        for month in 1..=12 {
            for latitude in [f64::from(degrees), -f64::from(degrees)] {
                let (sunrise, sunset) = sunrise_equation::sunrise_and_sunset(
                    2023,
                    month,
                    10,
                    latitude,
                    25.0,
                    ZENITH_OFFICIAL,
                );
                assert_eq!(
                    sunrise == NO_EVENT,
                    sunset == NO_EVENT,
                    "{latitude} month {month}: ({sunrise}, {sunset})"
                );
            }
        }
    }
}

#[test]
fn test_polar_night_still_has_twilight() {
    // Tromsø in midwinter: no sunrise, but civil twilight
    let (sunrise, _) =
        sunrise_equation::sunrise_and_sunset(2022, 12, 21, 69.65, 18.96, ZENITH_OFFICIAL);
    assert_eq!(event_time(sunrise), None);

    let (dawn, dusk) = sunrise_equation::sunrise_and_sunset_for_zenith(
        2022,
        12,
        21,
        69.65,
        18.96,
        Zenith::Civil,
    );
    let dawn = event_time(dawn).expect("civil dawn");
    let dusk = event_time(dusk).expect("civil dusk");
    assert!(dawn < dusk);

    let civil_dawn = hour_angle::sunrise_or_sunset_for_zenith(
        2022,
        12,
        21,
        69.65,
        18.96,
        Zenith::Civil,
        SolarEvent::Sunrise,
    );
    assert!((civil_dawn - dawn).abs() < 0.05, "{civil_dawn} vs {dawn}");
}

#[test]
fn test_arctic_circle_edge() {
    // Just below the circle the sun still rises and sets on midsummer day
    let (sunrise, sunset) =
        sunrise_equation::sunrise_and_sunset(2022, 6, 21, 65.0, 0.0, ZENITH_OFFICIAL);
    assert!(event_time(sunrise).is_some());
    assert!(event_time(sunset).is_some());

    let (sunrise, sunset) =
        sunrise_equation::sunrise_and_sunset(2022, 6, 21, 66.0, 0.0, ZENITH_OFFICIAL);
    assert_eq!((sunrise, sunset), (NO_EVENT, NO_EVENT));
    assert_eq!(
        hour_angle::sunrise_and_sunset(2022, 6, 21, 66.0, 0.0, ZENITH_OFFICIAL),
        (NO_EVENT, NO_EVENT)
    );
}
