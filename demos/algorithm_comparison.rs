//! Compare the sunrise equation with the hour-angle solver over a year.

use solar_times::{GOTHENBURG, ZENITH_OFFICIAL, hour_angle, sunrise_equation, time};

fn main() {
    println!("Gothenburg, first of each month in 2022 (UTC)\n");
    println!(
        "{:>5}  {:>8} {:>8}  {:>8} {:>8}  {:>7} {:>7}",
        "month", "rise A", "rise B", "set A", "set B", "Δrise s", "Δset s"
    );

    for month in 1..=12 {
        let (rise_a, set_a) = sunrise_equation::sunrise_and_sunset(
            2022,
            month,
            1,
            GOTHENBURG.latitude,
            GOTHENBURG.longitude,
            ZENITH_OFFICIAL,
        );
        let (rise_b, set_b) = hour_angle::sunrise_and_sunset(
            2022,
            month,
            1,
            GOTHENBURG.latitude,
            GOTHENBURG.longitude,
            ZENITH_OFFICIAL,
        );

        println!(
            "{month:>5}  {} {}  {} {}  {:>7.1} {:>7.1}",
            time::hours_to_hms(rise_a),
            time::hours_to_hms(rise_b),
            time::hours_to_hms(set_a),
            time::hours_to_hms(set_b),
            (rise_a - rise_b) * 3600.0,
            (set_a - set_b) * 3600.0
        );
    }
}
