use chrono::TimeZone;
use chrono_tz::{America::Chicago, Europe::Oslo};
use tracing_subscriber::EnvFilter;

use suntimes::{compute_solar_times, suntimes, GeoDate};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let latitude = 39.8;
    let longitude = -89.6;

    let dt = Chicago.with_ymd_and_hms(2026, 3, 21, 12, 0, 0).unwrap();
    let options = GeoDate::new(latitude, longitude, dt);

    println!("=== Sunrise / Sunset Example ===");
    println!(
        "Location: Springfield, IL ({:.1}°N, {:.1}°W)",
        latitude, -longitude
    );
    println!("Date: {}", dt);
    println!();
    println!("--- Raw ---");
    println!("{:?}", compute_solar_times(latitude, longitude, &dt, None));
    println!();
    println!("--- Formatted ---");
    let result = suntimes(&options);
    println!("Sunrise: {}", result.sunrise);
    println!("Sunset:  {}", result.sunset);
    println!("Daytime: {}", result.daytime);
    println!();

    println!("--- Tromsø (69.6°N), solstices ---");
    for (month, day) in [(6, 21), (12, 21)] {
        let dt = Oslo.with_ymd_and_hms(2026, month, day, 12, 0, 0).unwrap();
        println!("{}: {}", dt.date_naive(), suntimes(&GeoDate::new(69.6, 18.9, dt)));
    }
    println!();

    println!("--- Equator, fixed offsets ---");
    for offset in [0.0, 5.5, -8.0] {
        match GeoDate::from_ymd(0.0, 0.0, 2026, 3, 20, offset) {
            Ok(options) => println!("UTC{:+}: {}", offset, suntimes(&options)),
            Err(e) => eprintln!("UTC{:+}: {}", offset, e),
        }
    }

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("\n{}", json),
        Err(e) => eprintln!("serialization failed: {}", e),
    }
}
