use chrono::TimeZone;
use tracing::warn;

use crate::format::{format_clock, format_duration};
use crate::solar::compute_solar_times;
use crate::types::{GeoDate, SolarResult, SuntimesResult};

const NEVER: &str = "Never";
const NOT_AVAILABLE: &str = "N/A";

pub fn suntimes<Tz: TimeZone>(options: &GeoDate<Tz>) -> SuntimesResult {
    let result = compute_solar_times(
        options.latitude,
        options.longitude,
        &options.date,
        options.timezone,
    );

    let (sunrise, sunset, daytime) = match result {
        SolarResult::NeverRises => (NEVER.to_string(), String::new(), String::new()),
        SolarResult::NeverSets => (String::new(), NEVER.to_string(), String::new()),
        SolarResult::Rises { sunrise, sunset } if sunrise.is_finite() && sunset.is_finite() => (
            format_clock(sunrise),
            format_clock(sunset),
            format_duration(sunrise, sunset),
        ),
        other => {
            warn!(
                ?other,
                latitude = options.latitude,
                longitude = options.longitude,
                "sun times not available"
            );
            (
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
                NOT_AVAILABLE.to_string(),
            )
        }
    };

    SuntimesResult {
        sunrise,
        sunset,
        daytime,
    }
}
