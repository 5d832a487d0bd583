//! Sunrise, sunset and daylight duration for a latitude, longitude and date.

pub mod daylight;
pub mod error;
pub mod format;
pub mod solar;
pub mod types;

pub use error::{Error, Result};

pub use format::{format_clock, format_duration, split_hours};

pub use solar::{
    compute_solar_times, compute_solar_times_raw, deg_to_rad, hour_angle_cosine,
    julian_day_number, normalize_angle, polar_case, rad_to_deg, solar_terms,
    utc_offset_hours, EARTH_AXIAL_TILT, J2000_NOON, SUNRISE_ALTITUDE,
};

pub use daylight::suntimes;

pub use types::{GeoDate, SolarResult, SolarTerms, SuntimesResult};
