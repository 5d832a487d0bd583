use chrono::{DateTime, Datelike, Offset, TimeZone};
use tracing::debug;

use crate::types::{SolarResult, SolarTerms};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
/// Apparent altitude of the sun's centre at rise and set (refraction plus semi-diameter).
pub const SUNRISE_ALTITUDE: f64 = -0.83;
/// Julian date of mean solar noon at J2000 on the prime meridian.
pub const J2000_NOON: f64 = 2451545.0009;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

fn normalize_hours(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(24.0);
    // rem_euclid can round up to the modulus for tiny negative inputs
    if wrapped >= 24.0 {
        0.0
    } else {
        wrapped
    }
}

/// Julian Day Number of a proleptic Gregorian date, month 1-indexed.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (year, month, day) = (year as i64, month as i64, day as i64);
    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;
    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Offset of `date` from UTC in hours, positive east.
pub fn utc_offset_hours<Tz: TimeZone>(date: &DateTime<Tz>) -> f64 {
    date.offset().fix().local_minus_utc() as f64 / 3600.0
}

pub fn solar_terms<Tz: TimeZone>(longitude: f64, date: &DateTime<Tz>) -> SolarTerms {
    let julian_day = julian_day_number(date.year(), date.month(), date.day());

    // Ties round away from zero.
    let day_number = (julian_day as f64 - J2000_NOON - longitude / 360.0).round();
    let approx_noon = J2000_NOON + longitude / 360.0 + day_number;

    let mean_anomaly = 356.047 + 0.9856002585 * day_number;
    let m_rad = deg_to_rad(mean_anomaly);
    let equation_of_center =
        1.9148 * m_rad.sin() + 0.02 * (2.0 * m_rad).sin() + 0.0003 * (3.0 * m_rad).sin();
    let ecliptic_longitude = normalize_angle(mean_anomaly + 102.9372 + equation_of_center + 180.0);
    let l_rad = deg_to_rad(ecliptic_longitude);

    let transit = approx_noon + 0.0053 * m_rad.sin() - 0.0069 * (2.0 * l_rad).sin();
    let declination = rad_to_deg((l_rad.sin() * deg_to_rad(EARTH_AXIAL_TILT).sin()).asin());

    SolarTerms {
        julian_day,
        day_number,
        mean_anomaly,
        equation_of_center,
        ecliptic_longitude,
        transit,
        declination,
    }
}

fn hour_angle_terms(latitude: f64, declination: f64) -> (f64, f64) {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let numerator = deg_to_rad(SUNRISE_ALTITUDE).sin() - lat_rad.sin() * dec_rad.sin();
    let denominator = lat_rad.cos() * dec_rad.cos();
    (numerator, denominator)
}

/// Cosine of the sunrise hour angle. Outside [-1, 1] the sun stays on one
/// side of the horizon all day.
pub fn hour_angle_cosine(latitude: f64, declination: f64) -> f64 {
    let (numerator, denominator) = hour_angle_terms(latitude, declination);
    numerator / denominator
}

/// `NeverRises` above 1, `NeverSets` below -1. Exactly ±1 still crosses the horizon.
pub fn polar_case(cos_omega: f64) -> Option<SolarResult> {
    if cos_omega > 1.0 {
        Some(SolarResult::NeverRises)
    } else if cos_omega < -1.0 {
        Some(SolarResult::NeverSets)
    } else {
        None
    }
}

pub fn compute_solar_times<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    date: &DateTime<Tz>,
    timezone: Option<f64>,
) -> SolarResult {
    let terms = solar_terms(longitude, date);
    debug!(?terms, latitude, longitude, "solar terms");

    if deg_to_rad(latitude).cos().abs() < f64::EPSILON {
        let (numerator, _) = hour_angle_terms(latitude, terms.declination);
        let result = if numerator > 0.0 {
            SolarResult::NeverRises
        } else {
            SolarResult::NeverSets
        };
        debug!(latitude, declination = terms.declination, ?result, "polar latitude");
        return result;
    }

    let cos_omega = hour_angle_cosine(latitude, terms.declination);
    if let Some(result) = polar_case(cos_omega) {
        debug!(cos_omega, ?result, "sun stays on one side of the horizon");
        return result;
    }

    let omega = rad_to_deg(cos_omega.acos());
    let j_rise = terms.transit - omega / 360.0;
    let j_set = terms.transit + omega / 360.0;

    let jd = terms.julian_day as f64;
    let utc_rise = 24.0 * (j_rise - jd) + 12.0;
    let utc_set = 24.0 * (j_set - jd) + 12.0;

    let tz = timezone.unwrap_or_else(|| utc_offset_hours(date));
    SolarResult::Rises {
        sunrise: normalize_hours(utc_rise + tz + 24.0),
        sunset: normalize_hours(utc_set + tz + 24.0),
    }
}

/// Same as [`compute_solar_times`] in the pair encoding of [`SolarResult::to_pair`].
pub fn compute_solar_times_raw<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    date: &DateTime<Tz>,
    timezone: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    compute_solar_times(latitude, longitude, date, timezone).to_pair()
}
