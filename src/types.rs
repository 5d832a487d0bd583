use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Location and date to compute sun times for.
///
/// `timezone` overrides the UTC offset carried by `date` when set.
#[derive(Debug, Clone)]
pub struct GeoDate<Tz: TimeZone> {
    pub latitude: f64,
    pub longitude: f64,
    pub date: DateTime<Tz>,
    pub timezone: Option<f64>,
}

impl<Tz: TimeZone> GeoDate<Tz> {
    pub fn new(latitude: f64, longitude: f64, date: DateTime<Tz>) -> Self {
        Self {
            latitude,
            longitude,
            date,
            timezone: None,
        }
    }

    pub fn with_utc_offset_hours(mut self, hours: f64) -> Self {
        self.timezone = Some(hours);
        self
    }
}

impl GeoDate<FixedOffset> {
    /// Local midnight of `year-month-day` at a fixed `offset_hours` east of UTC.
    pub fn from_ymd(
        latitude: f64,
        longitude: f64,
        year: i32,
        month: u32,
        day: u32,
        offset_hours: f64,
    ) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(Error::InvalidDate { year, month, day })?;
        let invalid_offset = Error::InvalidOffset {
            hours: offset_hours,
        };
        if !offset_hours.is_finite() {
            return Err(invalid_offset);
        }
        let offset = FixedOffset::east_opt((offset_hours * 3600.0).round() as i32)
            .ok_or_else(|| invalid_offset.clone())?;
        let date = offset
            .from_local_datetime(&naive)
            .single()
            .ok_or(invalid_offset)?;
        Ok(Self::new(latitude, longitude, date))
    }
}

/// Sunrise and sunset in local fractional hours, or the polar cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolarResult {
    Rises { sunrise: f64, sunset: f64 },
    NeverRises,
    NeverSets,
}

impl SolarResult {
    /// Legacy pair encoding: `(None, Some(-1.0))` never rises,
    /// `(Some(-1.0), None)` never sets.
    pub fn to_pair(self) -> (Option<f64>, Option<f64>) {
        match self {
            SolarResult::Rises { sunrise, sunset } => (Some(sunrise), Some(sunset)),
            SolarResult::NeverRises => (None, Some(-1.0)),
            SolarResult::NeverSets => (Some(-1.0), None),
        }
    }

    pub fn from_pair(pair: (Option<f64>, Option<f64>)) -> Option<Self> {
        match pair {
            (None, Some(s)) if s == -1.0 => Some(SolarResult::NeverRises),
            (Some(r), None) if r == -1.0 => Some(SolarResult::NeverSets),
            (Some(sunrise), Some(sunset)) => Some(SolarResult::Rises { sunrise, sunset }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuntimesResult {
    pub sunrise: String,
    pub sunset: String,
    pub daytime: String,
}

impl fmt::Display for SuntimesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sunrise {}, sunset {}, daytime {}",
            self.sunrise, self.sunset, self.daytime
        )
    }
}

/// Intermediate quantities of one solar transit computation.
/// Angles are in degrees, `transit` is a Julian date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTerms {
    pub julian_day: i64,
    pub day_number: f64,
    pub mean_anomaly: f64,
    pub equation_of_center: f64,
    pub ecliptic_longitude: f64,
    pub transit: f64,
    pub declination: f64,
}
