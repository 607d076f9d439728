use serde::{Deserialize, Serialize};
use validator::Validate;

/// Northern iff latitude >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 {
            Hemisphere::Northern
        } else {
            Hemisphere::Southern
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "Northern",
            Hemisphere::Southern => "Southern",
        }
    }
}

/// Eastern iff longitude >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudeSide {
    Eastern,
    Western,
}

impl LongitudeSide {
    pub fn from_longitude(longitude: f64) -> Self {
        if longitude >= 0.0 {
            LongitudeSide::Eastern
        } else {
            LongitudeSide::Western
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LongitudeSide::Eastern => "Eastern",
            LongitudeSide::Western => "Western",
        }
    }
}

/// One row as read from the input file, numeric fields still unparsed.
///
/// Coercion failures are a property of the row, not of the file, so the
/// reader keeps the raw text and leaves the drop decision to the normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMeasurement {
    pub city: String,
    pub country: String,
    pub aqi_value: String,
    pub lat: String,
    pub lng: String,
    pub category: String,
}

/// A fully normalized measurement row.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CityRecord {
    pub city: String,

    /// Country name after synonym remapping, stable for all grouping.
    pub country: String,

    pub aqi_value: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    /// PM2.5 AQI category, trimmed and title-cased. May be empty or an
    /// unrecognized label; downstream grouping treats it as its own bucket.
    pub category: String,

    /// "{City} ({Country})" for rows inside the eager-label prefix,
    /// empty for all later rows.
    pub location_info: String,

    pub hemisphere: Hemisphere,
    pub longitude_side: LongitudeSide,
}

impl CityRecord {
    pub fn has_location_info(&self) -> bool {
        !self.location_info.is_empty()
    }
}
