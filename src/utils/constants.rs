/// Required input columns (header names are trimmed before lookup)
pub const COL_CITY: &str = "City";
pub const COL_COUNTRY: &str = "Country";
pub const COL_AQI_VALUE: &str = "AQI Value";
pub const COL_LAT: &str = "lat";
pub const COL_LNG: &str = "lng";
pub const COL_CATEGORY: &str = "PM2.5 AQI Category";

/// Country synonym remapping, applied before any derived column
pub const COUNTRY_SYNONYMS: [(&str, &str); 3] = [
    (
        "United Kingdom of Great Britain and Northern Ireland",
        "UK",
    ),
    ("United States of America", "USA"),
    ("Russian Federation", "Russia"),
];

/// Normalization defaults
pub const DEFAULT_EAGER_LABELS: usize = 100;

/// View parameter defaults and ranges
pub const DEFAULT_AQI_THRESHOLD: f64 = 50.0;
pub const MAX_AQI_THRESHOLD: f64 = 500.0;
pub const DEFAULT_MIN_CITIES: usize = 5;
pub const MAX_MIN_CITIES: usize = 50;

/// Display truncation limits
pub const THRESHOLD_TOP_N: usize = 10;
pub const PIVOT_TOP_N: usize = 20;
pub const PERCENTAGE_TOP_N: usize = 10;

/// Map presentation constants
pub const DEFAULT_ALPHA: u8 = 180;
pub const MAP_ZOOM: u8 = 1;
pub const MAP_PITCH: u8 = 0;
