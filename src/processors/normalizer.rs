use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::models::{AqiDataset, CityRecord, Hemisphere, LongitudeSide, RawMeasurement};
use crate::utils::constants::{COUNTRY_SYNONYMS, DEFAULT_EAGER_LABELS};
use crate::utils::text::title_case;

/// Remap long-form country names to their short forms.
/// Unmapped names pass through unchanged.
fn remap_country(country: &str) -> &str {
    for (long_form, short_form) in COUNTRY_SYNONYMS {
        if country == long_form {
            return short_form;
        }
    }
    country
}

/// Builds the canonical normalized table from raw rows.
///
/// Rows whose AQI value or coordinates fail numeric coercion are excluded
/// from the table. The exclusion is deliberate and silent at row level;
/// the aggregate drop count is carried on the resulting [`AqiDataset`].
///
/// Location labels are eagerly formatted only for a bounded prefix of the
/// surviving rows (default 100, in post-filter order); every later row
/// carries an empty label. Consumers that need a label everywhere must
/// format it themselves.
pub struct Normalizer {
    eager_labels: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            eager_labels: DEFAULT_EAGER_LABELS,
        }
    }

    /// Change the size of the eagerly labelled prefix.
    pub fn with_eager_labels(eager_labels: usize) -> Self {
        Self { eager_labels }
    }

    /// Parse one raw row into a normalized record.
    ///
    /// The country remap happens before any derived column so grouping
    /// keys are stable downstream.
    pub fn parse_row(&self, raw: &RawMeasurement) -> Result<CityRecord> {
        let aqi_value = parse_numeric("AQI Value", &raw.aqi_value)?;
        let latitude = parse_numeric("lat", &raw.lat)?;
        let longitude = parse_numeric("lng", &raw.lng)?;

        let country = remap_country(raw.country.trim()).to_string();

        Ok(CityRecord {
            city: raw.city.trim().to_string(),
            country,
            aqi_value,
            latitude,
            longitude,
            category: title_case(raw.category.trim()),
            location_info: String::new(),
            hemisphere: Hemisphere::from_latitude(latitude),
            longitude_side: LongitudeSide::from_longitude(longitude),
        })
    }

    /// Normalize all raw rows into the session dataset.
    pub fn normalize(&self, raw_rows: &[RawMeasurement]) -> AqiDataset {
        let mut records = Vec::with_capacity(raw_rows.len());
        let mut dropped = 0usize;

        for raw in raw_rows {
            match self.parse_row(raw) {
                Ok(record) => records.push(record),
                Err(_) => dropped += 1,
            }
        }

        // Labels are assigned by post-filter position, so this runs after
        // the drop pass.
        for record in records.iter_mut().take(self.eager_labels) {
            record.location_info = format!("{} ({})", record.city, record.country);
        }

        debug!(
            kept = records.len(),
            dropped, "normalized measurement rows"
        );

        AqiDataset::new(records, dropped)
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_numeric(field: &'static str, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    let parsed: f64 = trimmed.parse().map_err(|_| DashboardError::InvalidNumeric {
        field,
        value: value.to_string(),
    })?;

    if parsed.is_nan() {
        return Err(DashboardError::InvalidNumeric {
            field,
            value: value.to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(city: &str, country: &str, aqi: &str, lat: &str, lng: &str, category: &str) -> RawMeasurement {
        RawMeasurement {
            city: city.to_string(),
            country: country.to_string(),
            aqi_value: aqi.to_string(),
            lat: lat.to_string(),
            lng: lng.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_parse_row_coercion_and_derivation() {
        let normalizer = Normalizer::new();
        let record = normalizer
            .parse_row(&raw("Sydney", "Australia", "32", "-33.87", "151.21", " good "))
            .unwrap();

        assert_eq!(record.aqi_value, 32.0);
        assert_eq!(record.hemisphere, Hemisphere::Southern);
        assert_eq!(record.longitude_side, LongitudeSide::Eastern);
        assert_eq!(record.category, "Good");
    }

    #[test]
    fn test_country_synonym_remap() {
        let normalizer = Normalizer::new();

        let record = normalizer
            .parse_row(&raw(
                "London",
                "United Kingdom of Great Britain and Northern Ireland",
                "42",
                "51.5",
                "-0.12",
                "Good",
            ))
            .unwrap();
        assert_eq!(record.country, "UK");

        let record = normalizer
            .parse_row(&raw("Lyon", "France", "38", "45.76", "4.83", "Good"))
            .unwrap();
        assert_eq!(record.country, "France");
    }

    #[test]
    fn test_malformed_rows_dropped_and_counted() {
        let normalizer = Normalizer::new();
        let dataset = normalizer.normalize(&[
            raw("Good Row", "A", "10", "1.0", "1.0", "Good"),
            raw("Bad AQI", "A", "n/a", "1.0", "1.0", "Good"),
            raw("Bad Lat", "A", "10", "", "1.0", "Good"),
            raw("Bad Lng", "A", "10", "1.0", "abc", "Good"),
            raw("NaN AQI", "A", "NaN", "1.0", "1.0", "Good"),
        ]);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.rows_dropped(), 4);
        assert_eq!(dataset.records()[0].city, "Good Row");
    }

    #[test]
    fn test_eager_labels_cover_post_filter_prefix_only() {
        let normalizer = Normalizer::with_eager_labels(2);
        let dataset = normalizer.normalize(&[
            raw("Bad", "A", "x", "1.0", "1.0", "Good"), // dropped, takes no label slot
            raw("One", "A", "10", "1.0", "1.0", "Good"),
            raw("Two", "B", "10", "1.0", "1.0", "Good"),
            raw("Three", "C", "10", "1.0", "1.0", "Good"),
        ]);

        let records = dataset.records();
        assert_eq!(records[0].location_info, "One (A)");
        assert_eq!(records[1].location_info, "Two (B)");
        assert_eq!(records[2].location_info, "");
    }

    #[test]
    fn test_hemisphere_boundary_at_zero() {
        let normalizer = Normalizer::new();
        let record = normalizer
            .parse_row(&raw("Origin", "A", "10", "0.0", "0.0", "Good"))
            .unwrap();

        assert_eq!(record.hemisphere, Hemisphere::Northern);
        assert_eq!(record.longitude_side, LongitudeSide::Eastern);
    }

    #[test]
    fn test_missing_category_is_opaque_text() {
        let normalizer = Normalizer::new();
        let record = normalizer
            .parse_row(&raw("City", "A", "10", "1.0", "1.0", ""))
            .unwrap();

        // Not an error; empty category forms its own bucket downstream.
        assert_eq!(record.category, "");
    }
}
