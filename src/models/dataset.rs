use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{CityRecord, Hemisphere};

/// The canonical normalized table, built once per session and never mutated.
///
/// Aggregation views borrow the record slice and produce fresh derived
/// tables; `rows_dropped` records how many input rows failed numeric
/// coercion and were excluded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqiDataset {
    records: Vec<CityRecord>,
    rows_dropped: usize,
}

impl AqiDataset {
    pub fn new(records: Vec<CityRecord>, rows_dropped: usize) -> Self {
        Self {
            records,
            rows_dropped,
        }
    }

    pub fn records(&self) -> &[CityRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped
    }

    /// Distinct non-empty PM2.5 categories, sorted alphabetically.
    ///
    /// The first entry is the presentation layer's default selection.
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .map(|r| r.category.as_str())
            .filter(|c| !c.is_empty())
            .collect();
        set.into_iter().map(String::from).collect()
    }

    /// Mean AQI for the Northern and Southern hemispheres, in that order.
    ///
    /// An empty hemisphere yields NaN, matching the statistics views.
    pub fn hemisphere_means(&self) -> (f64, f64) {
        let mut sums = [0.0f64; 2];
        let mut counts = [0usize; 2];

        for record in &self.records {
            let idx = match record.hemisphere {
                Hemisphere::Northern => 0,
                Hemisphere::Southern => 1,
            };
            sums[idx] += record.aqi_value;
            counts[idx] += 1;
        }

        let mean = |sum: f64, count: usize| {
            if count > 0 {
                sum / count as f64
            } else {
                f64::NAN
            }
        };

        (mean(sums[0], counts[0]), mean(sums[1], counts[1]))
    }

    /// Bounding box of all records as (min_lat, max_lat, min_lon, max_lon).
    pub fn geographic_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.records.first()?;
        let mut bounds = (
            first.latitude,
            first.latitude,
            first.longitude,
            first.longitude,
        );

        for record in &self.records {
            bounds.0 = bounds.0.min(record.latitude);
            bounds.1 = bounds.1.max(record.latitude);
            bounds.2 = bounds.2.min(record.longitude);
            bounds.3 = bounds.3.max(record.longitude);
        }

        Some(bounds)
    }
}
