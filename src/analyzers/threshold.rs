use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{AqiDataset, CityRecord};
use crate::utils::constants::THRESHOLD_TOP_N;

/// City count for one country on one side of the threshold.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdBucket {
    pub country: String,
    pub cities: usize,
}

/// Country frequency tables on either side of an AQI threshold.
///
/// Rows with an AQI exactly equal to the threshold appear in neither
/// table. Each side is independently min-count filtered and truncated to
/// its top entries by count.
#[derive(Debug, Clone, Serialize)]
pub struct ThresholdSplit {
    pub threshold: f64,
    pub below: Vec<ThresholdBucket>,
    pub above: Vec<ThresholdBucket>,
}

pub fn threshold_split(dataset: &AqiDataset, threshold: f64, min_cities: usize) -> ThresholdSplit {
    ThresholdSplit {
        threshold,
        below: count_countries(dataset, min_cities, |r| r.aqi_value < threshold),
        above: count_countries(dataset, min_cities, |r| r.aqi_value > threshold),
    }
}

fn count_countries<F>(dataset: &AqiDataset, min_cities: usize, predicate: F) -> Vec<ThresholdBucket>
where
    F: Fn(&CityRecord) -> bool,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records().iter().filter(|r| predicate(r)) {
        *counts.entry(record.country.as_str()).or_insert(0) += 1;
    }

    let mut buckets: Vec<ThresholdBucket> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_cities)
        .map(|(country, cities)| ThresholdBucket {
            country: country.to_string(),
            cities,
        })
        .collect();

    // Stable sort keeps equal counts in alphabetical order.
    buckets.sort_by(|a, b| b.cities.cmp(&a.cities));
    buckets.truncate(THRESHOLD_TOP_N);
    buckets
}
