use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::AqiDataset;

/// Per-country AQI summary statistics.
#[derive(Debug, Clone, Serialize)]
pub struct CountrySummary {
    pub country: String,
    pub cities: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

/// Result of a country search over the summary table.
///
/// When the search text matches nothing, the full table is returned and
/// `search_fallback` is set so the caller can tell the user the search
/// had no effect.
#[derive(Debug, Clone, Serialize)]
pub struct CountrySummaryView {
    pub rows: Vec<CountrySummary>,
    pub search_fallback: bool,
}

/// Group by country and compute count/mean/min/max of AQI, keeping only
/// countries with at least `min_cities` rows, sorted ascending by mean.
///
/// Grouping uses an ordered map and the sort is stable, so equal means
/// keep alphabetical country order and re-runs are byte-identical.
pub fn country_summaries(dataset: &AqiDataset, min_cities: usize) -> Vec<CountrySummary> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in dataset.records() {
        groups
            .entry(record.country.as_str())
            .or_default()
            .push(record.aqi_value);
    }

    let mut rows: Vec<CountrySummary> = groups
        .into_iter()
        .filter(|(_, values)| values.len() >= min_cities)
        .map(|(country, values)| {
            let cities = values.len();
            let sum: f64 = values.iter().sum();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            CountrySummary {
                country: country.to_string(),
                cities,
                mean: sum / cities as f64,
                min,
                max,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.mean.total_cmp(&b.mean));
    rows
}

/// Case-insensitive substring search over the summary table.
pub fn search_country_summaries(
    dataset: &AqiDataset,
    min_cities: usize,
    search: &str,
) -> CountrySummaryView {
    let rows = country_summaries(dataset, min_cities);
    let needle = search.trim().to_lowercase();

    if needle.is_empty() {
        return CountrySummaryView {
            rows,
            search_fallback: false,
        };
    }

    let matched: Vec<CountrySummary> = rows
        .iter()
        .filter(|row| row.country.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    if matched.is_empty() {
        CountrySummaryView {
            rows,
            search_fallback: true,
        }
    } else {
        CountrySummaryView {
            rows: matched,
            search_fallback: false,
        }
    }
}
