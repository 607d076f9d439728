use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::models::AqiDataset;
use crate::utils::constants::{PERCENTAGE_TOP_N, PIVOT_TOP_N};

use super::country_stats::country_summaries;

/// Cross-tabulated city counts per (country, PM2.5 category).
///
/// `counts` in each row is aligned with `categories`; missing
/// combinations hold 0. Countries are sorted by their total row count
/// descending (the total itself is not part of the output) and truncated
/// to the top 20. A missing category is its own bucket with an empty
/// label.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPivot {
    pub categories: Vec<String>,
    pub rows: Vec<PivotRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PivotRow {
    pub country: String,
    pub counts: Vec<usize>,
}

/// Percentage of a country's cities falling in one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub country: String,
    pub percentage: f64,
}

/// Global share of each category across the whole table, descending.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDistribution {
    pub category: String,
    pub percentage: f64,
}

pub fn category_pivot(dataset: &AqiDataset, min_cities: usize) -> CategoryPivot {
    let category_set: BTreeSet<&str> = dataset
        .records()
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    let categories: Vec<String> = category_set.iter().map(|c| c.to_string()).collect();

    let index_of: BTreeMap<&str, usize> = category_set
        .iter()
        .enumerate()
        .map(|(i, c)| (*c, i))
        .collect();

    let mut per_country: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for record in dataset.records() {
        let counts = per_country
            .entry(record.country.as_str())
            .or_insert_with(|| vec![0; categories.len()]);
        counts[index_of[record.category.as_str()]] += 1;
    }

    let mut rows: Vec<PivotRow> = per_country
        .into_iter()
        .filter(|(_, counts)| counts.iter().sum::<usize>() >= min_cities)
        .map(|(country, counts)| PivotRow {
            country: country.to_string(),
            counts,
        })
        .collect();

    // Total orders the rows but is not returned.
    rows.sort_by(|a, b| {
        let total_b: usize = b.counts.iter().sum();
        let total_a: usize = a.counts.iter().sum();
        total_b.cmp(&total_a)
    });
    rows.truncate(PIVOT_TOP_N);

    CategoryPivot { categories, rows }
}

/// Per-country percentage of cities in `category`, restricted to
/// countries passing the summary view's minimum-count filter, sorted
/// descending and truncated to the top 10.
///
/// Countries with no city in the category are absent rather than listed
/// at 0. An empty category selection yields an empty ranking; there is
/// nothing meaningful to rank against.
pub fn category_percentages(
    dataset: &AqiDataset,
    category: &str,
    min_cities: usize,
) -> Vec<CategoryShare> {
    if category.is_empty() {
        return Vec::new();
    }

    let valid_countries: BTreeSet<String> = country_summaries(dataset, min_cities)
        .into_iter()
        .map(|row| row.country)
        .collect();

    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    let mut matching: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records() {
        *totals.entry(record.country.as_str()).or_insert(0) += 1;
        if record.category == category {
            *matching.entry(record.country.as_str()).or_insert(0) += 1;
        }
    }

    let mut shares: Vec<CategoryShare> = matching
        .into_iter()
        .filter(|(country, _)| valid_countries.contains(*country))
        .map(|(country, count)| {
            let percentage = count as f64 / totals[country] as f64 * 100.0;
            CategoryShare {
                country: country.to_string(),
                percentage: (percentage * 100.0).round() / 100.0,
            }
        })
        .collect();

    shares.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    shares.truncate(PERCENTAGE_TOP_N);
    shares
}

/// Share of all rows per category, descending by share.
pub fn category_distribution(dataset: &AqiDataset) -> Vec<CategoryDistribution> {
    let total = dataset.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in dataset.records() {
        *counts.entry(record.category.as_str()).or_insert(0) += 1;
    }

    let mut distribution: Vec<CategoryDistribution> = counts
        .into_iter()
        .map(|(category, count)| CategoryDistribution {
            category: category.to_string(),
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();

    distribution.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    distribution
}
