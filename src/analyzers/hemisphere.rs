use serde::Serialize;

use crate::models::{AqiDataset, Hemisphere, LongitudeSide};

/// AQI statistics for one hemisphere-style group.
///
/// `std_dev` is the sample standard deviation (n - 1 denominator); it is
/// NaN for groups with fewer than two rows, as are the other statistics
/// for an empty group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStats {
    pub group: String,
    pub cities: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

/// Northern vs Southern comparison. Both groups are always present;
/// no minimum-count filter applies.
pub fn hemisphere_comparison(dataset: &AqiDataset) -> [GroupStats; 2] {
    let split = |side: Hemisphere| -> Vec<f64> {
        dataset
            .records()
            .iter()
            .filter(|r| r.hemisphere == side)
            .map(|r| r.aqi_value)
            .collect()
    };

    [
        group_stats("Northern", &split(Hemisphere::Northern)),
        group_stats("Southern", &split(Hemisphere::Southern)),
    ]
}

/// Eastern vs Western comparison, same shape as the hemisphere view.
pub fn east_west_comparison(dataset: &AqiDataset) -> [GroupStats; 2] {
    let split = |side: LongitudeSide| -> Vec<f64> {
        dataset
            .records()
            .iter()
            .filter(|r| r.longitude_side == side)
            .map(|r| r.aqi_value)
            .collect()
    };

    [
        group_stats("Eastern", &split(LongitudeSide::Eastern)),
        group_stats("Western", &split(LongitudeSide::Western)),
    ]
}

fn group_stats(group: &str, values: &[f64]) -> GroupStats {
    let cities = values.len();

    if cities == 0 {
        return GroupStats {
            group: group.to_string(),
            cities: 0,
            mean: f64::NAN,
            std_dev: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        };
    }

    let sum: f64 = values.iter().sum();
    let mean = sum / cities as f64;

    let std_dev = if cities < 2 {
        f64::NAN
    } else {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (cities - 1) as f64).sqrt()
    };

    GroupStats {
        group: group.to_string(),
        cities,
        mean,
        std_dev,
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}
