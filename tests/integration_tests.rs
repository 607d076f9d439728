use std::io::Write;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use aqi_dashboard::analyzers::{
    category_percentages, category_pivot, hemisphere_comparison, search_country_summaries,
    threshold_split,
};
use aqi_dashboard::map::build_layer;
use aqi_dashboard::models::AqiDataset;
use aqi_dashboard::processors::Normalizer;
use aqi_dashboard::readers::MeasurementReader;

const SAMPLE_CSV: &str = "\
City,Country,AQI Value,lat,lng,PM2.5 AQI Category
London,United Kingdom of Great Britain and Northern Ireland,42,51.5074,-0.1278,good
Manchester,United Kingdom of Great Britain and Northern Ireland,55,53.4808,-2.2426,moderate
Delhi,India,185,28.7041,77.1025,unhealthy
Mumbai,India,160,19.0760,72.8777,unhealthy
Chennai,India,90,13.0827,80.2707,moderate
Sydney,Australia,32,-33.8688,151.2093,good
Broken Row,Australia,not-a-number,-33.0,151.0,good
Melbourne,Australia,45,-37.8136,144.9631,good
";

fn load_sample() -> AqiDataset {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(SAMPLE_CSV.as_bytes()).expect("write CSV");

    let raw = MeasurementReader::new()
        .read_file(file.path())
        .expect("read CSV");
    Normalizer::new().normalize(&raw)
}

#[test]
fn test_pipeline_end_to_end() {
    let dataset = load_sample();

    // One malformed AQI cell drops exactly one row.
    assert_eq!(dataset.len(), 7);
    assert_eq!(dataset.rows_dropped(), 1);

    // Synonym remap happened before grouping.
    let view = search_country_summaries(&dataset, 1, "uk");
    assert!(!view.search_fallback);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].country, "UK");
    assert_eq!(view.rows[0].cities, 2);

    // Categories arrive trimmed and title-cased.
    assert_eq!(dataset.categories(), vec!["Good", "Moderate", "Unhealthy"]);
}

#[test]
fn test_every_row_has_total_derived_flags_and_prefix_labels() {
    let dataset = load_sample();

    for (index, record) in dataset.records().iter().enumerate() {
        assert_eq!(
            record.hemisphere == aqi_dashboard::models::Hemisphere::Northern,
            record.latitude >= 0.0
        );
        assert_eq!(
            record.longitude_side == aqi_dashboard::models::LongitudeSide::Eastern,
            record.longitude >= 0.0
        );
        // Default eager prefix is 100, so every sample row is labelled.
        assert_eq!(record.has_location_info(), index < 100);
    }

    let short = Normalizer::with_eager_labels(3).normalize(
        &MeasurementReader::new()
            .read(SAMPLE_CSV.as_bytes())
            .unwrap(),
    );
    for (index, record) in short.records().iter().enumerate() {
        assert_eq!(record.has_location_info(), index < 3);
    }
}

#[test]
fn test_views_over_sample() {
    let dataset = load_sample();

    let split = threshold_split(&dataset, 50.0, 1);
    let below_total: usize = split.below.iter().map(|b| b.cities).sum();
    let above_total: usize = split.above.iter().map(|b| b.cities).sum();
    assert_eq!(below_total, 3); // 42, 32, 45
    assert_eq!(above_total, 4); // 55, 185, 160, 90

    let [north, south] = hemisphere_comparison(&dataset);
    assert_eq!(north.cities, 5);
    assert_eq!(south.cities, 2);

    let pivot = category_pivot(&dataset, 2);
    assert_eq!(pivot.categories, vec!["Good", "Moderate", "Unhealthy"]);
    // Australia: 2 good; India: 1 moderate, 2 unhealthy; UK: 1 good, 1 moderate.
    assert_eq!(pivot.rows[0].country, "India");
    assert_eq!(pivot.rows[0].counts, vec![0, 1, 2]);

    let shares = category_percentages(&dataset, "Good", 2);
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0].country, "Australia");
    assert_eq!(shares[0].percentage, 100.0);
    assert_eq!(shares[1].country, "UK");
    assert_eq!(shares[1].percentage, 50.0);
}

#[test]
fn test_map_layer_projection() {
    let dataset = load_sample();
    let layer = build_layer(&dataset);

    assert_eq!(layer.points.len(), dataset.len());

    let delhi = &layer.points[2];
    assert_eq!(delhi.tooltip.city, "Delhi");
    assert_eq!(delhi.color, [255, 0, 0, 180]); // 185 -> red bucket
    assert_eq!(delhi.radius, 3000); // 185 < 200
    assert_eq!(delhi.tooltip.location_info, "Delhi (India)");

    // Viewport is the arithmetic mean of all coordinates.
    let n = dataset.len() as f64;
    let mean_lat: f64 = dataset.records().iter().map(|r| r.latitude).sum::<f64>() / n;
    assert!((layer.viewport.latitude - mean_lat).abs() < 1e-9);
}

#[test]
fn test_pipeline_is_deterministic() {
    let first = load_sample();
    let second = load_sample();

    let render = |dataset: &AqiDataset| {
        let view = search_country_summaries(dataset, 1, "");
        let split = threshold_split(dataset, 50.0, 1);
        let pivot = category_pivot(dataset, 1);
        let shares = category_percentages(dataset, "Good", 1);
        format!(
            "{}{}{}{}",
            serde_json::to_string(&view.rows).unwrap(),
            serde_json::to_string(&split).unwrap(),
            serde_json::to_string(&pivot).unwrap(),
            serde_json::to_string(&shares).unwrap(),
        )
    };

    assert_eq!(render(&first), render(&second));
}
