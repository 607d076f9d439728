use serde::Serialize;

use crate::map::classify::{aqi_color_with_alpha, aqi_radius, Rgba};
use crate::models::AqiDataset;
use crate::utils::constants::{DEFAULT_ALPHA, MAP_PITCH, MAP_ZOOM};

/// Fields carried verbatim for the display layer's hover tooltip.
#[derive(Debug, Clone, Serialize)]
pub struct TooltipFields {
    pub city: String,
    pub country: String,
    pub location_info: String,
    pub aqi_value: f64,
    pub category: String,
    pub hemisphere: &'static str,
    pub longitude_side: &'static str,
}

/// One scatter point per normalized record.
#[derive(Debug, Clone, Serialize)]
pub struct MapPoint {
    /// (longitude, latitude), the order deck-style renderers expect.
    pub position: [f64; 2],
    pub color: Rgba,
    pub radius: u32,
    pub tooltip: TooltipFields,
}

/// Initial camera for the map. Centered on the arithmetic mean of all
/// point coordinates; zoom and pitch are fixed presentation constants.
#[derive(Debug, Clone, Serialize)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub pitch: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapLayer {
    pub viewport: Viewport,
    pub points: Vec<MapPoint>,
}

/// Project the dataset into a map layer, 1:1 with no filtering,
/// deduplication or aggregation.
pub fn build_layer(dataset: &AqiDataset) -> MapLayer {
    build_layer_with_alpha(dataset, DEFAULT_ALPHA)
}

pub fn build_layer_with_alpha(dataset: &AqiDataset, alpha: u8) -> MapLayer {
    let points: Vec<MapPoint> = dataset
        .records()
        .iter()
        .map(|record| MapPoint {
            position: [record.longitude, record.latitude],
            color: aqi_color_with_alpha(record.aqi_value, alpha),
            radius: aqi_radius(record.aqi_value),
            tooltip: TooltipFields {
                city: record.city.clone(),
                country: record.country.clone(),
                location_info: record.location_info.clone(),
                aqi_value: record.aqi_value,
                category: record.category.clone(),
                hemisphere: record.hemisphere.as_str(),
                longitude_side: record.longitude_side.as_str(),
            },
        })
        .collect();

    MapLayer {
        viewport: viewport_for(&points),
        points,
    }
}

fn viewport_for(points: &[MapPoint]) -> Viewport {
    let (latitude, longitude) = if points.is_empty() {
        (0.0, 0.0)
    } else {
        let n = points.len() as f64;
        let lat_sum: f64 = points.iter().map(|p| p.position[1]).sum();
        let lon_sum: f64 = points.iter().map(|p| p.position[0]).sum();
        (lat_sum / n, lon_sum / n)
    };

    Viewport {
        latitude,
        longitude,
        zoom: MAP_ZOOM,
        pitch: MAP_PITCH,
    }
}
