use crate::utils::constants::DEFAULT_ALPHA;

/// RGBA color as consumed by deck-style scatter layers.
pub type Rgba = [u8; 4];

/// Map an AQI value to a display color with an explicit alpha channel.
///
/// Bucket bounds are inclusive; anything above 300 (including values
/// outside [0, inf)) falls into the dark maroon bucket. Total over all
/// real inputs, no error path.
pub fn aqi_color_with_alpha(aqi: f64, alpha: u8) -> Rgba {
    if aqi <= 50.0 {
        [0, 200, 0, alpha] // green
    } else if aqi <= 100.0 {
        [255, 255, 0, alpha] // yellow
    } else if aqi <= 150.0 {
        [255, 126, 0, alpha] // orange
    } else if aqi <= 200.0 {
        [255, 0, 0, alpha] // red
    } else if aqi <= 300.0 {
        [153, 0, 76, alpha] // dark magenta
    } else {
        [126, 0, 35, alpha] // dark maroon
    }
}

/// [`aqi_color_with_alpha`] with the default alpha of 180.
pub fn aqi_color(aqi: f64) -> Rgba {
    aqi_color_with_alpha(aqi, DEFAULT_ALPHA)
}

/// Map an AQI value to a display radius bucket in meters.
///
/// Bounds are exclusive, unlike the color buckets. The two threshold
/// sets partially overlap but are distinct by design and must not be
/// unified.
pub fn aqi_radius(aqi: f64) -> u32 {
    if aqi < 100.0 {
        2000
    } else if aqi < 200.0 {
        3000
    } else {
        4000
    }
}
