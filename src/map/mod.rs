pub mod classify;
pub mod layer;

pub use classify::{aqi_color, aqi_color_with_alpha, aqi_radius, Rgba};
pub use layer::{build_layer, build_layer_with_alpha, MapLayer, MapPoint, TooltipFields, Viewport};
