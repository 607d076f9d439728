pub mod dataset;
pub mod record;

pub use dataset::AqiDataset;
pub use record::{CityRecord, Hemisphere, LongitudeSide, RawMeasurement};
