use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{DashboardError, Result};
use crate::models::RawMeasurement;
use crate::utils::constants::{
    COL_AQI_VALUE, COL_CATEGORY, COL_CITY, COL_COUNTRY, COL_LAT, COL_LNG,
};

/// Positions of the required columns in the input header.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    city: usize,
    country: usize,
    aqi_value: usize,
    lat: usize,
    lng: usize,
    category: usize,
}

impl ColumnIndex {
    /// Resolve the required columns against a header row.
    /// Header names are whitespace-trimmed before comparison.
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| DashboardError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            city: find(COL_CITY)?,
            country: find(COL_COUNTRY)?,
            aqi_value: find(COL_AQI_VALUE)?,
            lat: find(COL_LAT)?,
            lng: find(COL_LNG)?,
            category: find(COL_CATEGORY)?,
        })
    }
}

/// Reads raw measurement rows from a delimited input file.
///
/// Numeric fields are carried as text; the normalizer decides which rows
/// survive coercion. Only a missing required column is a hard error here.
pub struct MeasurementReader {
    flexible: bool,
}

impl MeasurementReader {
    pub fn new() -> Self {
        Self { flexible: true }
    }

    pub fn with_flexible(flexible: bool) -> Self {
        Self { flexible }
    }

    /// Read all raw rows from a file.
    pub fn read_file(&self, path: &Path) -> Result<Vec<RawMeasurement>> {
        let file = File::open(path)?;
        self.read(file)
    }

    /// Read all raw rows from any reader (used by tests with in-memory CSV).
    pub fn read<R: Read>(&self, input: R) -> Result<Vec<RawMeasurement>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(self.flexible)
            .from_reader(input);

        let index = ColumnIndex::from_headers(reader.headers()?)?;
        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            let field = |i: usize| record.get(i).unwrap_or("").to_string();

            rows.push(RawMeasurement {
                city: field(index.city),
                country: field(index.country),
                aqi_value: field(index.aqi_value),
                lat: field(index.lat),
                lng: field(index.lng),
                category: field(index.category),
            });
        }

        debug!(rows = rows.len(), "read raw measurement rows");
        Ok(rows)
    }
}

impl Default for MeasurementReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "City,Country,AQI Value,lat,lng,PM2.5 AQI Category";

    #[test]
    fn test_read_basic_rows() {
        let csv = format!(
            "{HEADER}\nLondon,United Kingdom of Great Britain and Northern Ireland,42,51.5074,-0.1278,good\nDelhi,India,185,28.7041,77.1025,unhealthy\n"
        );

        let reader = MeasurementReader::new();
        let rows = reader.read(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].city, "London");
        assert_eq!(rows[0].aqi_value, "42");
        assert_eq!(rows[1].category, "unhealthy");
    }

    #[test]
    fn test_header_whitespace_trimmed() {
        let csv = " City , Country , AQI Value , lat , lng , PM2.5 AQI Category \nParis,France,38,48.85,2.35,Good\n";

        let reader = MeasurementReader::new();
        let rows = reader.read(csv.as_bytes()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "France");
    }

    #[test]
    fn test_missing_column_is_error() {
        let csv = "City,Country,AQI Value,lat,lng\nParis,France,38,48.85,2.35\n";

        let reader = MeasurementReader::new();
        let err = reader.read(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, DashboardError::MissingColumn(ref c) if c == "PM2.5 AQI Category"));
    }

    #[test]
    fn test_malformed_numeric_cell_is_not_an_error() {
        let csv = format!("{HEADER}\nNowhere,Atlantis,not-a-number,0.0,0.0,Good\n");

        let reader = MeasurementReader::new();
        let rows = reader.read(csv.as_bytes()).unwrap();

        // Coercion is the normalizer's job; the reader passes the text through.
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].aqi_value, "not-a-number");
    }

    #[test]
    fn test_read_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{HEADER}")?;
        writeln!(temp_file, "Tokyo,Japan,55,35.6762,139.6503,Moderate")?;

        let reader = MeasurementReader::new();
        let rows = reader.read_file(temp_file.path())?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].city, "Tokyo");

        Ok(())
    }
}
