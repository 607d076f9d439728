use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Required column '{0}' not found in input header")]
    MissingColumn(String),

    #[error("Invalid numeric value for {field}: '{value}'")]
    InvalidNumeric { field: &'static str, value: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
