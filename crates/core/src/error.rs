//! Error types for basinlink

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for basinlink operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Shapefile error: {0}")]
    Shapefile(String),

    #[error("Could not parse coordinates from: {raw}")]
    CoordinateParse { raw: String },

    #[error("Coordinate out of range: lat {lat}, lon {lon}")]
    CoordinateRange { lat: f64, lon: f64 },

    #[error("Basin layer is empty; cannot locate point ({lat}, {lon})")]
    NoBasinData { lat: f64, lon: f64 },

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: &'static str, path: PathBuf },

    #[error("Missing or mistyped field '{field}' in shapefile record {record}")]
    MissingField { field: &'static str, record: usize },

    #[error("Invalid rank '{value}' in project table")]
    InvalidRank { value: String },

    #[error("{0}")]
    Other(String),
}

impl From<shapefile::Error> for Error {
    fn from(e: shapefile::Error) -> Self {
        Error::Shapefile(e.to_string())
    }
}

/// Result type alias for basinlink operations
pub type Result<T> = std::result::Result<T, Error>;
