//! Transfer-project records and validated geographic coordinates

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A signed geographic coordinate in decimal degrees.
///
/// Latitude is bounded to [-90, 90] and longitude to [-180, 180] at
/// construction; no other code path builds one unchecked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, validating both ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(Error::CoordinateRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Planar x coordinate (longitude), matching the basin layer projection.
    pub fn x(&self) -> f64 {
        self.lon
    }

    /// Planar y coordinate (latitude).
    pub fn y(&self) -> f64 {
        self.lat
    }
}

/// One inter-basin water transfer project as read from the project table.
///
/// Coordinate fields keep the raw descriptive text (e.g. "Varanasi 25.32 °N
/// 83.01 °E"); parsing into a `Coordinate` happens in the algorithms crate.
/// Design flow stays free text because the source mixes numbers with symbols
/// ("≈ 200").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferProject {
    /// Positive, unique; defines output ordering
    pub rank: u32,
    /// Display-only label, e.g. "Ganges → Yamuna"
    pub basin_pair: String,
    /// Project name with country
    pub project: String,
    /// Design flow in km³/yr, free text
    pub design_flow: String,
    /// Raw sender coordinate text
    pub sender_coords: String,
    /// Raw receiver coordinate text
    pub receiver_coords: String,
}
