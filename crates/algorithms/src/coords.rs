//! Coordinate-string parsing
//!
//! Project tables carry coordinates as descriptive text like
//! "Varanasi 25.32 °N 83.01 °E". Exactly one latitude token (`N`/`S`) and
//! one longitude token (`E`/`W`) must be present, in either order; any
//! surrounding text is ignored. `S` and `W` negate the magnitude.

use std::sync::OnceLock;

use regex::Regex;

use basinlink_core::{Algorithm, Coordinate, Error, Result};

fn lat_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.?\d*)\s*°\s*([NS])").unwrap())
}

fn lon_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.?\d*)\s*°\s*([EW])").unwrap())
}

/// Parse one coordinate string into signed decimal degrees.
///
/// Fails with `Error::CoordinateParse` carrying the raw string when either
/// token is absent or its magnitude does not parse as a number. Pure and
/// deterministic; no defaulting.
pub fn parse_coordinates(raw: &str) -> Result<Coordinate> {
    let parse_err = || Error::CoordinateParse {
        raw: raw.to_string(),
    };

    let lat_caps = lat_regex().captures(raw).ok_or_else(parse_err)?;
    let lon_caps = lon_regex().captures(raw).ok_or_else(parse_err)?;

    let mut lat: f64 = lat_caps[1].parse().map_err(|_| parse_err())?;
    if &lat_caps[2] == "S" {
        lat = -lat;
    }

    let mut lon: f64 = lon_caps[1].parse().map_err(|_| parse_err())?;
    if &lon_caps[2] == "W" {
        lon = -lon;
    }

    Coordinate::new(lat, lon)
}

/// Coordinate parsing as a pipeline algorithm
#[derive(Debug, Clone, Default)]
pub struct ParseCoordinates;

impl Algorithm for ParseCoordinates {
    type Input = String;
    type Output = Coordinate;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ParseCoordinates"
    }

    fn description(&self) -> &'static str {
        "Extract signed lat/lon from directional coordinate text"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        parse_coordinates(&input)
    }
}
