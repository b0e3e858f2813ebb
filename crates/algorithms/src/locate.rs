//! Point-to-basin resolution
//!
//! A point is resolved by polygon containment first; when no polygon
//! contains it (coastline points, boundary simplification artifacts), the
//! nearest polygon by planar distance wins. Resolution always succeeds as
//! long as the layer is non-empty.

use geo::{Contains, Distance, Euclidean};
use geo_types::Point;
use tracing::warn;

use basinlink_core::{BasinLayer, BasinPolygon, Coordinate, Error, Result};

/// How a point was resolved to its basin
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocateMethod {
    /// The basin polygon contains the point
    Containment,
    /// No polygon contains the point; nearest polygon at the given planar
    /// distance (in layer units, degrees for unprojected data)
    Nearest { distance: f64 },
}

/// A resolved basin, with the resolution path kept observable
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedBasin {
    pub name: String,
    pub method: LocateMethod,
}

fn distance_to(point: &Point<f64>, basin: &BasinPolygon) -> f64 {
    basin
        .geometry
        .0
        .iter()
        .map(|polygon| Euclidean.distance(point, polygon))
        .fold(f64::INFINITY, f64::min)
}

/// Resolve a coordinate to exactly one basin in the layer.
///
/// Containment ties are broken by dataset order: the first containing
/// polygon wins. This is an arbitrary but stable choice carried over from
/// the source data convention; no semantic ordering is implied.
///
/// Fails with `Error::NoBasinData` only when the layer is empty.
pub fn locate_basin(coord: &Coordinate, layer: &BasinLayer) -> Result<LocatedBasin> {
    if layer.is_empty() {
        return Err(Error::NoBasinData {
            lat: coord.lat,
            lon: coord.lon,
        });
    }

    // Geometry is stored (x, y) = (lon, lat), same as the layer projection
    let point = Point::new(coord.x(), coord.y());

    for basin in layer.iter() {
        if basin.geometry.contains(&point) {
            return Ok(LocatedBasin {
                name: basin.name.clone(),
                method: LocateMethod::Containment,
            });
        }
    }

    // No containment: fall back to the nearest polygon. Expected near
    // coastlines, so a warning rather than an error.
    let (nearest, distance) = layer
        .iter()
        .map(|basin| (basin, distance_to(&point, basin)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap();

    warn!(
        "No basin contains point ({}, {}). Nearest basin is {} at distance {:.4} degrees",
        coord.lat, coord.lon, nearest.name, distance
    );

    Ok(LocatedBasin {
        name: nearest.name.clone(),
        method: LocateMethod::Nearest { distance },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{polygon, MultiPolygon};

    fn square(name: &str, x0: f64, y0: f64, size: f64) -> BasinPolygon {
        let poly = polygon![
            (x: x0, y: y0),
            (x: x0 + size, y: y0),
            (x: x0 + size, y: y0 + size),
            (x: x0, y: y0 + size),
            (x: x0, y: y0),
        ];
        BasinPolygon::new(name, MultiPolygon::new(vec![poly]))
    }

    fn two_basin_layer() -> BasinLayer {
        // "west" covers x in [0, 10], "east" covers x in [20, 30]
        [square("west", 0.0, 0.0, 10.0), square("east", 20.0, 0.0, 10.0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_containment_hit() {
        let layer = two_basin_layer();
        let coord = Coordinate::new(5.0, 5.0).unwrap();
        let located = locate_basin(&coord, &layer).unwrap();
        assert_eq!(located.name, "west");
        assert_eq!(located.method, LocateMethod::Containment);
    }

    #[test]
    fn test_containment_lon_lat_ordering() {
        // Basin covering lon in [20, 30], lat in [0, 10]: a (lat, lon)
        // mix-up would miss it for lat=5, lon=25.
        let layer = two_basin_layer();
        let coord = Coordinate::new(5.0, 25.0).unwrap();
        assert_eq!(locate_basin(&coord, &layer).unwrap().name, "east");
    }

    #[test]
    fn test_nearest_fallback() {
        let layer = two_basin_layer();
        // x=12 sits in the gap, 2 degrees from "west" and 8 from "east"
        let coord = Coordinate::new(5.0, 12.0).unwrap();
        let located = locate_basin(&coord, &layer).unwrap();
        assert_eq!(located.name, "west");
        match located.method {
            LocateMethod::Nearest { distance } => assert!((distance - 2.0).abs() < 1e-9),
            other => panic!("expected nearest fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_overlap_first_in_dataset_order_wins() {
        let layer: BasinLayer = [
            square("first", 0.0, 0.0, 10.0),
            square("second", 0.0, 0.0, 10.0),
        ]
        .into_iter()
        .collect();
        let coord = Coordinate::new(5.0, 5.0).unwrap();
        assert_eq!(locate_basin(&coord, &layer).unwrap().name, "first");
    }

    #[test]
    fn test_multipolygon_part_contains() {
        let part_a = polygon![
            (x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0), (x: 0.0, y: 0.0),
        ];
        let part_b = polygon![
            (x: 50.0, y: 0.0), (x: 52.0, y: 0.0), (x: 52.0, y: 2.0),
            (x: 50.0, y: 2.0), (x: 50.0, y: 0.0),
        ];
        let layer: BasinLayer =
            [BasinPolygon::new("split", MultiPolygon::new(vec![part_a, part_b]))]
                .into_iter()
                .collect();

        let coord = Coordinate::new(1.0, 51.0).unwrap();
        let located = locate_basin(&coord, &layer).unwrap();
        assert_eq!(located.name, "split");
        assert_eq!(located.method, LocateMethod::Containment);
    }

    #[test]
    fn test_nearest_fallback_uses_closest_multipolygon_part() {
        let near = polygon![
            (x: 0.0, y: 0.0), (x: 2.0, y: 0.0), (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0), (x: 0.0, y: 0.0),
        ];
        let far = polygon![
            (x: 50.0, y: 0.0), (x: 52.0, y: 0.0), (x: 52.0, y: 2.0),
            (x: 50.0, y: 2.0), (x: 50.0, y: 0.0),
        ];
        let layer: BasinLayer = [
            BasinPolygon::new("split", MultiPolygon::new(vec![far, near])),
            square("other", 20.0, 0.0, 2.0),
        ]
        .into_iter()
        .collect();

        // Point at x=5: 3 degrees from the near part of "split", 15 from
        // "other"; the far part alone would lose to "other"
        let coord = Coordinate::new(1.0, 5.0).unwrap();
        let located = locate_basin(&coord, &layer).unwrap();
        assert_eq!(located.name, "split");
        match located.method {
            LocateMethod::Nearest { distance } => assert!((distance - 3.0).abs() < 1e-9),
            other => panic!("expected nearest fallback, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_layer_is_fatal() {
        let layer = BasinLayer::new();
        let coord = Coordinate::new(0.0, 0.0).unwrap();
        assert!(matches!(
            locate_basin(&coord, &layer),
            Err(Error::NoBasinData { .. })
        ));
    }
}
