//! Basin layer ingestion from ESRI shapefiles
//!
//! Each shapefile record contributes one `BasinPolygon`: geometry from the
//! shape, name from the `BasinName` attribute in the companion DBF. Record
//! order is preserved; it is the containment tie-break order downstream.

use std::path::Path;

use geo_types::MultiPolygon;
use shapefile::dbase::FieldValue;
use shapefile::Shape;

use crate::basin::{BasinLayer, BasinPolygon};
use crate::error::{Error, Result};

const NAME_FIELD: &str = "BasinName";

/// Read a basin layer from a shapefile.
///
/// Fails on any non-polygon shape and on records without a character
/// `BasinName` attribute. Null shapes are skipped.
pub fn read_basin_layer(path: impl AsRef<Path>) -> Result<BasinLayer> {
    let mut reader = shapefile::Reader::from_path(path.as_ref())?;
    let mut layer = BasinLayer::new();

    for (index, shape_record) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = shape_record?;

        let name = match record.get(NAME_FIELD) {
            Some(FieldValue::Character(Some(name))) => name.trim().to_string(),
            _ => {
                return Err(Error::MissingField {
                    field: NAME_FIELD,
                    record: index,
                })
            }
        };

        let geometry: MultiPolygon<f64> = match shape {
            Shape::Polygon(polygon) => polygon.into(),
            Shape::NullShape => continue,
            other => {
                return Err(Error::Shapefile(format!(
                    "expected polygon geometry, found {} in record {}",
                    other.shapetype(),
                    index
                )))
            }
        };

        layer.push(BasinPolygon::new(name, geometry));
    }

    Ok(layer)
}
