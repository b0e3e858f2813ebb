//! Drainage-basin reference layer
//!
//! Basin polygons are loaded once and treated as read-only for the whole
//! run. The layer preserves dataset order: containment ties are broken by
//! the first polygon in that order.

use geo_types::MultiPolygon;

/// One drainage basin: name plus planar geometry in (lon, lat) order.
///
/// Names are not required to be unique in the source data.
#[derive(Debug, Clone)]
pub struct BasinPolygon {
    /// Basin name from the source attribute table
    pub name: String,
    /// Polygon/multipolygon geometry in the same projection as input coordinates
    pub geometry: MultiPolygon<f64>,
}

impl BasinPolygon {
    pub fn new(name: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self {
            name: name.into(),
            geometry,
        }
    }
}

/// Ordered collection of basin polygons
#[derive(Debug, Clone, Default)]
pub struct BasinLayer {
    pub basins: Vec<BasinPolygon>,
}

impl BasinLayer {
    pub fn new() -> Self {
        Self { basins: Vec::new() }
    }

    pub fn push(&mut self, basin: BasinPolygon) {
        self.basins.push(basin);
    }

    pub fn len(&self) -> usize {
        self.basins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.basins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BasinPolygon> {
        self.basins.iter()
    }
}

impl IntoIterator for BasinLayer {
    type Item = BasinPolygon;
    type IntoIter = std::vec::IntoIter<BasinPolygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.basins.into_iter()
    }
}

impl FromIterator<BasinPolygon> for BasinLayer {
    fn from_iter<I: IntoIterator<Item = BasinPolygon>>(iter: I) -> Self {
        Self {
            basins: iter.into_iter().collect(),
        }
    }
}
