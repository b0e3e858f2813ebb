//! # Basinlink Algorithms
//!
//! Basin matching and diversity scoring for inter-basin water transfer
//! projects.
//!
//! ## Pipeline stages
//!
//! - **coords**: extract signed lat/lon from free-text coordinate strings
//! - **locate**: resolve a point to a drainage basin (containment with
//!   nearest-polygon fallback)
//! - **diversity**: per-basin species inventories from the occurrence table
//! - **jaccard**: pairwise similarity/dissimilarity between species pools
//! - **pipeline**: one result row per transfer project, in rank order

pub mod coords;
pub mod diversity;
pub mod jaccard;
pub mod locate;
pub mod pipeline;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::coords::{parse_coordinates, ParseCoordinates};
    pub use crate::diversity::species_inventory;
    pub use crate::jaccard::{pairwise_metrics, PairwiseJaccard, PairwiseMetrics};
    pub use crate::locate::{locate_basin, LocateMethod, LocatedBasin};
    pub use crate::pipeline::match_projects;
    pub use basinlink_core::prelude::*;
}
