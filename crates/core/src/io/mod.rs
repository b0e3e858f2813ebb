//! I/O for the tabular and geometric input formats
//!
//! Path-based entry points wrap buffer-based readers so tables can also be
//! parsed from in-memory data (used heavily by tests).

mod shapefile_io;
mod tables;

pub use shapefile_io::read_basin_layer;
pub use tables::{
    read_occurrences, read_occurrences_from, read_projects, read_projects_from, write_results,
    write_results_to,
};
