//! # Basinlink Core
//!
//! Core types, error taxonomy and I/O for the basinlink pipeline.
//!
//! This crate provides:
//! - `Coordinate` / `TransferProject`: inter-basin transfer project records
//! - `BasinPolygon` / `BasinLayer`: the drainage-basin reference layer
//! - `OccurrenceTable` / `SpeciesInventory`: fish occurrence records and
//!   per-basin species pools
//! - `BasinPairResult`: one output row per transfer project
//! - I/O for the tabular (CSV) and geometric (shapefile) input formats

pub mod basin;
pub mod config;
pub mod error;
pub mod io;
pub mod occurrence;
pub mod project;
pub mod result;

pub use basin::{BasinLayer, BasinPolygon};
pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use occurrence::{OccurrenceRecord, OccurrenceTable, SpeciesInventory, SpeciesStatus};
pub use project::{Coordinate, TransferProject};
pub use result::BasinPairResult;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::basin::{BasinLayer, BasinPolygon};
    pub use crate::config::PipelineConfig;
    pub use crate::error::{Error, Result};
    pub use crate::occurrence::{OccurrenceTable, SpeciesInventory, SpeciesStatus};
    pub use crate::project::{Coordinate, TransferProject};
    pub use crate::result::BasinPairResult;
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in basinlink.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
