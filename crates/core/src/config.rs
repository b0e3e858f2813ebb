//! Explicit pipeline configuration
//!
//! All input locations are passed in; there is no process-wide data
//! directory or environment lookup in the core.

use std::path::PathBuf;

/// Input and output locations for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Transfer-project table (comma-delimited CSV)
    pub projects: PathBuf,
    /// Drainage-basin layer (ESRI shapefile)
    pub basins: PathBuf,
    /// Occurrence table (semicolon-delimited, Latin-1 CSV)
    pub occurrences: PathBuf,
    /// Result table destination; `None` keeps results in memory only
    pub output: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(
        projects: impl Into<PathBuf>,
        basins: impl Into<PathBuf>,
        occurrences: impl Into<PathBuf>,
    ) -> Self {
        Self {
            projects: projects.into(),
            basins: basins.into(),
            occurrences: occurrences.into(),
            output: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}
