//! Output rows of the basin-matching pipeline

use serde::{Deserialize, Serialize};

/// One result row per transfer project.
///
/// Field order is the column contract consumed by downstream rendering and
/// storage; the CSV writer serializes the struct in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasinPairResult {
    pub rank: u32,
    pub basin_pair: String,
    pub project: String,
    pub design_flow: String,
    pub sender_basin: String,
    pub receiver_basin: String,
    pub sender_species_count: usize,
    pub sender_native_count: usize,
    pub sender_exotic_count: usize,
    pub receiver_species_count: usize,
    pub receiver_native_count: usize,
    pub receiver_exotic_count: usize,
    pub jaccard_similarity: f64,
    pub jaccard_dissimilarity: f64,
    pub shared_species_count: usize,
    pub total_unique_species: usize,
}
