//! Pipeline orchestration
//!
//! Composes parsing, basin location, inventory aggregation and pairwise
//! metrics into one result row per transfer project. Projects are processed
//! strictly in input order; the first parse or lookup error aborts the run.
//! Each project resolution is independent of the others, so nothing here
//! owns spatial or biological logic of its own.

use tracing::info;

use basinlink_core::{BasinLayer, BasinPairResult, OccurrenceTable, Result, TransferProject};

use crate::coords::parse_coordinates;
use crate::diversity::species_inventory;
use crate::jaccard::pairwise_metrics;
use crate::locate::locate_basin;

/// Produce one `BasinPairResult` per project, preserving rank order.
///
/// Malformed coordinate text or an empty basin layer is fatal for the whole
/// run; empty inventories are valid results.
pub fn match_projects(
    projects: &[TransferProject],
    layer: &BasinLayer,
    occurrences: &OccurrenceTable,
) -> Result<Vec<BasinPairResult>> {
    let mut results = Vec::with_capacity(projects.len());

    for project in projects {
        let sender_coord = parse_coordinates(&project.sender_coords)?;
        let receiver_coord = parse_coordinates(&project.receiver_coords)?;

        let sender_basin = locate_basin(&sender_coord, layer)?;
        let receiver_basin = locate_basin(&receiver_coord, layer)?;

        let sender = species_inventory(&sender_basin.name, occurrences);
        let receiver = species_inventory(&receiver_basin.name, occurrences);

        let metrics = pairwise_metrics(&sender.species, &receiver.species);

        info!(
            "Project {}: {} -> {} (dissimilarity {:.3})",
            project.rank, sender_basin.name, receiver_basin.name, metrics.dissimilarity
        );

        results.push(BasinPairResult {
            rank: project.rank,
            basin_pair: project.basin_pair.clone(),
            project: project.project.clone(),
            design_flow: project.design_flow.clone(),
            sender_basin: sender_basin.name,
            receiver_basin: receiver_basin.name,
            sender_species_count: sender.species_count(),
            sender_native_count: sender.native_count(),
            sender_exotic_count: sender.exotic_count(),
            receiver_species_count: receiver.species_count(),
            receiver_native_count: receiver.native_count(),
            receiver_exotic_count: receiver.exotic_count(),
            jaccard_similarity: metrics.similarity,
            jaccard_dissimilarity: metrics.dissimilarity,
            shared_species_count: metrics.shared,
            total_unique_species: metrics.union,
        });
    }

    Ok(results)
}
