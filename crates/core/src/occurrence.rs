//! Fish occurrence records and per-basin species inventories

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Native/exotic status of one occurrence record.
///
/// Status is a property of the record, not of the species: the same species
/// may appear as native in one record and exotic in another. Literals other
/// than `"native"` and `"exotic"` (including case variants) map to `Other`
/// and are excluded from both subsets while still counting toward the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeciesStatus {
    Native,
    Exotic,
    Other,
}

impl SpeciesStatus {
    /// Parse the status literal as it appears in the occurrence table.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "native" => SpeciesStatus::Native,
            "exotic" => SpeciesStatus::Exotic,
            _ => SpeciesStatus::Other,
        }
    }
}

/// One row of the occurrence table, typed at the load boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    /// Basin name, matched exactly (case-sensitive) against resolved basins
    pub basin: String,
    /// Canonical (Fishbase-valid) species name
    pub species: String,
    pub status: SpeciesStatus,
}

/// The full occurrence table, read-only after load
#[derive(Debug, Clone, Default)]
pub struct OccurrenceTable {
    pub records: Vec<OccurrenceRecord>,
}

impl OccurrenceTable {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: OccurrenceRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OccurrenceRecord> {
        self.records.iter()
    }
}

impl FromIterator<OccurrenceRecord> for OccurrenceTable {
    fn from_iter<I: IntoIterator<Item = OccurrenceRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

/// Distinct species pool of one basin, partitioned by record status.
///
/// Sets are `BTreeSet` so iteration order, and therefore every derived
/// output, is deterministic across runs. Counts are derived from the sets,
/// never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesInventory {
    pub basin: String,
    /// Every distinct species for the basin, regardless of status
    pub species: BTreeSet<String>,
    /// Species with at least one `native` record in the basin
    pub native: BTreeSet<String>,
    /// Species with at least one `exotic` record in the basin
    pub exotic: BTreeSet<String>,
}

impl SpeciesInventory {
    pub fn empty(basin: impl Into<String>) -> Self {
        Self {
            basin: basin.into(),
            ..Default::default()
        }
    }

    /// Distinct species count, all statuses
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn native_count(&self) -> usize {
        self.native.len()
    }

    pub fn exotic_count(&self) -> usize {
        self.exotic.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_literals() {
        assert_eq!(SpeciesStatus::parse("native"), SpeciesStatus::Native);
        assert_eq!(SpeciesStatus::parse("exotic"), SpeciesStatus::Exotic);
        assert_eq!(SpeciesStatus::parse("Native"), SpeciesStatus::Other);
        assert_eq!(SpeciesStatus::parse("introduced"), SpeciesStatus::Other);
        assert_eq!(SpeciesStatus::parse(""), SpeciesStatus::Other);
    }

    #[test]
    fn test_inventory_counts_derive_from_sets() {
        let mut inv = SpeciesInventory::empty("Ganges");
        inv.species.insert("Labeo rohita".into());
        inv.species.insert("Cyprinus carpio".into());
        inv.native.insert("Labeo rohita".into());
        inv.exotic.insert("Cyprinus carpio".into());

        assert_eq!(inv.species_count(), 2);
        assert_eq!(inv.native_count(), 1);
        assert_eq!(inv.exotic_count(), 1);
    }

    #[test]
    fn test_empty_inventory() {
        let inv = SpeciesInventory::empty("Nowhere");
        assert_eq!(inv.species_count(), 0);
        assert_eq!(inv.native_count(), 0);
        assert_eq!(inv.exotic_count(), 0);
    }
}
