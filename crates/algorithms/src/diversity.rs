//! Per-basin species inventories
//!
//! Filters the occurrence table to one basin (exact, case-sensitive match)
//! and collects distinct species, partitioned by record status. The total
//! counts every distinct species regardless of status; native and exotic are
//! independent subsets, so totals need not equal native + exotic when
//! unrecognized status literals occur in the data.

use basinlink_core::{OccurrenceTable, SpeciesInventory, SpeciesStatus};

/// Build the species inventory of one basin.
///
/// A basin absent from the table yields an empty inventory, not an error.
pub fn species_inventory(basin: &str, table: &OccurrenceTable) -> SpeciesInventory {
    let mut inventory = SpeciesInventory::empty(basin);

    for record in table.iter().filter(|r| r.basin == basin) {
        inventory.species.insert(record.species.clone());
        match record.status {
            SpeciesStatus::Native => {
                inventory.native.insert(record.species.clone());
            }
            SpeciesStatus::Exotic => {
                inventory.exotic.insert(record.species.clone());
            }
            SpeciesStatus::Other => {}
        }
    }

    inventory
}

#[cfg(test)]
mod tests {
    use super::*;
    use basinlink_core::OccurrenceRecord;

    fn record(basin: &str, species: &str, status: SpeciesStatus) -> OccurrenceRecord {
        OccurrenceRecord {
            basin: basin.into(),
            species: species.into(),
            status,
        }
    }

    fn table() -> OccurrenceTable {
        [
            record("Ganges", "Labeo rohita", SpeciesStatus::Native),
            record("Ganges", "Labeo rohita", SpeciesStatus::Native), // duplicate row
            record("Ganges", "Cyprinus carpio", SpeciesStatus::Exotic),
            record("Ganges", "Channa marulius", SpeciesStatus::Other),
            record("Yamuna", "Labeo rohita", SpeciesStatus::Native),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_counts_distinct_species() {
        let inv = species_inventory("Ganges", &table());
        assert_eq!(inv.species_count(), 3);
        assert_eq!(inv.native_count(), 1);
        assert_eq!(inv.exotic_count(), 1);
    }

    #[test]
    fn test_unrecognized_status_in_total_only() {
        let inv = species_inventory("Ganges", &table());
        assert!(inv.species.contains("Channa marulius"));
        assert!(!inv.native.contains("Channa marulius"));
        assert!(!inv.exotic.contains("Channa marulius"));
        // total != native + exotic here, by design of the status model
        assert_ne!(inv.species_count(), inv.native_count() + inv.exotic_count());
    }

    #[test]
    fn test_basin_match_is_exact_and_case_sensitive() {
        let inv = species_inventory("ganges", &table());
        assert_eq!(inv.species_count(), 0);
    }

    #[test]
    fn test_absent_basin_yields_empty_inventory() {
        let inv = species_inventory("Orinoco", &table());
        assert_eq!(inv.basin, "Orinoco");
        assert!(inv.species.is_empty());
        assert_eq!(inv.species_count(), 0);
    }

    #[test]
    fn test_species_native_and_exotic_in_different_records() {
        let table: OccurrenceTable = [
            record("Mekong", "Oreochromis niloticus", SpeciesStatus::Native),
            record("Mekong", "Oreochromis niloticus", SpeciesStatus::Exotic),
        ]
        .into_iter()
        .collect();
        let inv = species_inventory("Mekong", &table);
        // status is per-record, so the species lands in both subsets
        assert_eq!(inv.species_count(), 1);
        assert_eq!(inv.native_count(), 1);
        assert_eq!(inv.exotic_count(), 1);
    }
}
