//! CSV table readers and the result writer
//!
//! The occurrence dataset ships as semicolon-delimited, Latin-1 encoded CSV;
//! it is read as byte records and decoded field by field (every Latin-1 byte
//! is the identical Unicode scalar). The project table is ordinary
//! comma-delimited UTF-8.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Writer};

use crate::error::{Error, Result};
use crate::occurrence::{OccurrenceRecord, OccurrenceTable, SpeciesStatus};
use crate::project::TransferProject;
use crate::result::BasinPairResult;

// Column names as they appear in the source files
const COL_RANK: &str = "#";
const COL_BASIN_PAIR: &str = "Basin Pair";
const COL_PROJECT: &str = "Project (Country)";
const COL_DESIGN_FLOW: &str = "Design Flow (km³/yr)";
const COL_SENDER: &str = "Sender Coordinates";
const COL_RECEIVER: &str = "Receiver Coordinates";

const COL_OCC_BASIN: &str = "1.Basin.Name";
const COL_OCC_SPECIES: &str = "6.Fishbase.Valid.Species.Name";
const COL_OCC_STATUS: &str = "3.Native.Exotic.Status";

/// Decode a Latin-1 byte string; each byte maps to the same Unicode scalar.
fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

fn string_column(headers: &StringRecord, name: &'static str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::MissingColumn {
            column: name,
            path: path.to_path_buf(),
        })
}

fn byte_column(headers: &ByteRecord, name: &'static str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| latin1_to_string(h).trim() == name)
        .ok_or_else(|| Error::MissingColumn {
            column: name,
            path: path.to_path_buf(),
        })
}

/// Read the transfer-project table from a file.
pub fn read_projects(path: impl AsRef<Path>) -> Result<Vec<TransferProject>> {
    let path = path.as_ref();
    read_projects_from(File::open(path)?, path)
}

/// Read the transfer-project table from any reader.
///
/// `path` is only used for error context.
pub fn read_projects_from(reader: impl Read, path: &Path) -> Result<Vec<TransferProject>> {
    let mut rdr = ReaderBuilder::new().from_reader(reader);
    let headers = rdr.headers()?.clone();

    let rank_idx = string_column(&headers, COL_RANK, path)?;
    let pair_idx = string_column(&headers, COL_BASIN_PAIR, path)?;
    let project_idx = string_column(&headers, COL_PROJECT, path)?;
    let flow_idx = string_column(&headers, COL_DESIGN_FLOW, path)?;
    let sender_idx = string_column(&headers, COL_SENDER, path)?;
    let receiver_idx = string_column(&headers, COL_RECEIVER, path)?;

    let field = |record: &StringRecord, idx: usize| -> String {
        record.get(idx).unwrap_or_default().trim().to_string()
    };

    let mut projects = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let raw_rank = field(&record, rank_idx);
        let rank = raw_rank.parse::<u32>().map_err(|_| Error::InvalidRank {
            value: raw_rank.clone(),
        })?;
        projects.push(TransferProject {
            rank,
            basin_pair: field(&record, pair_idx),
            project: field(&record, project_idx),
            design_flow: field(&record, flow_idx),
            sender_coords: field(&record, sender_idx),
            receiver_coords: field(&record, receiver_idx),
        });
    }
    Ok(projects)
}

/// Read the occurrence table from a file.
pub fn read_occurrences(path: impl AsRef<Path>) -> Result<OccurrenceTable> {
    let path = path.as_ref();
    read_occurrences_from(File::open(path)?, path)
}

/// Read the occurrence table from any reader (semicolon-delimited, Latin-1).
pub fn read_occurrences_from(reader: impl Read, path: &Path) -> Result<OccurrenceTable> {
    let mut rdr = ReaderBuilder::new().delimiter(b';').from_reader(reader);
    let headers = rdr.byte_headers()?.clone();

    let basin_idx = byte_column(&headers, COL_OCC_BASIN, path)?;
    let species_idx = byte_column(&headers, COL_OCC_SPECIES, path)?;
    let status_idx = byte_column(&headers, COL_OCC_STATUS, path)?;

    let field = |record: &ByteRecord, idx: usize| -> String {
        record
            .get(idx)
            .map(latin1_to_string)
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    let mut table = OccurrenceTable::new();
    for record in rdr.byte_records() {
        let record = record?;
        table.push(OccurrenceRecord {
            basin: field(&record, basin_idx),
            species: field(&record, species_idx),
            status: SpeciesStatus::parse(&field(&record, status_idx)),
        });
    }
    Ok(table)
}

/// Write the result table to a file, header row included.
pub fn write_results(path: impl AsRef<Path>, results: &[BasinPairResult]) -> Result<()> {
    write_results_to(File::create(path)?, results)
}

/// Write the result table to any writer.
///
/// Column order follows `BasinPairResult` field order, which is the contract
/// consumed by the downstream visualization stage.
pub fn write_results_to(writer: impl Write, results: &[BasinPairResult]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for row in results {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
