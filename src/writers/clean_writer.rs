use crate::error::Result;
use crate::models::{AggregateTable, CleanRecord};
use crate::utils::constants::*;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Writes the clean dataset: one row per (date, oblast), dates first.
///
/// The header is always written, so an empty survey still yields a valid
/// (header-only) file. Writes go straight to the target; an interrupted run
/// can leave a truncated file behind.
pub struct CleanDatasetWriter;

impl CleanDatasetWriter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_table(&self, table: &AggregateTable, path: &Path) -> Result<usize> {
        self.write_records(&table.to_records(), path)
    }

    pub fn write_records(&self, records: &[CleanRecord], path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        let written = self.write_records_to(records, file)?;
        info!("Wrote {} clean rows to {}", written, path.display());
        Ok(written)
    }

    pub fn write_records_to<W: Write>(&self, records: &[CleanRecord], sink: W) -> Result<usize> {
        let mut wtr = Writer::from_writer(sink);

        // Serialising a struct only emits the header with the first record.
        if records.is_empty() {
            wtr.write_record([
                CLEAN_DATE_COLUMN,
                CLEAN_REGION_COLUMN,
                CLEAN_REGION_ID_COLUMN,
                CLEAN_SCHEDULED_COLUMN,
                CLEAN_ACTUAL_COLUMN,
                CLEAN_SUBQUEUES_COLUMN,
            ])?;
        }

        for record in records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;

        Ok(records.len())
    }
}

impl Default for CleanDatasetWriter {
    fn default() -> Self {
        Self::new()
    }
}
