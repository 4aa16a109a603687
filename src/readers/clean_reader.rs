use crate::error::Result;
use crate::models::{CleanRow, MapData, RegionDayData};
use crate::readers::open_required;
use crate::utils::{format_report_date, parse_hours, parse_report_date};
use csv::ReaderBuilder;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapLoadReport {
    pub total_rows: usize,
    pub indexed_rows: usize,
    pub missing_key_rows: usize,
    pub unparseable_date_rows: usize,
    pub malformed_rows: usize,
}

impl MapLoadReport {
    pub fn summary(&self) -> String {
        format!(
            "{} rows read, {} indexed, {} without date or GID_1, {} with unparseable dates, {} malformed",
            self.total_rows,
            self.indexed_rows,
            self.missing_key_rows,
            self.unparseable_date_rows,
            self.malformed_rows
        )
    }
}

/// Rebuilds the per-date, per-region lookup the map page embeds from a
/// clean dataset file.
///
/// The file is re-validated rather than trusted: rows without a date or a
/// GID_1 are dropped, numbers are coerced the same way the aggregation does.
/// A row whose date does not parse is still indexed under its raw text but
/// that date is left out of the navigable date list.
pub struct MapDataLoader;

impl MapDataLoader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<(MapData, MapLoadReport)> {
        let file = open_required(path)?;
        let (data, report) = self.load_from(file)?;
        info!("Clean dataset {}: {}", path.display(), report.summary());
        Ok((data, report))
    }

    pub fn load_from<R: Read>(&self, source: R) -> Result<(MapData, MapLoadReport)> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(source);
        let mut data = MapData::default();
        let mut report = MapLoadReport::default();
        let mut dates = BTreeSet::new();

        for result in rdr.deserialize::<CleanRow>() {
            report.total_rows += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    debug!("Skipping malformed clean row: {}", e);
                    report.malformed_rows += 1;
                    continue;
                }
            };

            let raw_date = row.date.as_deref().map(str::trim).unwrap_or_default();
            let region_id = row.region_id.as_deref().map(str::trim).unwrap_or_default();
            if raw_date.is_empty() || region_id.is_empty() {
                report.missing_key_rows += 1;
                continue;
            }

            let date_key = match parse_report_date(raw_date) {
                Some(date) => {
                    dates.insert(date);
                    format_report_date(date)
                }
                None => {
                    report.unparseable_date_rows += 1;
                    raw_date.to_string()
                }
            };

            let entry = RegionDayData {
                scheduled: parse_hours(row.scheduled.as_deref()),
                actual: parse_hours(row.actual.as_deref()),
                subqueues: row
                    .subqueues
                    .as_deref()
                    .map(str::trim)
                    .unwrap_or_default()
                    .to_string(),
            };

            data.days
                .entry(date_key)
                .or_default()
                .insert(region_id.to_string(), entry);
            report.indexed_rows += 1;
        }

        if report.unparseable_date_rows > 0 {
            warn!(
                "{} clean rows have dates outside dd.mm.yyyy; they are indexed but not selectable",
                report.unparseable_date_rows
            );
        }

        data.dates = dates.into_iter().map(format_report_date).collect();
        Ok((data, report))
    }
}

impl Default for MapDataLoader {
    fn default() -> Self {
        Self::new()
    }
}
