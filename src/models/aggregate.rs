use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

use crate::models::{CleanRecord, RegionMapping};
use crate::utils::{format_report_date, mean};

/// Averaged metrics for one (date, oblast) group.
///
/// `None` means no respondent gave a usable number; it is never folded
/// into `0.0`, which would read as "no outage".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateCell {
    pub scheduled: Option<f64>,
    pub actual: Option<f64>,
    pub subqueues: BTreeSet<String>,
}

impl AggregateCell {
    /// Distinct sub-queues, sorted and joined for display
    pub fn subqueue_text(&self) -> String {
        self.subqueues
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Running collection of values for one group while rows are being read
#[derive(Debug, Clone, Default)]
pub struct GroupAccumulator {
    scheduled: Vec<f64>,
    actual: Vec<f64>,
    subqueues: BTreeSet<String>,
}

impl GroupAccumulator {
    pub fn add(&mut self, scheduled: Option<f64>, actual: Option<f64>, subqueue: Option<&str>) {
        if let Some(v) = scheduled {
            self.scheduled.push(v);
        }
        if let Some(v) = actual {
            self.actual.push(v);
        }
        if let Some(s) = subqueue {
            self.subqueues.insert(s.to_string());
        }
    }

    pub fn finish(self) -> AggregateCell {
        AggregateCell {
            scheduled: mean(&self.scheduled),
            actual: mean(&self.actual),
            subqueues: self.subqueues,
        }
    }
}

/// Result of aggregating a survey: the full date × oblast grid.
///
/// `dates` are the distinct report dates (calendar order), `regions` every
/// oblast the mapping knows (name order). Pairs without reports have no
/// entry in `cells` and read back as an empty [`AggregateCell`].
#[derive(Debug, Clone, Default)]
pub struct AggregateTable {
    pub dates: Vec<NaiveDate>,
    pub regions: RegionMapping,
    pub cells: HashMap<(NaiveDate, String), AggregateCell>,
}

impl AggregateTable {
    pub fn cell(&self, date: NaiveDate, region: &str) -> Option<&AggregateCell> {
        self.cells.get(&(date, region.to_string()))
    }

    /// Number of rows the clean dataset will hold
    pub fn row_count(&self) -> usize {
        self.dates.len() * self.regions.len()
    }

    /// Flatten the grid into clean dataset rows, dates first then oblast names.
    pub fn to_records(&self) -> Vec<CleanRecord> {
        let empty = AggregateCell::default();
        let mut records = Vec::with_capacity(self.row_count());

        for date in &self.dates {
            let date_text = format_report_date(*date);
            for (region, region_id) in self.regions.iter() {
                let cell = self.cell(*date, region).unwrap_or(&empty);
                records.push(CleanRecord {
                    date: date_text.clone(),
                    region: region.to_string(),
                    region_id: region_id.to_string(),
                    scheduled: cell.scheduled,
                    actual: cell.actual,
                    subqueues: cell.subqueue_text(),
                });
            }
        }

        records
    }
}
