use crate::error::{ProcessingError, Result};
use crate::models::{MapData, RegionDayData};
use crate::utils::mean;
use std::collections::BTreeSet;

/// Regions with values for one navigable date
#[derive(Debug, Clone, PartialEq)]
pub struct DateCoverage {
    pub date: String,
    pub regions: usize,
    pub scheduled_regions: usize,
    pub actual_regions: usize,
}

#[derive(Debug)]
pub struct CoverageStatistics {
    pub total_dates: usize,
    pub indexed_days: usize,
    pub date_range: Option<(String, String)>,
    pub unique_regions: usize,
    pub per_date: Vec<DateCoverage>,
    pub mean_scheduled: Option<f64>,
    pub mean_actual: Option<f64>,
}

impl CoverageStatistics {
    /// Share of (date, region) cells that carry a scheduled value
    pub fn scheduled_percentage(&self) -> f64 {
        self.percentage(|d| d.scheduled_regions)
    }

    pub fn actual_percentage(&self) -> f64 {
        self.percentage(|d| d.actual_regions)
    }

    fn percentage(&self, count: impl Fn(&DateCoverage) -> usize) -> f64 {
        let cells: usize = self.per_date.iter().map(|d| d.regions).sum();
        if cells == 0 {
            return 0.0;
        }
        let filled: usize = self.per_date.iter().map(count).sum();
        (filled as f64 / cells as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        let range = match &self.date_range {
            Some((first, last)) => format!("{} to {}", first, last),
            None => "no dates".to_string(),
        };

        format!(
            "Dates: {} selectable ({} indexed)\n\
            Date Range: {}\n\
            Regions: {}\n\
            Coverage: {:.1}% scheduled, {:.1}% actual\n\
            Mean Outage: {} scheduled, {} actual",
            self.total_dates,
            self.indexed_days,
            range,
            self.unique_regions,
            self.scheduled_percentage(),
            self.actual_percentage(),
            hours_or_none(self.mean_scheduled),
            hours_or_none(self.mean_actual),
        )
    }

    pub fn detailed_summary(&self) -> String {
        let mut lines = vec![self.summary(), String::new(), "Per date:".to_string()];
        for day in &self.per_date {
            lines.push(format!(
                "- {}: {}/{} scheduled, {}/{} actual",
                day.date, day.scheduled_regions, day.regions, day.actual_regions, day.regions
            ));
        }
        lines.join("\n")
    }
}

fn hours_or_none(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}h", v),
        None => "n/a".to_string(),
    }
}

pub struct CoverageAnalyzer;

impl CoverageAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, data: &MapData) -> Result<CoverageStatistics> {
        if data.is_empty() {
            return Err(ProcessingError::MissingData(
                "No rows to analyze in clean dataset".to_string(),
            ));
        }

        let mut regions = BTreeSet::new();
        let mut scheduled = Vec::new();
        let mut actual = Vec::new();

        for day in data.days.values() {
            for (region_id, entry) in day {
                regions.insert(region_id.as_str());
                scheduled.extend(entry.scheduled);
                actual.extend(entry.actual);
            }
        }

        let per_date = data
            .dates
            .iter()
            .map(|date| {
                let day = data.day(date);
                let count = |pick: fn(&RegionDayData) -> bool| {
                    day.map_or(0, |d| d.values().filter(|e| pick(e)).count())
                };
                DateCoverage {
                    date: date.clone(),
                    regions: day.map_or(0, |d| d.len()),
                    scheduled_regions: count(|e| e.scheduled.is_some()),
                    actual_regions: count(|e| e.actual.is_some()),
                }
            })
            .collect();

        let date_range = match (data.dates.first(), data.dates.last()) {
            (Some(first), Some(last)) => Some((first.clone(), last.clone())),
            _ => None,
        };

        Ok(CoverageStatistics {
            total_dates: data.dates.len(),
            indexed_days: data.days.len(),
            date_range,
            unique_regions: regions.len(),
            per_date,
            mean_scheduled: mean(&scheduled),
            mean_actual: mean(&actual),
        })
    }
}

impl Default for CoverageAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
