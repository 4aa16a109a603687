use crate::models::{AggregateTable, GroupAccumulator, RegionMapping, SurveyReport};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationReport {
    pub input_reports: usize,
    pub groups: usize,
    pub dates: usize,
    pub regions: usize,
    pub unknown_region_reports: usize,
    pub unknown_regions: BTreeSet<String>,
}

impl AggregationReport {
    pub fn summary(&self) -> String {
        format!(
            "{} reports in {} groups over {} dates x {} regions ({} reports from {} unmapped regions)",
            self.input_reports,
            self.groups,
            self.dates,
            self.regions,
            self.unknown_region_reports,
            self.unknown_regions.len()
        )
    }
}

/// Groups survey reports by (date, oblast) and averages the outage hours.
///
/// Oblast names are matched exactly as respondents wrote them. Reports from
/// names the mapping does not know still contribute their date to the date
/// axis but produce no row of their own.
pub struct SurveyAggregator {
    regions: RegionMapping,
}

impl SurveyAggregator {
    pub fn new(regions: RegionMapping) -> Self {
        Self { regions }
    }

    /// Build the full date × oblast grid from already-filtered reports.
    pub fn aggregate(&self, reports: &[SurveyReport]) -> (AggregateTable, AggregationReport) {
        let mut groups: HashMap<(NaiveDate, String), GroupAccumulator> = HashMap::new();
        let mut dates = BTreeSet::new();
        let mut report = AggregationReport {
            input_reports: reports.len(),
            regions: self.regions.len(),
            ..Default::default()
        };

        for survey in reports {
            dates.insert(survey.date);

            if !self.regions.contains(&survey.region) {
                report.unknown_region_reports += 1;
                if report.unknown_regions.insert(survey.region.clone()) {
                    debug!("Region '{}' is not in the region mapping", survey.region);
                }
            }

            groups
                .entry((survey.date, survey.region.clone()))
                .or_default()
                .add(
                    survey.scheduled_hours,
                    survey.actual_hours,
                    survey.subqueue.as_deref(),
                );
        }

        report.groups = groups.len();
        report.dates = dates.len();

        if !report.unknown_regions.is_empty() {
            warn!(
                "{} reports use region names missing from the mapping: {}",
                report.unknown_region_reports,
                report
                    .unknown_regions
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let cells = groups
            .into_iter()
            .filter(|((_, region), _)| self.regions.contains(region))
            .map(|(key, acc)| (key, acc.finish()))
            .collect();

        let table = AggregateTable {
            dates: dates.into_iter().collect(),
            regions: self.regions.clone(),
            cells,
        };

        info!("Aggregated {}", report.summary());
        (table, report)
    }
}
