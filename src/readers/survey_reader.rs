use crate::error::Result;
use crate::models::{RawSurveyRow, SkipReason, SurveyReport};
use crate::readers::open_required;
use crate::utils::constants::*;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// What happened to the rows of one survey export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurveyLoadReport {
    pub total_rows: usize,
    pub accepted_rows: usize,
    pub missing_date: usize,
    pub missing_region: usize,
    pub unparseable_date: usize,
    pub before_start_date: usize,
    pub malformed_rows: usize,
}

impl SurveyLoadReport {
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::MissingDate => self.missing_date += 1,
            SkipReason::MissingRegion => self.missing_region += 1,
            SkipReason::UnparseableDate => self.unparseable_date += 1,
            SkipReason::BeforeStartDate => self.before_start_date += 1,
            SkipReason::MalformedRow => self.malformed_rows += 1,
        }
    }

    pub fn skipped_rows(&self) -> usize {
        self.missing_date
            + self.missing_region
            + self.unparseable_date
            + self.before_start_date
            + self.malformed_rows
    }

    pub fn summary(&self) -> String {
        format!(
            "{} rows read, {} kept, {} skipped (missing date: {}, missing region: {}, \
             unparseable date: {}, before start date: {}, malformed: {})",
            self.total_rows,
            self.accepted_rows,
            self.skipped_rows(),
            self.missing_date,
            self.missing_region,
            self.unparseable_date,
            self.before_start_date,
            self.malformed_rows
        )
    }
}

/// Positions of the survey questions in the export header.
///
/// Form exports repeat a question column when the form branches; the last
/// occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct SurveyColumns {
    date: Option<usize>,
    region: Option<usize>,
    subqueue: Option<usize>,
    scheduled: Option<usize>,
    actual: Option<usize>,
}

impl SurveyColumns {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| h.trim() == name)
                .map(|(i, _)| i)
                .last()
        };
        Self {
            date: position(RAW_DATE_COLUMN),
            region: position(RAW_REGION_COLUMN),
            subqueue: position(RAW_SUBQUEUE_COLUMN),
            scheduled: position(RAW_SCHEDULED_COLUMN),
            actual: position(RAW_ACTUAL_COLUMN),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            (self.date, RAW_DATE_COLUMN),
            (self.region, RAW_REGION_COLUMN),
            (self.subqueue, RAW_SUBQUEUE_COLUMN),
            (self.scheduled, RAW_SCHEDULED_COLUMN),
            (self.actual, RAW_ACTUAL_COLUMN),
        ]
        .into_iter()
        .filter(|(index, _)| index.is_none())
        .map(|(_, name)| name)
        .collect()
    }

    fn row(&self, record: &StringRecord) -> RawSurveyRow {
        let cell = |index: Option<usize>| index.and_then(|i| record.get(i)).map(str::to_string);
        RawSurveyRow {
            date: cell(self.date),
            region: cell(self.region),
            subqueue: cell(self.subqueue),
            scheduled_hours: cell(self.scheduled),
            actual_hours: cell(self.actual),
        }
    }
}

/// Reads the raw survey export and keeps rows dated on or after `start_date`.
pub struct SurveyReader {
    start_date: NaiveDate,
}

impl SurveyReader {
    pub fn new(start_date: NaiveDate) -> Self {
        Self { start_date }
    }

    pub fn read_reports(&self, path: &Path) -> Result<(Vec<SurveyReport>, SurveyLoadReport)> {
        let file = open_required(path)?;
        info!(
            "Reading survey {} from {} onwards",
            path.display(),
            self.start_date.format(REPORT_DATE_FORMAT)
        );
        let (reports, report) = self.read_reports_from(file)?;
        info!("Survey {}: {}", path.display(), report.summary());
        Ok((reports, report))
    }

    /// Parse survey rows from any reader. Individual bad rows are counted,
    /// never returned as errors.
    pub fn read_reports_from<R: Read>(
        &self,
        source: R,
    ) -> Result<(Vec<SurveyReport>, SurveyLoadReport)> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(source);
        let columns = SurveyColumns::from_headers(rdr.headers()?);
        let missing = columns.missing();
        if !missing.is_empty() {
            warn!("Survey header lacks columns: {}", missing.join("; "));
        }

        let mut reports = Vec::new();
        let mut load_report = SurveyLoadReport::default();

        for (index, result) in rdr.records().enumerate() {
            load_report.total_rows += 1;
            let line = index + 2;

            let outcome = result
                .map_err(|e| {
                    debug!("Line {}: {}", line, e);
                    SkipReason::MalformedRow
                })
                .and_then(|record| columns.row(&record).to_report(self.start_date));

            match outcome {
                Ok(report) => {
                    load_report.accepted_rows += 1;
                    reports.push(report);
                }
                Err(reason) => {
                    debug!("Line {} skipped: {}", line, reason);
                    load_report.record_skip(reason);
                }
            }
        }

        if load_report.unparseable_date > 0 {
            warn!(
                "{} survey rows had dates not in dd.mm.yyyy form",
                load_report.unparseable_date
            );
        }

        Ok((reports, load_report))
    }
}
