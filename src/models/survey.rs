use chrono::NaiveDate;
use std::fmt;

use crate::utils::{parse_hours, parse_report_date};

/// One respondent row of the raw survey export, exactly as the CSV holds it.
#[derive(Debug, Clone, Default)]
pub struct RawSurveyRow {
    pub date: Option<String>,
    pub region: Option<String>,
    pub subqueue: Option<String>,
    pub scheduled_hours: Option<String>,
    pub actual_hours: Option<String>,
}

/// Why a raw row did not make it into the aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    MissingDate,
    MissingRegion,
    UnparseableDate,
    BeforeStartDate,
    MalformedRow,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingDate => "missing date",
            SkipReason::MissingRegion => "missing region",
            SkipReason::UnparseableDate => "unparseable date",
            SkipReason::BeforeStartDate => "before start date",
            SkipReason::MalformedRow => "malformed row",
        };
        write!(f, "{}", text)
    }
}

/// A typed survey report that passed date and region checks.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyReport {
    pub date: NaiveDate,
    pub region: String,
    pub subqueue: Option<String>,
    pub scheduled_hours: Option<f64>,
    pub actual_hours: Option<f64>,
}

impl SurveyReport {
    pub fn new(date: NaiveDate, region: impl Into<String>) -> Self {
        Self {
            date,
            region: region.into(),
            subqueue: None,
            scheduled_hours: None,
            actual_hours: None,
        }
    }

    pub fn with_subqueue(mut self, subqueue: impl Into<String>) -> Self {
        self.subqueue = Some(subqueue.into());
        self
    }

    pub fn with_hours(mut self, scheduled: Option<f64>, actual: Option<f64>) -> Self {
        self.scheduled_hours = scheduled;
        self.actual_hours = actual;
        self
    }
}

impl RawSurveyRow {
    /// Coerce the text cells into a [`SurveyReport`].
    ///
    /// Date and region are required; numbers that do not parse become absent.
    /// Rows dated before `start_date` are rejected.
    pub fn to_report(&self, start_date: NaiveDate) -> Result<SurveyReport, SkipReason> {
        let raw_date = trimmed(self.date.as_deref()).ok_or(SkipReason::MissingDate)?;
        let region = trimmed(self.region.as_deref()).ok_or(SkipReason::MissingRegion)?;
        let date = parse_report_date(raw_date).ok_or(SkipReason::UnparseableDate)?;

        if date < start_date {
            return Err(SkipReason::BeforeStartDate);
        }

        Ok(SurveyReport {
            date,
            region: region.to_string(),
            subqueue: trimmed(self.subqueue.as_deref()).map(str::to_string),
            scheduled_hours: parse_hours(self.scheduled_hours.as_deref()),
            actual_hours: parse_hours(self.actual_hours.as_deref()),
        })
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
