use serde::{Deserialize, Serialize, Serializer};

use crate::utils::format_hours;

/// One persisted row of the clean dataset: a (date, oblast) pair with its
/// averaged outage hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanRecord {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Oblast")]
    pub region: String,

    #[serde(rename = "GID_1")]
    pub region_id: String,

    #[serde(rename = "Scheduled_outages", serialize_with = "serialize_hours")]
    pub scheduled: Option<f64>,

    #[serde(rename = "Actual_outages", serialize_with = "serialize_hours")]
    pub actual: Option<f64>,

    #[serde(rename = "Subqueues")]
    pub subqueues: String,
}

impl CleanRecord {
    pub fn has_data(&self) -> bool {
        self.scheduled.is_some() || self.actual.is_some()
    }
}

fn serialize_hours<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_str(&format_hours(*v)),
        None => serializer.serialize_str(""),
    }
}

/// A clean dataset row as read back from disk. Every cell stays text so a
/// hand-edited or truncated file cannot fail the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CleanRow {
    #[serde(rename = "Date", default)]
    pub date: Option<String>,

    #[serde(rename = "Oblast", default)]
    pub region: Option<String>,

    #[serde(rename = "GID_1", default)]
    pub region_id: Option<String>,

    #[serde(rename = "Scheduled_outages", default)]
    pub scheduled: Option<String>,

    #[serde(rename = "Actual_outages", default)]
    pub actual: Option<String>,

    #[serde(rename = "Subqueues", default)]
    pub subqueues: Option<String>,
}
