use serde::Serialize;
use std::collections::BTreeMap;

/// Values shown for one region on one day. Serialises to the shape the map
/// page reads: `{"scheduled": 5.0, "actual": null, "subqueues": "A, B"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegionDayData {
    pub scheduled: Option<f64>,
    pub actual: Option<f64>,
    pub subqueues: String,
}

/// Region identifier → values for a single date
pub type DayData = BTreeMap<String, RegionDayData>;

/// Everything the map page needs from the clean dataset: the navigable date
/// list (calendar order) and the per-date keyed values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapData {
    pub dates: Vec<String>,
    pub days: BTreeMap<String, DayData>,
}

impl MapData {
    pub fn day(&self, date: &str) -> Option<&DayData> {
        self.days.get(date)
    }

    /// Entry for one region on one date
    pub fn region(&self, date: &str, region_id: &str) -> Option<&RegionDayData> {
        self.days.get(date).and_then(|day| day.get(region_id))
    }

    /// Default selection for the date picker
    pub fn latest_date(&self) -> Option<&str> {
        self.dates.last().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
