use serde::Serialize;
use std::fmt;

use crate::models::RegionDayData;
use crate::utils::constants::NO_DATA_COLOR;

/// Which of the two linked panels a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Scheduled,
    Actual,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::Scheduled, Metric::Actual];

    /// Property name in the embedded day data
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Scheduled => "scheduled",
            Metric::Actual => "actual",
        }
    }

    /// Prefix used in region labels
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Scheduled => "Scheduled",
            Metric::Actual => "Actual",
        }
    }

    /// Panel heading
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Scheduled => "Scheduled outages",
            Metric::Actual => "Actual outages",
        }
    }

    pub fn value(&self, data: &RegionDayData) -> Option<f64> {
        match self {
            Metric::Scheduled => data.scheduled,
            Metric::Actual => data.actual,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Fixed choropleth buckets over the 0–24 hours/day domain.
///
/// Bounds are inclusive and apply to the value rounded to the nearest hour.
/// Anything below zero lands in `Zero`, anything above 24 in the top bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Zero,
    OneToFour,
    FiveToEight,
    NineToTwelve,
    ThirteenToSixteen,
    SeventeenToTwenty,
    TwentyOneToTwentyFour,
    NoData,
}

/// Palette entry as embedded in the map page
#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
    pub min: i64,
    pub max: i64,
}

impl ColorBucket {
    /// The seven hour buckets in ascending order (no-data excluded)
    pub const HOURS: [ColorBucket; 7] = [
        ColorBucket::Zero,
        ColorBucket::OneToFour,
        ColorBucket::FiveToEight,
        ColorBucket::NineToTwelve,
        ColorBucket::ThirteenToSixteen,
        ColorBucket::SeventeenToTwenty,
        ColorBucket::TwentyOneToTwentyFour,
    ];

    pub fn for_value(value: Option<f64>) -> Self {
        let Some(v) = value.filter(|v| v.is_finite()) else {
            return ColorBucket::NoData;
        };
        let rounded = v.round() as i64;
        Self::HOURS
            .iter()
            .copied()
            .find(|bucket| bucket.range().is_some_and(|(_, max)| rounded <= max))
            .unwrap_or(ColorBucket::TwentyOneToTwentyFour)
    }

    /// Inclusive hour range, `None` for the no-data bucket
    pub fn range(&self) -> Option<(i64, i64)> {
        match self {
            ColorBucket::Zero => Some((0, 0)),
            ColorBucket::OneToFour => Some((1, 4)),
            ColorBucket::FiveToEight => Some((5, 8)),
            ColorBucket::NineToTwelve => Some((9, 12)),
            ColorBucket::ThirteenToSixteen => Some((13, 16)),
            ColorBucket::SeventeenToTwenty => Some((17, 20)),
            ColorBucket::TwentyOneToTwentyFour => Some((21, 24)),
            ColorBucket::NoData => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorBucket::Zero => "0",
            ColorBucket::OneToFour => "1-4",
            ColorBucket::FiveToEight => "5-8",
            ColorBucket::NineToTwelve => "9-12",
            ColorBucket::ThirteenToSixteen => "13-16",
            ColorBucket::SeventeenToTwenty => "17-20",
            ColorBucket::TwentyOneToTwentyFour => "21-24",
            ColorBucket::NoData => "No data",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ColorBucket::Zero => "#2f9e44",
            ColorBucket::OneToFour => "#f2e86d",
            ColorBucket::FiveToEight => "#f5c76b",
            ColorBucket::NineToTwelve => "#f19a6b",
            ColorBucket::ThirteenToSixteen => "#e76b5a",
            ColorBucket::SeventeenToTwenty => "#c7433c",
            ColorBucket::TwentyOneToTwentyFour => "#8f1d1d",
            ColorBucket::NoData => NO_DATA_COLOR,
        }
    }

    /// Hour buckets as palette entries for the page script
    pub fn legend() -> Vec<LegendEntry> {
        Self::HOURS
            .iter()
            .filter_map(|bucket| {
                bucket.range().map(|(min, max)| LegendEntry {
                    label: bucket.label(),
                    color: bucket.color(),
                    min,
                    max,
                })
            })
            .collect()
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(ColorBucket::for_value(Some(0.0)), ColorBucket::Zero);
        assert_eq!(ColorBucket::for_value(Some(1.0)), ColorBucket::OneToFour);
        assert_eq!(ColorBucket::for_value(Some(4.0)), ColorBucket::OneToFour);
        assert_eq!(ColorBucket::for_value(Some(5.0)), ColorBucket::FiveToEight);
        assert_eq!(ColorBucket::for_value(Some(12.0)), ColorBucket::NineToTwelve);
        assert_eq!(ColorBucket::for_value(Some(13.0)), ColorBucket::ThirteenToSixteen);
        assert_eq!(ColorBucket::for_value(Some(20.0)), ColorBucket::SeventeenToTwenty);
        assert_eq!(ColorBucket::for_value(Some(24.0)), ColorBucket::TwentyOneToTwentyFour);
        assert_eq!(ColorBucket::for_value(None), ColorBucket::NoData);
    }

    #[test]
    fn test_bucket_rounding_and_out_of_domain() {
        assert_eq!(ColorBucket::for_value(Some(0.4)), ColorBucket::Zero);
        assert_eq!(ColorBucket::for_value(Some(4.5)), ColorBucket::FiveToEight);
        assert_eq!(ColorBucket::for_value(Some(-3.0)), ColorBucket::Zero);
        assert_eq!(ColorBucket::for_value(Some(30.0)), ColorBucket::TwentyOneToTwentyFour);
        assert_eq!(ColorBucket::for_value(Some(f64::NAN)), ColorBucket::NoData);
    }

    #[test]
    fn test_bucket_labels() {
        assert_eq!(ColorBucket::for_value(Some(0.0)).label(), "0");
        assert_eq!(ColorBucket::for_value(Some(4.0)).label(), "1-4");
        assert_eq!(ColorBucket::for_value(Some(24.0)).label(), "21-24");
        assert_eq!(ColorBucket::NoData.color(), NO_DATA_COLOR);
    }

    #[test]
    fn test_legend_covers_hour_domain() {
        let legend = ColorBucket::legend();
        assert_eq!(legend.len(), 7);
        assert_eq!(legend[0].min, 0);
        assert_eq!(legend[6].max, 24);
        for pair in legend.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min);
        }
    }

    #[test]
    fn test_metric_value() {
        let data = RegionDayData {
            scheduled: Some(3.0),
            actual: None,
            subqueues: String::new(),
        };
        assert_eq!(Metric::Scheduled.value(&data), Some(3.0));
        assert_eq!(Metric::Actual.value(&data), None);
        assert_eq!(Metric::Actual.key(), "actual");
    }
}
