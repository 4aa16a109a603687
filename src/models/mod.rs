pub mod aggregate;
pub mod clean;
pub mod day_data;
pub mod geometry;
pub mod legend;
pub mod region;
pub mod survey;

pub use aggregate::{AggregateCell, AggregateTable, GroupAccumulator};
pub use clean::{CleanRecord, CleanRow};
pub use day_data::{DayData, MapData, RegionDayData};
pub use geometry::{GeometryLayer, RegionFeature};
pub use legend::{ColorBucket, LegendEntry, Metric};
pub use region::RegionMapping;
pub use survey::{RawSurveyRow, SkipReason, SurveyReport};
