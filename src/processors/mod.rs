pub mod panel_styler;
pub mod survey_aggregator;

pub use panel_styler::{format_value, region_label, style_panel, FeatureStyle};
pub use survey_aggregator::{AggregationReport, SurveyAggregator};
