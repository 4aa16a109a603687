use crate::models::{ColorBucket, GeometryLayer, MapData, Metric, RegionDayData};

/// Fill and label for one region on one panel
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureStyle {
    pub region_id: String,
    pub name: String,
    pub bucket: ColorBucket,
    pub label: Vec<String>,
}

impl FeatureStyle {
    pub fn fill_color(&self) -> &'static str {
        self.bucket.color()
    }

    pub fn has_data(&self) -> bool {
        self.bucket != ColorBucket::NoData
    }
}

/// Hour count as shown to readers, or `No data`
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{} hours", v),
        None => "No data".to_string(),
    }
}

/// Label lines for a region: name, identifier, metric value, sub-queues.
pub fn region_label(
    name: &str,
    region_id: &str,
    metric: Metric,
    entry: Option<&RegionDayData>,
) -> Vec<String> {
    let value = entry.and_then(|e| metric.value(e));
    let mut lines = vec![
        name.to_string(),
        format!("Region ID: {}", region_id),
        format!("{}: {}", metric.label(), format_value(value)),
    ];
    if let Some(subqueues) = entry.map(|e| e.subqueues.as_str()).filter(|s| !s.is_empty()) {
        lines.push(format!("Sub-queues: {}", subqueues));
    }
    lines
}

/// Style every region feature of `geometry` for one date and one panel.
///
/// Pure: the same inputs always give the same styles, and the scheduled and
/// actual panels differ only in `metric`. An unknown date styles every
/// region as no data.
pub fn style_panel(
    date: &str,
    data: &MapData,
    geometry: &GeometryLayer,
    metric: Metric,
) -> Vec<FeatureStyle> {
    let day = data.day(date);

    geometry
        .region_features()
        .into_iter()
        .map(|feature| {
            let entry = day.and_then(|d| d.get(&feature.region_id));
            let bucket = ColorBucket::for_value(entry.and_then(|e| metric.value(e)));
            let label = region_label(&feature.name, &feature.region_id, metric, entry);
            FeatureStyle {
                region_id: feature.region_id,
                name: feature.name,
                bucket,
                label,
            }
        })
        .collect()
}
