use crate::config::CombinedMapConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{ColorBucket, GeometryLayer, MapData, Metric};
use crate::processors::style_panel;
use crate::utils::constants::{NO_DATA_COLOR, OCCUPIED_FILL_COLOR};
use crate::writers::html::{escape_html, fill_template, script_json};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

const MAP_PAGE_TEMPLATE: &str = include_str!("assets/outage_maps.html");

#[derive(Debug, Serialize)]
struct PanelMeta {
    title: &'static str,
    label: &'static str,
    file: String,
}

/// Renders the dual-map page: scheduled and actual panels driven by one
/// date selector, with all data embedded so date changes never refetch.
pub struct MapPageWriter {
    page_title: String,
    scheduled_tooltip: String,
    actual_tooltip: String,
}

impl MapPageWriter {
    pub fn new() -> Self {
        Self::from_config(&CombinedMapConfig::default())
    }

    pub fn from_config(config: &CombinedMapConfig) -> Self {
        Self {
            page_title: config.page_title().to_string(),
            scheduled_tooltip: config.scheduled_tooltip().to_string(),
            actual_tooltip: config.actual_tooltip().to_string(),
        }
    }

    pub fn render(
        &self,
        admin: &GeometryLayer,
        occupied: &GeometryLayer,
        data: &MapData,
    ) -> Result<String> {
        let panels: BTreeMap<&str, PanelMeta> = Metric::ALL
            .iter()
            .map(|metric| {
                (
                    metric.key(),
                    PanelMeta {
                        title: metric.title(),
                        label: metric.label(),
                        file: format!("{}_outages", metric.key()),
                    },
                )
            })
            .collect();

        let admin_json = script_json(&admin.document)?;
        let occupied_json = script_json(&occupied.document)?;
        let outage_json = script_json(&data.days)?;
        let dates_json = script_json(&data.dates)?;
        let palette_json = script_json(&ColorBucket::legend())?;
        let panels_json = script_json(&panels)?;
        let page_title = escape_html(&self.page_title);
        let scheduled_tooltip = escape_html(&self.scheduled_tooltip);
        let actual_tooltip = escape_html(&self.actual_tooltip);

        Ok(fill_template(
            MAP_PAGE_TEMPLATE,
            &[
                ("PAGE_TITLE", &page_title),
                ("SCHEDULED_TITLE", Metric::Scheduled.title()),
                ("ACTUAL_TITLE", Metric::Actual.title()),
                ("SCHEDULED_TOOLTIP", &scheduled_tooltip),
                ("ACTUAL_TOOLTIP", &actual_tooltip),
                ("ADMIN_GEOJSON", &admin_json),
                ("OCCUPIED_GEOJSON", &occupied_json),
                ("OUTAGE_DATA", &outage_json),
                ("DATES", &dates_json),
                ("PALETTE", &palette_json),
                ("PANELS", &panels_json),
                ("NO_DATA_COLOR", NO_DATA_COLOR),
                ("OCCUPIED_FILL", OCCUPIED_FILL_COLOR),
            ],
        ))
    }

    pub fn write(
        &self,
        admin: &GeometryLayer,
        occupied: &GeometryLayer,
        data: &MapData,
        path: &Path,
    ) -> Result<()> {
        if admin.region_features().is_empty() {
            return Err(ProcessingError::MissingData(format!(
                "layer '{}' has no features with a GID_1 property",
                admin.name
            )));
        }
        self.log_coverage(admin, data);

        let html = self.render(admin, occupied, data)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, html)?;
        info!("Wrote map page to {}", path.display());
        Ok(())
    }

    /// Report how the page will look on first open (latest date).
    fn log_coverage(&self, admin: &GeometryLayer, data: &MapData) {
        let Some(date) = data.latest_date() else {
            warn!("Clean dataset has no selectable dates; maps will show no data");
            return;
        };

        for metric in Metric::ALL {
            let styles = style_panel(date, data, admin, metric);
            let with_data = styles.iter().filter(|s| s.has_data()).count();
            info!(
                "{} on {}: {} of {} regions have data",
                metric,
                date,
                with_data,
                styles.len()
            );
        }
    }
}

impl Default for MapPageWriter {
    fn default() -> Self {
        Self::new()
    }
}
