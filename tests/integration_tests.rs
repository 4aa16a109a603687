use chrono::NaiveDate;
use outage_dashboard::config::DashboardConfig;
use outage_dashboard::models::{Metric, RegionDayData};
use outage_dashboard::processors::{style_panel, SurveyAggregator};
use outage_dashboard::readers::{GeometryReader, MapDataLoader, RegionReader, SurveyReader};
use outage_dashboard::utils::constants::*;
use outage_dashboard::writers::{CleanDatasetWriter, DashboardWriter, MapPageWriter};
use outage_dashboard::Result;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADM1_GEOJSON: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"GID_1": "UA-30", "NAME_1": "Kyiv"}, "geometry": null},
    {"type": "Feature", "properties": {"GID_1": "UA-46", "NAME_1": "Lviv"}, "geometry": null}
  ]
}"#;

const OCCUPIED_GEOJSON: &str = r#"{"type": "FeatureCollection", "features": []}"#;

fn write_csv(path: &Path, rows: &[&[&str]]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.write_record(*row)?;
    }
    wtr.flush()?;
    Ok(())
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Result<Self> {
        let dir = TempDir::new()?;

        write_csv(
            &dir.path().join("regions.csv"),
            &[
                &[REGION_NAME_COLUMN, REGION_ID_COLUMN],
                &["Kyiv", "UA-30"],
                &["Lviv", "UA-46"],
            ],
        )?;

        write_csv(
            &dir.path().join("raw.csv"),
            &[
                &[
                    "Timestamp",
                    RAW_DATE_COLUMN,
                    RAW_REGION_COLUMN,
                    RAW_SUBQUEUE_COLUMN,
                    RAW_SCHEDULED_COLUMN,
                    RAW_ACTUAL_COLUMN,
                ],
                &["t1", "01.02.2026", "Kyiv", "", "4", ""],
                &["t2", "01.02.2026", "Kyiv", "", "6", "n/a"],
                &["t3", "15.01.2026", "Lviv", "1.1", "10", "10"],
                &["t4", "02.02.2026", "Lviv", "3.1", "2,5", "8"],
                &["t5", "02.02.2026", " Lviv ", "1.2", "", "6"],
                &["t6", "", "Kyiv", "", "3", "3"],
                &["t7", "03.02.2026", "Atlantis", "", "1", "1"],
            ],
        )?;

        std::fs::write(dir.path().join("adm1.geojson"), ADM1_GEOJSON)?;
        std::fs::write(dir.path().join("occupied.geojson"), OCCUPIED_GEOJSON)?;

        Ok(Self { dir })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn clean(&self) -> Result<PathBuf> {
        let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        let mapping = RegionReader::new().read_regions(&self.path("regions.csv"))?;
        let (reports, _) = SurveyReader::new(start).read_reports(&self.path("raw.csv"))?;
        let (table, _) = SurveyAggregator::new(mapping).aggregate(&reports);

        let out = self.path("out").join("clean_outages.csv");
        CleanDatasetWriter::new().write_table(&table, &out)?;
        Ok(out)
    }
}

#[test]
fn test_clean_stage_output() -> Result<()> {
    let fixture = Fixture::new()?;
    let clean = fixture.clean()?;

    let content = std::fs::read_to_string(&clean)?;
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Date,Oblast,GID_1,Scheduled_outages,Actual_outages,Subqueues",
            "01.02.2026,Kyiv,UA-30,5.0,,",
            "01.02.2026,Lviv,UA-46,,,",
            "02.02.2026,Kyiv,UA-30,,,",
            "02.02.2026,Lviv,UA-46,2.5,7.0,\"1.2, 3.1\"",
            "03.02.2026,Kyiv,UA-30,,,",
            "03.02.2026,Lviv,UA-46,,,",
        ]
    );
    assert!(!content.contains("15.01.2026"));

    Ok(())
}

#[test]
fn test_load_reports_account_for_every_row() -> Result<()> {
    let fixture = Fixture::new()?;
    let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();

    let (reports, load) = SurveyReader::new(start).read_reports(&fixture.path("raw.csv"))?;

    assert_eq!(load.total_rows, 7);
    assert_eq!(load.accepted_rows, reports.len());
    assert_eq!(load.before_start_date, 1);
    assert_eq!(load.missing_date, 1);
    assert_eq!(load.accepted_rows + load.skipped_rows(), load.total_rows);

    let mapping = RegionReader::new().read_regions(&fixture.path("regions.csv"))?;
    let (table, aggregation) = SurveyAggregator::new(mapping).aggregate(&reports);
    assert_eq!(aggregation.unknown_region_reports, 1);
    assert!(aggregation.unknown_regions.contains("Atlantis"));
    assert_eq!(table.row_count(), table.dates.len() * 2);

    Ok(())
}

#[test]
fn test_clean_dataset_loads_back_for_maps() -> Result<()> {
    let fixture = Fixture::new()?;
    let clean = fixture.clean()?;

    let (data, report) = MapDataLoader::new().load(&clean)?;

    assert_eq!(report.total_rows, 6);
    assert_eq!(report.indexed_rows, 6);
    assert_eq!(data.dates, vec!["01.02.2026", "02.02.2026", "03.02.2026"]);
    assert_eq!(
        data.region("01.02.2026", "UA-30"),
        Some(&RegionDayData {
            scheduled: Some(5.0),
            actual: None,
            subqueues: String::new(),
        })
    );
    assert_eq!(
        data.region("02.02.2026", "UA-46"),
        Some(&RegionDayData {
            scheduled: Some(2.5),
            actual: Some(7.0),
            subqueues: "1.2, 3.1".to_string(),
        })
    );

    let admin = GeometryReader::new().read_layer(&fixture.path("adm1.geojson"), "adm1")?;
    let styles = style_panel("02.02.2026", &data, &admin, Metric::Actual);
    assert_eq!(styles.len(), 2);
    assert!(!styles[0].has_data());
    assert_eq!(styles[1].bucket.label(), "5-8");
    assert_eq!(
        styles[1].label,
        vec!["Lviv", "Region ID: UA-46", "Actual: 7 hours", "Sub-queues: 1.2, 3.1"]
    );

    Ok(())
}

#[test]
fn test_map_page_render() -> Result<()> {
    let fixture = Fixture::new()?;
    let clean = fixture.clean()?;
    let (data, _) = MapDataLoader::new().load(&clean)?;

    let reader = GeometryReader::new();
    let admin = reader.read_layer(&fixture.path("adm1.geojson"), "adm1")?;
    let occupied = reader.read_layer(&fixture.path("occupied.geojson"), "occupied")?;

    let out = fixture.path("docs").join("maps").join("outage_maps.html");
    MapPageWriter::new().write(&admin, &occupied, &data, &out)?;

    let html = std::fs::read_to_string(&out)?;
    assert!(html.contains(r#"["01.02.2026","02.02.2026","03.02.2026"]"#));
    assert!(html.contains(r#""UA-46":{"scheduled":2.5,"actual":7.0,"subqueues":"1.2, 3.1"}"#));
    assert!(html.contains("Ukraine Outage Maps"));
    assert!(!html.contains("{{"));

    Ok(())
}

#[test]
fn test_dashboard_render() -> Result<()> {
    let fixture = Fixture::new()?;
    let logo = fixture.path("gdu.png");
    std::fs::write(&logo, b"png")?;

    let yaml = format!(
        r#"
title: Outage Monitor
email contact: team@example.org
authors:
  - Jane Doe
  - name: John Roe
    linkedin: https://www.linkedin.com/in/jroe
logos:
  - file: {}
    url: https://example.org
key_insights:
  bullets:
    - Evenings are worst
maps:
  combined:
    file: maps/outage_maps.html
"#,
        logo.display()
    );
    let config_path = fixture.path("dashboard.yaml");
    std::fs::write(&config_path, yaml)?;

    let template_path = fixture.path("template.html");
    std::fs::write(
        &template_path,
        "<h1>{{TITLE}}</h1>\n<p>{{AUTHORS}}</p>\n<p>{{CONTACT}}</p>\n{{LOGOS}}\n\
         {{INSIGHTS_SECTION}}\n<iframe src=\"{{MAPS_FILE}}\" title=\"{{MAPS_TITLE}}\"></iframe>\n",
    )?;

    let out = fixture.path("docs").join("index.html");
    let config = DashboardConfig::load(&config_path)?;
    DashboardWriter::new(config).write(&template_path, &out)?;

    let html = std::fs::read_to_string(&out)?;
    let lines: Vec<&str> = html.lines().collect();
    assert_eq!(lines[0], "<h1>Outage Monitor</h1>");
    assert_eq!(
        lines[1],
        "<p>Prepared by the Data &amp; Modelling team from Green Deal Ukra\u{ef}na: Jane Doe &amp; \
         <a href=\"https://www.linkedin.com/in/jroe\" target=\"_blank\" rel=\"noopener\">John Roe</a></p>"
    );
    assert_eq!(lines[2], "<p>team@example.org</p>");
    assert_eq!(
        lines[3],
        "<a href=\"https://example.org\" target=\"_blank\" rel=\"noopener\"><img src=\"logos/gdu.png\" alt=\"Logo\"></a>"
    );
    assert!(lines[4].contains("<li>Evenings are worst</li>"));
    assert_eq!(
        lines[5],
        "<iframe src=\"maps/outage_maps.html\" title=\"Outage maps\"></iframe>"
    );
    assert!(fixture.path("docs").join("logos").join("gdu.png").exists());

    Ok(())
}
