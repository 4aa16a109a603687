use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outage_dashboard::models::{GeometryLayer, Metric, RegionMapping, SurveyReport};
use outage_dashboard::processors::{style_panel, SurveyAggregator};
use outage_dashboard::readers::MapDataLoader;
use outage_dashboard::writers::CleanDatasetWriter;
use serde_json::json;

const REGION_COUNT: usize = 25;

fn create_regions() -> RegionMapping {
    (1..=REGION_COUNT)
        .map(|i| (format!("Oblast {}", i), format!("UA-{:02}", i)))
        .collect()
}

// Several respondents per oblast per day, with a few gaps and unknown names
fn create_reports(days: usize, per_region: usize) -> Vec<SurveyReport> {
    let start = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
    let mut reports = Vec::with_capacity(days * REGION_COUNT * per_region);

    for day in 0..days {
        let date = start + Duration::days(day as i64);
        for region in 1..=REGION_COUNT {
            for respondent in 0..per_region {
                let scheduled = ((day + region + respondent) % 25) as f64;
                let actual = if respondent % 4 == 0 {
                    None
                } else {
                    Some(((day * 3 + region) % 24) as f64 + 0.5)
                };
                reports.push(
                    SurveyReport::new(date, format!("Oblast {}", region))
                        .with_subqueue(format!("{}.{}", respondent % 6 + 1, respondent % 2 + 1))
                        .with_hours(Some(scheduled), actual),
                );
            }
        }
        reports.push(SurveyReport::new(date, "Unmapped").with_hours(Some(4.0), None));
    }

    reports
}

fn create_geometry() -> GeometryLayer {
    let features: Vec<_> = (1..=REGION_COUNT)
        .map(|i| {
            json!({
                "type": "Feature",
                "properties": {"GID_1": format!("UA-{:02}", i), "NAME_1": format!("Oblast {}", i)},
                "geometry": null
            })
        })
        .collect();
    GeometryLayer::new("adm1", json!({"type": "FeatureCollection", "features": features}))
}

fn benchmark_aggregation(c: &mut Criterion) {
    let reports = create_reports(30, 20);
    let aggregator = SurveyAggregator::new(create_regions());

    c.bench_function("survey_aggregation", |b| {
        b.iter(|| {
            let (table, _report) = aggregator.aggregate(black_box(&reports));
            black_box(table.row_count())
        })
    });
}

fn benchmark_clean_round_trip(c: &mut Criterion) {
    let reports = create_reports(30, 5);
    let (table, _) = SurveyAggregator::new(create_regions()).aggregate(&reports);
    let records = table.to_records();

    c.bench_function("clean_write_and_load", |b| {
        b.iter(|| {
            let mut buffer = Vec::new();
            CleanDatasetWriter::new()
                .write_records_to(&records, &mut buffer)
                .unwrap();
            let (data, _) = MapDataLoader::new().load_from(buffer.as_slice()).unwrap();
            black_box(data.dates.len())
        })
    });
}

fn benchmark_style_panel(c: &mut Criterion) {
    let reports = create_reports(30, 5);
    let (table, _) = SurveyAggregator::new(create_regions()).aggregate(&reports);
    let mut buffer = Vec::new();
    CleanDatasetWriter::new()
        .write_records_to(&table.to_records(), &mut buffer)
        .unwrap();
    let (data, _) = MapDataLoader::new().load_from(buffer.as_slice()).unwrap();
    let geometry = create_geometry();
    let date = data.latest_date().unwrap().to_string();

    c.bench_function("style_panel", |b| {
        b.iter(|| {
            let styles = style_panel(black_box(&date), &data, &geometry, Metric::Actual);
            black_box(styles.len())
        })
    });
}

fn benchmark_varying_survey_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation_by_days");
    let regions = create_regions();

    for &days in &[7, 30, 90, 365] {
        group.bench_with_input(BenchmarkId::new("days", days), &days, |b, &days| {
            let reports = create_reports(days, 10);
            let aggregator = SurveyAggregator::new(regions.clone());
            b.iter(|| {
                let (table, _) = aggregator.aggregate(&reports);
                black_box(table.to_records().len())
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_aggregation,
    benchmark_clean_round_trip,
    benchmark_style_panel,
    benchmark_varying_survey_sizes
);
criterion_main!(benches);
