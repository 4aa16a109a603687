use crate::analyzers::CoverageAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::config::DashboardConfig;
use crate::error::{ProcessingError, Result};
use crate::models::{GeometryLayer, MapData, Metric};
use crate::processors::{style_panel, SurveyAggregator};
use crate::readers::{GeometryReader, MapDataLoader, RegionReader, SurveyReader};
use crate::utils::constants::REPORT_DATE_FORMAT;
use crate::utils::{format_report_date, init_logging, parse_report_date, ProgressReporter};
use crate::writers::{CleanDatasetWriter, DashboardWriter, MapPageWriter};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{info, warn};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Spinner output would interleave with debug logs on stderr
    let silent = cli.verbose && cli.log_file.is_none();

    match cli.command {
        Commands::Clean {
            raw,
            regions,
            out,
            start_date,
        } => {
            let start_date = NaiveDate::parse_from_str(start_date.trim(), REPORT_DATE_FORMAT)?;
            run_clean(&raw, &regions, &out, start_date, silent)?;
        }

        Commands::Maps {
            data,
            adm1,
            occupied,
            out,
            config,
        } => {
            let config = DashboardConfig::load_or_default(&config)?;
            let progress = ProgressReporter::new_spinner("Loading clean dataset...", silent);

            let (map_data, _report) = MapDataLoader::new().load(&data)?;

            progress.set_message("Reading boundaries...");
            let reader = GeometryReader::new();
            let admin = reader.read_layer(&adm1, "adm1")?;
            let occupied = reader.read_layer(&occupied, "occupied")?;

            progress.set_message("Rendering maps...");
            MapPageWriter::from_config(&config.maps.combined).write(
                &admin,
                &occupied,
                &map_data,
                &out,
            )?;

            progress.finish_with_message(&format!(
                "Map page with {} dates written",
                map_data.dates.len()
            ));
            println!("Maps written to {}", out.display());
        }

        Commands::Dashboard {
            template,
            config,
            out,
        } => {
            let config = DashboardConfig::load(&config)?;
            if config.maps.combined.file.is_empty() {
                warn!("maps.combined.file is not set; the dashboard will not embed the maps");
            }

            DashboardWriter::new(config).write(&template, &out)?;
            println!("Dashboard written to {}", out.display());
        }

        Commands::Inspect { data, adm1, date } => {
            let (map_data, report) = MapDataLoader::new().load(&data)?;
            let admin = GeometryReader::new().read_layer(&adm1, "adm1")?;

            let stats = CoverageAnalyzer::new().analyze(&map_data)?;
            println!("{}", stats.detailed_summary());
            println!("\nLoad Report: {}", report.summary());

            let date = inspect_date(date, &map_data, &data)?;
            print_panels(&date, &map_data, &admin);
        }
    }

    Ok(())
}

fn run_clean(
    raw: &Path,
    regions: &Path,
    out: &Path,
    start_date: NaiveDate,
    silent: bool,
) -> Result<()> {
    info!("Keeping reports dated on or after {}", format_report_date(start_date));
    let progress = ProgressReporter::new_spinner("Reading region mapping...", silent);

    let mapping = RegionReader::new().read_regions(regions)?;

    progress.set_message("Reading survey responses...");
    let (reports, load_report) = SurveyReader::new(start_date).read_reports(raw)?;

    progress.set_message("Aggregating...");
    let aggregator = SurveyAggregator::new(mapping);
    let (table, aggregation) = aggregator.aggregate(&reports);

    progress.set_message("Writing clean dataset...");
    let written = CleanDatasetWriter::new().write_table(&table, out)?;

    progress.finish_with_message(&format!("Wrote {} rows", written));

    println!("Survey: {}", load_report.summary());
    println!("Aggregation: {}", aggregation.summary());
    println!("Clean dataset written to {} ({} rows)", out.display(), written);

    Ok(())
}

/// The date `inspect` shows: the requested one (normalised to dd.mm.yyyy
/// when it parses) or the latest navigable date.
fn inspect_date(requested: Option<String>, data: &MapData, source: &Path) -> Result<String> {
    let date = match requested {
        Some(d) => parse_report_date(&d).map(format_report_date).unwrap_or(d),
        None => match data.latest_date() {
            Some(latest) => latest.to_string(),
            None => {
                return Err(ProcessingError::MissingData(format!(
                    "{} has no navigable dates; pass --date to inspect a raw date key",
                    source.display()
                )))
            }
        },
    };

    if data.day(&date).is_none() {
        return Err(ProcessingError::Config(format!(
            "--date {} does not appear in {}",
            date,
            source.display()
        )));
    }
    Ok(date)
}

fn print_panels(date: &str, data: &MapData, admin: &GeometryLayer) {
    if !data.dates.iter().any(|d| d == date) {
        warn!("Date {} is not in the navigable date list", date);
    }

    for metric in Metric::ALL {
        println!("\n{} ({})", metric.title(), date);
        for style in style_panel(date, data, admin, metric) {
            println!(
                "  [{:>5}] {} {}",
                style.bucket.label(),
                style.fill_color(),
                style.label.join(" | ")
            );
        }
    }
}
