use crate::utils::constants::*;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "outage-dashboard")]
#[command(about = "Builds the Ukraine power outage survey dataset, maps and dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate raw survey responses into the clean per-oblast dataset
    Clean {
        #[arg(long, default_value = DEFAULT_RAW_PATH, help = "Raw survey export (CSV)")]
        raw: PathBuf,

        #[arg(long, default_value = DEFAULT_REGIONS_PATH, help = "Oblast name to GID_1 mapping")]
        regions: PathBuf,

        #[arg(short, long, default_value = DEFAULT_CLEAN_PATH)]
        out: PathBuf,

        #[arg(
            long,
            default_value = DEFAULT_START_DATE,
            help = "Earliest report date kept (dd.mm.yyyy)"
        )]
        start_date: String,
    },

    /// Render the scheduled/actual outage map page from the clean dataset
    Maps {
        #[arg(long, default_value = DEFAULT_CLEAN_PATH)]
        data: PathBuf,

        #[arg(long, default_value = DEFAULT_ADM1_PATH, help = "Oblast boundaries (GeoJSON)")]
        adm1: PathBuf,

        #[arg(long, default_value = DEFAULT_OCCUPIED_PATH, help = "Occupied territory (GeoJSON)")]
        occupied: PathBuf,

        #[arg(short, long, default_value = DEFAULT_MAPS_OUT_PATH)]
        out: PathBuf,

        #[arg(
            long,
            default_value = DEFAULT_CONFIG_PATH,
            help = "Dashboard YAML (optional for this stage)"
        )]
        config: PathBuf,
    },

    /// Fill the dashboard HTML template from the YAML configuration
    Dashboard {
        #[arg(long, default_value = DEFAULT_TEMPLATE_PATH)]
        template: PathBuf,

        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        #[arg(short, long, default_value = DEFAULT_DASHBOARD_OUT_PATH)]
        out: PathBuf,
    },

    /// Summarise a clean dataset and print both panels for one date
    Inspect {
        #[arg(long, default_value = DEFAULT_CLEAN_PATH)]
        data: PathBuf,

        #[arg(long, default_value = DEFAULT_ADM1_PATH)]
        adm1: PathBuf,

        #[arg(short, long, help = "Date to show (dd.mm.yyyy) [default: latest]")]
        date: Option<String>,
    },
}
