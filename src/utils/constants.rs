/// Date format used by the survey export and the clean dataset (dd.mm.yyyy)
pub const REPORT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Earliest reporting date kept by default
pub const DEFAULT_START_DATE: &str = "31.01.2026";

/// Raw survey column headers
pub const RAW_DATE_COLUMN: &str = "What date are you reporting for?";
pub const RAW_REGION_COLUMN: &str = "What Oblast are you reporting from?";
pub const RAW_SUBQUEUE_COLUMN: &str = "What sub-queue are you reporting from?";
pub const RAW_SCHEDULED_COLUMN: &str =
    "How many hours of scheduled outages were planned for today in your sub-queue?";
pub const RAW_ACTUAL_COLUMN: &str =
    "How many hours of actual outages occurred today in your sub-queue?";

/// Region mapping column headers
pub const REGION_NAME_COLUMN: &str = RAW_REGION_COLUMN;
pub const REGION_ID_COLUMN: &str = "GID_1";

/// Clean dataset column headers
pub const CLEAN_DATE_COLUMN: &str = "Date";
pub const CLEAN_REGION_COLUMN: &str = "Oblast";
pub const CLEAN_REGION_ID_COLUMN: &str = "GID_1";
pub const CLEAN_SCHEDULED_COLUMN: &str = "Scheduled_outages";
pub const CLEAN_ACTUAL_COLUMN: &str = "Actual_outages";
pub const CLEAN_SUBQUEUES_COLUMN: &str = "Subqueues";

/// GeoJSON feature properties
pub const FEATURE_ID_PROPERTY: &str = "GID_1";
pub const FEATURE_NAME_PROPERTY: &str = "NAME_1";

/// Default file locations
pub const DEFAULT_RAW_PATH: &str = "data/Raw_survey_data.csv";
pub const DEFAULT_REGIONS_PATH: &str = "data/region_IDs.csv";
pub const DEFAULT_CLEAN_PATH: &str = "data/clean_outages.csv";
pub const DEFAULT_ADM1_PATH: &str = "shapefiles/UA_adm1.geojson";
pub const DEFAULT_OCCUPIED_PATH: &str = "shapefiles/occupied_territory.geojson";
pub const DEFAULT_MAPS_OUT_PATH: &str = "docs/maps/outage_maps.html";
pub const DEFAULT_TEMPLATE_PATH: &str = "templates/template.html";
pub const DEFAULT_CONFIG_PATH: &str = "templates/dashboard.yaml";
pub const DEFAULT_DASHBOARD_OUT_PATH: &str = "docs/index.html";

/// Directory (relative to the dashboard output) that published logos are copied into
pub const LOGOS_DIR: &str = "logos";

/// Fill colour for regions without a value
pub const NO_DATA_COLOR: &str = "#cfcfcf";

/// Occupied territory overlay fill
pub const OCCUPIED_FILL_COLOR: &str = "#6f6f6f";
