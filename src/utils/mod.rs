pub mod constants;
pub mod logging;
pub mod parse;
pub mod progress;

pub use constants::*;
pub use logging::init_logging;
pub use parse::{format_hours, format_report_date, mean, parse_hours, parse_report_date};
pub use progress::ProgressReporter;
