pub mod clean_writer;
pub mod dashboard_writer;
pub mod html;
pub mod map_writer;

pub use clean_writer::CleanDatasetWriter;
pub use dashboard_writer::DashboardWriter;
pub use html::{escape_html, fill_template, script_json};
pub use map_writer::MapPageWriter;
