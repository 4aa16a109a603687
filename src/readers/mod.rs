pub mod clean_reader;
pub mod geometry_reader;
pub mod region_reader;
pub mod survey_reader;

pub use clean_reader::{MapDataLoader, MapLoadReport};
pub use geometry_reader::GeometryReader;
pub use region_reader::RegionReader;
pub use survey_reader::{SurveyLoadReport, SurveyReader};

use crate::error::{ProcessingError, Result};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open an input every stage depends on. A missing file is reported with its
/// path so the failing run says which artifact is absent.
pub(crate) fn open_required(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ProcessingError::FileNotFound(path.display().to_string()),
        _ => ProcessingError::Io(e),
    })
}
