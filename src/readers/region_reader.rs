use crate::error::Result;
use crate::models::RegionMapping;
use crate::readers::open_required;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct RegionRow {
    #[serde(rename = "What Oblast are you reporting from?", default)]
    name: Option<String>,

    #[serde(rename = "GID_1", default)]
    region_id: Option<String>,
}

/// Loads the oblast name → GID_1 lookup table.
pub struct RegionReader;

impl RegionReader {
    pub fn new() -> Self {
        Self
    }

    /// Read the mapping CSV. Rows without a name are ignored; a missing
    /// identifier is kept as an empty string.
    pub fn read_regions(&self, path: &Path) -> Result<RegionMapping> {
        let file = open_required(path)?;
        let mapping = self.read_regions_from(file)?;
        info!(
            "Loaded {} regions from {}",
            mapping.len(),
            path.display()
        );
        Ok(mapping)
    }

    pub fn read_regions_from<R: Read>(&self, source: R) -> Result<RegionMapping> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(source);
        let mut pairs = Vec::new();

        for result in rdr.deserialize::<RegionRow>() {
            let row = match result {
                Ok(row) => row,
                Err(e) => {
                    debug!("Skipping unreadable region row: {}", e);
                    continue;
                }
            };

            let name = row.name.as_deref().map(str::trim).unwrap_or_default();
            if name.is_empty() {
                continue;
            }
            let region_id = row.region_id.as_deref().map(str::trim).unwrap_or_default();
            pairs.push((name.to_string(), region_id.to_string()));
        }

        Ok(pairs.into_iter().collect())
    }
}

impl Default for RegionReader {
    fn default() -> Self {
        Self::new()
    }
}
