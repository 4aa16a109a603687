use crate::error::{ProcessingError, Result};
use crate::models::GeometryLayer;
use crate::readers::open_required;
use serde_json::Value;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// Loads GeoJSON FeatureCollections exported by the geospatial tooling.
///
/// Shapefile decoding and reprojection happen upstream; GeoJSON is WGS84 by
/// definition, so the document is only checked, never transformed.
pub struct GeometryReader;

impl GeometryReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_layer(&self, path: &Path, name: &str) -> Result<GeometryLayer> {
        let file = open_required(path)?;
        let layer = self.read_layer_from(BufReader::new(file), name)?;
        info!(
            "Loaded {} features for layer '{}' from {}",
            layer.features().len(),
            name,
            path.display()
        );
        Ok(layer)
    }

    pub fn read_layer_from<R: Read>(&self, source: R, name: &str) -> Result<GeometryLayer> {
        let document: Value = serde_json::from_reader(source)?;

        match document.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") => {}
            other => {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Layer '{}' must be a GeoJSON FeatureCollection, found {:?}",
                    name, other
                )))
            }
        }

        if let Some(crs) = legacy_crs_name(&document) {
            if !is_wgs84(&crs) {
                warn!(
                    "Layer '{}' declares CRS {}; coordinates are expected in EPSG:4326",
                    name, crs
                );
            }
        }

        Ok(GeometryLayer::new(name, document))
    }
}

impl Default for GeometryReader {
    fn default() -> Self {
        Self::new()
    }
}

/// `crs.properties.name` from pre-RFC 7946 GeoJSON
fn legacy_crs_name(document: &Value) -> Option<String> {
    document
        .get("crs")?
        .get("properties")?
        .get("name")?
        .as_str()
        .map(str::to_string)
}

fn is_wgs84(crs: &str) -> bool {
    let upper = crs.to_uppercase();
    upper.ends_with("CRS84") || upper.ends_with("EPSG::4326") || upper.ends_with("EPSG:4326")
}
