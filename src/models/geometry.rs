use serde_json::Value;

use crate::utils::constants::{FEATURE_ID_PROPERTY, FEATURE_NAME_PROPERTY};

/// A GeoJSON FeatureCollection handed over by the geospatial tooling.
///
/// The document is kept verbatim so it can be embedded into the map page
/// untouched; only the region properties are read from it.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryLayer {
    pub name: String,
    pub document: Value,
}

/// Identifier and display name of one region feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionFeature {
    pub region_id: String,
    pub name: String,
}

impl GeometryLayer {
    pub fn new(name: impl Into<String>, document: Value) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }

    pub fn features(&self) -> &[Value] {
        self.document
            .get("features")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Region features carrying a `GID_1`. `NAME_1` falls back to the identifier.
    pub fn region_features(&self) -> Vec<RegionFeature> {
        self.features()
            .iter()
            .filter_map(|feature| {
                let properties = feature.get("properties")?;
                let region_id = property_text(properties, FEATURE_ID_PROPERTY)?;
                let name = property_text(properties, FEATURE_NAME_PROPERTY)
                    .unwrap_or_else(|| region_id.clone());
                Some(RegionFeature { region_id, name })
            })
            .collect()
    }
}

fn property_text(properties: &Value, key: &str) -> Option<String> {
    match properties.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
