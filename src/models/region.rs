use std::collections::BTreeMap;

/// Lookup from oblast display name to its stable region identifier (GID_1).
///
/// Names are unique; a later entry for the same name replaces the earlier one.
/// The identifier may be empty when the source does not know it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMapping {
    regions: BTreeMap<String, String>,
}

impl RegionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier for a display name, if the name is known
    pub fn region_id(&self, name: &str) -> Option<&str> {
        self.regions.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.regions.contains_key(name)
    }

    /// Known display names in lexicographic order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// `(name, identifier)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.regions.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<N, I> FromIterator<(N, I)> for RegionMapping
where
    N: Into<String>,
    I: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        Self {
            regions: iter
                .into_iter()
                .map(|(name, id)| (name.into(), id.into()))
                .collect(),
        }
    }
}
