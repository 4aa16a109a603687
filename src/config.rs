//! Typed view of the dashboard YAML.
//!
//! Every field is optional in the file. Defaults:
//! - section headings: `Purpose`, `About the project`, `Key insights`
//! - key insights are shown unless `key_insights.enabled` is `false`
//! - header link prefix: "Check out our other dashboard that focuses more generally on the"
//! - map page title `Ukraine Outage Maps`, dashboard map heading `Outage maps`
//! - tooltip texts for the two panels as in [`DEFAULT_SCHEDULED_TOOLTIP`] and
//!   [`DEFAULT_ACTUAL_TOOLTIP`]

use crate::error::{ProcessingError, Result};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub const DEFAULT_SCHEDULED_TOOLTIP: &str =
    "Planned outages announced by authorities for each day.";
pub const DEFAULT_ACTUAL_TOOLTIP: &str = "Observed outages reported by households for each day.";
pub const DEFAULT_AUTHORS_PREFIX: &str =
    "Prepared by the Data &amp; Modelling team from Green Deal Ukra\u{ef}na:";
pub const DEFAULT_HEADER_LINK_PREFIX: &str =
    "Check out our other dashboard that focuses more generally on the";
pub const DEFAULT_PAGE_TITLE: &str = "Ukraine Outage Maps";
pub const DEFAULT_MAPS_TITLE: &str = "Outage maps";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub description: String,
    pub authors: Vec<AuthorEntry>,
    pub authors_prefix: Option<String>,
    pub contact: Option<String>,
    #[serde(rename = "email contact")]
    pub email_contact: Option<String>,
    pub logos: Vec<LogoEntry>,
    pub citation: String,
    pub license: String,
    pub header_link: HeaderLink,
    pub purpose: Section,
    pub about: Section,
    pub key_insights: KeyInsights,
    pub maps: MapsConfig,
}

/// An author is either a bare name or a name with a LinkedIn profile
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AuthorEntry {
    Name(String),
    Profile {
        name: String,
        #[serde(default)]
        linkedin: String,
    },
}

impl AuthorEntry {
    /// `(name, link)` with blanks trimmed; `None` when the name is empty
    pub fn normalized(&self) -> Option<(String, String)> {
        let (name, link) = match self {
            AuthorEntry::Name(name) => (name.trim(), ""),
            AuthorEntry::Profile { name, linkedin } => (name.trim(), linkedin.trim()),
        };
        if name.is_empty() {
            None
        } else {
            Some((name.to_string(), link.to_string()))
        }
    }
}

/// A logo is a file path, optionally with a link target
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LogoEntry {
    Path(String),
    Linked {
        file: String,
        #[serde(default)]
        url: String,
    },
}

impl LogoEntry {
    pub fn file(&self) -> &str {
        match self {
            LogoEntry::Path(file) => file.trim(),
            LogoEntry::Linked { file, .. } => file.trim(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            LogoEntry::Path(_) => "",
            LogoEntry::Linked { url, .. } => url.trim(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeaderLink {
    pub prefix: Option<String>,
    pub text: String,
    pub url: String,
}

impl HeaderLink {
    pub fn prefix(&self) -> &str {
        self.prefix
            .as_deref()
            .unwrap_or(DEFAULT_HEADER_LINK_PREFIX)
            .trim()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Section {
    pub heading: Option<String>,
    pub text: String,
}

impl Section {
    pub fn heading_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.heading.as_deref().unwrap_or(fallback)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeyInsights {
    pub enabled: bool,
    pub heading: Option<String>,
    pub bullets: Vec<String>,
}

impl Default for KeyInsights {
    fn default() -> Self {
        Self {
            enabled: true,
            heading: None,
            bullets: Vec::new(),
        }
    }
}

impl KeyInsights {
    pub fn heading(&self) -> &str {
        self.heading.as_deref().unwrap_or("Key insights")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MapsConfig {
    pub combined: CombinedMapConfig,
}

/// Settings for the dual-map page and its embedding in the dashboard
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CombinedMapConfig {
    pub title: Option<String>,
    pub file: String,
    pub page_title: Option<String>,
    pub scheduled_tooltip: Option<String>,
    pub actual_tooltip: Option<String>,
}

impl CombinedMapConfig {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_MAPS_TITLE)
    }

    pub fn page_title(&self) -> &str {
        self.page_title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }

    pub fn scheduled_tooltip(&self) -> &str {
        self.scheduled_tooltip
            .as_deref()
            .unwrap_or(DEFAULT_SCHEDULED_TOOLTIP)
    }

    pub fn actual_tooltip(&self) -> &str {
        self.actual_tooltip.as_deref().unwrap_or(DEFAULT_ACTUAL_TOOLTIP)
    }
}

impl DashboardConfig {
    /// Load a configuration file that must exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ProcessingError::FileNotFound(path.display().to_string()));
        }
        let config = Self::from_source(File::from(path).format(FileFormat::Yaml))?;
        info!("Loaded dashboard configuration from {}", path.display());
        Ok(config)
    }

    /// Load a configuration file, falling back to built-in defaults when it
    /// does not exist. A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            info!(
                "No configuration at {}; using built-in defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Self::from_source(File::from_str(yaml, FileFormat::Yaml))
    }

    fn from_source<S>(source: S) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = Config::builder().add_source(source).build()?;
        Ok(config.try_deserialize()?)
    }

    /// `contact`, falling back to `email contact`
    pub fn contact(&self) -> &str {
        [self.contact.as_deref(), self.email_contact.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|c| !c.is_empty())
            .unwrap_or("")
    }

    pub fn authors_prefix(&self) -> &str {
        self.authors_prefix
            .as_deref()
            .unwrap_or(DEFAULT_AUTHORS_PREFIX)
    }
}
