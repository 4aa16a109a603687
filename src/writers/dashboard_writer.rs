use crate::config::{DashboardConfig, LogoEntry};
use crate::error::Result;
use crate::readers::open_required;
use crate::utils::constants::LOGOS_DIR;
use crate::writers::html::{escape_html, fill_template};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Fills the dashboard HTML template from the YAML configuration.
///
/// Free-text fields (description, purpose, about, citation, licence,
/// insight bullets) are authored HTML and inserted as-is; names and URLs
/// placed into attributes are escaped.
pub struct DashboardWriter {
    config: DashboardConfig,
}

impl DashboardWriter {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Render the template with `logos` already pointing at published paths.
    pub fn render(&self, template: &str, logos: &[LogoEntry]) -> String {
        let config = &self.config;
        let authors = self.authors_html();
        let logos_html = logos_html(logos);
        let insights_list = insights_list_html(&config.key_insights.bullets);
        let insights_section = if config.key_insights.enabled {
            insights_section_html(config.key_insights.heading(), &insights_list)
        } else {
            String::new()
        };
        let header_link = self.header_link_html();

        fill_template(
            template,
            &[
                ("TITLE", &config.title),
                ("DESCRIPTION", &config.description),
                ("AUTHORS", &authors),
                ("CONTACT", config.contact()),
                ("LOGOS", &logos_html),
                ("INSIGHTS_TITLE", config.key_insights.heading()),
                ("INSIGHTS_LIST", &insights_list),
                ("INSIGHTS_SECTION", &insights_section),
                ("PURPOSE_TITLE", config.purpose.heading_or("Purpose")),
                ("PURPOSE_TEXT", &config.purpose.text),
                ("ABOUT_TITLE", config.about.heading_or("About the project")),
                ("ABOUT_TEXT", &config.about.text),
                ("CITATION_TEXT", &config.citation),
                ("LICENSE_TEXT", &config.license),
                ("HEADER_LINK", &header_link),
                ("MAPS_TITLE", config.maps.combined.title()),
                ("MAPS_FILE", &config.maps.combined.file),
            ],
        )
    }

    /// Read the template, publish logos next to the output and write the page.
    pub fn write(&self, template_path: &Path, out_path: &Path) -> Result<()> {
        let mut template = String::new();
        open_required(template_path)?.read_to_string(&mut template)?;

        let out_dir = out_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&out_dir)?;

        let logos = self.publish_logos(&out_dir)?;
        let html = self.render(&template, &logos);

        std::fs::write(out_path, html)?;
        info!("Wrote dashboard to {}", out_path.display());
        Ok(())
    }

    /// Copy logo files into `<out_dir>/logos` and return entries pointing at
    /// the copies. Missing sources are reported and still referenced.
    pub fn publish_logos(&self, out_dir: &Path) -> Result<Vec<LogoEntry>> {
        let logos_dir = out_dir.join(LOGOS_DIR);
        std::fs::create_dir_all(&logos_dir)?;

        let mut published = Vec::with_capacity(self.config.logos.len());
        for entry in &self.config.logos {
            let source = Path::new(entry.file());
            let Some(file_name) = source.file_name() else {
                debug!("Skipping logo entry without a file name");
                continue;
            };

            if source.is_file() {
                std::fs::copy(source, logos_dir.join(file_name))?;
            } else {
                warn!("Logo {} not found; page will reference a missing image", source.display());
            }

            let file = format!("{}/{}", LOGOS_DIR, file_name.to_string_lossy());
            published.push(match entry {
                LogoEntry::Path(_) => LogoEntry::Path(file),
                LogoEntry::Linked { .. } => LogoEntry::Linked {
                    file,
                    url: entry.url().to_string(),
                },
            });
        }

        Ok(published)
    }

    fn authors_html(&self) -> String {
        let names = self
            .config
            .authors
            .iter()
            .filter_map(|a| a.normalized())
            .map(|(name, link)| {
                if link.is_empty() {
                    escape_html(&name)
                } else {
                    format!(
                        r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                        escape_html(&link),
                        escape_html(&name)
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(" &amp; ");

        format!("{} {}", self.config.authors_prefix(), names)
    }

    fn header_link_html(&self) -> String {
        let link = &self.config.header_link;
        let text = link.text.trim();
        let url = link.url.trim();
        if text.is_empty() || url.is_empty() {
            return String::new();
        }
        format!(
            r#"{} <a href="{}" target="_blank" rel="noopener">{}</a>."#,
            link.prefix(),
            escape_html(url),
            escape_html(text)
        )
    }
}

fn logos_html(logos: &[LogoEntry]) -> String {
    logos
        .iter()
        .filter(|logo| !logo.file().is_empty())
        .map(|logo| {
            let img = format!(r#"<img src="{}" alt="Logo">"#, escape_html(logo.file()));
            if logo.url().is_empty() {
                img
            } else {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                    escape_html(logo.url()),
                    img
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn insights_list_html(bullets: &[String]) -> String {
    bullets
        .iter()
        .map(|item| format!("<li>{}</li>", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn insights_section_html(heading: &str, list: &str) -> String {
    format!(
        concat!(
            r#"<section class="summary collapsible">"#,
            r#"<button class="collapsible-toggle" type="button" aria-expanded="false">"#,
            r#"<span class="arrow">&#x25B8;</span>"#,
            "<span>{}</span>",
            "</button>",
            r#"<div class="collapsible-content">"#,
            "<ul>{}</ul>",
            "</div>",
            "</section>"
        ),
        heading, list
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthorEntry;

    fn config() -> DashboardConfig {
        DashboardConfig {
            title: "Outage Monitor".to_string(),
            authors: vec![
                AuthorEntry::Name("Jane Doe".to_string()),
                AuthorEntry::Profile {
                    name: "John Roe".to_string(),
                    linkedin: "https://linkedin.example/jr".to_string(),
                },
                AuthorEntry::Name("  ".to_string()),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_render_placeholders() {
        let writer = DashboardWriter::new(config());
        let html = writer.render("<title>{{TITLE}}</title><p>{{AUTHORS}}</p>{{HEADER_LINK}}", &[]);

        assert!(html.starts_with("<title>Outage Monitor</title>"));
        assert!(html.contains(
            r#"Jane Doe &amp; <a href="https://linkedin.example/jr" target="_blank" rel="noopener">John Roe</a>"#
        ));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn test_header_link_needs_text_and_url() {
        let mut cfg = config();
        cfg.header_link.text = "energy dashboard".to_string();
        assert_eq!(DashboardWriter::new(cfg.clone()).header_link_html(), "");

        cfg.header_link.url = "https://example.org".to_string();
        let html = DashboardWriter::new(cfg).header_link_html();
        assert!(html.starts_with("Check out our other dashboard"));
        assert!(html.ends_with(r#"">energy dashboard</a>."#));
    }

    #[test]
    fn test_insights_section_toggle() {
        let mut cfg = config();
        cfg.key_insights.bullets = vec!["Evenings are worst".to_string()];
        let html = DashboardWriter::new(cfg.clone()).render("{{INSIGHTS_SECTION}}", &[]);
        assert!(html.contains("<li>Evenings are worst</li>"));
        assert!(html.contains("<span>Key insights</span>"));

        cfg.key_insights.enabled = false;
        let html = DashboardWriter::new(cfg).render("{{INSIGHTS_SECTION}}", &[]);
        assert_eq!(html, "");
    }

    #[test]
    fn test_logos_html() {
        let html = logos_html(&[
            LogoEntry::Path("logos/a.png".to_string()),
            LogoEntry::Linked {
                file: "logos/b.png".to_string(),
                url: "https://example.org".to_string(),
            },
        ]);
        let lines: Vec<&str> = html.lines().collect();
        assert_eq!(lines[0], r#"<img src="logos/a.png" alt="Logo">"#);
        assert_eq!(
            lines[1],
            r#"<a href="https://example.org" target="_blank" rel="noopener"><img src="logos/b.png" alt="Logo"></a>"#
        );
    }

    #[test]
    fn test_publish_logos_copies_existing_files() -> Result<()> {
        let src_dir = tempfile::tempdir()?;
        let out_dir = tempfile::tempdir()?;
        let logo = src_dir.path().join("gdu.png");
        std::fs::write(&logo, b"png")?;

        let cfg = DashboardConfig {
            logos: vec![
                LogoEntry::Linked {
                    file: logo.to_string_lossy().to_string(),
                    url: "https://example.org".to_string(),
                },
                LogoEntry::Path("missing/other.png".to_string()),
            ],
            ..Default::default()
        };

        let published = DashboardWriter::new(cfg).publish_logos(out_dir.path())?;

        assert_eq!(published.len(), 2);
        assert_eq!(published[0].file(), "logos/gdu.png");
        assert_eq!(published[0].url(), "https://example.org");
        assert_eq!(published[1].file(), "logos/other.png");
        assert!(out_dir.path().join("logos").join("gdu.png").exists());
        assert!(!out_dir.path().join("logos").join("other.png").exists());

        Ok(())
    }
}
