//! Catalogue crawl configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{Result, ScrapeError};

/// Placeholder substituted with the page index in `listing_url_template`
pub const PAGE_PLACEHOLDER: &str = "{page}";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogueConfig {
    /// Listing page URL containing `{page}`
    pub listing_url_template: String,
    /// Prefix joined with the relative links found on listing pages
    pub item_url_prefix: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Where `scrape_books(.., save = true)` writes its dump
    pub output_path: PathBuf,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            listing_url_template: "https://books.toscrape.com/catalogue/page-{page}.html".to_string(),
            item_url_prefix: "http://books.toscrape.com/catalogue/".to_string(),
            timeout_secs: 10,
            user_agent: concat!("books_scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            output_path: PathBuf::from("artifacts/books_data.txt"),
        }
    }
}

impl CatalogueConfig {
    /// Config for a catalogue mirrored under `base_url`, e.g. a local test server.
    /// Listing pages live at `{base}/catalogue/page-N.html`, items under `{base}/catalogue/`.
    pub fn for_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            listing_url_template: format!("{}/catalogue/page-{{page}}.html", base),
            item_url_prefix: format!("{}/catalogue/", base),
            ..Default::default()
        }
    }

    /// Load from a JSON file; missing keys fall back to the defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.listing_url_template.contains(PAGE_PLACEHOLDER) {
            return Err(ScrapeError::Config(format!(
                "listing_url_template must contain {}: {}",
                PAGE_PLACEHOLDER, self.listing_url_template
            )));
        }

        url::Url::parse(&self.listing_url(1)).map_err(|e| {
            ScrapeError::Config(format!("listing_url_template is not a URL: {}", e))
        })?;
        url::Url::parse(&self.item_url_prefix)
            .map_err(|e| ScrapeError::Config(format!("item_url_prefix is not a URL: {}", e)))?;

        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config("timeout_secs must be positive".to_string()));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn listing_url(&self, page: u32) -> String {
        self.listing_url_template
            .replace(PAGE_PLACEHOLDER, &page.to_string())
    }

    /// Plain concatenation, the listing hrefs are relative to the catalogue root
    pub fn item_url(&self, relative: &str) -> String {
        format!("{}{}", self.item_url_prefix, relative)
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }
}
