//! Page fetching
//!
//! `PageSource` is the seam between the crawl loops and the network. The
//! blocking reqwest implementation is used for real crawls; tests drive the
//! same loops from in-memory pages.

use reqwest::blocking::Client;
use tracing::debug;

use crate::{CatalogueConfig, Result, ScrapeError};

/// Something that can turn a URL into an HTML body
pub trait PageSource {
    /// Fetch `url` and return its body as text.
    ///
    /// Non-2xx responses are `ScrapeError::Status`, so callers can tell a
    /// 404 apart from transport failures.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher, one client reused for the whole crawl
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &CatalogueConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // The catalogue is UTF-8 regardless of what the headers claim
        let bytes = response.bytes()?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
