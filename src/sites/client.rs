//! HTTP client for search pages using wreq for TLS fingerprint emulation.

use crate::config::Config;
use crate::error::FetchError;
use crate::sites::Platform;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

/// Trait for fetching search pages - enables mocking for tests.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Fetches the search results page for `term` on `platform`.
    async fn fetch(&self, platform: Platform, term: &str) -> Result<String, FetchError>;
}

/// Search page client with browser impersonation.
pub struct SiteClient {
    client: Client,
    user_agent: String,
    accept_language: String,
    base_url: Option<String>,
}

impl SiteClient {
    /// Creates a new client with the given configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a client that sends every site's requests to `base_url` (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut builder =
            Client::builder().gzip(true).brotli(true).timeout(timeout).connect_timeout(timeout);

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            accept_language: config.accept_language.clone(),
            base_url,
        })
    }

    /// Returns the base URL (custom for testing, or the site's own).
    fn base_url(&self, platform: Platform) -> String {
        self.base_url.clone().unwrap_or_else(|| platform.base_url())
    }
}

#[async_trait]
impl PageFetch for SiteClient {
    async fn fetch(&self, platform: Platform, term: &str) -> Result<String, FetchError> {
        let url =
            platform.search_url_with_base(&self.base_url(platform), &urlencoding::encode(term));

        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .emulation(Emulation::Chrome131)
            .header("User-Agent", self.user_agent.as_str())
            .header("Accept-Language", self.accept_language.as_str())
            .send()
            .await?;

        let status = response.status();
        debug!("{} response status: {}", platform, status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response.text().await.map_err(|e| FetchError::Body(e.to_string()))
    }
}
