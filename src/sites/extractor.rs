//! Per-site extraction: fetch, parse, pause.

use crate::error::ExtractIssue;
use crate::pricing::BandTable;
use crate::sites::client::PageFetch;
use crate::sites::models::ProductRecord;
use crate::sites::parser::Parser;
use crate::sites::Platform;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Randomized pause taken after each page, to avoid a burst signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pause {
    min_ms: u64,
    max_ms: u64,
}

impl Pause {
    /// Creates a pause drawn uniformly from `min_ms..=max_ms`. Bounds are reordered if swapped.
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms: min_ms.min(max_ms), max_ms: min_ms.max(max_ms) }
    }

    /// A pause that returns immediately.
    pub fn none() -> Self {
        Self::new(0, 0)
    }

    /// Picks a duration within the range.
    pub fn sample(&self) -> Duration {
        if self.max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::rng().random_range(self.min_ms..=self.max_ms))
    }

    /// Sleeps for a sampled duration.
    pub async fn wait(&self) {
        let delay = self.sample();
        if delay.is_zero() {
            return;
        }

        debug!("Delaying {}ms", delay.as_millis());
        tokio::time::sleep(delay).await;
    }
}

/// What one site produced for one search term.
#[derive(Debug, Clone)]
pub struct ExtractOutcome {
    pub platform: Platform,
    /// Records in page order; empty on failure
    pub records: Vec<ProductRecord>,
    /// Why fewer records than expected came back, if known
    pub diagnostic: Option<ExtractIssue>,
}

impl ExtractOutcome {
    fn failed(platform: Platform, issue: ExtractIssue) -> Self {
        Self { platform, records: Vec::new(), diagnostic: Some(issue) }
    }
}

/// Extracts banded records for one site. Never fails; problems become diagnostics.
pub struct SiteExtractor<'a, F: PageFetch + ?Sized> {
    platform: Platform,
    fetcher: &'a F,
    bands: &'a BandTable,
    pause: Pause,
}

impl<'a, F: PageFetch + ?Sized> SiteExtractor<'a, F> {
    /// Creates an extractor for `platform`.
    pub fn new(platform: Platform, fetcher: &'a F, bands: &'a BandTable, pause: Pause) -> Self {
        Self { platform, fetcher, bands, pause }
    }

    /// Fetches and parses the search page for `term`.
    pub async fn extract(&self, term: &str) -> ExtractOutcome {
        let html = match self.fetcher.fetch(self.platform, term).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error scraping {} for '{}': {}", self.platform, term, e);
                return ExtractOutcome::failed(self.platform, e.into());
            }
        };

        let page = Parser::new(self.platform, self.bands).parse_search(&html);

        let diagnostic = if page.candidates == 0 {
            warn!("No products found on {} page for '{}'", self.platform, term);
            Some(ExtractIssue::NoListings)
        } else {
            None
        };

        self.pause.wait().await;

        ExtractOutcome { platform: self.platform, records: page.records, diagnostic }
    }
}
