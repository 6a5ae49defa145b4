//! Price comparison command implementation.

use crate::aggregate::Aggregator;
use crate::config::Config;
use crate::format::format_report;
use crate::pricing::BandTable;
use crate::sites::{PageFetch, SiteClient};
use anyhow::{Context, Result};
use tracing::info;

/// Search terms used when none are given.
pub const DEFAULT_TERMS: [&str; 4] = ["iPhone 15", "iPhone 14", "Samsung S24", "Samsung S23"];

/// Compares prices for a list of search terms across both sites.
pub struct CompareCommand {
    config: Config,
    bands: BandTable,
}

impl CompareCommand {
    /// Creates a new compare command with the default price bands.
    pub fn new(config: Config) -> Self {
        Self { config, bands: BandTable::default() }
    }

    /// Fetches, groups, and renders the report.
    pub async fn execute(&self, terms: &[String]) -> Result<String> {
        let client = SiteClient::new(&self.config).context("Failed to create HTTP client")?;

        Ok(self.execute_with_client(&client, terms).await)
    }

    /// Executes the comparison with a provided client (for testing).
    pub async fn execute_with_client(&self, client: &impl PageFetch, terms: &[String]) -> String {
        info!("Comparing {} search terms", terms.len());

        let aggregator = Aggregator::new(client, &self.bands, self.config.pause());
        let groups = aggregator.compare(terms).await;

        format_report(groups.as_ref())
    }
}
