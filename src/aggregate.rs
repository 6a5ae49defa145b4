//! Fan-out across sites per term, then grouping by price band.

use crate::error::ExtractIssue;
use crate::pricing::BandTable;
use crate::sites::{PageFetch, Pause, Platform, ProductRecord, SiteExtractor};
use tracing::{debug, info};

/// Records sharing one price band, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct BandGroup {
    pub label: String,
    pub records: Vec<ProductRecord>,
}

/// Non-empty band groups in band-table order, "Other" last.
#[derive(Debug, Clone, PartialEq)]
pub struct BandGroups {
    groups: Vec<BandGroup>,
}

impl BandGroups {
    /// Groups records by band label. Returns `None` when there is nothing to report.
    pub fn from_records(bands: &BandTable, records: Vec<ProductRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut groups: Vec<BandGroup> = bands
            .labels()
            .map(|label| BandGroup { label: label.to_string(), records: Vec::new() })
            .collect();

        for record in records {
            // Labels always come from the same table, so a match exists.
            if let Some(group) = groups.iter_mut().find(|g| g.label == record.price_band()) {
                group.records.push(record);
            }
        }

        groups.retain(|g| !g.records.is_empty());
        Some(Self { groups })
    }

    pub fn groups(&self) -> &[BandGroup] {
        &self.groups
    }

    /// Looks up the group for `label`.
    pub fn get(&self, label: &str) -> Option<&BandGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    /// Total number of records across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

/// A site search that produced nothing, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteIssue {
    pub term: String,
    pub platform: Platform,
    pub issue: ExtractIssue,
}

/// Records gathered across all terms, plus the searches that came back empty.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub records: Vec<ProductRecord>,
    pub issues: Vec<SiteIssue>,
}

/// Runs both site extractors for every term and merges their records.
pub struct Aggregator<'a, F: PageFetch + ?Sized> {
    fetcher: &'a F,
    bands: &'a BandTable,
    pause: Pause,
}

impl<'a, F: PageFetch + ?Sized> Aggregator<'a, F> {
    pub fn new(fetcher: &'a F, bands: &'a BandTable, pause: Pause) -> Self {
        Self { fetcher, bands, pause }
    }

    /// Collects records for all terms in discovery order.
    ///
    /// Terms run one after another. Within a term, Amazon and Flipkart are
    /// fetched concurrently and Amazon's records come first.
    pub async fn collect(&self, terms: &[String]) -> Collection {
        let amazon = SiteExtractor::new(Platform::Amazon, self.fetcher, self.bands, self.pause);
        let flipkart = SiteExtractor::new(Platform::Flipkart, self.fetcher, self.bands, self.pause);

        let mut collection = Collection::default();

        for term in terms {
            info!("Scraping data for {}...", term);

            let (from_amazon, from_flipkart) =
                tokio::join!(amazon.extract(term), flipkart.extract(term));

            for outcome in [from_amazon, from_flipkart] {
                debug!("'{}': {} from {}", term, outcome.records.len(), outcome.platform);

                if let Some(issue) = outcome.diagnostic {
                    collection.issues.push(SiteIssue {
                        term: term.clone(),
                        platform: outcome.platform,
                        issue,
                    });
                }
                collection.records.extend(outcome.records);
            }
        }

        collection
    }

    /// Collects records for all terms and groups them by band.
    pub async fn compare(&self, terms: &[String]) -> Option<BandGroups> {
        let collection = self.collect(terms).await;
        info!("Collected {} products", collection.records.len());

        if !collection.issues.is_empty() {
            let summary: Vec<_> = collection
                .issues
                .iter()
                .map(|i| format!("{} '{}' ({})", i.platform, i.term, i.issue))
                .collect();
            info!(
                "{} of {} site searches returned nothing: {}",
                collection.issues.len(),
                terms.len() * 2,
                summary.join(", ")
            );
        }

        let groups = BandGroups::from_records(self.bands, collection.records)?;
        debug!("Grouped {} products into {} bands", groups.len(), groups.groups().len());
        Some(groups)
    }
}
