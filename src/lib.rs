//! price-compare - smartphone price comparison across Amazon India and Flipkart
//!
//! Fetches search result pages with TLS fingerprint emulation, extracts prices
//! and key specifications, and prints the results grouped by price band.

pub mod aggregate;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod pricing;
pub mod sites;

pub use aggregate::{Aggregator, BandGroup, BandGroups, Collection, SiteIssue};
pub use config::Config;
pub use error::{ExtractIssue, FetchError};
pub use pricing::{normalize_price, BandTable, PriceBand, OTHER_BAND};
pub use sites::{Platform, ProductRecord};
