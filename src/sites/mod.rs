//! Site-specific fetching and parsing of search result pages.

pub mod amazon;
pub mod client;
pub mod extractor;
pub mod flipkart;
pub mod models;
pub mod parser;
pub mod platform;
pub mod selectors;

pub use client::{PageFetch, SiteClient};
pub use extractor::{ExtractOutcome, Pause, SiteExtractor};
pub use models::{ProductRecord, RawItem, Specifications};
pub use parser::Parser;
pub use platform::Platform;
