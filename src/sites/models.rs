//! Scraped item and product record models.

use crate::sites::Platform;
use indexmap::IndexMap;

/// Attribute name to attribute value, e.g. `"RAM" -> "8GB"`, in the order found.
pub type Specifications = IndexMap<String, String>;

/// An item as found on a results page, before price handling.
#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    /// Trimmed title text
    pub title: String,
    /// Price text exactly as scraped
    pub price_text: String,
}

/// A priced, banded product ready for the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    platform: Platform,
    title: String,
    price: f64,
    price_band: String,
    specifications: Specifications,
}

impl ProductRecord {
    /// Creates a record from its parts.
    pub fn new(
        platform: Platform,
        title: impl Into<String>,
        price: f64,
        price_band: impl Into<String>,
        specifications: Specifications,
    ) -> Self {
        Self {
            platform,
            title: title.into(),
            price,
            price_band: price_band.into(),
            specifications,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn price_band(&self) -> &str {
        &self.price_band
    }

    pub fn specifications(&self) -> &Specifications {
        &self.specifications
    }
}
