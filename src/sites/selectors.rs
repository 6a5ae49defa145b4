//! CSS selectors for Amazon and Flipkart search result pages.
//!
//! Both sites rotate their markup (Flipkart's class names are generated), so
//! every selector lives here. When a site stops yielding items, capture a page
//! sample, update the selectors, and refresh the fixtures under `tests/fixtures`.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for Amazon India search results.
pub mod amazon {
    use super::*;

    /// Search result card.
    pub static RESULT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div[data-component-type='s-search-result']").unwrap());

    /// Product title text.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-text-normal").unwrap());

    /// Whole-rupee price.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("span.a-price-whole").unwrap());

    /// Region holding the free-text feature bullets.
    pub static SPECS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.a-section.a-spacing-none").unwrap());

    /// Attribute names looked up inside [`SPECS`], in lookup order.
    pub const SPEC_KEYS: [&str; 5] = ["Display", "RAM", "Storage", "Camera", "Battery"];
}

/// Selectors for Flipkart search results.
pub mod flipkart {
    use super::*;

    /// Search result card.
    pub static RESULT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.tUxRFH").unwrap());

    /// Product title.
    pub static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.KzDlHZ").unwrap());

    /// Selling price.
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("div.Nx9bqj._4b5DiR").unwrap());

    /// Highlights list.
    pub static SPECS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("ul._1xgFaf").unwrap());

    /// Highlight entry.
    pub static SPEC_ENTRY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());
}
