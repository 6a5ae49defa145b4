//! Search page parsing shared by both sites.

use crate::pricing::{normalize_price, BandTable};
use crate::sites::models::{ProductRecord, RawItem, Specifications};
use crate::sites::selectors;
use crate::sites::{amazon, flipkart, Platform};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Result of parsing one search page.
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Result cards found on the page, kept or not
    pub candidates: usize,
    /// Records that passed the price floor, in page order
    pub records: Vec<ProductRecord>,
}

/// Parser for one site's search result pages.
pub struct Parser<'a> {
    platform: Platform,
    bands: &'a BandTable,
}

impl<'a> Parser<'a> {
    /// Creates a parser that bands prices with `bands`.
    pub fn new(platform: Platform, bands: &'a BandTable) -> Self {
        Self { platform, bands }
    }

    /// Parses a search results page into priced, banded records.
    ///
    /// Cards lacking a title or price are skipped, as are cards priced below
    /// the band table's floor. A bad card never aborts the page.
    pub fn parse_search(&self, html: &str) -> ParsedPage {
        let document = Html::parse_document(html);
        let floor = self.bands.floor();
        let mut page = ParsedPage::default();

        for card in document.select(self.result_selector()) {
            page.candidates += 1;

            let Some(item) = self.parse_card(card) else {
                trace!("Skipping {} card without title or price", self.platform);
                continue;
            };

            let price = normalize_price(&item.price_text);
            if price < floor {
                trace!("Skipping '{}' priced {} (below {})", item.title, price, floor);
                continue;
            }

            let band = self.bands.classify(price);
            let specs = self.extract_specs(card);
            page.records.push(ProductRecord::new(self.platform, item.title, price, band, specs));
        }

        debug!(
            "Parsed {} records from {} {} cards",
            page.records.len(),
            page.candidates,
            self.platform
        );

        page
    }

    fn result_selector(&self) -> &'static Selector {
        match self.platform {
            Platform::Amazon => &*selectors::amazon::RESULT,
            Platform::Flipkart => &*selectors::flipkart::RESULT,
        }
    }

    fn parse_card(&self, card: ElementRef) -> Option<RawItem> {
        match self.platform {
            Platform::Amazon => amazon::parse_card(card),
            Platform::Flipkart => flipkart::parse_card(card),
        }
    }

    fn extract_specs(&self, card: ElementRef) -> Specifications {
        match self.platform {
            Platform::Amazon => amazon::extract_specs(card),
            Platform::Flipkart => flipkart::extract_specs(card),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::OTHER_BAND;
    use crate::pricing::PriceBand;

    fn amazon_card(title: Option<&str>, price: Option<&str>, specs: &str) -> String {
        let title = title
            .map(|t| format!(r#"<h2><span class="a-size-medium a-text-normal">{}</span></h2>"#, t))
            .unwrap_or_default();
        let price =
            price.map(|p| format!(r#"<span class="a-price-whole">{}</span>"#, p)).unwrap_or_default();

        format!(
            r#"<div data-component-type="s-search-result">{}{}<div class="a-section a-spacing-none">{}</div></div>"#,
            title, price, specs
        )
    }

    fn page(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.concat())
    }

    #[test]
    fn test_parse_search_records() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Amazon, &bands);
        let html = page(&[
            amazon_card(Some("Phone X"), Some("₹55,000"), "<span>RAM: 8GB</span>"),
            amazon_card(Some("Phone Pro"), Some("1,34,900"), ""),
        ]);

        let parsed = parser.parse_search(&html);
        assert_eq!(parsed.candidates, 2);
        assert_eq!(parsed.records.len(), 2);

        let first = &parsed.records[0];
        assert_eq!(first.platform(), Platform::Amazon);
        assert_eq!(first.title(), "Phone X");
        assert_eq!(first.price(), 55_000.0);
        assert_eq!(first.price_band(), "Band 1");
        assert_eq!(first.specifications().get("RAM").map(String::as_str), Some("8GB"));

        let second = &parsed.records[1];
        assert_eq!(second.price(), 134_900.0);
        assert_eq!(second.price_band(), "Band 3");
        assert!(second.specifications().is_empty());
    }

    #[test]
    fn test_parse_search_price_floor() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Amazon, &bands);
        let html = page(&[
            amazon_card(Some("Budget"), Some("49,999"), ""),
            amazon_card(Some("Unpriced"), Some("Currently unavailable"), ""),
            amazon_card(Some("Edge"), Some("50,000"), ""),
        ]);

        let parsed = parser.parse_search(&html);
        assert_eq!(parsed.candidates, 3);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].title(), "Edge");
        assert!(parsed.records.iter().all(|r| r.price_band() != OTHER_BAND));
    }

    #[test]
    fn test_parse_search_missing_title_keeps_siblings() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Amazon, &bands);
        let html = page(&[
            amazon_card(Some("Before"), Some("60,000"), ""),
            amazon_card(None, Some("75,000"), ""),
            amazon_card(Some("After"), Some("80,000"), ""),
        ]);

        let parsed = parser.parse_search(&html);
        let titles: Vec<_> = parsed.records.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Before", "After"]);
    }

    #[test]
    fn test_parse_search_blank_title_keeps_siblings() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Amazon, &bands);
        let html = page(&[
            amazon_card(Some("  "), Some("60,000"), ""),
            amazon_card(Some("Good"), Some("60,000"), ""),
        ]);

        let parsed = parser.parse_search(&html);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].title(), "Good");
    }

    #[test]
    fn test_parse_search_other_band() {
        let bands = BandTable::new(vec![
            PriceBand::new("Band 1", 50_000.0, 69_999.0),
            PriceBand::open("Band 3", 100_000.0),
        ]);
        let parser = Parser::new(Platform::Amazon, &bands);
        let html = page(&[amazon_card(Some("Mid"), Some("85,000"), "")]);

        let parsed = parser.parse_search(&html);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].price_band(), OTHER_BAND);
    }

    #[test]
    fn test_parse_search_flipkart() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Flipkart, &bands);
        let html = r#"<html><body>
            <div class="tUxRFH">
                <div class="KzDlHZ">Apple iPhone 15 (Black, 128 GB)</div>
                <div class="Nx9bqj _4b5DiR">₹69,999</div>
                <ul class="_1xgFaf"><li>128 GB ROM</li><li>Display: 15.49 cm (6.1 inch)</li></ul>
            </div>
            <div class="tUxRFH">
                <div class="KzDlHZ">Cheap Case</div>
                <div class="Nx9bqj _4b5DiR">₹299</div>
            </div>
        </body></html>"#;

        let parsed = parser.parse_search(html);
        assert_eq!(parsed.candidates, 2);
        assert_eq!(parsed.records.len(), 1);

        let record = &parsed.records[0];
        assert_eq!(record.platform(), Platform::Flipkart);
        assert_eq!(record.price(), 69_999.0);
        assert_eq!(record.price_band(), "Band 1");
        assert_eq!(
            record.specifications().get("Display").map(String::as_str),
            Some("15.49 cm (6.1 inch)")
        );
    }

    #[test]
    fn test_parse_search_wrong_site_markup() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Flipkart, &bands);
        let html = page(&[amazon_card(Some("Phone X"), Some("55,000"), "")]);

        let parsed = parser.parse_search(&html);
        assert_eq!(parsed.candidates, 0);
        assert!(parsed.records.is_empty());
    }

    #[test]
    fn test_parse_search_garbage() {
        let bands = BandTable::default();
        let parser = Parser::new(Platform::Amazon, &bands);

        let parsed = parser.parse_search("not <html at all");
        assert_eq!(parsed.candidates, 0);
        assert!(parsed.records.is_empty());
    }
}
