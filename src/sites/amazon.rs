//! Amazon India result cards.

use crate::sites::models::{RawItem, Specifications};
use crate::sites::selectors::amazon;
use scraper::ElementRef;

/// Reads title and price text from a result card.
///
/// Returns `None` when either node is missing or the title is blank.
pub fn parse_card(card: ElementRef) -> Option<RawItem> {
    let title = card.select(&amazon::TITLE).next()?;
    let price = card.select(&amazon::PRICE).next()?;

    let title = title.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        return None;
    }

    Some(RawItem { title, price_text: price.text().collect() })
}

/// Looks up the known attribute names in the card's feature text.
///
/// For each name, the first text fragment mentioning it is kept. A fragment
/// labelled with the name (`"RAM: 8GB"`) is reduced to its value.
pub fn extract_specs(card: ElementRef) -> Specifications {
    let mut specs = Specifications::new();

    let Some(region) = card.select(&amazon::SPECS).next() else {
        return specs;
    };

    for key in amazon::SPEC_KEYS {
        if let Some(fragment) = region.text().find(|text| text.contains(key)) {
            specs.insert(key.to_string(), spec_value(key, fragment));
        }
    }

    specs
}

fn spec_value(key: &str, fragment: &str) -> String {
    let fragment = fragment.trim();

    fragment
        .strip_prefix(key)
        .and_then(|rest| rest.trim_start().strip_prefix(':'))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(fragment)
        .to_string()
}
