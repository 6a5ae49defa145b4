//! Flipkart result cards.

use crate::sites::models::{RawItem, Specifications};
use crate::sites::selectors::flipkart;
use scraper::ElementRef;

/// Reads title and price text from a result card.
///
/// Returns `None` when either node is missing or the title is blank.
pub fn parse_card(card: ElementRef) -> Option<RawItem> {
    let title = card.select(&flipkart::TITLE).next()?;
    let price = card.select(&flipkart::PRICE).next()?;

    let title = title.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        return None;
    }

    Some(RawItem { title, price_text: price.text().collect() })
}

/// Splits the highlights list into `key: value` pairs.
///
/// Each entry may hold several `|`-separated fields; only fields with a colon
/// are kept. Later keys overwrite earlier ones.
pub fn extract_specs(card: ElementRef) -> Specifications {
    let mut specs = Specifications::new();

    let Some(list) = card.select(&flipkart::SPECS).next() else {
        return specs;
    };

    for entry in list.select(&flipkart::SPEC_ENTRY) {
        let text = entry.text().collect::<String>();

        for field in text.split('|') {
            let Some((key, value)) = field.split_once(':') else {
                continue;
            };

            let key = key.trim();
            if !key.is_empty() {
                specs.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    specs
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn card(document: &Html) -> ElementRef<'_> {
        document.select(&flipkart::RESULT).next().unwrap()
    }

    #[test]
    fn test_parse_card_complete() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH">
                <div class="KzDlHZ">Samsung Galaxy S24 (Onyx Black, 256 GB)</div>
                <div class="Nx9bqj _4b5DiR">₹74,999</div>
            </div>"#,
        );

        let item = parse_card(card(&document)).unwrap();
        assert_eq!(item.title, "Samsung Galaxy S24 (Onyx Black, 256 GB)");
        assert_eq!(item.price_text, "₹74,999");
    }

    #[test]
    fn test_parse_card_missing_fields() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH"><div class="KzDlHZ">No price here</div></div>"#,
        );
        assert!(parse_card(card(&document)).is_none());

        let document = Html::parse_document(
            r#"<div class="tUxRFH"><div class="Nx9bqj _4b5DiR">₹74,999</div></div>"#,
        );
        assert!(parse_card(card(&document)).is_none());
    }

    #[test]
    fn test_parse_card_blank_title_is_skipped() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH">
                <div class="KzDlHZ">
                </div>
                <div class="Nx9bqj _4b5DiR">₹74,999</div>
            </div>"#,
        );

        assert!(parse_card(card(&document)).is_none());
    }

    #[test]
    fn test_extract_specs_pipe_fields() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH">
                <ul class="_1xgFaf">
                    <li>RAM: 8 GB | ROM: 256 GB | Expandable Upto 1 TB</li>
                    <li>Display : 15.49 cm (6.1 inch) Full HD+</li>
                    <li>50MP + 12MP | 12MP Front Camera</li>
                </ul>
            </div>"#,
        );

        let specs = extract_specs(card(&document));
        assert_eq!(specs.len(), 3);
        assert_eq!(specs["RAM"], "8 GB");
        assert_eq!(specs["ROM"], "256 GB");
        assert_eq!(specs["Display"], "15.49 cm (6.1 inch) Full HD+");

        let keys: Vec<_> = specs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["RAM", "ROM", "Display"]);
    }

    #[test]
    fn test_extract_specs_splits_on_first_colon() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH">
                <ul class="_1xgFaf"><li>Warranty: 1 Year: Brand</li></ul>
            </div>"#,
        );

        let specs = extract_specs(card(&document));
        assert_eq!(specs["Warranty"], "1 Year: Brand");
    }

    #[test]
    fn test_extract_specs_later_key_wins() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH">
                <ul class="_1xgFaf"><li>RAM: 8 GB | ROM: 128 GB</li><li>RAM: 12 GB</li></ul>
            </div>"#,
        );

        let specs = extract_specs(card(&document));
        assert_eq!(specs["RAM"], "12 GB");

        // An overwritten key keeps its first position
        let keys: Vec<_> = specs.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["RAM", "ROM"]);
    }

    #[test]
    fn test_extract_specs_skips_blank_keys() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH"><ul class="_1xgFaf"><li> : orphan value</li></ul></div>"#,
        );

        assert!(extract_specs(card(&document)).is_empty());
    }

    #[test]
    fn test_extract_specs_missing_list() {
        let document = Html::parse_document(
            r#"<div class="tUxRFH"><div>RAM: 8 GB</div></div>"#,
        );

        assert!(extract_specs(card(&document)).is_empty());
    }
}
