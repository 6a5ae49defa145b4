//! Raw price text to numeric price.

/// Extracts a numeric price from scraped text like `"₹55,000"`.
///
/// Every non-digit character is dropped and the remaining digits are read as
/// a whole number, so decimal separators are not honoured: `"1,234.50"`
/// becomes `123450.0`. Text without digits yields `0.0`, which callers treat
/// as "price unknown".
pub fn normalize_price(text: &str) -> f64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return 0.0;
    }

    digits.parse().unwrap_or(0.0)
}
