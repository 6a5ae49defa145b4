//! Plain-text price band report.

use crate::aggregate::BandGroups;
use crate::sites::{ProductRecord, Specifications};

/// Printed instead of a report when no product survived extraction.
pub const NO_DATA_MESSAGE: &str = "No data to generate report!";

const PLATFORM_WIDTH: usize = 15;
const TITLE_WIDTH: usize = 50;
const PRICE_WIDTH: usize = 12;
const RULE_WIDTH: usize = 100;

/// Renders grouped records as one table per band.
pub fn format_report(groups: Option<&BandGroups>) -> String {
    let Some(groups) = groups else {
        return NO_DATA_MESSAGE.to_string();
    };

    let mut lines = Vec::new();

    for group in groups.groups() {
        lines.push(String::new());
        lines.push(format!("--- Price Band: {} ---", group.label));
        lines.push(format!(
            "{:<pw$} {:<tw$} {:<cw$} {}",
            "Platform",
            "Title",
            "Price",
            "Specifications",
            pw = PLATFORM_WIDTH,
            tw = TITLE_WIDTH,
            cw = PRICE_WIDTH
        ));
        lines.push("-".repeat(RULE_WIDTH));

        for record in &group.records {
            lines.push(format_row(record));
        }
    }

    lines.push(String::new());
    lines.push("--- End of Report ---".to_string());

    lines.join("\n")
}

fn format_row(record: &ProductRecord) -> String {
    format!(
        "{:<pw$} {:<tw$} {:<cw$} {}",
        record.platform().to_string(),
        fit_title(record.title()),
        format_price(record.price()),
        format_specs(record.specifications()),
        pw = PLATFORM_WIDTH,
        tw = TITLE_WIDTH,
        cw = PRICE_WIDTH
    )
}

/// Formats a rupee amount with comma thousands separators and two decimals.
pub fn format_price(price: f64) -> String {
    let fixed = format!("{:.2}", price);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = whole.trim_start_matches('-');
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if whole.starts_with('-') { "-" } else { "" };
    format!("{}₹{}.{}", sign, grouped, cents)
}

/// Shortens titles longer than the column to fit, ending in "...".
pub fn fit_title(title: &str) -> String {
    if title.chars().count() > TITLE_WIDTH {
        let kept: String = title.chars().take(TITLE_WIDTH - 3).collect();
        format!("{}...", kept)
    } else {
        title.to_string()
    }
}

/// Joins attributes as `key: value` pairs, or "N/A" when there are none.
pub fn format_specs(specs: &Specifications) -> String {
    if specs.is_empty() {
        return "N/A".to_string();
    }

    specs.iter().map(|(key, value)| format!("{}: {}", key, value)).collect::<Vec<_>>().join(", ")
}
