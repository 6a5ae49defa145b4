//! Ordered price-band table and classification.

/// Label assigned to prices outside every declared band.
pub const OTHER_BAND: &str = "Other";

/// A named, inclusive price range.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBand {
    /// Display label, e.g. "Band 1"
    pub label: String,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound (None for open-ended)
    pub max: Option<f64>,
}

impl PriceBand {
    /// Creates a bounded band.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max: Some(max) }
    }

    /// Creates a band with no upper bound.
    pub fn open(label: impl Into<String>, min: f64) -> Self {
        Self { label: label.into(), min, max: None }
    }

    /// Returns true if the price falls inside this band.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

/// Price bands checked in declaration order; first match wins.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<PriceBand>,
}

impl BandTable {
    /// Creates a table from bands in the order they should be checked.
    pub fn new(bands: Vec<PriceBand>) -> Self {
        Self { bands }
    }

    /// Returns the label of the first band containing `price`, or [`OTHER_BAND`].
    pub fn classify(&self, price: f64) -> &str {
        self.bands
            .iter()
            .find(|band| band.contains(price))
            .map(|band| band.label.as_str())
            .unwrap_or(OTHER_BAND)
    }

    /// Lowest price any band accepts. Items below it are not reported.
    pub fn floor(&self) -> f64 {
        self.bands.iter().map(|band| band.min).fold(f64::INFINITY, f64::min)
    }

    /// Band labels in report order: declaration order, then [`OTHER_BAND`].
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(|band| band.label.as_str()).chain(std::iter::once(OTHER_BAND))
    }
}

impl Default for BandTable {
    fn default() -> Self {
        Self::new(vec![
            PriceBand::new("Band 1", 50_000.0, 69_999.0),
            PriceBand::new("Band 2", 70_000.0, 99_999.0),
            PriceBand::open("Band 3", 100_000.0),
        ])
    }
}
