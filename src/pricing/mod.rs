//! Price normalization and price-band classification.

pub mod bands;
pub mod normalize;

pub use bands::{BandTable, PriceBand, OTHER_BAND};
pub use normalize::normalize_price;
