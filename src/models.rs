//! Core data models for the catalog query engine.
//!
//! These types represent the catalog records that flow through the
//! filter/sort/aggregate pipeline. Both are constructed once at the parse
//! boundary and immutable thereafter.

use serde::Serialize;

/// A catalog product record.
///
/// `asin` uniquely identifies an item within a catalog snapshot (not
/// enforced). Numeric fields are `f64` so the parser's NaN sentinel for
/// malformed input is representable; see [`crate::parse`] for the policy.
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub asin: String,
    pub brand: String,
    pub title: String,
    pub url: String,
    pub image: String,
    pub rating: f64,
    pub review_url: String,
    pub total_reviews: f64,
    /// Observed price points, possibly empty. Holds only valid parses.
    pub prices: Vec<f64>,
}

/// A single user review, tied to one [`Item`] by `asin`.
///
/// Orphaned reviews (an `asin` with no matching item) are representable and
/// silently ignored by per-item aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub asin: String,
    pub name: String,
    pub rating: f64,
    /// Opaque date string, never parsed into a calendar type.
    pub date: String,
    pub verified: bool,
    pub title: String,
    pub body: String,
    pub helpful_votes: f64,
}

impl Item {
    /// Lowest observed price, or `None` for an item with no prices.
    pub fn min_price(&self) -> Option<f64> {
        self.prices.iter().copied().reduce(f64::min)
    }

    /// Highest observed price, or `None` for an item with no prices.
    pub fn max_price(&self) -> Option<f64> {
        self.prices.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_with_prices(prices: Vec<f64>) -> Item {
        Item {
            asin: "B000TEST".to_string(),
            brand: "Acme".to_string(),
            title: "Test Phone".to_string(),
            url: String::new(),
            image: String::new(),
            rating: 4.0,
            review_url: String::new(),
            total_reviews: 10.0,
            prices,
        }
    }

    #[test]
    fn test_price_range() {
        let item = item_with_prices(vec![19.99, 5.0, 12.5]);
        assert_eq!(item.min_price(), Some(5.0));
        assert_eq!(item.max_price(), Some(19.99));
    }

    #[test]
    fn test_price_range_empty() {
        let item = item_with_prices(Vec::new());
        assert_eq!(item.min_price(), None);
        assert_eq!(item.max_price(), None);
    }
}
