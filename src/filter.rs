//! Conjunctive listing filter: keyword, brand, and price-range predicates.
//!
//! [`filter_items`] is pure: the output is a subset of the input with order
//! preserved, and every predicate must pass for an item to survive. Absent
//! criteria disable their predicate, as does a NaN price bound (a caller
//! that parsed a bound from user input under the NaN-sentinel policy gets
//! "no filter", not an empty listing).

use crate::models::Item;

/// The transient predicate set applied to narrow a catalog listing.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Whitespace-separated terms; every term must appear (case-insensitive)
    /// in the item title. Empty or blank means no keyword filter.
    pub keywords: Option<String>,
    /// Exact, case-sensitive brand match. Empty means no brand filter.
    pub brand: Option<String>,
    /// Item matches iff its highest price is >= this bound.
    pub min_price: Option<f64>,
    /// Item matches iff its lowest price is <= this bound.
    pub max_price: Option<f64>,
}

/// Apply the criteria conjunctively; returns the surviving items in order.
pub fn filter_items(items: &[Item], criteria: &FilterCriteria) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches(item, criteria))
        .cloned()
        .collect()
}

fn matches(item: &Item, criteria: &FilterCriteria) -> bool {
    if let Some(keywords) = criteria.keywords.as_deref() {
        if !matches_keywords(&item.title, keywords) {
            return false;
        }
    }

    if let Some(brand) = criteria.brand.as_deref() {
        if !brand.is_empty() && item.brand != brand {
            return false;
        }
    }

    // Items with no prices never match a supplied price bound. The min
    // bound compares against the item's highest price, the max bound
    // against its lowest, so an item matches if any price point falls
    // inside the range.
    if let Some(min) = valid_bound(criteria.min_price) {
        match item.max_price() {
            Some(highest) if highest >= min => {}
            _ => return false,
        }
    }

    if let Some(max) = valid_bound(criteria.max_price) {
        match item.min_price() {
            Some(lowest) if lowest <= max => {}
            _ => return false,
        }
    }

    true
}

/// True iff every whitespace-separated term is a case-insensitive substring
/// of the title. An empty query has no terms and matches everything.
fn matches_keywords(title: &str, query: &str) -> bool {
    let title = title.to_lowercase();
    query
        .split_whitespace()
        .all(|term| title.contains(&term.to_lowercase()))
}

/// A NaN bound is not a valid number and disables its predicate.
fn valid_bound(bound: Option<f64>) -> Option<f64> {
    bound.filter(|b| !b.is_nan())
}
