//! Listing sort: key-specific comparators plus the sort-state reducer.
//!
//! Ordering rules:
//!
//! - `title`: case-insensitive lexicographic.
//! - `rating` / `totalReviews`: numeric; NaN is unordered, so an item with
//!   a NaN value holds an implementation-defined position (the sort is
//!   stable, so it keeps its relative slot against "equal" neighbors).
//! - `prices`: asymmetric by design. Ascending ranks by each item's
//!   minimum price (no prices ⇒ +∞, sorting last); descending ranks by
//!   maximum price (no prices ⇒ 0, again sorting last). The two orders
//!   are not mirrors of each other.
//!
//! For every other key, descending is the ascending comparator reversed, so
//! the two directions are exact mirrors except at ties and NaN boundaries.
//!
//! The engine is stateless: callers pass a [`SortSpec`] on every call and
//! own their UI state via [`reduce_sort`].

use anyhow::{bail, Result};
use std::cmp::Ordering;

use crate::models::Item;

/// The sortable listing columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Rating,
    TotalReviews,
    Prices,
}

/// The (key, direction) pair determining result ordering. Transient; owned
/// and mutated by the presentation layer, consumed by [`sort_items`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub ascending: bool,
}

/// A user interaction with the sort controls.
#[derive(Debug, Clone, Copy)]
pub enum SortAction {
    /// A sort column was selected.
    Select(SortKey),
    /// The reset control was used; return to input order.
    Reset,
}

impl SortKey {
    /// Parse a sort key name.
    pub fn parse(name: &str) -> Result<SortKey> {
        match name {
            "title" => Ok(SortKey::Title),
            "rating" => Ok(SortKey::Rating),
            "totalReviews" | "reviews" => Ok(SortKey::TotalReviews),
            "prices" | "price" => Ok(SortKey::Prices),
            _ => bail!(
                "Unknown sort key: {}. Use title, rating, reviews, or price.",
                name
            ),
        }
    }
}

/// Return the items ordered per `spec`. The sort is stable.
pub fn sort_items(mut items: Vec<Item>, spec: &SortSpec) -> Vec<Item> {
    match spec.key {
        SortKey::Title => items.sort_by(|a, b| {
            directed(
                a.title.to_lowercase().cmp(&b.title.to_lowercase()),
                spec.ascending,
            )
        }),
        SortKey::Rating => {
            items.sort_by(|a, b| directed(cmp_numeric(a.rating, b.rating), spec.ascending))
        }
        SortKey::TotalReviews => items.sort_by(|a, b| {
            directed(cmp_numeric(a.total_reviews, b.total_reviews), spec.ascending)
        }),
        SortKey::Prices => {
            if spec.ascending {
                // Rank by cheapest price point; priceless items sort last.
                items.sort_by(|a, b| {
                    cmp_numeric(
                        a.min_price().unwrap_or(f64::INFINITY),
                        b.min_price().unwrap_or(f64::INFINITY),
                    )
                });
            } else {
                // Rank by most expensive price point, highest first;
                // priceless items sort last here too.
                items.sort_by(|a, b| {
                    cmp_numeric(
                        b.max_price().unwrap_or(0.0),
                        a.max_price().unwrap_or(0.0),
                    )
                });
            }
        }
    }
    items
}

/// Fold a sort-control interaction into the current sort state.
///
/// Selecting a new key sorts it ascending; selecting the key already in
/// effect flips the direction; reset clears the sort entirely. Callers
/// hold the current state and feed it back in; the engine keeps none.
pub fn reduce_sort(current: Option<SortSpec>, action: SortAction) -> Option<SortSpec> {
    match action {
        SortAction::Reset => None,
        SortAction::Select(key) => match current {
            Some(spec) if spec.key == key => Some(SortSpec {
                key,
                ascending: !spec.ascending,
            }),
            _ => Some(SortSpec {
                key,
                ascending: true,
            }),
        },
    }
}

/// NaN compares as unordered; we map that to `Equal` so the stable sort
/// leaves the affected item where its neighbors allow.
fn cmp_numeric(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn directed(ord: Ordering, ascending: bool) -> Ordering {
    if ascending {
        ord
    } else {
        ord.reverse()
    }
}
