//! Record parser: ordered string fields per row → typed records.
//!
//! The parser has no error channel, by policy: malformed numeric fields
//! degrade to the `f64::NAN` sentinel and rows are never rejected, so a
//! damaged catalog file still produces a browsable listing. Downstream
//! consumers see IEEE-754 "unordered" semantics for NaN: affected items
//! fail every price-range comparison and hold an implementation-defined
//! position under numeric sorts. This is the documented contract, not an
//! accident; [`parse_num`] is the single place the policy lives.
//!
//! Rows are already split into fields, with the header row excluded.
//! Missing trailing fields read as empty strings, which degrade like any
//! other malformed field.

use crate::models::{Item, Review};

/// Item row schema (9 ordered fields): asin, brand, title, detail-page URL,
/// image URL, rating, review-page URL, total review count, price list.
pub fn parse_item(fields: &[String]) -> Item {
    Item {
        asin: field(fields, 0).to_string(),
        brand: field(fields, 1).to_string(),
        title: field(fields, 2).to_string(),
        url: field(fields, 3).to_string(),
        image: field(fields, 4).to_string(),
        rating: parse_num(field(fields, 5)),
        review_url: field(fields, 6).to_string(),
        total_reviews: parse_num(field(fields, 7)),
        prices: parse_prices(field(fields, 8)),
    }
}

/// Review row schema (8 ordered fields): asin, reviewer name, star rating,
/// date, verified flag, title, body, helpful-vote count.
///
/// The verified flag is true iff the raw field is exactly `"TRUE"`,
/// case-sensitive, as the source data encodes it.
pub fn parse_review(fields: &[String]) -> Review {
    Review {
        asin: field(fields, 0).to_string(),
        name: field(fields, 1).to_string(),
        rating: parse_num(field(fields, 2)),
        date: field(fields, 3).to_string(),
        verified: field(fields, 4) == "TRUE",
        title: field(fields, 5).to_string(),
        body: field(fields, 6).to_string(),
        helpful_votes: parse_num(field(fields, 7)),
    }
}

/// Parse every row into an [`Item`]. Never fails; see the module policy.
pub fn parse_items(rows: &[Vec<String>]) -> Vec<Item> {
    rows.iter().map(|row| parse_item(row)).collect()
}

/// Parse every row into a [`Review`]. Never fails; see the module policy.
pub fn parse_reviews(rows: &[Vec<String>]) -> Vec<Review> {
    rows.iter().map(|row| parse_review(row)).collect()
}

/// Positional field access; missing trailing fields read as empty.
fn field(fields: &[String], index: usize) -> &str {
    fields.get(index).map(String::as_str).unwrap_or("")
}

/// Numeric field parse under the NaN-sentinel policy.
fn parse_num(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the comma-joined, dollar-prefixed price list.
///
/// Empty entries are dropped, the `$` prefix is stripped, and entries that
/// still fail to parse are dropped, so the result holds only valid prices.
/// A row with zero valid prices yields an empty sequence, not an error.
fn parse_prices(raw: &str) -> Vec<f64> {
    raw.split(',')
        .map(|entry| entry.trim().trim_start_matches('$'))
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| entry.parse::<f64>().ok())
        .collect()
}
