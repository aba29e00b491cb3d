//! The `list` and `brands` commands, the catalog listing front end.
//!
//! `list` filters the catalog, orders it, and prints the surviving items.
//! `brands` prints the distinct brand set, the values `list --brand`
//! accepts.

use anyhow::Result;
use std::collections::BTreeSet;

use crate::catalog;
use crate::config::Config;
use crate::filter::{self, FilterCriteria};
use crate::models::Item;
use crate::sort::{self, SortKey, SortSpec};

/// Inputs for a single `list` invocation, collected from CLI flags.
#[derive(Debug, Default)]
pub struct ListRequest {
    pub query: Option<String>,
    pub brand: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    /// Sort key name; `None` keeps input (file) order.
    pub sort: Option<String>,
    pub descending: bool,
    /// Overrides `listing.default_limit` when set.
    pub limit: Option<usize>,
    pub json: bool,
}

/// Run the list command: load, filter, sort, truncate, print.
pub fn run_list(config: &Config, req: &ListRequest) -> Result<()> {
    let items = catalog::load_items(&config.catalog.items)?;

    let criteria = FilterCriteria {
        keywords: req.query.clone(),
        brand: req.brand.clone(),
        min_price: req.min_price,
        max_price: req.max_price,
    };
    let mut results = filter::filter_items(&items, &criteria);

    if let Some(name) = req.sort.as_deref() {
        let spec = SortSpec {
            key: SortKey::parse(name)?,
            ascending: !req.descending,
        };
        results = sort::sort_items(results, &spec);
    }

    let limit = req.limit.unwrap_or(config.listing.default_limit);
    if limit > 0 {
        results.truncate(limit);
    }

    if req.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, item) in results.iter().enumerate() {
        println!("{}. {} / {}", i + 1, item.brand, item.title);
        match (item.min_price(), item.max_price()) {
            (Some(low), Some(high)) if low < high => {
                println!("    price: ${:.2} - ${:.2}", low, high)
            }
            (Some(low), _) => println!("    price: ${:.2}", low),
            _ => {}
        }
        println!(
            "    rating: {} / 5 ({} reviews)",
            display_num(item.rating),
            display_num(item.total_reviews)
        );
        println!("    asin: {}", item.asin);
    }

    Ok(())
}

/// Run the brands command: print the distinct brand set, sorted.
pub fn run_brands(config: &Config, json: bool) -> Result<()> {
    let items = catalog::load_items(&config.catalog.items)?;
    let brands = distinct_brands(&items);

    if json {
        println!("{}", serde_json::to_string_pretty(&brands)?);
        return Ok(());
    }

    if brands.is_empty() {
        println!("No brands.");
        return Ok(());
    }
    for brand in brands {
        println!("{}", brand);
    }
    Ok(())
}

/// Distinct, sorted brand names; empty brand fields are skipped.
pub fn distinct_brands(items: &[Item]) -> Vec<String> {
    let set: BTreeSet<&str> = items
        .iter()
        .map(|item| item.brand.as_str())
        .filter(|brand| !brand.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}

/// Render a numeric field, honoring the parser's NaN sentinel.
pub fn display_num(value: f64) -> String {
    if value.is_nan() {
        "n/a".to_string()
    } else {
        format!("{}", value)
    }
}
