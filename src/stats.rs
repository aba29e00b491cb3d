//! Catalog statistics and health overview.
//!
//! Provides a quick summary of what the two data files contain: item and
//! review counts, brand coverage, price coverage, and orphaned reviews.
//! Used by `shelf stats` to give confidence that the catalog files are
//! intact before browsing them.

use anyhow::Result;
use std::collections::HashSet;

use crate::catalog;
use crate::config::Config;
use crate::listing::distinct_brands;

/// Run the stats command: load both files and print a summary.
pub fn run_stats(config: &Config) -> Result<()> {
    let items = catalog::load_items(&config.catalog.items)?;
    let reviews = catalog::load_reviews(&config.catalog.reviews)?;

    let brands = distinct_brands(&items);
    let priced = items.iter().filter(|i| !i.prices.is_empty()).count();

    let known_asins: HashSet<&str> = items.iter().map(|i| i.asin.as_str()).collect();
    let orphaned = reviews
        .iter()
        .filter(|r| !known_asins.contains(r.asin.as_str()))
        .count();

    let finite_ratings: Vec<f64> = items
        .iter()
        .map(|i| i.rating)
        .filter(|r| r.is_finite())
        .collect();
    let avg_rating = if finite_ratings.is_empty() {
        None
    } else {
        Some(finite_ratings.iter().sum::<f64>() / finite_ratings.len() as f64)
    };

    let price_low = items.iter().filter_map(|i| i.min_price()).reduce(f64::min);
    let price_high = items.iter().filter_map(|i| i.max_price()).reduce(f64::max);

    println!("Shelf — Catalog Stats");
    println!("=====================");
    println!();
    println!("  Items file:   {}", config.catalog.items.display());
    println!("  Reviews file: {}", config.catalog.reviews.display());
    println!();
    println!("  Items:        {}", items.len());
    println!("  Brands:       {}", brands.len());
    println!(
        "  Priced:       {} / {} ({}%)",
        priced,
        items.len(),
        if items.is_empty() {
            0
        } else {
            priced * 100 / items.len()
        }
    );
    if let (Some(low), Some(high)) = (price_low, price_high) {
        println!("  Price range:  ${:.2} - ${:.2}", low, high);
    }
    if let Some(avg) = avg_rating {
        println!("  Avg rating:   {:.2} / 5", avg);
    }
    println!();
    println!("  Reviews:      {}", reviews.len());
    println!("  Orphaned:     {}", orphaned);

    Ok(())
}
