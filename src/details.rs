//! The `show` command: one item, its reviews, and the rating breakdown.
//!
//! The details view for the terminal: look the item up by ASIN,
//! select its review subset, and render the 1–5 star histogram with bars
//! scaled against the fullest bucket.

use anyhow::{bail, Result};
use serde::Serialize;

use crate::aggregate::{self, RatingHistogram};
use crate::catalog;
use crate::config::Config;
use crate::listing::display_num;
use crate::models::{Item, Review};

/// Character width of a full (100%) histogram bar.
const BAR_WIDTH: usize = 30;

/// Maximum review body length printed before truncation.
const BODY_EXCERPT_LEN: usize = 160;

/// JSON shape for `show --json`.
#[derive(Serialize)]
struct ItemDetails<'a> {
    item: &'a Item,
    reviews: &'a [Review],
    histogram: &'a RatingHistogram,
    heights: [f64; 6],
}

/// Run the show command for one ASIN.
///
/// An unknown ASIN is an error; an item with zero reviews is not.
pub fn run_show(config: &Config, asin: &str, json: bool) -> Result<()> {
    let items = catalog::load_items(&config.catalog.items)?;
    let Some(item) = items.iter().find(|item| item.asin == asin) else {
        bail!("No item with asin: {}", asin);
    };

    let all_reviews = catalog::load_reviews(&config.catalog.reviews)?;
    let reviews = aggregate::reviews_for_item(&all_reviews, asin);
    let histogram = aggregate::rating_histogram(&reviews);

    if json {
        let details = ItemDetails {
            item,
            reviews: &reviews,
            histogram: &histogram,
            heights: histogram.heights(),
        };
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("{} / {}", item.brand, item.title);
    println!(
        "  rating: {} / 5 ({} reviews)",
        display_num(item.rating),
        display_num(item.total_reviews)
    );
    match (item.min_price(), item.max_price()) {
        (Some(low), Some(high)) if low < high => {
            println!("  price: ${:.2} - ${:.2}", low, high)
        }
        (Some(low), _) => println!("  price: ${:.2}", low),
        _ => {}
    }
    if !item.url.is_empty() {
        println!("  url: {}", item.url);
    }

    println!();
    println!("Rating breakdown:");
    let heights = histogram.heights();
    for star in (1..=5usize).rev() {
        let bar_len = (heights[star] / 100.0 * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {} star | {:<width$} {}",
            star,
            "#".repeat(bar_len),
            histogram.counts[star],
            width = BAR_WIDTH
        );
    }

    if reviews.is_empty() {
        println!();
        println!("No reviews.");
        return Ok(());
    }

    println!();
    println!("Reviews:");
    for (i, review) in reviews.iter().enumerate() {
        let verified = if review.verified { " [verified]" } else { "" };
        println!(
            "{}. [{}/5] {} — {} ({}){}",
            i + 1,
            display_num(review.rating),
            review.title,
            review.name,
            review.date,
            verified
        );
        if !review.body.is_empty() {
            println!("    \"{}\"", excerpt(&review.body));
        }
    }

    Ok(())
}

/// Truncate a review body at a char boundary for single-screen output.
fn excerpt(body: &str) -> String {
    if body.chars().count() <= BODY_EXCERPT_LEN {
        return body.to_string();
    }
    let cut: String = body.chars().take(BODY_EXCERPT_LEN).collect();
    format!("{}...", cut.trim_end())
}
