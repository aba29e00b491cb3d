//! # Shelf CLI (`shelf`)
//!
//! The `shelf` binary is the presentation layer over the catalog query
//! engine: it loads the configured CSV files and renders listing and
//! details views as text or JSON.
//!
//! ## Usage
//!
//! ```bash
//! shelf --config ./config/shelf.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `shelf list [QUERY]` | Filter and sort the catalog listing |
//! | `shelf show <ASIN>` | Show one item, its reviews, and the rating breakdown |
//! | `shelf brands` | List the distinct brands in the catalog |
//! | `shelf stats` | Summarize the catalog files |
//!
//! ## Examples
//!
//! ```bash
//! # Everything from one brand, cheapest first
//! shelf list --brand Nokia --sort price
//!
//! # Keyword search with a price band, best-rated first
//! shelf list "unlocked 64gb" --min-price 100 --max-price 400 \
//!     --sort rating --descending
//!
//! # Details page for one item
//! shelf show B0001DBEME
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shelf::config;
use shelf::details;
use shelf::listing::{self, ListRequest};
use shelf::stats;

/// Shelf — a CSV-backed product catalog query engine and browser CLI.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file naming the catalog data files. See `config/shelf.example.toml`.
#[derive(Parser)]
#[command(
    name = "shelf",
    about = "Shelf — a CSV-backed product catalog query engine and browser CLI",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/shelf.toml`. The catalog file paths and
    /// listing defaults are read from this file.
    #[arg(long, global = true, default_value = "./config/shelf.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Filter and sort the catalog listing.
    ///
    /// Filters are conjunctive: an item must match the keyword query, the
    /// brand, and the price band to appear. Without `--sort`, items keep
    /// their file order.
    List {
        /// Keyword query; every whitespace-separated term must appear
        /// (case-insensitively) in the item title.
        query: Option<String>,

        /// Exact brand match (case-sensitive). See `shelf brands`.
        #[arg(long)]
        brand: Option<String>,

        /// Keep items whose highest price is at least this much.
        #[arg(long)]
        min_price: Option<f64>,

        /// Keep items whose lowest price is at most this much.
        #[arg(long)]
        max_price: Option<f64>,

        /// Sort key: `title`, `rating`, `reviews`, or `price`.
        ///
        /// Price sorting is asymmetric by design: ascending ranks items by
        /// their cheapest price point, descending by their most expensive.
        #[arg(long)]
        sort: Option<String>,

        /// Sort in descending order.
        #[arg(long)]
        descending: bool,

        /// Maximum rows to print (overrides `listing.default_limit`).
        #[arg(long)]
        limit: Option<usize>,

        /// Emit the result set as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show one item with its reviews and rating breakdown.
    ///
    /// Prints the item summary, a 1-5 star histogram normalized against
    /// the fullest bucket, and every review for the item.
    Show {
        /// Item identifier (ASIN).
        asin: String,

        /// Emit item, reviews, and histogram as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the distinct brands in the catalog.
    Brands {
        /// Emit the brand list as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Summarize the catalog files.
    ///
    /// Item/review counts, brand and price coverage, and orphaned-review
    /// detection. Useful for verifying data files before browsing.
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    match cli.command {
        Commands::List {
            query,
            brand,
            min_price,
            max_price,
            sort,
            descending,
            limit,
            json,
        } => {
            let req = ListRequest {
                query,
                brand,
                min_price,
                max_price,
                sort,
                descending,
                limit,
                json,
            };
            listing::run_list(&cfg, &req)?;
        }
        Commands::Show { asin, json } => {
            details::run_show(&cfg, &asin, json)?;
        }
        Commands::Brands { json } => {
            listing::run_brands(&cfg, json)?;
        }
        Commands::Stats => {
            stats::run_stats(&cfg)?;
        }
    }

    Ok(())
}
