//! # Shelf
//!
//! A CSV-backed product catalog query engine and browser CLI.
//!
//! Shelf parses a flat-file product catalog and its reviews into typed
//! records, then answers listing queries (keyword/brand/price filters,
//! key-specific sorts) and details queries (per-item review subsets with a
//! star-rating histogram). The engine is synchronous and pure: both
//! collections are fully materialized in memory before any query runs.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌────────────┐   ┌──────────────────────┐
//! │  items.csv  │──▶│   Parser   │──▶│ Filter ──▶ Sort      │──▶ listing
//! │ reviews.csv │   │    (NaN    │   │                      │
//! └─────────────┘   │  sentinel) │──▶│ Reviews ─▶ Histogram │──▶ details
//!                   └────────────┘   └──────────────────────┘
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core record types |
//! | [`parse`] | Field rows → typed records (NaN-sentinel policy) |
//! | [`catalog`] | CSV file loading |
//! | [`filter`] | Conjunctive keyword/brand/price filtering |
//! | [`sort`] | Key-specific ordering and the sort-state reducer |
//! | [`aggregate`] | Per-item review subsets and rating histograms |
//! | [`listing`] | `list` / `brands` commands |
//! | [`details`] | `show` command |
//! | [`stats`] | `stats` command |

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod details;
pub mod filter;
pub mod listing;
pub mod models;
pub mod parse;
pub mod sort;
pub mod stats;
