//! Catalog file loader, the CSV transport edge of the engine.
//!
//! The query engine itself never touches files; this module reads the two
//! catalog CSVs (header row discarded), splits them into field rows, and
//! hands those to [`crate::parse`]. Missing files and structurally broken
//! CSV are real errors here: the parser's no-error-channel policy covers
//! field *contents*, not transport failures.

use anyhow::{Context, Result};
use std::path::Path;

use crate::models::{Item, Review};
use crate::parse;

/// Load and parse the items file.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    Ok(parse::parse_items(&read_rows(path)?))
}

/// Load and parse the reviews file.
pub fn load_reviews(path: &Path) -> Result<Vec<Review>> {
    Ok(parse::parse_reviews(&read_rows(path)?))
}

/// Read a CSV file into field rows, skipping the header row.
///
/// `flexible` readers accept rows with a varying field count; the parser
/// treats missing trailing fields as empty.
fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open catalog file: {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Failed to read row from {}", path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}
