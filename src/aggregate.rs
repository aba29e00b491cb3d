//! Review aggregation for the details view: per-item review subsets and the
//! star-rating breakdown histogram.
//!
//! Nothing here is persisted; both are recomputed per request from the full
//! in-memory review collection.

use serde::Serialize;

use crate::models::Review;

/// Count of reviews at each star level 1–5. Index 0 is unused and always
/// zero, so bucket `counts[star]` reads naturally.
#[derive(Debug, Clone, Serialize)]
pub struct RatingHistogram {
    pub counts: [u64; 6],
}

/// The subset of `reviews` belonging to `asin`, in input order.
///
/// Orphaned reviews (referencing no real item) simply never match any real
/// item's `asin`; they cause no error.
pub fn reviews_for_item(reviews: &[Review], asin: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| review.asin == asin)
        .cloned()
        .collect()
}

/// Build the star-rating histogram for a set of reviews.
///
/// Only ratings that are finite with an integer part in 1–5 land in a
/// bucket; a malformed rating (NaN under the parser's sentinel policy) is
/// counted nowhere.
pub fn rating_histogram(reviews: &[Review]) -> RatingHistogram {
    let mut counts = [0u64; 6];
    for review in reviews {
        if review.rating.is_finite() {
            let star = review.rating as i64;
            if (1..=5).contains(&star) {
                counts[star as usize] += 1;
            }
        }
    }
    RatingHistogram { counts }
}

impl RatingHistogram {
    /// Total number of bucketed reviews.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Bar heights as percentages of the fullest bucket.
    ///
    /// An all-zero histogram yields 0.0 for every bucket rather than
    /// dividing by a zero max count.
    pub fn heights(&self) -> [f64; 6] {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        let mut heights = [0.0f64; 6];
        if max == 0 {
            return heights;
        }
        for (height, count) in heights.iter_mut().zip(self.counts.iter()) {
            *height = *count as f64 * 100.0 / max as f64;
        }
        heights
    }
}
