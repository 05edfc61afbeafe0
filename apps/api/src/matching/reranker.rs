//! Stage 2 of the matching pipeline: Euclidean k-nearest re-selection.
//!
//! Runs a plain nearest-neighbor scan over the stage-1 shortlist (≤20
//! candidates, so no index structure) and keeps the k closest to the query
//! by Euclidean distance. The shortlist was *selected* by cosine similarity
//! and its vectors are not unit-normalized, so this stage can genuinely
//! reorder or swap out candidates relative to a pure cosine top-k. That
//! two-metric behavior is intentional and preserved from the reference
//! pipeline; see DESIGN.md.

use std::cmp::Ordering;

use crate::matching::ranker::ShortlistEntry;
use crate::matching::similarity::euclidean_distance;

/// Default number of candidates kept by the re-selection stage.
pub const DEFAULT_TOP_K: usize = 5;

/// Selects the `k` shortlist entries nearest to the query vector and
/// returns their corpus row indices in ascending-distance order. Returns
/// `min(k, |candidates|)` indices; an empty shortlist yields an empty list.
pub fn reselect(candidates: &[ShortlistEntry], query_vector: &[f64], k: usize) -> Vec<usize> {
    let mut by_distance: Vec<(usize, f64)> = candidates
        .iter()
        .map(|entry| (entry.index, euclidean_distance(query_vector, &entry.vector)))
        .collect();

    // Stable ascending sort: ties keep shortlist order.
    by_distance.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    by_distance
        .into_iter()
        .take(k)
        .map(|(index, _)| index)
        .collect()
}
