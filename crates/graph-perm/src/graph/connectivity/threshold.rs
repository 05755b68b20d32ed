//! Graphs linking every pair of samples within a distance threshold.

use crate::{graph::Edge, DistanceMatrix};

/// Links every pair of distinct samples at most `max_dist` apart.
#[must_use]
pub fn within(matrix: &DistanceMatrix, max_dist: f64) -> Vec<Edge> {
    matrix
        .pairs()
        .filter(|&(_, _, d)| d <= max_dist)
        .map(|(i, j, d)| Edge::new(i, j, d))
        .collect()
}

/// Returns the `rank`-th smallest pairwise distance (1-based), counting each
/// unordered pair of samples once.
///
/// A `rank` past the number of pairs gives the largest distance. With a single
/// sample there are no pairs and the result is negative infinity, so that no
/// edge can fall within it.
#[must_use]
pub fn distance_at_rank(matrix: &DistanceMatrix, rank: usize) -> f64 {
    let distances = matrix.sorted_pair_distances();
    let index = rank.clamp(1, distances.len().max(1)) - 1;
    distances.get(index).copied().unwrap_or(f64::NEG_INFINITY)
}
