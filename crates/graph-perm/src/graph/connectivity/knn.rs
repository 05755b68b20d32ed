//! k-nearest-neighbor graphs.
//!
//! Neighbors are ranked by distance, with ties broken by the smaller sample
//! index. A sample is never its own neighbor, even when another sample sits
//! at distance zero from it. Because the directed relation is symmetrized,
//! the number of edges lies anywhere between `ceil(n * k / 2)` and `n * k`.

use std::collections::BTreeMap;

use crate::{graph::Edge, DistanceMatrix};

/// Returns the `k` nearest other samples to sample `i`, closest first.
#[must_use]
pub fn nearest_neighbors(matrix: &DistanceMatrix, i: usize, k: usize) -> Vec<usize> {
    let row = matrix.row(i);
    let mut candidates = (0..matrix.cardinality()).filter(|&j| j != i).collect::<Vec<_>>();
    // `sort_by` is stable, so equal distances keep increasing index order.
    candidates.sort_by(|&a, &b| row[a].total_cmp(&row[b]));
    candidates.truncate(k);
    candidates
}

/// Returns the directed `k`-nearest-neighbor lists of every sample.
#[must_use]
pub fn directed_neighbors(matrix: &DistanceMatrix, k: usize) -> Vec<Vec<usize>> {
    (0..matrix.cardinality())
        .map(|i| nearest_neighbors(matrix, i, k))
        .collect()
}

/// Links every sample to its `k` nearest neighbors, symmetrized by OR.
///
/// The caller must ensure that `0 < k < n`.
#[must_use]
pub fn symmetric_neighbors(matrix: &DistanceMatrix, k: usize) -> Vec<Edge> {
    let mut edges = BTreeMap::new();
    for (i, neighbors) in directed_neighbors(matrix, k).into_iter().enumerate() {
        for j in neighbors {
            let e = Edge::new(i, j, matrix.get(i, j));
            edges.entry(e.endpoints()).or_insert(e);
        }
    }
    edges.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::{directed_neighbors, nearest_neighbors, symmetric_neighbors};
    use crate::{DistanceMatrix, GraphTestError};

    /// Samples on a line at 0, 1, 3 and 7.
    fn line() -> Result<DistanceMatrix, GraphTestError> {
        let points = [0.0_f64, 1.0, 3.0, 7.0];
        DistanceMatrix::new(
            points
                .iter()
                .map(|a| points.iter().map(|b| (a - b).abs()).collect())
                .collect(),
        )
    }

    #[test]
    fn directed() -> Result<(), GraphTestError> {
        let matrix = line()?;
        assert_eq!(
            directed_neighbors(&matrix, 1),
            vec![vec![1], vec![0], vec![1], vec![2]]
        );
        assert_eq!(nearest_neighbors(&matrix, 3, 3), vec![2, 1, 0]);
        Ok(())
    }

    #[test]
    fn symmetrized() -> Result<(), GraphTestError> {
        let matrix = line()?;
        let edges = symmetric_neighbors(&matrix, 1);
        let pairs = edges.iter().map(|e| e.endpoints()).collect::<Vec<_>>();
        assert_eq!(pairs, vec![[0, 1], [1, 2], [2, 3]]);
        Ok(())
    }

    #[test]
    fn ties_go_to_smaller_index() -> Result<(), GraphTestError> {
        // Sample 0 is equidistant from samples 1, 2 and 3.
        let matrix = DistanceMatrix::new(vec![
            vec![0.0, 1.0, 1.0, 1.0],
            vec![1.0, 0.0, 5.0, 5.0],
            vec![1.0, 5.0, 0.0, 5.0],
            vec![1.0, 5.0, 5.0, 0.0],
        ])?;
        assert_eq!(nearest_neighbors(&matrix, 0, 2), vec![1, 2]);
        Ok(())
    }

    #[test]
    fn self_is_never_a_neighbor() -> Result<(), GraphTestError> {
        let matrix = DistanceMatrix::new(vec![vec![0.0; 3]; 3])?;
        assert_eq!(nearest_neighbors(&matrix, 1, 2), vec![0, 2]);
        assert_eq!(nearest_neighbors(&matrix, 2, 1), vec![0]);
        Ok(())
    }
}
