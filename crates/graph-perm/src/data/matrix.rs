//! A precomputed, symmetric matrix of pairwise distances between samples.

use serde::{Deserialize, Serialize};

use crate::{GraphTestError, Result};

/// A symmetric `N x N` matrix of non-negative pairwise distances.
///
/// The row order is the sample order used by everything downstream: node
/// indices in a `ProximityGraph`, positions in a label vector and positions
/// in a grouping all refer to the same rows.
///
/// The distances need not satisfy the triangle inequality. The diagonal is
/// assumed to be zero and is never read.
///
/// It serializes as its rows, and deserializing goes through the same checks
/// as `new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct DistanceMatrix {
    /// The distances in row-major order.
    values: Vec<f64>,
    /// The number of samples, i.e. rows.
    cardinality: usize,
}

impl DistanceMatrix {
    /// Creates a new `DistanceMatrix` from rows of distances.
    ///
    /// # Errors
    ///
    /// * If there are no rows.
    /// * If any row does not have as many entries as there are rows.
    /// * If any off-diagonal entry is negative or NaN.
    /// * If the matrix is not symmetric.
    #[allow(clippy::float_cmp)]
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cardinality = rows.len();
        if cardinality == 0 {
            return Err(GraphTestError::InvalidInput(
                "The distance matrix must have at least one sample.".to_string(),
            ));
        }

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != cardinality) {
            return Err(GraphTestError::InvalidInput(format!(
                "The distance matrix is not square: row {i} has {} entries but there are {cardinality} rows.",
                row.len()
            )));
        }

        let values = rows.into_iter().flatten().collect::<Vec<_>>();
        let matrix = Self { values, cardinality };

        for i in 0..cardinality {
            for j in 0..i {
                let (d_ij, d_ji) = (matrix.get(i, j), matrix.get(j, i));
                if d_ij.is_nan() || d_ij < 0.0 {
                    return Err(GraphTestError::InvalidInput(format!(
                        "The distance between samples {i} and {j} must be non-negative, got {d_ij}."
                    )));
                }
                if d_ij != d_ji {
                    return Err(GraphTestError::InvalidInput(format!(
                        "The distance matrix is not symmetric: d({i}, {j}) = {d_ij} but d({j}, {i}) = {d_ji}."
                    )));
                }
            }
        }

        Ok(matrix)
    }

    /// Returns the number of samples.
    #[must_use]
    pub const fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// Returns the distance between samples `i` and `j`.
    ///
    /// # Panics
    ///
    /// If either index is out of bounds.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.cardinality + j]
    }

    /// Returns the distances from sample `i` to every sample, itself included.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.cardinality..(i + 1) * self.cardinality]
    }

    /// Returns the number of unordered pairs of distinct samples.
    #[must_use]
    pub const fn num_pairs(&self) -> usize {
        self.cardinality * (self.cardinality - 1) / 2
    }

    /// Iterates over every unordered pair of distinct samples exactly once.
    ///
    /// Pairs are yielded as `(i, j, distance)` with `i > j`, walking the lower
    /// triangle column by column.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.cardinality).flat_map(move |j| ((j + 1)..self.cardinality).map(move |i| (i, j, self.get(i, j))))
    }

    /// Returns the pairwise distances, one per unordered pair, sorted in
    /// non-decreasing order.
    #[must_use]
    pub fn sorted_pair_distances(&self) -> Vec<f64> {
        let mut distances = self.pairs().map(|(_, _, d)| d).collect::<Vec<_>>();
        distances.sort_by(f64::total_cmp);
        distances
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = GraphTestError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        if matrix.cardinality == 0 {
            return Self::new();
        }
        matrix.values.chunks(matrix.cardinality).map(<[f64]>::to_vec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMatrix;
    use crate::GraphTestError;

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(DistanceMatrix::new(vec![]), Err(GraphTestError::InvalidInput(_))));

        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(DistanceMatrix::new(ragged), Err(GraphTestError::InvalidInput(_))));

        let wide = vec![vec![0.0, 1.0, 2.0], vec![1.0, 0.0, 2.0]];
        assert!(matches!(DistanceMatrix::new(wide), Err(GraphTestError::InvalidInput(_))));
    }

    #[test]
    fn rejects_asymmetric_and_negative() {
        let asymmetric = vec![vec![0.0, 1.0], vec![2.0, 0.0]];
        assert!(matches!(
            DistanceMatrix::new(asymmetric),
            Err(GraphTestError::InvalidInput(_))
        ));

        let negative = vec![vec![0.0, -1.0], vec![-1.0, 0.0]];
        assert!(matches!(DistanceMatrix::new(negative), Err(GraphTestError::InvalidInput(_))));

        let nan = vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]];
        assert!(matches!(DistanceMatrix::new(nan), Err(GraphTestError::InvalidInput(_))));
    }

    #[test]
    fn pairs_walk_lower_triangle() -> Result<(), GraphTestError> {
        let matrix = DistanceMatrix::new(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])?;

        assert_eq!(matrix.cardinality(), 3);
        assert_eq!(matrix.num_pairs(), 3);
        assert_eq!(matrix.row(1), &[1.0, 0.0, 3.0]);

        let pairs = matrix.pairs().collect::<Vec<_>>();
        assert_eq!(pairs, vec![(1, 0, 1.0), (2, 0, 2.0), (2, 1, 3.0)]);
        assert_eq!(matrix.sorted_pair_distances(), vec![1.0, 2.0, 3.0]);

        Ok(())
    }

    #[test]
    fn single_sample() -> Result<(), GraphTestError> {
        let matrix = DistanceMatrix::new(vec![vec![0.0]])?;
        assert_eq!(matrix.num_pairs(), 0);
        assert_eq!(matrix.pairs().count(), 0);
        Ok(())
    }

    #[test]
    fn deserializing_validates() -> Result<(), GraphTestError> {
        let matrix = DistanceMatrix::new(vec![vec![0.0, 2.0], vec![2.0, 0.0]])?;
        let bytes = bincode::serialize(&matrix).map_err(|e| GraphTestError::InvalidInput(e.to_string()))?;
        let restored: DistanceMatrix =
            bincode::deserialize(&bytes).map_err(|e| GraphTestError::InvalidInput(e.to_string()))?;
        assert_eq!(restored, matrix);

        let bad_rows = [
            vec![vec![0.0, 1.0], vec![2.0, 0.0]],
            vec![vec![0.0, 1.0]],
            vec![vec![0.0, -1.0], vec![-1.0, 0.0]],
            vec![],
        ];
        for rows in bad_rows {
            let bytes = bincode::serialize(&rows).map_err(|e| GraphTestError::InvalidInput(e.to_string()))?;
            assert!(bincode::deserialize::<DistanceMatrix>(&bytes).is_err(), "accepted {rows:?}");
        }
        Ok(())
    }
}
