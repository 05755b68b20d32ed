#![allow(dead_code)]

//! Data generation utilities for testing.

use graph_perm::{DistanceMatrix, GraphTestError, SampleData};
use rand::prelude::*;

/// Converts string literals to owned strings.
pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Euclidean distances between the given points.
pub fn euclidean_matrix(points: &[Vec<f64>]) -> Result<DistanceMatrix, GraphTestError> {
    let rows = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| a.iter().zip(b).map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt())
                .collect()
        })
        .collect();
    DistanceMatrix::new(rows)
}

/// Distances between points on a line.
pub fn line_matrix(positions: &[f64]) -> Result<DistanceMatrix, GraphTestError> {
    let points = positions.iter().map(|&x| vec![x]).collect::<Vec<_>>();
    euclidean_matrix(&points)
}

/// Uniformly random points in the unit square.
pub fn random_points(cardinality: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| vec![rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)])
        .collect()
}

/// Two well-separated blobs of `n` random points each.
pub fn two_blobs(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut points = random_points(2 * n, seed);
    for p in points.iter_mut().skip(n) {
        p[0] += 10.0;
    }
    points
}

/// A sample table named `s0, s1, ...` with the given columns.
pub fn table(columns: &[(&str, Vec<String>)]) -> Result<SampleData, GraphTestError> {
    let n = columns.first().map_or(0, |(_, values)| values.len());
    let mut data = SampleData::new((0..n).map(|i| format!("s{i}")).collect())?;
    for (name, values) in columns {
        data.add_column(name, values.clone())?;
    }
    Ok(data)
}

/// Six samples on a line, labelled `A A B B B A`, one unit apart.
///
/// The minimum spanning tree is the path through them, which has three pure
/// edges and two mixed edges.
pub fn engineered_six() -> Result<(DistanceMatrix, SampleData), GraphTestError> {
    let matrix = line_matrix(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0])?;
    let data = table(&[("type", strings(&["A", "A", "B", "B", "B", "A"]))])?;
    Ok((matrix, data))
}

/// Six samples labelled `A A A B B B` whose minimum spanning tree joins the
/// three within-group pairs `0-1`, `1-2` and `3-4` and the two cross-group
/// pairs `2-3` and `0-5`.
///
/// The tree edges are one unit long and every other pair is ten units apart,
/// so the tree is unique.
pub fn blocked_six() -> Result<(DistanceMatrix, SampleData), GraphTestError> {
    let tree = [(0, 1), (1, 2), (3, 4), (2, 3), (0, 5)];
    let mut rows = vec![vec![10.0; 6]; 6];
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for (i, j) in tree {
        rows[i][j] = 1.0;
        rows[j][i] = 1.0;
    }
    let matrix = DistanceMatrix::new(rows)?;
    let data = table(&[("type", strings(&["A", "A", "A", "B", "B", "B"]))])?;
    Ok((matrix, data))
}
