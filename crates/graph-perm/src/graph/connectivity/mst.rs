//! Minimum spanning trees over the complete graph of samples.

use crate::{graph::Edge, DistanceMatrix};

/// Computes a minimum spanning tree of the complete graph whose edge weights
/// are the pairwise distances, using Prim's algorithm.
///
/// Every pair of samples is a candidate edge, including pairs at distance
/// zero, so the tree always has `n - 1` edges. Among equally close
/// candidates, the one with the smallest sample index joins the tree first.
///
/// This takes `O(n^2)` time, which is optimal for a dense matrix.
#[must_use]
pub fn spanning_tree(matrix: &DistanceMatrix) -> Vec<Edge> {
    let n = matrix.cardinality();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    if n < 2 {
        return edges;
    }

    // For every sample outside the tree, the closest sample inside the tree and
    // the distance to it.
    let mut in_tree = vec![false; n];
    let mut closest = vec![(0, f64::INFINITY); n];

    in_tree[0] = true;
    for (j, &d) in matrix.row(0).iter().enumerate().skip(1) {
        closest[j] = (0, d);
    }

    for _ in 1..n {
        let next = (0..n)
            .filter(|&j| !in_tree[j])
            .min_by(|&a, &b| closest[a].1.total_cmp(&closest[b].1));
        let Some(next) = next else {
            break;
        };

        let (parent, d) = closest[next];
        in_tree[next] = true;
        edges.push(Edge::new(parent, next, d));

        for (j, &d) in matrix.row(next).iter().enumerate() {
            if !in_tree[j] && d < closest[j].1 {
                closest[j] = (next, d);
            }
        }
    }

    edges
}
