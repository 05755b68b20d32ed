//! The purity statistic: how many edges join samples with the same label.

use crate::graph::Edge;

/// Counts the edges whose two endpoints carry the same label code.
///
/// `codes` is indexed by sample, in the order of the `DistanceMatrix` the
/// edges were built from.
#[must_use]
pub fn count_pure_edges(edges: &[Edge], codes: &[u32]) -> usize {
    edges.iter().filter(|e| e.is_pure(codes)).count()
}

#[cfg(test)]
mod tests {
    use super::count_pure_edges;
    use crate::graph::Edge;

    #[test]
    fn counts() {
        let edges = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0), Edge::new(2, 3, 1.0)];
        assert_eq!(count_pure_edges(&edges, &[0, 0, 1, 1]), 2);
        assert_eq!(count_pure_edges(&edges, &[0, 1, 0, 1]), 0);
        assert_eq!(count_pure_edges(&edges, &[7, 7, 7, 7]), 3);
        assert_eq!(count_pure_edges(&[], &[0, 1]), 0);
    }
}
