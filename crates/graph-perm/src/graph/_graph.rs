//! The `ProximityGraph` struct and its `Edge`s.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{DistanceMatrix, GraphTestError, LabelCodes, Result};

use super::Connectivity;

/// Whether the two endpoints of an `Edge` share a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Both endpoints carry the same label.
    Pure,
    /// The endpoints carry different labels.
    Mixed,
}

impl EdgeKind {
    /// Returns the lowercase name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::Mixed => "mixed",
        }
    }
}

/// An undirected edge between two samples.
///
/// The endpoints are stored as sample indices with `left < right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// The smaller of the two sample indices.
    left: usize,
    /// The larger of the two sample indices.
    right: usize,
    /// The distance between the two samples.
    distance: f64,
    /// The classification under the observed labels, once computed.
    kind: Option<EdgeKind>,
}

impl core::fmt::Display for Edge {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} -- {}", self.left, self.right)
    }
}

impl Edge {
    /// Creates a new, unclassified `Edge` between samples `a` and `b`.
    ///
    /// The order of `a` and `b` does not matter.
    #[must_use]
    pub const fn new(a: usize, b: usize, distance: f64) -> Self {
        let (left, right) = if a < b { (a, b) } else { (b, a) };
        Self {
            left,
            right,
            distance,
            kind: None,
        }
    }

    /// Returns the smaller sample index.
    #[must_use]
    pub const fn left(&self) -> usize {
        self.left
    }

    /// Returns the larger sample index.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.right
    }

    /// Returns both sample indices.
    #[must_use]
    pub const fn endpoints(&self) -> [usize; 2] {
        [self.left, self.right]
    }

    /// Returns the distance between the two samples.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the classification of the edge, if it has been computed.
    #[must_use]
    pub const fn kind(&self) -> Option<EdgeKind> {
        self.kind
    }

    /// Checks if this edge has the given sample at one of its ends.
    #[must_use]
    pub const fn contains(&self, i: usize) -> bool {
        self.left == i || self.right == i
    }

    /// Returns the other end of the edge, if `i` is one of its ends.
    #[must_use]
    pub const fn neighbor(&self, i: usize) -> Option<usize> {
        if i == self.left {
            Some(self.right)
        } else if i == self.right {
            Some(self.left)
        } else {
            None
        }
    }

    /// Checks whether both ends carry the same code.
    #[must_use]
    pub fn is_pure(&self, codes: &[u32]) -> bool {
        codes[self.left] == codes[self.right]
    }
}

/// An undirected graph over a set of samples.
///
/// Nodes are sample indices into the `DistanceMatrix` the graph was built
/// from. Edges are sorted by their endpoints and contain no duplicates or
/// self-loops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProximityGraph {
    /// The number of samples in the matrix the graph was built from.
    cardinality: usize,
    /// The sample indices present in the graph, in increasing order.
    nodes: Vec<usize>,
    /// The edges of the graph.
    edges: Vec<Edge>,
    /// The rule used to build the graph.
    connectivity: Connectivity,
}

impl ProximityGraph {
    /// Builds the graph over all samples in `matrix` using the given rule.
    ///
    /// # Errors
    ///
    /// If the rule's parameter is invalid for the number of samples.
    pub fn build(matrix: &DistanceMatrix, connectivity: Connectivity) -> Result<Self> {
        let edges = connectivity.edges(matrix)?;
        ftlog::debug!(
            "Built a {connectivity} graph with {} edges over {} samples.",
            edges.len(),
            matrix.cardinality()
        );
        Ok(Self::new(matrix.cardinality(), edges, connectivity))
    }

    /// Creates a graph from a list of edges over `cardinality` samples.
    ///
    /// Edges are sorted and de-duplicated.
    pub(crate) fn new(cardinality: usize, mut edges: Vec<Edge>, connectivity: Connectivity) -> Self {
        edges.sort_by(|a, b| a.endpoints().cmp(&b.endpoints()));
        edges.dedup_by(|a, b| a.endpoints() == b.endpoints());
        Self {
            cardinality,
            nodes: (0..cardinality).collect(),
            edges,
            connectivity,
        }
    }

    /// Returns the rule used to build the graph.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Returns the sample indices present in the graph.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns the edges of the graph.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the degree of every sample, indexed by sample.
    ///
    /// Samples removed from the graph have degree zero.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.cardinality];
        for e in &self.edges {
            degrees[e.left] += 1;
            degrees[e.right] += 1;
        }
        degrees
    }

    /// Returns the degree of sample `i`.
    #[must_use]
    pub fn degree(&self, i: usize) -> usize {
        self.edges.iter().filter(|e| e.contains(i)).count()
    }

    /// Returns the neighbors of sample `i`, in increasing order.
    #[must_use]
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        let mut neighbors = self.edges.iter().filter_map(|e| e.neighbor(i)).collect::<Vec<_>>();
        neighbors.sort_unstable();
        neighbors
    }

    /// Checks whether every node can reach every other node.
    ///
    /// An empty graph is considered connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        let Some(&start) = self.nodes.first() else {
            return true;
        };

        let mut adjacency = vec![Vec::new(); self.cardinality];
        for e in &self.edges {
            adjacency[e.left].push(e.right);
            adjacency[e.right].push(e.left);
        }

        let mut visited = vec![false; self.cardinality];
        visited[start] = true;
        let mut frontier = VecDeque::from([start]);
        let mut reached = 1;
        while let Some(i) = frontier.pop_front() {
            for &j in &adjacency[i] {
                if !visited[j] {
                    visited[j] = true;
                    reached += 1;
                    frontier.push_back(j);
                }
            }
        }

        reached == self.nodes.len()
    }

    /// Annotates every edge as pure or mixed under the given labels.
    #[must_use]
    pub fn classify(mut self, labels: &LabelCodes) -> Self {
        let codes = labels.codes();
        for e in &mut self.edges {
            e.kind = Some(if e.is_pure(codes) { EdgeKind::Pure } else { EdgeKind::Mixed });
        }
        self
    }

    /// Returns the number of edges annotated as pure.
    ///
    /// This is zero until `classify` has been called.
    #[must_use]
    pub fn pure_edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.kind == Some(EdgeKind::Pure)).count()
    }

    /// Removes every node with no edges.
    ///
    /// Edges and their classification are left untouched.
    #[must_use]
    pub fn drop_isolates(mut self) -> Self {
        let degrees = self.degrees();
        let before = self.nodes.len();
        self.nodes.retain(|&i| degrees[i] > 0);
        ftlog::debug!("Dropped {} isolated nodes.", before - self.nodes.len());
        self
    }

    /// Writes the edges to a CSV file with the columns
    /// `left,right,distance,kind`, naming samples by `names`.
    ///
    /// The `kind` column is empty for unclassified edges. Names containing the
    /// delimiter or quotes are quoted.
    ///
    /// # Errors
    ///
    /// * If there is not one name per sample.
    /// * If the file cannot be created or written to.
    pub fn write_csv<P: AsRef<std::path::Path>>(&self, path: &P, names: &[String]) -> Result<()> {
        if names.len() != self.cardinality {
            return Err(GraphTestError::InvalidInput(format!(
                "Got {} names for a graph over {} samples.",
                names.len(),
                self.cardinality
            )));
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["left", "right", "distance", "kind"])?;
        for e in &self.edges {
            writer.write_record([
                names[e.left].as_str(),
                names[e.right].as_str(),
                &e.distance.to_string(),
                e.kind.map_or("", EdgeKind::name),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeKind, ProximityGraph};
    use crate::{Connectivity, GraphTestError, LabelCodes};

    fn path_graph() -> ProximityGraph {
        let edges = vec![Edge::new(1, 0, 1.0), Edge::new(1, 2, 2.0), Edge::new(0, 1, 1.0)];
        ProximityGraph::new(4, edges, Connectivity::Mst)
    }

    #[test]
    fn edges_are_normalized() {
        let e = Edge::new(3, 1, 0.5);
        assert_eq!(e.endpoints(), [1, 3]);
        assert_eq!(e.neighbor(1), Some(3));
        assert_eq!(e.neighbor(3), Some(1));
        assert_eq!(e.neighbor(2), None);
        assert_eq!(e.to_string(), "1 -- 3");
        assert!(e.kind().is_none());
    }

    #[test]
    fn structure() {
        let graph = path_graph();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.degrees(), vec![1, 2, 1, 0]);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.neighbors(1), vec![0, 2]);
        assert!(!graph.is_connected());

        let graph = graph.drop_isolates();
        assert_eq!(graph.nodes(), &[0, 1, 2]);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_connected());
    }

    #[test]
    fn classification_survives_isolate_removal() -> Result<(), GraphTestError> {
        let labels = LabelCodes::new(&["A".to_string(), "A".to_string(), "B".to_string(), "B".to_string()])?;
        let graph = path_graph().classify(&labels);

        let kinds = graph.edges().iter().map(Edge::kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![Some(EdgeKind::Pure), Some(EdgeKind::Mixed)]);
        assert_eq!(graph.pure_edge_count(), 1);

        let dropped = graph.clone().drop_isolates();
        assert_eq!(dropped.edges(), graph.edges());
        assert_eq!(dropped.pure_edge_count(), 1);
        Ok(())
    }

    #[test]
    fn csv_quotes_names() -> Result<(), GraphTestError> {
        let labels = LabelCodes::new(&["A".to_string(), "B".to_string()])?;
        let graph = ProximityGraph::new(2, vec![Edge::new(0, 1, 1.0)], Connectivity::Mst).classify(&labels);

        let dir = tempdir::TempDir::new("edges")?;
        let path = dir.path().join("edges.csv");
        let names = ["a,1".to_string(), "b".to_string()];
        graph.write_csv(&path, &names)?;

        let mut reader = csv::Reader::from_path(&path)?;
        assert_eq!(reader.headers()?.iter().collect::<Vec<_>>(), ["left", "right", "distance", "kind"]);
        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["a,1", "b", "1", "mixed"]);

        assert!(graph.write_csv(&path, &names[..1]).is_err());
        Ok(())
    }
}
