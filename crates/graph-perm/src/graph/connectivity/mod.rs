//! The rules that decide which pairs of samples become edges.

pub mod knn;
pub mod mst;
pub mod threshold;

use serde::{Deserialize, Serialize};

use crate::{DistanceMatrix, GraphTestError, Result};

use super::Edge;

/// A rule for turning a `DistanceMatrix` into a set of edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Connectivity {
    /// The minimum spanning tree of the complete weighted graph.
    #[default]
    Mst,
    /// Each sample is linked to its `k` nearest other samples. The relation is
    /// symmetrized, so a pair is an edge if either end lists the other.
    Knn {
        /// The number of neighbors of each sample.
        k: usize,
    },
    /// Every pair of samples at most `max_dist` apart is linked.
    ThresholdValue {
        /// The largest distance at which two samples are linked.
        max_dist: f64,
    },
    /// The threshold is the `n_edges`-th smallest pairwise distance, counting
    /// each unordered pair once. Ties may produce more than `n_edges` edges.
    ThresholdEdges {
        /// The requested number of edges. `None` requests as many edges as
        /// there are samples.
        n_edges: Option<usize>,
    },
}

impl core::fmt::Display for Connectivity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameters for the rules, used when a rule is chosen by name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleParams {
    /// The number of neighbors for `knn`.
    pub knn: usize,
    /// The maximum distance for `threshold.value`.
    pub max_dist: f64,
    /// The requested number of edges for `threshold.nedges`.
    pub n_edges: Option<usize>,
}

impl Default for RuleParams {
    fn default() -> Self {
        Self {
            knn: 1,
            max_dist: 0.4,
            n_edges: None,
        }
    }
}

impl Connectivity {
    /// The names of the rules, as accepted by `from_name`.
    pub const NAMES: [&'static str; 4] = ["mst", "knn", "threshold.value", "threshold.nedges"];

    /// Returns the name of the rule.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mst => Self::NAMES[0],
            Self::Knn { .. } => Self::NAMES[1],
            Self::ThresholdValue { .. } => Self::NAMES[2],
            Self::ThresholdEdges { .. } => Self::NAMES[3],
        }
    }

    /// Chooses a rule by name, taking its parameter from `params`.
    ///
    /// # Errors
    ///
    /// If the name is not one of `NAMES`.
    pub fn from_name(name: &str, params: &RuleParams) -> Result<Self> {
        match name {
            "mst" => Ok(Self::Mst),
            "knn" => Ok(Self::Knn { k: params.knn }),
            "threshold.value" => Ok(Self::ThresholdValue {
                max_dist: params.max_dist,
            }),
            "threshold.nedges" => Ok(Self::ThresholdEdges {
                n_edges: params.n_edges,
            }),
            _ => Err(GraphTestError::InvalidInput(format!(
                "Unknown connectivity rule `{name}`. Expected one of {:?}.",
                Self::NAMES
            ))),
        }
    }

    /// Checks the rule's parameter against the number of samples.
    ///
    /// # Errors
    ///
    /// * If `k` is zero or not smaller than the number of samples.
    /// * If `max_dist` is negative or NaN.
    /// * If `n_edges` is zero.
    pub fn validate(&self, cardinality: usize) -> Result<()> {
        match *self {
            Self::Mst => Ok(()),
            Self::Knn { k } if k == 0 || k >= cardinality => Err(GraphTestError::Configuration(format!(
                "knn needs 0 < k < {cardinality} for {cardinality} samples, got k = {k}."
            ))),
            Self::ThresholdValue { max_dist } if max_dist.is_nan() || max_dist < 0.0 => Err(
                GraphTestError::Configuration(format!("max_dist must be non-negative, got {max_dist}.")),
            ),
            Self::ThresholdEdges { n_edges: Some(0) } => Err(GraphTestError::Configuration(
                "n_edges must be positive.".to_string(),
            )),
            _ => Ok(()),
        }
    }

    /// Computes the edges this rule induces on `matrix`.
    ///
    /// # Errors
    ///
    /// See `validate`.
    pub fn edges(&self, matrix: &DistanceMatrix) -> Result<Vec<Edge>> {
        self.validate(matrix.cardinality())?;

        let edges = match *self {
            Self::Mst => mst::spanning_tree(matrix),
            Self::Knn { k } => knn::symmetric_neighbors(matrix, k),
            Self::ThresholdValue { max_dist } => threshold::within(matrix, max_dist),
            Self::ThresholdEdges { n_edges } => {
                let n_edges = n_edges.unwrap_or_else(|| matrix.cardinality());
                threshold::within(matrix, threshold::distance_at_rank(matrix, n_edges))
            }
        };

        Ok(edges)
    }
}
