//! Settings for a graph permutation test.

use serde::{Deserialize, Serialize};

use crate::Connectivity;

/// The number of permutations drawn when none is specified.
pub const DEFAULT_PERMUTATIONS: usize = 499;

/// Settings for `graph_perm_test`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConfig {
    /// The rule used to build the graph.
    pub connectivity: Connectivity,
    /// Whether nodes with no edges stay in the returned graph.
    pub keep_isolates: bool,
    /// The number of permutations in the null distribution.
    pub permutations: usize,
    /// The seed for the random number generator. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Whether to draw the permutations on multiple threads.
    pub parallel: bool,
    /// The name of the distance measure the matrix was computed with. It is
    /// carried into the result untouched.
    pub distance_name: Option<String>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self::new(Connectivity::Mst)
    }
}

impl TestConfig {
    /// Creates the default settings for the given rule.
    #[must_use]
    pub const fn new(connectivity: Connectivity) -> Self {
        Self {
            connectivity,
            keep_isolates: true,
            permutations: DEFAULT_PERMUTATIONS,
            seed: None,
            parallel: false,
            distance_name: None,
        }
    }

    /// Sets whether isolated nodes are kept in the returned graph.
    #[must_use]
    pub const fn with_keep_isolates(mut self, keep_isolates: bool) -> Self {
        self.keep_isolates = keep_isolates;
        self
    }

    /// Sets the number of permutations.
    #[must_use]
    pub const fn with_permutations(mut self, permutations: usize) -> Self {
        self.permutations = permutations;
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether permutations are drawn in parallel.
    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the name of the distance measure.
    #[must_use]
    pub fn with_distance_name(mut self, name: &str) -> Self {
        self.distance_name = Some(name.to_string());
        self
    }
}
