//! The immutable outcome of a graph permutation test.

use serde::{Deserialize, Serialize};

use crate::{permutation::PermutationOutcome, utils, Connectivity, ProximityGraph, Result, TestConfig};

/// Everything a reporting or plotting collaborator needs from a test.
///
/// The graph's edges are classified as pure or mixed under the observed
/// labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// The number of pure edges under the observed labels.
    observed: usize,
    /// The number of pure edges under each permutation.
    null: Vec<usize>,
    /// The upper-tail permutation p-value.
    p_value: f64,
    /// The graph the test was run on.
    graph: ProximityGraph,
    /// The sample identifiers, in index order.
    sample_names: Vec<String>,
    /// The observed label of each sample.
    labels: Vec<String>,
    /// The name of the label column.
    label_name: String,
    /// The name of the distance measure, if one was given.
    distance_name: Option<String>,
}

impl core::fmt::Display for TestResult {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        writeln!(f, "Observed test statistic: {} pure edges", self.observed)?;
        writeln!(f, "{} total edges in the graph", self.graph.edge_count())?;
        write!(f, "Permutation p-value: {}", self.p_value)
    }
}

impl TestResult {
    /// Assembles a result.
    pub(crate) fn new(
        outcome: PermutationOutcome,
        graph: ProximityGraph,
        sample_names: Vec<String>,
        labels: Vec<String>,
        label_name: String,
        config: &TestConfig,
    ) -> Self {
        Self {
            observed: outcome.observed,
            null: outcome.null,
            p_value: outcome.p_value,
            graph,
            sample_names,
            labels,
            label_name,
            distance_name: config.distance_name.clone(),
        }
    }

    /// Returns the number of pure edges under the observed labels.
    #[must_use]
    pub const fn observed(&self) -> usize {
        self.observed
    }

    /// Returns the number of pure edges under each permutation.
    #[must_use]
    pub fn null_distribution(&self) -> &[usize] {
        &self.null
    }

    /// Returns the number of permutations drawn.
    #[must_use]
    pub fn permutations(&self) -> usize {
        self.null.len()
    }

    /// Returns the permutation p-value, which lies in `(0, 1]`.
    #[must_use]
    pub const fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Returns the graph, with edges classified under the observed labels.
    #[must_use]
    pub const fn graph(&self) -> &ProximityGraph {
        &self.graph
    }

    /// Returns the rule used to build the graph.
    #[must_use]
    pub const fn connectivity(&self) -> Connectivity {
        self.graph.connectivity()
    }

    /// Returns the sample identifiers.
    #[must_use]
    pub fn sample_names(&self) -> &[String] {
        &self.sample_names
    }

    /// Returns the observed labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the name of the label column.
    #[must_use]
    pub fn label_name(&self) -> &str {
        &self.label_name
    }

    /// Returns the name of the distance measure, if one was given.
    #[must_use]
    pub fn distance_name(&self) -> Option<&str> {
        self.distance_name.as_deref()
    }

    /// Returns the mean of the null distribution.
    #[must_use]
    pub fn null_mean(&self) -> f64 {
        utils::mean(&self.null)
    }

    /// Returns the standard deviation of the null distribution.
    #[must_use]
    pub fn null_sd(&self) -> f64 {
        utils::standard_deviation(&self.null)
    }

    /// Writes the edges to a CSV file with the columns
    /// `left,right,distance,kind`, naming samples by their identifiers.
    ///
    /// # Errors
    ///
    /// If the file cannot be created or written to.
    pub fn write_edges_csv<P: AsRef<std::path::Path>>(&self, path: &P) -> Result<()> {
        self.graph.write_csv(path, &self.sample_names)
    }

    /// Writes the null distribution to a CSV file with a single `statistic`
    /// column, one row per permutation.
    ///
    /// # Errors
    ///
    /// If the file cannot be created or written to.
    pub fn write_null_csv<P: AsRef<std::path::Path>>(&self, path: &P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["statistic"])?;
        for s in &self.null {
            writer.write_record([s.to_string()])?;
        }
        writer.flush()?;
        Ok(())
    }
}
