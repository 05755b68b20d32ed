//! Connectivity rules for use in the CLI.

use graph_perm::{Connectivity, RuleParams};

/// The available connectivity rules.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Rule {
    #[clap(name = "mst")]
    Mst = 0,
    #[clap(name = "knn")]
    Knn = 1,
    #[clap(name = "threshold.value")]
    ThresholdValue = 2,
    #[clap(name = "threshold.nedges")]
    ThresholdEdges = 3,
}

impl Rule {
    /// The name of the rule as known to the library.
    pub const fn name(self) -> &'static str {
        Connectivity::NAMES[self as usize]
    }
}

/// The rule and its parameters.
#[derive(clap::Args, Debug)]
pub struct RuleArgs {
    /// The rule deciding which pairs of samples become edges.
    #[arg(short('r'), long, default_value = "mst")]
    pub rule: Rule,

    /// The number of neighbors for `knn`.
    #[arg(short('k'), long, default_value_t = 1)]
    pub knn: usize,

    /// The maximum distance for `threshold.value`.
    #[arg(long, default_value_t = 0.4)]
    pub max_dist: f64,

    /// The requested number of edges for `threshold.nedges`. Defaults to the
    /// number of samples.
    #[arg(long)]
    pub n_edges: Option<usize>,

    /// Whether to drop samples with no edges from the reported graph.
    #[arg(long, default_value_t = false)]
    pub drop_isolates: bool,
}

impl RuleArgs {
    /// Get the `Connectivity` for the chosen rule.
    pub fn connectivity(&self) -> Result<Connectivity, String> {
        let params = RuleParams {
            knn: self.knn,
            max_dist: self.max_dist,
            n_edges: self.n_edges,
        };
        Connectivity::from_name(self.rule.name(), &params).map_err(|e| e.to_string())
    }
}
