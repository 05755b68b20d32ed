//! The commands under the `graph-perm` CLI.

pub mod graph;

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::rules::RuleArgs;

/// Where the samples and their distances come from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// The path to the `.npy` file holding the square distance matrix.
    #[arg(short('d'), long)]
    pub distances: PathBuf,

    /// The path to the sample metadata, a `.csv` or `.tsv` file whose first
    /// column holds the sample identifiers in distance-matrix order.
    #[arg(short('m'), long)]
    pub metadata: PathBuf,

    /// The name of the distance measure the matrix was computed with.
    #[arg(long)]
    pub distance_name: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the permutation test and report the p-value.
    Test {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        rule: RuleArgs,

        /// The metadata column holding the sample labels.
        #[arg(short('l'), long)]
        label: String,

        /// The metadata column holding the repeated-measures groups. Without
        /// one, every sample is permuted on its own.
        #[arg(short('g'), long)]
        grouping: Option<String>,

        /// The number of permutations.
        #[arg(short('n'), long, default_value_t = graph_perm::DEFAULT_PERMUTATIONS)]
        permutations: usize,

        /// Whether to draw the permutations on multiple threads.
        #[arg(short('p'), long, default_value_t = false)]
        parallel: bool,

        /// The directory in which to write `edges.csv` and
        /// `permutations.csv`.
        #[arg(short('o'), long)]
        out_dir: Option<PathBuf>,
    },
    /// Build the graph only and write its edges, classified by label.
    Graph {
        #[command(flatten)]
        inputs: InputArgs,

        #[command(flatten)]
        rule: RuleArgs,

        /// The metadata column holding the sample labels.
        #[arg(short('l'), long)]
        label: String,

        /// The path of the output CSV file.
        #[arg(short('o'), long)]
        out_path: PathBuf,
    },
}
