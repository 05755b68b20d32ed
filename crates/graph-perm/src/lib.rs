#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod config;
mod data;
mod error;
pub mod graph;
pub mod permutation;
mod result;
pub mod utils;

pub use config::{TestConfig, DEFAULT_PERMUTATIONS};
pub use data::{
    grouping::{is_valid_grouping, Grouping},
    matrix::DistanceMatrix,
    samples::{LabelCodes, SampleData, SampleTable},
};
pub use error::{GraphTestError, Result};
pub use graph::{Connectivity, Edge, EdgeKind, ProximityGraph, RuleParams};
pub use graph_test::graph_perm_test;
pub use permutation::{count_pure_edges, p_value, LabelPermuter, PermutationTest};
pub use result::TestResult;

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
