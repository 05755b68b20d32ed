//! Building the null distribution of the purity statistic by permutation.

mod permuter;
mod purity;

use rand::prelude::*;
use rayon::prelude::*;

use crate::{graph::Edge, GraphTestError, LabelCodes, Result};

pub use permuter::LabelPermuter;
pub use purity::count_pure_edges;

/// The number of permutations drawn from each random stream in `par_run`.
///
/// Fixing the chunk size, rather than deriving it from the number of threads,
/// keeps the null distribution identical across machines for a given seed.
pub const CHUNK_SIZE: usize = 64;

/// The outcome of a permutation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationOutcome {
    /// The purity statistic under the observed labels.
    pub observed: usize,
    /// The purity statistic under each permutation, in the order drawn.
    pub null: Vec<usize>,
    /// The upper-tail p-value with the add-one correction.
    pub p_value: f64,
}

/// Computes the upper-tail permutation p-value of `observed`.
///
/// This is `(#{s in null : s >= observed} + 1) / (null.len() + 1)`, so it lies
/// in `(0, 1]`: the observed labeling counts as one of the permutations.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn p_value(observed: usize, null: &[usize]) -> f64 {
    let at_least = null.iter().filter(|&&s| s >= observed).count();
    (at_least + 1) as f64 / (null.len() + 1) as f64
}

/// A permutation test of the purity statistic over a fixed set of edges.
///
/// The edges and the observed labels are only read, so one test can be shared
/// by many workers.
#[derive(Debug, Clone)]
pub struct PermutationTest<'a> {
    /// The edges of the graph, built once.
    edges: &'a [Edge],
    /// The observed labels.
    labels: &'a LabelCodes,
    /// Draws group-level permutations of `labels`.
    permuter: LabelPermuter,
}

impl<'a> PermutationTest<'a> {
    /// Creates a test over `edges` for the observed `labels`, permuting within
    /// the given `groups` (one group identifier per sample).
    ///
    /// The grouping is not validated here; see `is_valid_grouping`.
    ///
    /// # Errors
    ///
    /// If there is not one group identifier per label.
    pub fn new(edges: &'a [Edge], labels: &'a LabelCodes, groups: &[String]) -> Result<Self> {
        let permuter = LabelPermuter::new(labels, groups)?;
        Ok(Self {
            edges,
            labels,
            permuter,
        })
    }

    /// Returns the group-level permuter.
    #[must_use]
    pub const fn permuter(&self) -> &LabelPermuter {
        &self.permuter
    }

    /// Returns the purity statistic under the observed labels.
    #[must_use]
    pub fn observed(&self) -> usize {
        count_pure_edges(self.edges, self.labels.codes())
    }

    /// Draws `permutations` permutations and returns the statistic under each.
    pub fn null_distribution<R: Rng>(&self, permutations: usize, rng: &mut R) -> Vec<usize> {
        (0..permutations)
            .map(|_| count_pure_edges(self.edges, &self.permuter.permute_codes(rng)))
            .collect()
    }

    /// Parallel version of [`PermutationTest::null_distribution`](Self::null_distribution).
    ///
    /// The permutations are split into chunks of `CHUNK_SIZE`, and chunk `c`
    /// draws from its own `StdRng` seeded with `seed + c`. The result depends
    /// only on `seed`, not on how many threads run the chunks.
    #[must_use]
    pub fn par_null_distribution(&self, permutations: usize, seed: u64) -> Vec<usize> {
        let num_chunks = permutations.div_ceil(CHUNK_SIZE);
        (0..num_chunks)
            .into_par_iter()
            .map(|c| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(c as u64));
                let size = CHUNK_SIZE.min(permutations - c * CHUNK_SIZE);
                self.null_distribution(size, &mut rng)
            })
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Runs the test with `permutations` permutations drawn from `rng`.
    ///
    /// # Errors
    ///
    /// If `permutations` is zero.
    pub fn run<R: Rng>(&self, permutations: usize, rng: &mut R) -> Result<PermutationOutcome> {
        check_permutations(permutations)?;
        let observed = self.observed();
        ftlog::debug!("Observed {observed} pure edges out of {}.", self.edges.len());
        let null = self.null_distribution(permutations, rng);
        Ok(outcome(observed, null))
    }

    /// Parallel version of [`PermutationTest::run`](Self::run).
    ///
    /// # Errors
    ///
    /// If `permutations` is zero.
    pub fn par_run(&self, permutations: usize, seed: u64) -> Result<PermutationOutcome> {
        check_permutations(permutations)?;
        let observed = self.observed();
        ftlog::debug!("Observed {observed} pure edges out of {}.", self.edges.len());
        let null = self.par_null_distribution(permutations, seed);
        Ok(outcome(observed, null))
    }
}

/// Rejects a run with no permutations.
fn check_permutations(permutations: usize) -> Result<()> {
    if permutations == 0 {
        Err(GraphTestError::Configuration(
            "The number of permutations must be positive.".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Assembles the outcome of a run.
fn outcome(observed: usize, null: Vec<usize>) -> PermutationOutcome {
    let p_value = p_value(observed, &null);
    ftlog::debug!("Finished {} permutations, p = {p_value}.", null.len());
    PermutationOutcome {
        observed,
        null,
        p_value,
    }
}
