//! Errors raised while setting up or running a graph permutation test.

use thiserror::Error;

/// Everything that can go wrong before a test produces a result.
///
/// All of these are raised eagerly, before any permutation work begins.
#[derive(Debug, Error)]
pub enum GraphTestError {
    /// The test was asked to do something it cannot, e.g. a grouping whose
    /// groups mix labels, an unknown label column, or zero permutations.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The data handed to the test is malformed, e.g. a distance matrix that
    /// is not square or a sample count that does not match the metadata.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Reading input from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV file failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphTestError>;
