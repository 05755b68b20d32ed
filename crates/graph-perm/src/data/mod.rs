//! The inputs of a test: distances, sample metadata and groupings.

pub mod grouping;
pub mod matrix;
pub mod samples;
