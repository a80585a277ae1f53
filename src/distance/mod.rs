//! Distance matrices for solvers that consume generated instances.
//!
//! Converts the sparse, partly one-directional instance graph into a dense
//! matrix, either as stored or with customer edges mirrored.

mod matrix;

pub use matrix::DistanceMatrix;
