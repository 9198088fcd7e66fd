//! Error types for equipartition queries.
//!
//! Both kinds are detected before any sweep state is built and propagate
//! immediately; the core never perturbs input or returns a partial result.

use thiserror::Error;

/// Coordinate axis of a detected collision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// Two input points share an x or y coordinate. The rotation argument
    /// needs pairwise-distinct coordinates, so ties are rejected up front
    /// rather than jittered away.
    #[error("degenerate position: points #{first} and #{second} share {axis} = {value}")]
    DegeneratePosition {
        axis: Axis,
        value: f64,
        first: usize,
        second: usize,
    },
    /// Empty input or a non-finite coordinate.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
