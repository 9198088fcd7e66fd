//! Planar primitives for equipartition queries.
//!
//! Purpose
//! - Fix one half-open quadrant convention and use it everywhere: the sweep's
//!   initial tallies, the recount helper, and the tests all classify through
//!   [`quadrant`], so the four counts always partition all n points.
//! - Validate the general-position precondition before any sweep state exists.
//!
//! References
//! - Roy & Steiger (2007), section on orthogonal equipartitions.
//! - Code cross-refs: `events::{angle,slope}`, `sweep`, `partition`.

mod median;
mod types;
mod validate;

pub use median::median_anchor;
pub use types::{quadrant, quadrant_counts, QuadrantCounts};
pub use validate::validate_general_position;

#[cfg(test)]
mod tests;
