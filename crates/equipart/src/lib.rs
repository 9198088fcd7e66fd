//! Orthogonal equipartition of planar point sets.
//!
//! Given n points in general position (pairwise-distinct x and y
//! coordinates), find two perpendicular lines whose common intersection
//! splits the plane into four quadrants holding ⌊n/4⌋ or ⌈n/4⌉ points each.
//! The construction follows Roy & Steiger (2007), "Some Combinatorial and
//! Algorithmic Applications of the Borsuk-Ulam Theorem": fix the concurrency
//! point at the coordinate medians, then rotate the line pair through the
//! discrete orientations at which a point changes quadrant and keep the one
//! of minimum imbalance.
//!
//! Two event enumerations are available behind [`Variant`]: the
//! angle-scanning form and the slope-event form. Both feed the same sweep
//! and reach the same optimum; the slope form emits at most one event per
//! point and needs no trigonometry to order them.

pub mod error;
pub mod events;
pub mod geom;
pub mod partition;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::Error;
pub use events::Variant;
pub use nalgebra::Vector2 as Vec2;
pub use partition::{orthogonal_equipartition, Equipartition};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::events::Variant;
    pub use crate::geom::{quadrant_counts, QuadrantCounts};
    pub use crate::partition::{orthogonal_equipartition, Equipartition};
    pub use nalgebra::Vector2 as Vec2;
}
