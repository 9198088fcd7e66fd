//! Orthogonal equipartition queries.
//!
//! A query validates the input, fixes the concurrency point at the
//! coordinate medians, enumerates ray crossings with the selected strategy,
//! sweeps them, and packages the winner. Everything is call-local, so
//! concurrent queries need no coordination.

use std::f64::consts::FRAC_PI_2;

use crate::error::Error;
use crate::events::{enumerate, Variant};
use crate::geom::{median_anchor, validate_general_position, QuadrantCounts};
use crate::sweep::sweep;
use crate::Vec2;

/// Result of one equipartition query.
///
/// `theta` is the direction of the first line in [0, π/2); the second line
/// is θ + π/2 by construction. `counts` are the quadrant tallies at the
/// winning orientation and `imbalance` is max(counts) − ⌈n/4⌉.
#[derive(Clone, Copy, Debug)]
pub struct Equipartition {
    pub center: Vec2<f64>,
    pub theta: f64,
    pub counts: QuadrantCounts,
    pub imbalance: usize,
}

impl Equipartition {
    /// True when every quadrant holds ⌊n/4⌋ or ⌈n/4⌉ points.
    pub fn is_balanced(&self) -> bool {
        let n = self.counts.total();
        self.counts.0.iter().all(|&c| (n / 4..=n.div_ceil(4)).contains(&c))
    }
}

/// Compute an orthogonal equipartition of `points`.
///
/// Fails with [`Error::DegeneratePosition`] when two points share an x or y
/// coordinate and with [`Error::InvalidInput`] on empty or non-finite input.
/// Small n is not an error; nonzero imbalance is a valid outcome.
pub fn orthogonal_equipartition(
    points: &[Vec2<f64>],
    variant: Variant,
) -> Result<Equipartition, Error> {
    validate_general_position(points)?;
    let center = median_anchor(points);
    let rel: Vec<Vec2<f64>> = points.iter().map(|p| p - center).collect();
    let events = enumerate(variant, &rel);
    let outcome = sweep(&rel, &events);

    // Normalize the winning orientation into [0, π/2). An angle-domain
    // winner in the upper half-turn describes the same line pair as the
    // orientation a quarter turn earlier; its tallies carry over with the
    // labels retreated by one.
    let (theta, counts) = match (variant, outcome.best_key) {
        (_, None) => (0.0, outcome.counts),
        (Variant::Efficient, Some(s)) => (s.atan(), outcome.counts),
        (Variant::Original, Some(a)) if a < FRAC_PI_2 => (a, outcome.counts),
        (Variant::Original, Some(a)) => (a - FRAC_PI_2, outcome.counts.retreat_labels()),
    };

    Ok(Equipartition {
        center,
        theta,
        counts,
        imbalance: outcome.imbalance,
    })
}
