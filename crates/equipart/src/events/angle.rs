//! Angle-domain enumeration (the angle-scanning formulation).
//!
//! The frame has some ray pass through a point whenever θ is congruent to the
//! point's polar angle mod π/2. Over the sweep range [0, π) that is two
//! crossings per point, one per line of the pair; points already on a ray at
//! θ = 0 are classified post-transition and cross once more at π/2.

use std::f64::consts::{FRAC_PI_2, PI};

use super::{crossing_slope, Event};
use crate::Vec2;

pub(crate) fn events(rel: &[Vec2<f64>]) -> Vec<Event> {
    let mut out = Vec::with_capacity(rel.len() * 2);
    for (point, &q) in rel.iter().enumerate() {
        let base = crossing_slope(q).map_or(0.0, f64::atan);
        if base > 0.0 {
            out.push(Event { key: base, point });
        }
        let second = base + FRAC_PI_2;
        // A rounding collision onto π would duplicate the θ = 0 state.
        if second < PI {
            out.push(Event { key: second, point });
        }
    }
    out
}
