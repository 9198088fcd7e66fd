//! Event sweep: incremental quadrant maintenance and incumbent tracking.
//!
//! Starts from the θ = 0 tallies, applies crossings in key order, and scores
//! the imbalance after each group of simultaneous crossings. Events sharing
//! a key are applied as one combined update so transient states between tied
//! crossings are never scored. The first orientation reaching the minimum
//! imbalance wins; later ties never displace it, which makes repeated
//! queries deterministic.

use crate::events::Event;
use crate::geom::{quadrant, QuadrantCounts};
use crate::Vec2;

/// Outcome of a sweep: the winning event key (`None` when the initial
/// orientation wins) with its tallies and imbalance.
#[derive(Clone, Copy, Debug)]
pub struct SweepOutcome {
    pub best_key: Option<f64>,
    pub counts: QuadrantCounts,
    pub imbalance: usize,
}

/// Sweep the sorted `events` over the translated points `rel`.
pub fn sweep(rel: &[Vec2<f64>], events: &[Event]) -> SweepOutcome {
    let mut quad: Vec<u8> = rel.iter().map(|q| quadrant(q.x, q.y) as u8).collect();
    let mut counts = QuadrantCounts::default();
    for &k in &quad {
        counts.0[k as usize] += 1;
    }

    let mut best = SweepOutcome {
        best_key: None,
        counts,
        imbalance: counts.imbalance(),
    };

    let mut i = 0;
    while i < events.len() {
        let key = events[i].key;
        while i < events.len() && events[i].key == key {
            let p = events[i].point;
            let from = quad[p] as usize;
            let to = (from + 3) % 4;
            counts.0[from] -= 1;
            counts.0[to] += 1;
            quad[p] = to as u8;
            i += 1;
        }
        debug_assert_eq!(counts.total(), rel.len());
        let imbalance = counts.imbalance();
        if imbalance < best.imbalance {
            best = SweepOutcome {
                best_key: Some(key),
                counts,
                imbalance,
            };
        }
    }
    best
}
