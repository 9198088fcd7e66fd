//! Quadrant classification and tallies.

use crate::Vec2;

/// Quadrant index (0..4) of a point with frame coordinates `(a, b)`.
///
/// Half-open convention: quadrant k covers relative angles in
/// (k·π/2, (k+1)·π/2], so a point exactly on a boundary ray belongs to the
/// quadrant it is about to enter as the frame rotates counterclockwise. The
/// frame origin classifies like a point on the positive first axis
/// (quadrant index 3).
#[inline]
pub fn quadrant(a: f64, b: f64) -> usize {
    if b > 0.0 {
        if a >= 0.0 {
            0
        } else {
            1
        }
    } else if b < 0.0 {
        if a <= 0.0 {
            2
        } else {
            3
        }
    } else if a < 0.0 {
        1
    } else {
        3
    }
}

/// Per-quadrant point tallies.
///
/// Invariant: the four tallies sum to the size of the classified set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuadrantCounts(pub [usize; 4]);

impl QuadrantCounts {
    /// Total number of tallied points.
    #[inline]
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Largest tally minus the equipartition target ⌈n/4⌉.
    ///
    /// Zero iff no quadrant exceeds the target; the pigeonhole bound
    /// max ≥ ⌈n/4⌉ keeps the subtraction in range.
    #[inline]
    pub fn imbalance(&self) -> usize {
        let max = self.0.iter().fold(0, |m, &c| m.max(c));
        max - self.total().div_ceil(4)
    }

    /// Tallies for the same line pair described in the frame a quarter turn
    /// earlier: label k takes what was labelled k−1. A point in quadrant 1
    /// of the frame at θ + π/2 sits in quadrant 2 of the frame at θ.
    #[inline]
    pub fn retreat_labels(&self) -> Self {
        let [q1, q2, q3, q4] = self.0;
        QuadrantCounts([q4, q1, q2, q3])
    }
}

/// Count points per quadrant for the frame at angle `theta` about `center`.
///
/// Read-only recount for consumers and tests; the sweep maintains its tallies
/// incrementally instead of calling this per orientation.
pub fn quadrant_counts(points: &[Vec2<f64>], center: Vec2<f64>, theta: f64) -> QuadrantCounts {
    let (sin, cos) = theta.sin_cos();
    let mut counts = QuadrantCounts::default();
    for p in points {
        let q = p - center;
        let a = cos * q.x + sin * q.y;
        let b = cos * q.y - sin * q.x;
        counts.0[quadrant(a, b)] += 1;
    }
    counts
}
