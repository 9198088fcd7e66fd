//! Median anchor selection.
//!
//! The concurrency point is fixed once per query: its x comes from the point
//! with median x-coordinate, its y from the point with median y-coordinate.
//! For even n the lower of the two central order statistics is taken, which
//! keeps repeated queries reproducible. The sweep never relocates this
//! anchor; the existence theorem guarantees a valid rotation about it.

use crate::Vec2;

/// Coordinate-wise median anchor of a non-empty point set. O(n).
pub fn median_anchor(points: &[Vec2<f64>]) -> Vec2<f64> {
    debug_assert!(!points.is_empty());
    let mid = (points.len() - 1) / 2;
    let mut xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let mut ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    let (_, mx, _) = xs.select_nth_unstable_by(mid, f64::total_cmp);
    let mx = *mx;
    let (_, my, _) = ys.select_nth_unstable_by(mid, f64::total_cmp);
    Vec2::new(mx, *my)
}
