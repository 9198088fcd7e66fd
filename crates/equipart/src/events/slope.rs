//! Slope-domain enumeration (the slope-event formulation).
//!
//! Each point crosses exactly one ray while θ sweeps the quarter turn
//! [0, π/2). The crossing slope is dy/dx when the first line passes the
//! point and -dx/dy when the perpendicular does; whichever is positive is
//! the one in range, so each point yields at most one event from a single
//! division — half the events of the angle form and no trigonometry in the
//! sort keys.

use super::{crossing_slope, Event};
use crate::Vec2;

pub(crate) fn events(rel: &[Vec2<f64>]) -> Vec<Event> {
    let mut out = Vec::with_capacity(rel.len());
    for (point, &q) in rel.iter().enumerate() {
        if let Some(key) = crossing_slope(q) {
            out.push(Event { key, point });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_event_per_generic_point() {
        let rel = vec![
            Vec2::new(1.0, 2.0),
            Vec2::new(-3.0, -1.0),
            Vec2::new(2.0, -5.0),
        ];
        let ev = events(&rel);
        assert_eq!(ev.len(), 3);
        assert!(ev.iter().all(|e| e.key > 0.0));
    }

    #[test]
    fn axis_points_and_origin_yield_nothing() {
        let rel = vec![
            Vec2::new(0.0, 1.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 0.0),
        ];
        assert!(events(&rel).is_empty());
    }
}
