//! General-position validation.
//!
//! The rotation argument needs pairwise-distinct x and pairwise-distinct y
//! coordinates; a shared coordinate makes the median anchor ambiguous and
//! breaks the genericity the existence proof relies on. Ties surface as
//! [`Error::DegeneratePosition`] before any sweep state is built.

use crate::error::{Axis, Error};
use crate::Vec2;

/// Check that `points` is non-empty, finite, and in general position.
pub fn validate_general_position(points: &[Vec2<f64>]) -> Result<(), Error> {
    if points.is_empty() {
        return Err(Error::InvalidInput("expected at least one point".into()));
    }
    for (i, p) in points.iter().enumerate() {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "point #{i} has a non-finite coordinate"
            )));
        }
    }
    check_axis(points, Axis::X)?;
    check_axis(points, Axis::Y)
}

fn check_axis(points: &[Vec2<f64>], axis: Axis) -> Result<(), Error> {
    let coord = |i: usize| match axis {
        Axis::X => points[i].x,
        Axis::Y => points[i].y,
    };
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| coord(i).total_cmp(&coord(j)));
    for pair in order.windows(2) {
        let (i, j) = (pair[0], pair[1]);
        if coord(i) == coord(j) {
            return Err(Error::DegeneratePosition {
                axis,
                value: coord(i),
                first: i.min(j),
                second: i.max(j),
            });
        }
    }
    Ok(())
}
