use super::*;
use crate::error::{Axis, Error};
use crate::Vec2;

#[test]
fn quadrant_interiors() {
    assert_eq!(quadrant(1.0, 2.0), 0);
    assert_eq!(quadrant(-1.0, 2.0), 1);
    assert_eq!(quadrant(-1.0, -2.0), 2);
    assert_eq!(quadrant(1.0, -2.0), 3);
}

#[test]
fn quadrant_boundaries_follow_the_ccw_entering_rule() {
    // A point on a ray belongs to the quadrant it is about to enter as the
    // frame rotates counterclockwise.
    assert_eq!(quadrant(0.0, 1.0), 0); // positive second axis
    assert_eq!(quadrant(-1.0, 0.0), 1); // negative first axis
    assert_eq!(quadrant(0.0, -1.0), 2); // negative second axis
    assert_eq!(quadrant(1.0, 0.0), 3); // positive first axis
    assert_eq!(quadrant(0.0, 0.0), 3); // frame origin
}

#[test]
fn counts_partition_every_point_at_any_orientation() {
    let pts = vec![
        Vec2::new(-4.0, 1.0),
        Vec2::new(-3.0, -2.0),
        Vec2::new(-2.0, 3.0),
        Vec2::new(-1.0, -4.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(3.0, -3.0),
        Vec2::new(4.0, 4.0),
    ];
    let center = Vec2::new(-1.0, -1.0);
    for k in 0..32 {
        let theta = k as f64 * 0.1;
        assert_eq!(quadrant_counts(&pts, center, theta).total(), pts.len());
    }
}

#[test]
fn counts_at_zero_match_sign_classification() {
    let pts = vec![
        Vec2::new(2.0, 3.0),   // Q1
        Vec2::new(-2.0, 3.0),  // Q2
        Vec2::new(-2.0, -3.0), // Q3
        Vec2::new(2.0, -3.0),  // Q4
        Vec2::new(4.0, 0.0),   // on the first axis -> Q4
    ];
    let counts = quadrant_counts(&pts, Vec2::new(0.0, 0.0), 0.0);
    assert_eq!(counts, QuadrantCounts([1, 1, 1, 2]));
}

#[test]
fn rotating_the_frame_by_a_quarter_turn_relabels_counts() {
    let pts = vec![
        Vec2::new(3.0, 1.0),
        Vec2::new(2.5, 1.5),
        Vec2::new(-1.0, 2.0),
        Vec2::new(-2.0, -0.5),
    ];
    let center = Vec2::new(0.25, 0.125);
    let theta = 0.3;
    let low = quadrant_counts(&pts, center, theta);
    let high = quadrant_counts(&pts, center, theta + std::f64::consts::FRAC_PI_2);
    assert_eq!(high.retreat_labels(), low);
}

#[test]
fn imbalance_is_max_minus_ceil_target() {
    assert_eq!(QuadrantCounts([2, 2, 2, 2]).imbalance(), 0);
    assert_eq!(QuadrantCounts([3, 1, 2, 2]).imbalance(), 1);
    assert_eq!(QuadrantCounts([1, 0, 0, 0]).imbalance(), 0);
    assert_eq!(QuadrantCounts([2, 2, 1, 0]).imbalance(), 0);
    assert_eq!(QuadrantCounts([5, 0, 0, 0]).imbalance(), 3);
}

#[test]
fn duplicate_y_is_degenerate() {
    let pts = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
    match validate_general_position(&pts) {
        Err(Error::DegeneratePosition {
            axis,
            value,
            first,
            second,
        }) => {
            assert_eq!(axis, Axis::Y);
            assert_eq!(value, 0.0);
            assert_eq!((first, second), (0, 1));
        }
        other => panic!("expected degenerate position, got {other:?}"),
    }
}

#[test]
fn duplicate_x_is_degenerate() {
    let pts = vec![
        Vec2::new(2.0, 1.0),
        Vec2::new(0.0, 3.0),
        Vec2::new(2.0, -5.0),
    ];
    match validate_general_position(&pts) {
        Err(Error::DegeneratePosition { axis, first, second, .. }) => {
            assert_eq!(axis, Axis::X);
            assert_eq!((first, second), (0, 2));
        }
        other => panic!("expected degenerate position, got {other:?}"),
    }
}

#[test]
fn empty_and_non_finite_inputs_are_invalid() {
    assert!(matches!(
        validate_general_position(&[]),
        Err(Error::InvalidInput(_))
    ));
    let pts = vec![Vec2::new(0.0, 1.0), Vec2::new(f64::NAN, 2.0)];
    assert!(matches!(
        validate_general_position(&pts),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn general_position_passes() {
    let pts = vec![
        Vec2::new(0.5, -1.0),
        Vec2::new(1.5, 3.0),
        Vec2::new(-2.0, 0.25),
    ];
    assert!(validate_general_position(&pts).is_ok());
}
