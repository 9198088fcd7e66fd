//! Partition a small fixed point set and print both variants' results.
//!
//! Usage:
//!   cargo run -p equipart --example quadrant_demo

use equipart::prelude::*;

fn main() {
    let points = vec![
        Vec2::new(-4.0, 1.0),
        Vec2::new(-3.0, -2.0),
        Vec2::new(-2.0, 3.0),
        Vec2::new(-1.0, -4.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(3.0, -3.0),
        Vec2::new(4.0, 4.0),
    ];
    for (name, variant) in [
        ("original", Variant::Original),
        ("efficient", Variant::Efficient),
    ] {
        match orthogonal_equipartition(&points, variant) {
            Ok(r) => println!(
                "{name}: center=({:.2}, {:.2}) theta={:.4} counts={:?} imbalance={} balanced={}",
                r.center.x,
                r.center.y,
                r.theta,
                r.counts.0,
                r.imbalance,
                r.is_balanced()
            ),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
