extern crate sketch_curves;

use sketch_curves::*;

mod curve;
mod subdivide;

pub fn approx_equal(a: f64, b: f64) -> bool {
    f64::abs(a-b) < 1e-6
}

#[test]
fn curves_compare_by_control_points() {
    let curve1 = Curve::from_points(vec![Coord2(1.0, 1.0), Coord2(2.0, 2.0)]);
    let curve2 = Curve::from_points(vec![Coord2(1.0, 1.0), Coord2(2.0, 2.0)]);

    assert!(curve1 == curve2);
}
