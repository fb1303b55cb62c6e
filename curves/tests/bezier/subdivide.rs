use sketch_curves::*;
use sketch_curves::bezier;

fn parent_curve() -> Curve<Coord2> {
    Curve::from_points(vec![
        Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(3.0, 3.0), Coord2(4.0, 0.0)
    ])
}

#[test]
fn left_half_reproduces_the_parent_curve() {
    let parent          = parent_curve();
    let (left, _right)  = parent.subdivide().unwrap();

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        let original    = parent.evaluate(t*0.5).unwrap();
        let subdivision = left.evaluate(t).unwrap();

        assert!(original.distance_to(&subdivision) < 1e-6);
    }
}

#[test]
fn right_half_reproduces_the_parent_curve() {
    let parent          = parent_curve();
    let (_left, right)  = parent.subdivide().unwrap();

    for x in 0..=100 {
        let t = (x as f64)/100.0;

        let original    = parent.evaluate(0.5 + t*0.5).unwrap();
        let subdivision = right.evaluate(t).unwrap();

        assert!(original.distance_to(&subdivision) < 1e-6);
    }
}

#[test]
fn halves_share_the_curve_midpoint() {
    let parent          = parent_curve();
    let (left, right)   = parent.subdivide().unwrap();

    let left_end        = left.control_points()[left.len()-1];
    let right_start     = right.control_points()[0];

    assert!(left_end == right_start);
    assert!(left_end.distance_to(&parent.evaluate(0.5).unwrap()) < 1e-6);
}

#[test]
fn each_half_keeps_the_parent_point_count() {
    let (left, right) = bezier::subdivide(&[
        Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, -2.0), Coord2(4.0, 0.0)
    ]);

    assert!(left.len() == 5);
    assert!(right.len() == 5);
}

#[test]
fn two_point_curve_subdivides_at_the_segment_midpoint() {
    let (left, right) = bezier::subdivide(&[Coord2(0.0, 0.0), Coord2(2.0, 4.0)]);

    assert!(left == vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0)]);
    assert!(right == vec![Coord2(1.0, 2.0), Coord2(2.0, 4.0)]);
}

#[test]
fn subdividing_fewer_than_two_points_is_invalid() {
    let curve: Curve<Coord2> = Curve::from_points(vec![Coord2(1.0, 1.0)]);

    assert!(curve.subdivide().is_err());
}

#[test]
fn level_0_polygon_is_the_control_polygon() {
    let points      = vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0)];
    let polygons    = bezier::subdivision_polygons(&points, 0);

    assert!(polygons == vec![points]);
}

#[test]
fn level_1_gives_two_polygons_joined_at_the_midpoint() {
    let points      = vec![
        Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0), Coord2(3.0, -2.0), Coord2(4.0, 0.0)
    ];
    let polygons    = bezier::subdivision_polygons(&points, 1);

    assert!(polygons.len() == 2);
    assert!(polygons[0].len() == 5);
    assert!(polygons[1].len() == 5);
    assert!(polygons[0][4] == polygons[1][0]);
}

#[test]
fn polygon_count_doubles_with_every_level() {
    let points = vec![Coord2(0.0, 0.0), Coord2(1.0, 2.0), Coord2(2.0, 0.0)];

    for level in 0..5 {
        let polygons = bezier::subdivision_polygons(&points, level);

        assert!(polygons.len() == (1 << level));
    }
}
