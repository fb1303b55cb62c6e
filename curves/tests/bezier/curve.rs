use sketch_curves::*;

#[test]
fn evaluate_at_t0_is_the_first_control_point() {
    let curve = Curve::from_points(vec![Coord2(0.25, -0.5), Coord2(1.0, 1.0), Coord2(2.0, 0.5)]);

    assert!(curve.evaluate(0.0).unwrap() == Coord2(0.25, -0.5));
}

#[test]
fn evaluate_at_t1_is_the_last_control_point() {
    let curve = Curve::from_points(vec![Coord2(0.25, -0.5), Coord2(1.0, 1.0), Coord2(2.0, 0.5)]);

    assert!(curve.evaluate(1.0).unwrap().distance_to(&Coord2(2.0, 0.5)) < 1e-6);
}

#[test]
fn two_point_curve_is_exact_linear_interpolation() {
    let start   = Coord2(-1.0, 0.5);
    let end     = Coord2(3.0, -0.5);
    let curve   = Curve::from_points(vec![start, end]);

    for x in 0..=10 {
        let t           = (x as f64)/10.0;
        let evaluated   = curve.evaluate(t).unwrap();
        let interpolated = start + (end-start)*t;

        assert!(evaluated.distance_to(&interpolated) < 1e-6);
    }
}

#[test]
fn sample_matches_the_reference_scenario() {
    let curve   = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0)]);
    let sampled = curve.sample(3).unwrap();

    assert!(sampled == vec![Coord2(0.0, 0.0), Coord2(1.0, 0.5), Coord2(2.0, 0.0)]);
}

#[test]
fn sample_count_matches_the_request() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0)]);

    assert!(curve.sample(20).unwrap().len() == 20);
}

#[test]
fn sampling_fewer_than_two_points_is_invalid() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(curve.sample(1) == Err(CurveError::InvalidConfiguration));
}

#[test]
fn evaluate_rejects_t_below_zero() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(curve.evaluate(-0.1) == Err(CurveError::InvalidParameter));
}

#[test]
fn evaluate_rejects_t_well_past_one() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(curve.evaluate(1.1) == Err(CurveError::InvalidParameter));
}

#[test]
fn evaluate_tolerates_sampling_slack_past_one() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(curve.evaluate(1.000001).is_ok());
}

#[test]
fn evaluate_requires_at_least_two_control_points() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0)]);

    assert!(curve.evaluate(0.5) == Err(CurveError::InvalidParameter));
}

#[test]
fn can_edit_control_points() {
    let mut curve = Curve::new();

    curve.add_control_point(Coord2(0.0, 0.0));
    curve.add_control_point(Coord2(1.0, 1.0));
    curve.add_control_point(Coord2(2.0, 0.0));
    assert!(curve.len() == 3);

    curve.set_control_point(1, Coord2(1.0, 2.0)).unwrap();
    assert!(curve.control_point(1) == Some(&Coord2(1.0, 2.0)));

    let removed = curve.remove_control_point(0).unwrap();
    assert!(removed == Coord2(0.0, 0.0));
    assert!(curve.control_points() == &[Coord2(1.0, 2.0), Coord2(2.0, 0.0)]);

    curve.clear_control_points();
    assert!(curve.is_empty());
}

#[test]
fn can_insert_control_points() {
    let mut curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(2.0, 0.0)]);

    curve.insert_control_point(1, Coord2(1.0, 1.0)).unwrap();

    assert!(curve.control_points() == &[Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0)]);
}

#[test]
fn editing_out_of_range_is_invalid() {
    let mut curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(curve.set_control_point(2, Coord2(0.0, 0.0)) == Err(CurveError::InvalidParameter));
    assert!(curve.remove_control_point(2) == Err(CurveError::InvalidParameter));
    assert!(curve.insert_control_point(3, Coord2(0.0, 0.0)) == Err(CurveError::InvalidParameter));
}

#[test]
fn hit_test_finds_a_nearby_control_point() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0), Coord2(2.0, 0.0)]);

    assert!(curve.control_point_at(&Coord2(1.01, 0.99), 0.03) == Some(1));
    assert!(curve.control_point_at(&Coord2(0.5, 0.5), 0.03) == None);
}

#[test]
fn hit_test_prefers_the_most_recently_added_point() {
    let curve = Curve::from_points(vec![Coord2(0.0, 0.0), Coord2(0.0, 0.0), Coord2(1.0, 1.0)]);

    assert!(curve.control_point_at(&Coord2(0.0, 0.0), 0.03) == Some(1));
}
