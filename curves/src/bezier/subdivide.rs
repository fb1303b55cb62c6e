use super::basis::*;
use super::super::coordinate::*;

use itertools::Itertools;

///
/// Subdivides a bezier curve at its midpoint, returning the control points of
/// the two component curves
///
/// Each interpolation round pins down the outermost remaining point of both
/// halves, then replaces the point list with the midpoints of its consecutive
/// pairs. The single point left at the end is the curve midpoint and belongs
/// to both halves: the left curve ends with it and the right curve starts
/// with it, so each half has as many control points as the parent.
///
pub fn subdivide<Point: Coordinate>(control_points: &[Point]) -> (Vec<Point>, Vec<Point>) {
    let mut left    = vec![];
    let mut right   = vec![];

    let mut points  = control_points.to_vec();

    while points.len() > 1 {
        left.push(points[0]);
        right.push(points[points.len()-1]);

        points = points.iter()
            .tuple_windows()
            .map(|(p1, p2)| de_casteljau2(0.5, *p1, *p2))
            .collect();
    }

    // The shared midpoint closes the left half and opens the right half
    left.extend(points.iter().cloned());
    right.extend(points.iter().cloned());
    right.reverse();

    (left, right)
}

///
/// Recursively subdivides a set of control points, returning the control
/// polygons that stand in for the curve at the requested level
///
/// At level 0 the result is the control polygon itself, drawn without any
/// curve evaluation. Every further level splits each polygon at the curve
/// midpoint, so the result holds `2^level` polygons ordered from the start
/// of the curve to its end, converging on the curve as the level grows.
///
pub fn subdivision_polygons<Point: Coordinate>(control_points: &[Point], level: u32) -> Vec<Vec<Point>> {
    if level == 0 {
        vec![control_points.to_vec()]
    } else {
        let (left, right) = subdivide(control_points);

        let mut polygons = subdivision_polygons(&left, level-1);
        polygons.extend(subdivision_polygons(&right, level-1));

        polygons
    }
}
