use super::basis::*;
use super::config::*;
use super::super::coordinate::*;

///
/// Splits a set of control points into the control point groups that make up
/// a piecewise bezier curve
///
/// Each group is the control point set of an independent curve of at most
/// `degree+1` points, and the groups are ordered from the start of the curve
/// to its end. With C0 continuity adjacent groups share their boundary point.
/// With C1 continuity every interior boundary point is wrapped in a three
/// point 'splice' group built from the midpoints of the surrounding control
/// polygon edges, which makes the tangent directions on either side of the
/// joint agree.
///
/// Callers are expected to pass a degree of at least 1 and at least two
/// control points: smaller inputs belong to the `InvalidConfiguration` and
/// `InvalidParameter` contracts of the render pass.
///
pub fn piecewise_sections<Point: Coordinate>(control_points: &[Point], degree: usize, continuity: ContinuityMode) -> Vec<Vec<Point>> {
    match continuity {
        ContinuityMode::C0  => piecewise_sections_c0(control_points, degree),
        ContinuityMode::C1  => piecewise_sections_c1(control_points, degree)
    }
}

///
/// C0 grouping: consecutive runs of `degree+1` points, each run starting at
/// the point that ended the previous one. The final run may be shorter when
/// the point count doesn't divide evenly.
///
fn piecewise_sections_c0<Point: Coordinate>(control_points: &[Point], degree: usize) -> Vec<Vec<Point>> {
    let points_per_curve    = degree + 1;
    let last_index          = control_points.len().wrapping_sub(1);

    let mut sections    = vec![];
    let mut current     = vec![];

    for (index, point) in control_points.iter().enumerate() {
        current.push(*point);

        if current.len() == points_per_curve || index == last_index {
            sections.push(current);

            // The next piece begins at the point that ended this one
            current = vec![*point];
        }
    }

    sections
}

///
/// C1 grouping: runs are cut short at `degree` points, and the next control
/// point becomes a splice point. The run is closed with the midpoint of the
/// edge leading into the splice point, a `[midpoint, splice, midpoint]` group
/// smooths the joint, and the following run opens with the midpoint of the
/// edge leading out of it. The midpoints always come from the original
/// control polygon edges.
///
fn piecewise_sections_c1<Point: Coordinate>(control_points: &[Point], degree: usize) -> Vec<Vec<Point>> {
    let last_index = control_points.len().wrapping_sub(1);

    let mut sections    = vec![];
    let mut current     = vec![];

    for (index, point) in control_points.iter().enumerate() {
        if index == last_index {
            // The final piece runs to the last control point as-is
            current.push(*point);
            sections.push(current);
            current = vec![];
        } else if current.len() != degree {
            current.push(*point);
        } else {
            let midpoint_in     = de_casteljau2(0.5, control_points[index-1], *point);
            let midpoint_out    = de_casteljau2(0.5, *point, control_points[index+1]);

            // Piece ending at the incoming midpoint
            current.push(midpoint_in);
            sections.push(current);

            // Splice piece that smooths the joint
            sections.push(vec![midpoint_in, *point, midpoint_out]);

            // The next piece starts at the outgoing midpoint
            current = vec![midpoint_out];
        }
    }

    sections
}
