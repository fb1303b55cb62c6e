use super::basis::*;
use super::subdivide;
use super::super::consts::*;
use super::super::coordinate::*;
use super::super::error::*;

///
/// Represents a bezier curve as an ordered set of control points
///
/// The order the points were added in is the parametrization order: control
/// point `i` is weighted by Bernstein basis function `i` during evaluation.
/// Evaluating or subdividing the curve needs at least two control points.
///
#[derive(Clone, PartialEq, Debug)]
pub struct Curve<Point: Coordinate> {
    control_points: Vec<Point>
}

impl<Point: Coordinate> Curve<Point> {
    ///
    /// Creates a new curve with no control points
    ///
    pub fn new() -> Curve<Point> {
        Curve {
            control_points: vec![]
        }
    }

    ///
    /// Creates a curve from an existing sequence of control points
    ///
    pub fn from_points<PointIter: IntoIterator<Item=Point>>(points: PointIter) -> Curve<Point> {
        Curve {
            control_points: points.into_iter().collect()
        }
    }

    ///
    /// The control points of this curve, in parametrization order
    ///
    #[inline]
    pub fn control_points(&self) -> &[Point] {
        &self.control_points
    }

    ///
    /// Retrieves a single control point
    ///
    #[inline]
    pub fn control_point(&self, index: usize) -> Option<&Point> {
        self.control_points.get(index)
    }

    ///
    /// The number of control points in this curve
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.control_points.len()
    }

    ///
    /// True if this curve has no control points
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    ///
    /// Appends a control point to the end of the curve
    ///
    pub fn add_control_point(&mut self, point: Point) {
        self.control_points.push(point);
    }

    ///
    /// Inserts a control point ahead of the point currently at `index`
    ///
    /// Inserting at `len()` appends, the same as `add_control_point`.
    ///
    pub fn insert_control_point(&mut self, index: usize, point: Point) -> Result<(), CurveError> {
        if index > self.control_points.len() {
            return Err(CurveError::InvalidParameter);
        }

        self.control_points.insert(index, point);
        Ok(())
    }

    ///
    /// Moves an existing control point to a new position
    ///
    pub fn set_control_point(&mut self, index: usize, point: Point) -> Result<(), CurveError> {
        if index >= self.control_points.len() {
            return Err(CurveError::InvalidParameter);
        }

        self.control_points[index] = point;
        Ok(())
    }

    ///
    /// Removes a control point, returning it
    ///
    pub fn remove_control_point(&mut self, index: usize) -> Result<Point, CurveError> {
        if index >= self.control_points.len() {
            return Err(CurveError::InvalidParameter);
        }

        Ok(self.control_points.remove(index))
    }

    ///
    /// Removes all control points
    ///
    pub fn clear_control_points(&mut self) {
        self.control_points.clear();
    }

    ///
    /// Finds the control point within `radius` of `location`, if there is one
    ///
    /// This is the hit test an editor uses to decide whether a pointer press
    /// grabs an existing control point or places a new one. Where points
    /// overlap, the most recently added one wins (it is drawn on top).
    ///
    pub fn control_point_at(&self, location: &Point, radius: f64) -> Option<usize> {
        self.control_points.iter()
            .rposition(|point| point.distance_to(location) < radius)
    }

    ///
    /// Evaluates this curve at parameter `t`
    ///
    /// `t` must lie in 0..1 (a small slack past 1 is tolerated for sampling
    /// loops that accumulate their step) and the curve must have at least two
    /// control points: anything else fails with `InvalidParameter`. At `t=0`
    /// the blend collapses to the first control point, which is returned
    /// directly.
    ///
    pub fn evaluate(&self, t: f64) -> Result<Point, CurveError> {
        if t < 0.0 || t > 1.0+T_SLACK {
            return Err(CurveError::InvalidParameter);
        }

        if self.control_points.len() < 2 {
            return Err(CurveError::InvalidParameter);
        }

        if t == 0.0 {
            Ok(self.control_points[0])
        } else {
            Ok(basis(t, &self.control_points))
        }
    }

    ///
    /// Evaluates this curve at `samples` evenly spaced parameter values from
    /// 0 to 1 inclusive
    ///
    /// Fails with `InvalidConfiguration` for fewer than two samples (a single
    /// sample cannot form a line segment).
    ///
    pub fn sample(&self, samples: usize) -> Result<Vec<Point>, CurveError> {
        if samples < 2 {
            return Err(CurveError::InvalidConfiguration);
        }

        let mut points = Vec::with_capacity(samples);

        for sample_index in 0..samples {
            let t = (sample_index as f64) / ((samples-1) as f64);
            points.push(self.evaluate(t)?);
        }

        Ok(points)
    }

    ///
    /// Splits this curve at its midpoint, returning the two curves that
    /// together reproduce it exactly
    ///
    pub fn subdivide(&self) -> Result<(Curve<Point>, Curve<Point>), CurveError> {
        if self.control_points.len() < 2 {
            return Err(CurveError::InvalidParameter);
        }

        let (left, right) = subdivide::subdivide(&self.control_points);

        Ok((Curve::from_points(left), Curve::from_points(right)))
    }
}

impl<Point: Coordinate> Default for Curve<Point> {
    fn default() -> Curve<Point> {
        Curve::new()
    }
}
