use curves::*;

///
/// Instructions for drawing a curve
///
/// A renderer carries these out in order. There are only two instructions:
/// everything the curve engine produces reduces to line segments and sets of
/// marker points.
///
#[derive(Clone, PartialEq, Debug)]
pub enum Draw {
    /// Draw a line segment between two points
    Line(Coord2, Coord2),

    /// Draw a set of points
    Points(Vec<Coord2>)
}
