use super::draw::*;

use curves::*;

///
/// A graphics context provides the basic set of drawing actions that a curve
/// render pass can perform
///
/// Implementations live outside of this library (a GPU renderer, a plotter, a
/// test recorder): the curve engine only ever issues these two calls and
/// assumes they succeed.
///
pub trait GraphicsContext {
    /// Draws a line segment between two points
    fn line_segment(&mut self, p1: Coord2, p2: Coord2);

    /// Draws a set of marker points
    fn draw_points(&mut self, points: &[Coord2]);

    ///
    /// Carries out a single drawing instruction
    ///
    fn draw(&mut self, d: Draw) {
        use self::Draw::*;

        match d {
            Line(p1, p2)    => self.line_segment(p1, p2),
            Points(points)  => self.draw_points(&points)
        }
    }

    ///
    /// Carries out a sequence of drawing instructions
    ///
    fn draw_list<'a>(&'a mut self, drawing: Box<dyn 'a+Iterator<Item=Draw>>) {
        for d in drawing {
            self.draw(d);
        }
    }
}

///
/// A Vec<Draw> can be treated as a target for drawing actions (the
/// instructions are just collected in order)
///
impl GraphicsContext for Vec<Draw> {
    #[inline]
    fn line_segment(&mut self, p1: Coord2, p2: Coord2) {
        self.push(Draw::Line(p1, p2));
    }

    #[inline]
    fn draw_points(&mut self, points: &[Coord2]) {
        self.push(Draw::Points(points.to_vec()));
    }
}
