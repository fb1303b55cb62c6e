use super::draw::*;
use super::gc::*;

use curves::*;
use curves::bezier::*;

use itertools::Itertools;

///
/// Returns the drawing instructions for a curve rendered with the supplied
/// configuration
///
/// This is a whole render pass: the configuration picks the rendering
/// strategy, and every strategy reduces to a list of line segments. The
/// configuration is validated up front and curves need at least two control
/// points, so a bad pass fails before anything is drawn rather than
/// producing partial or misleading geometry.
///
pub fn draw_curve(curve: &Curve<Coord2>, config: &CurveConfig) -> Result<Vec<Draw>, CurveError> {
    config.validate()?;

    if curve.len() < 2 {
        return Err(CurveError::InvalidParameter);
    }

    debug!("Render pass: {:?} over {} control points", config.mode, curve.len());

    match config.mode {
        CurveMode::Basic => {
            draw_sampled_curve(curve, config.samples)
        },

        CurveMode::Subdivision => {
            let polygons = subdivision_polygons(curve.control_points(), config.subdivision_level);

            Ok(polygons.iter()
                .flat_map(|polygon| draw_control_polygon(polygon))
                .collect())
        },

        CurveMode::Piecewise => {
            let sections = piecewise_sections(curve.control_points(), config.piecewise_degree, config.continuity);

            let mut drawing = vec![];
            for section in sections {
                drawing.extend(draw_sampled_curve(&Curve::from_points(section), config.samples)?);
            }

            Ok(drawing)
        }
    }
}

///
/// Returns the drawing instructions for a curve evaluated directly at evenly
/// spaced parameter values, one line segment per consecutive pair of samples
///
fn draw_sampled_curve(curve: &Curve<Coord2>, samples: usize) -> Result<Vec<Draw>, CurveError> {
    let sampled = curve.sample(samples)?;

    Ok(sampled.into_iter()
        .tuple_windows()
        .map(|(p1, p2)| Draw::Line(p1, p2))
        .collect())
}

///
/// Returns the drawing instructions for a control polygon (the line segments
/// joining consecutive control points)
///
pub fn draw_control_polygon(control_points: &[Coord2]) -> Vec<Draw> {
    control_points.iter()
        .tuple_windows()
        .map(|(p1, p2)| Draw::Line(*p1, *p2))
        .collect()
}

///
/// Returns the drawing instruction for the control point markers themselves
///
pub fn draw_control_points(control_points: &[Coord2]) -> Draw {
    Draw::Points(control_points.to_vec())
}

///
/// GraphicsPrimitives adds curve-level operations that can be carried out
/// directly against a graphics context
///
pub trait GraphicsPrimitives : GraphicsContext {
    ///
    /// Draws a bezier curve using the supplied render configuration
    ///
    fn bezier_curve(&mut self, curve: &Curve<Coord2>, config: &CurveConfig) -> Result<(), CurveError> {
        for d in draw_curve(curve, config)? {
            self.draw(d);
        }

        Ok(())
    }

    ///
    /// Draws the control polygon of a set of control points
    ///
    fn control_polygon(&mut self, control_points: &[Coord2]) {
        for d in draw_control_polygon(control_points) {
            self.draw(d);
        }
    }

    ///
    /// Draws markers for a set of control points
    ///
    fn control_points(&mut self, control_points: &[Coord2]) {
        self.draw(draw_control_points(control_points));
    }
}

impl<Gc: GraphicsContext> GraphicsPrimitives for Gc { }
