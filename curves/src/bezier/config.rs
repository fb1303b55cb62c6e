use super::super::error::*;

///
/// The rendering strategies that can be used to draw a bezier curve
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CurveMode {
    /// Evaluate the curve at evenly spaced parameter values and join the samples with line segments
    Basic,

    /// Recursively subdivide the curve and draw the control polygons of the pieces
    Subdivision,

    /// Split the control points into several lower-degree curves drawn end to end
    Piecewise
}

///
/// How adjacent pieces of a piecewise curve join up
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContinuityMode {
    /// Adjacent pieces share an endpoint
    C0,

    /// Adjacent pieces share an endpoint and the tangent direction at it
    C1
}

///
/// Describes how a render pass should draw a curve
///
/// A config is a plain value handed to every render call: nothing is retained
/// between passes, so equal configs over equal control points always produce
/// the same drawing.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveConfig {
    /// Which rendering strategy to use
    pub mode: CurveMode,

    /// How the pieces of a piecewise curve join (ignored by the other modes)
    pub continuity: ContinuityMode,

    /// How many times subdivision mode splits the curve before drawing control polygons
    pub subdivision_level: u32,

    /// The degree of the pieces a piecewise curve is split into (at least 1)
    pub piecewise_degree: usize,

    /// How many parameter values basic mode evaluates along the curve (at least 2)
    pub samples: usize
}

impl Default for CurveConfig {
    fn default() -> CurveConfig {
        CurveConfig {
            mode:               CurveMode::Basic,
            continuity:         ContinuityMode::C0,
            subdivision_level:  0,
            piecewise_degree:   1,
            samples:            20
        }
    }
}

impl CurveConfig {
    ///
    /// Checks that this configuration can produce meaningful geometry
    ///
    /// A piecewise degree of 0 would split the curve into zero-length groups,
    /// and fewer than two samples cannot form a line segment.
    ///
    pub fn validate(&self) -> Result<(), CurveError> {
        if self.piecewise_degree < 1 {
            return Err(CurveError::InvalidConfiguration);
        }

        if self.samples < 2 {
            return Err(CurveError::InvalidConfiguration);
        }

        Ok(())
    }
}
