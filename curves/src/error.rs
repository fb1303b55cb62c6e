use std::error;
use std::fmt;

///
/// Errors that can occur while editing, evaluating or rendering a bezier curve
///
/// All of these are recoverable: a caller can skip the render pass or clamp
/// its inputs and try again.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CurveError {
    /// A curve operation was called with a parameter outside of its valid range
    /// (a `t` value outside of 0..1, an out of range index, or fewer control
    /// points than the operation needs)
    InvalidParameter,

    /// The render configuration cannot produce meaningful geometry (a piecewise
    /// degree of 0, or fewer than 2 samples)
    InvalidConfiguration,

    /// A unit vector was requested for a vector too short to have a direction
    DegenerateVector
}

impl fmt::Display for CurveError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CurveError::InvalidParameter        => write!(formatter, "parameter is out of range for this curve operation"),
            CurveError::InvalidConfiguration    => write!(formatter, "render configuration cannot produce meaningful geometry"),
            CurveError::DegenerateVector        => write!(formatter, "vector is too short to have a direction")
        }
    }
}

impl error::Error for CurveError { }
