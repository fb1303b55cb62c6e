#![warn(bare_trait_objects)]

extern crate itertools;

pub mod bezier;

pub mod coordinate;
pub use self::coordinate::*;

pub mod consts;
pub use self::consts::*;

pub mod error;
pub use self::error::*;

pub use self::bezier::{ContinuityMode, Curve, CurveConfig, CurveMode};
