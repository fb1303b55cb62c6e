//!
//! An abstract representation of the drawing actions used to put curves on
//! screen, without requiring a specific implementation
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;

extern crate curves;
extern crate itertools;

mod gc;
mod draw;
mod curve_drawing;

pub use self::gc::*;
pub use self::draw::*;
pub use self::curve_drawing::*;
