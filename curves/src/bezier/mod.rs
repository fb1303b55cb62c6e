mod basis;
mod config;
mod curve;
mod piecewise;
mod subdivide;

pub use self::basis::*;
pub use self::config::*;
pub use self::curve::*;
pub use self::piecewise::*;
pub use self::subdivide::*;
