/// Length below which a vector is considered to have no direction
pub const DEGENERATE_LENGTH: f64 = 1e-7;

/// Slack allowed past t=1 so that accumulated floating point error in a sampling loop stays in range
pub const T_SLACK: f64 = 5e-6;
