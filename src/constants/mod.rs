//! Constants module for coordinate calculations

// Equality
/// Upper bound (exclusive) on the summed absolute Cartesian differences of two
/// coordinates that compare as approximately equal
pub const EQUALITY_THRESHOLD: f64 = 1e-5;

// Angles
/// Offset subtracted from the polar angle to obtain the latitude term of the
/// central-angle formula. Applied to radian-valued theta as-is.
pub const LATITUDE_OFFSET: f64 = 90.0;
