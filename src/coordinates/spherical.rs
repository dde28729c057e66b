//! Spherical coordinate value type
//!
//! A point is described by its azimuth `phi`, polar angle `theta` and
//! distance from the origin `radius`, all in radians / length units as given.
//! The pole is the Cartesian z-axis and `phi = 0` lies along the x-axis.
//!
//! Domain ranges, enforced on construction:
//!
//! - `phi` in `[-π, π)`
//! - `theta` in `[0, π]`
//! - `radius >= 0`
//!
//! ```rust
//! use geocoord::coordinates::spherical::SphericalCoordinate;
//! use std::f64::consts::PI;
//!
//! assert!(SphericalCoordinate::new(-PI, 0.0, 0.0).is_ok());
//! assert!(SphericalCoordinate::new(PI, 0.0, 1.0).is_err());
//! ```

use crate::errors::{check_finite, invalid, CoordinateError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Immutable spherical coordinate
///
/// As with the Cartesian type, `==` compares fields bit for bit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawSpherical")]
pub struct SphericalCoordinate {
    phi: f64,
    theta: f64,
    radius: f64,
}

#[derive(Deserialize)]
struct RawSpherical {
    phi: f64,
    theta: f64,
    radius: f64,
}

impl TryFrom<RawSpherical> for SphericalCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawSpherical) -> Result<Self> {
        SphericalCoordinate::new(raw.phi, raw.theta, raw.radius)
    }
}

impl SphericalCoordinate {
    /// Creates a new spherical coordinate
    ///
    /// # Arguments
    ///
    /// * `phi` - Azimuth in radians, `[-π, π)`
    /// * `theta` - Polar angle in radians, `[0, π]`
    /// * `radius` - Distance from the origin, `>= 0`
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::InvalidValue`] if a field is NaN, infinite,
    /// or outside its range.
    pub fn new(phi: f64, theta: f64, radius: f64) -> Result<Self> {
        let phi = check_finite("phi", phi)?;
        let theta = check_finite("theta", theta)?;
        let radius = check_finite("radius", radius)?;

        if radius < 0.0 {
            return Err(invalid("radius", radius, "must not be negative"));
        }
        if !(-PI..PI).contains(&phi) {
            return Err(invalid("phi", phi, "must be in range [-π, π)"));
        }
        if !(0.0..=PI).contains(&theta) {
            return Err(invalid("theta", theta, "must be in range [0, π]"));
        }

        Ok(SphericalCoordinate { phi, theta, radius })
    }

    /// Builds a coordinate from fields already known to satisfy the invariants
    pub(crate) fn from_parts(phi: f64, theta: f64, radius: f64) -> Self {
        debug_assert!(
            Self::new(phi, theta, radius).is_ok(),
            "computed spherical fields out of range: phi={}, theta={}, radius={}",
            phi,
            theta,
            radius
        );
        SphericalCoordinate { phi, theta, radius }
    }

    /// Azimuth in radians
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Polar angle in radians
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub(crate) fn bits_eq(&self, other: &SphericalCoordinate) -> bool {
        self.phi.to_bits() == other.phi.to_bits()
            && self.theta.to_bits() == other.theta.to_bits()
            && self.radius.to_bits() == other.radius.to_bits()
    }
}

impl PartialEq for SphericalCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.bits_eq(other)
    }
}

impl Eq for SphericalCoordinate {}

impl fmt::Display for SphericalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Spherical(phi={}, theta={}, radius={})",
            self.phi, self.theta, self.radius
        )
    }
}
