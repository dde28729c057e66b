//! # Cartesian Coordinate Module
//!
//! This module provides the immutable 3D Cartesian coordinate value type.
//!
//! ## Coordinate System Convention
//!
//! - **X-axis**: Reference direction for azimuth (phi = 0)
//! - **Y-axis**: Azimuth phi = π/2
//! - **Z-axis**: The pole (polar angle theta = 0)
//!
//! The same origin and axes are used by
//! [`SphericalCoordinate`](super::spherical::SphericalCoordinate), so the two
//! representations describe the same point in space.
//!
//! ## Invariants
//!
//! Every field is a finite `f64`, and so is the distance from the origin. The
//! constructor rejects NaN, infinities, and component sets whose magnitude
//! overflows, and the fields are private, so every value can be converted to
//! spherical form.
//!
//! ## Examples
//!
//! ```rust
//! use geocoord::coordinates::cartesian::CartesianCoordinate;
//!
//! let coord = CartesianCoordinate::new(3.0, 4.0, 0.0).unwrap();
//! assert_eq!(coord.magnitude(), 5.0);
//!
//! assert!(CartesianCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
//! ```

use crate::errors::{check_finite, invalid, CoordinateError, Result};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-dimensional Cartesian coordinate
///
/// Equality through `==` is exact: two values are equal only if their fields
/// are bit-identical. Use [`Coordinate::is_equal`](super::Coordinate::is_equal)
/// for the tolerance-based comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawCartesian")]
pub struct CartesianCoordinate {
    x: f64,
    y: f64,
    z: f64,
}

/// Unvalidated field layout used when deserializing
#[derive(Deserialize)]
struct RawCartesian {
    x: f64,
    y: f64,
    z: f64,
}

impl TryFrom<RawCartesian> for CartesianCoordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCartesian) -> Result<Self> {
        CartesianCoordinate::new(raw.x, raw.y, raw.z)
    }
}

impl CartesianCoordinate {
    /// The coordinate origin
    pub const ORIGIN: CartesianCoordinate = CartesianCoordinate {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new Cartesian coordinate
    ///
    /// # Errors
    ///
    /// Returns [`CoordinateError::InvalidValue`] if any component is NaN or
    /// infinite, or if the components are finite but their magnitude is not
    /// (field `"magnitude"`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geocoord::coordinates::cartesian::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(10.0, 20.0, 30.0).unwrap();
    /// assert_eq!(coord.x(), 10.0);
    /// assert_eq!(coord.y(), 20.0);
    /// assert_eq!(coord.z(), 30.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        let coord = CartesianCoordinate {
            x: check_finite("x", x)?,
            y: check_finite("y", y)?,
            z: check_finite("z", z)?,
        };

        let magnitude = coord.magnitude();
        if !magnitude.is_finite() {
            return Err(invalid("magnitude", magnitude, "must be finite"));
        }
        Ok(coord)
    }

    /// Builds a coordinate from components already known to be finite
    pub(crate) fn from_parts(x: f64, y: f64, z: f64) -> Self {
        debug_assert!(x.is_finite() && y.is_finite() && z.is_finite());
        CartesianCoordinate { x, y, z }
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean distance from the origin
    ///
    /// Computed with `hypot` so large finite components do not overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geocoord::coordinates::cartesian::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 2.0).unwrap();
    /// assert_eq!(coord.magnitude(), 3.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3, validating every component
    ///
    /// # Examples
    ///
    /// ```rust
    /// use geocoord::coordinates::cartesian::CartesianCoordinate;
    /// use nalgebra::Vector3;
    ///
    /// let coord = CartesianCoordinate::from_vector3(Vector3::new(1.0, 2.0, 3.0)).unwrap();
    /// assert_eq!(coord.to_vector3(), Vector3::new(1.0, 2.0, 3.0));
    /// ```
    pub fn from_vector3(vec: Vector3<f64>) -> Result<Self> {
        CartesianCoordinate::new(vec.x, vec.y, vec.z)
    }

    /// Exact comparison of the raw bit patterns of all three components
    pub(crate) fn bits_eq(&self, other: &CartesianCoordinate) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.z.to_bits() == other.z.to_bits()
    }
}

impl PartialEq for CartesianCoordinate {
    fn eq(&self, other: &Self) -> bool {
        self.bits_eq(other)
    }
}

// NaN is rejected on construction, so bitwise equality is reflexive.
impl Eq for CartesianCoordinate {}

impl fmt::Display for CartesianCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cartesian(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}
