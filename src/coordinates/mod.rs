//! Coordinate representations and the capabilities they share
//!
//! Two representations exist, [`CartesianCoordinate`] and
//! [`SphericalCoordinate`]. Both implement [`Coordinate`], which lets any
//! coordinate be viewed in either form, measured against any other coordinate,
//! and compared for equality. [`AnyCoordinate`] holds a shared instance of
//! either representation, as handed out by the
//! [`CoordinateRegistry`](crate::registry::CoordinateRegistry).
//!
//! ```rust
//! use geocoord::coordinates::{Coordinate, CartesianCoordinate, SphericalCoordinate};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let cart = CartesianCoordinate::new(0.0, 1.0, 0.0).unwrap();
//! let sph = SphericalCoordinate::new(FRAC_PI_2, FRAC_PI_2, 1.0).unwrap();
//! assert!(cart.is_equal(&sph));
//! assert!(cart.cartesian_distance(&sph) < 1e-12);
//! ```

pub mod cartesian;
pub mod conversion;
pub mod metrics;
pub mod spherical;

pub use self::cartesian::CartesianCoordinate;
pub use self::spherical::SphericalCoordinate;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Capabilities shared by every coordinate representation
///
/// Conversions return [`Cow::Borrowed`] when the coordinate is already in the
/// requested form, so asking a Cartesian coordinate for its Cartesian view
/// yields the coordinate itself rather than a copy.
pub trait Coordinate {
    /// Cartesian view of this coordinate
    fn as_cartesian(&self) -> Cow<'_, CartesianCoordinate>;

    /// Spherical view of this coordinate
    fn as_spherical(&self) -> Cow<'_, SphericalCoordinate>;

    /// Euclidean distance to `other`
    fn cartesian_distance(&self, other: &dyn Coordinate) -> f64 {
        metrics::cartesian_distance(self, other)
    }

    /// Central angle to `other`, in `[0, π]`
    fn central_angle(&self, other: &dyn Coordinate) -> f64 {
        metrics::central_angle(self, other)
    }

    /// Tolerance-based equality; see [`metrics::approx_equal`]
    fn is_equal(&self, other: &dyn Coordinate) -> bool {
        metrics::approx_equal(self, other)
    }

    /// Exact equality of the Cartesian projections
    fn is_identical(&self, other: &dyn Coordinate) -> bool {
        metrics::exact_equal(self, other)
    }
}

impl Coordinate for CartesianCoordinate {
    fn as_cartesian(&self) -> Cow<'_, CartesianCoordinate> {
        Cow::Borrowed(self)
    }

    fn as_spherical(&self) -> Cow<'_, SphericalCoordinate> {
        Cow::Owned(conversion::cartesian_to_spherical(self))
    }
}

impl Coordinate for SphericalCoordinate {
    fn as_cartesian(&self) -> Cow<'_, CartesianCoordinate> {
        Cow::Owned(conversion::spherical_to_cartesian(self))
    }

    fn as_spherical(&self) -> Cow<'_, SphericalCoordinate> {
        Cow::Borrowed(self)
    }
}

/// A shared coordinate in either representation
#[derive(Debug, Clone)]
pub enum AnyCoordinate {
    /// Shared Cartesian coordinate
    Cartesian(Arc<CartesianCoordinate>),
    /// Shared spherical coordinate
    Spherical(Arc<SphericalCoordinate>),
}

impl AnyCoordinate {
    /// True if both hold the very same allocation
    ///
    /// Coordinates interned through one registry are pointer-equal exactly
    /// when they are the same representation with bit-identical fields.
    pub fn ptr_eq(&self, other: &AnyCoordinate) -> bool {
        match (self, other) {
            (AnyCoordinate::Cartesian(a), AnyCoordinate::Cartesian(b)) => Arc::ptr_eq(a, b),
            (AnyCoordinate::Spherical(a), AnyCoordinate::Spherical(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn inner(&self) -> &dyn Coordinate {
        match self {
            AnyCoordinate::Cartesian(c) => &**c,
            AnyCoordinate::Spherical(s) => &**s,
        }
    }
}

impl Coordinate for AnyCoordinate {
    fn as_cartesian(&self) -> Cow<'_, CartesianCoordinate> {
        self.inner().as_cartesian()
    }

    fn as_spherical(&self) -> Cow<'_, SphericalCoordinate> {
        self.inner().as_spherical()
    }
}

impl From<CartesianCoordinate> for AnyCoordinate {
    fn from(coord: CartesianCoordinate) -> Self {
        AnyCoordinate::Cartesian(Arc::new(coord))
    }
}

impl From<SphericalCoordinate> for AnyCoordinate {
    fn from(coord: SphericalCoordinate) -> Self {
        AnyCoordinate::Spherical(Arc::new(coord))
    }
}

impl From<Arc<CartesianCoordinate>> for AnyCoordinate {
    fn from(coord: Arc<CartesianCoordinate>) -> Self {
        AnyCoordinate::Cartesian(coord)
    }
}

impl From<Arc<SphericalCoordinate>> for AnyCoordinate {
    fn from(coord: Arc<SphericalCoordinate>) -> Self {
        AnyCoordinate::Spherical(coord)
    }
}

impl fmt::Display for AnyCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyCoordinate::Cartesian(c) => fmt::Display::fmt(c, f),
            AnyCoordinate::Spherical(s) => fmt::Display::fmt(s, f),
        }
    }
}
