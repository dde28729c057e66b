//! Location of a photo or other tagged item
//!
//! A `Location` wraps one shared coordinate. Persistence code reads the
//! coordinate back in whichever form it stores.

use crate::coordinates::{metrics, AnyCoordinate, Coordinate};
use crate::errors::{require, Result};
use crate::registry::CoordinateRegistry;
use std::fmt;

/// A place described by a single coordinate
#[derive(Debug, Clone)]
pub struct Location {
    coordinate: AnyCoordinate,
}

impl Location {
    /// Create a location from an existing coordinate
    pub fn new(coordinate: impl Into<AnyCoordinate>) -> Self {
        Location {
            coordinate: coordinate.into(),
        }
    }

    /// Create a location at the canonical Cartesian coordinate `(x, y, z)`
    pub fn from_xyz(registry: &CoordinateRegistry, x: f64, y: f64, z: f64) -> Result<Self> {
        Ok(Location::new(registry.intern_cartesian(x, y, z)?))
    }

    /// The coordinate of this location
    pub fn coordinate(&self) -> &AnyCoordinate {
        &self.coordinate
    }

    /// Euclidean distance to another location
    ///
    /// # Errors
    ///
    /// [`CoordinateError::NullArgument`](crate::errors::CoordinateError::NullArgument)
    /// if `other` is `None`.
    pub fn distance_to(&self, other: Option<&Location>) -> Result<f64> {
        let other = require(other, "location distance")?;
        Ok(metrics::cartesian_distance(&self.coordinate, &other.coordinate))
    }

    /// Tolerance-based equality of the two coordinates
    pub fn is_equal(&self, other: &Location) -> bool {
        self.coordinate.is_equal(&other.coordinate)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({})", self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::CartesianCoordinate;
    use crate::errors::CoordinateError;

    fn cart(x: f64, y: f64, z: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y, z).unwrap()
    }

    #[test]
    fn test_create_location_from_coordinate() {
        let c = cart(2.0, 2.0, 2.0);
        let location = Location::new(c);
        assert!(location.coordinate().is_equal(&c));
        assert!(location.coordinate().is_equal(&cart(2.0, 2.0, 2.0)));
        assert!(!location.coordinate().is_equal(&cart(2.0, 4.0, 6.0)));
    }

    #[test]
    fn test_create_location_from_xyz_values() {
        let registry = CoordinateRegistry::new();
        let location = Location::from_xyz(&registry, 1.0, 1.0, 1.0).unwrap();
        assert!(location.coordinate().is_equal(&cart(1.0, 1.0, 1.0)));
        assert!(!location.coordinate().is_equal(&cart(2.0, 4.0, 6.0)));

        let again = Location::from_xyz(&registry, 1.0, 1.0, 1.0).unwrap();
        assert!(location.coordinate().ptr_eq(again.coordinate()));
        assert!(location.is_equal(&again));

        assert!(Location::from_xyz(&registry, f64::NAN, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_distance_to() {
        let registry = CoordinateRegistry::new();
        let a = Location::from_xyz(&registry, 1.0, 1.0, 1.0).unwrap();
        let b = Location::from_xyz(&registry, 1.0, 2.0, 3.0).unwrap();

        let d = a.distance_to(Some(&b)).unwrap();
        assert!((d - 5f64.sqrt()).abs() < 1e-12);

        assert_eq!(
            a.distance_to(None),
            Err(CoordinateError::NullArgument {
                operation: "location distance"
            })
        );
    }

    #[test]
    fn test_display() {
        let location = Location::new(cart(1.0, 0.0, -1.0));
        assert_eq!(location.to_string(), "Location(Cartesian(x=1, y=0, z=-1))");
    }
}
