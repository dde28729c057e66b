//! Geocoord: coordinate value objects for geotagged items
//!
//! This crate provides Cartesian and spherical coordinates that convert into
//! each other, distance and central-angle metrics between any pair of them,
//! and a thread-safe registry that hands out one shared instance per distinct
//! coordinate value.
//!
//! ```rust
//! use geocoord::{Coordinate, CoordinateRegistry};
//!
//! let registry = CoordinateRegistry::new();
//! let origin = registry.intern_cartesian(0.0, 0.0, 0.0).unwrap();
//! let corner = registry.intern_cartesian(1.0, 1.0, 1.0).unwrap();
//!
//! assert!((origin.cartesian_distance(&*corner) - 3f64.sqrt()).abs() < 1e-12);
//! ```

use std::sync::Arc;

pub mod constants;
pub mod coordinates;
pub mod errors;
pub mod location;
pub mod registry;

// Re-export commonly used types
pub use coordinates::{AnyCoordinate, CartesianCoordinate, Coordinate, SphericalCoordinate};
pub use errors::{CoordinateError, Result};
pub use location::Location;
pub use registry::CoordinateRegistry;

/// Canonical Cartesian coordinate from the process-wide registry
pub fn cartesian(x: f64, y: f64, z: f64) -> Result<Arc<CartesianCoordinate>> {
    CoordinateRegistry::global().intern_cartesian(x, y, z)
}

/// Canonical spherical coordinate from the process-wide registry
pub fn spherical(phi: f64, theta: f64, radius: f64) -> Result<Arc<SphericalCoordinate>> {
    CoordinateRegistry::global().intern_spherical(phi, theta, radius)
}
