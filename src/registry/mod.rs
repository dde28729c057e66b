//! Canonicalization registry for coordinate values
//!
//! The registry interns coordinates so that every request for the same
//! logical value returns the same shared instance. Callers can then compare
//! coordinates by identity ([`Arc::ptr_eq`]) and repeated construction on hot
//! paths does not allocate.
//!
//! # Overview
//!
//! - One cache per representation. Cartesian and spherical values are never
//!   deduplicated against each other, even when they describe the same point.
//! - Lookup is a linear scan comparing fields bit for bit. The number of
//!   distinct coordinates in use is small, so a hash index is not needed.
//! - The whole lookup-or-insert runs under the cache's mutex, so two threads
//!   can never both miss and insert separate instances of one value.
//! - Entries are never evicted.
//!
//! No operation holds both locks at once, and no operation re-enters the
//! registry while holding a lock.
//!
//! ```rust
//! use geocoord::registry::CoordinateRegistry;
//! use std::sync::Arc;
//!
//! let registry = CoordinateRegistry::new();
//! let a = registry.intern_cartesian(1.0, 2.0, 3.0).unwrap();
//! let b = registry.intern_cartesian(1.0, 2.0, 3.0).unwrap();
//! assert!(Arc::ptr_eq(&a, &b));
//! ```

use crate::coordinates::{AnyCoordinate, CartesianCoordinate, SphericalCoordinate};
use crate::errors::{require, CoordinateError, Result};
use lazy_static::lazy_static;
use log::{debug, trace, warn};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

lazy_static! {
    /// Process-wide registry backing [`CoordinateRegistry::global`]
    static ref GLOBAL_REGISTRY: CoordinateRegistry = CoordinateRegistry::new();
}

type Cache<T> = Mutex<Vec<Arc<T>>>;

/// Interning caches for Cartesian and spherical coordinates
#[derive(Debug, Default)]
pub struct CoordinateRegistry {
    cartesian: Cache<CartesianCoordinate>,
    spherical: Cache<SphericalCoordinate>,
}

impl CoordinateRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with room for `capacity` entries per cache
    pub fn with_capacity(capacity: usize) -> Self {
        CoordinateRegistry {
            cartesian: Mutex::new(Vec::with_capacity(capacity)),
            spherical: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// The lazily created process-wide registry
    ///
    /// Prefer an explicitly owned registry where the caller controls its
    /// lifetime; this instance lives until the process exits.
    pub fn global() -> &'static CoordinateRegistry {
        &GLOBAL_REGISTRY
    }

    /// Canonical instance of the Cartesian coordinate `(x, y, z)`
    ///
    /// # Errors
    ///
    /// [`CoordinateError::InvalidValue`] if a component is not finite, or
    /// [`CoordinateError::RegistryPoisoned`] if the cache lock was poisoned.
    pub fn intern_cartesian(&self, x: f64, y: f64, z: f64) -> Result<Arc<CartesianCoordinate>> {
        let candidate = CartesianCoordinate::new(x, y, z)?;
        let mut cache = lock(&self.cartesian, "cartesian")?;
        Ok(lookup_or_insert(&mut cache, candidate))
    }

    /// Canonical instance of the spherical coordinate `(phi, theta, radius)`
    ///
    /// # Errors
    ///
    /// [`CoordinateError::InvalidValue`] if a field is out of range, or
    /// [`CoordinateError::RegistryPoisoned`] if the cache lock was poisoned.
    pub fn intern_spherical(
        &self,
        phi: f64,
        theta: f64,
        radius: f64,
    ) -> Result<Arc<SphericalCoordinate>> {
        let candidate = SphericalCoordinate::new(phi, theta, radius)?;
        let mut cache = lock(&self.spherical, "spherical")?;
        Ok(lookup_or_insert(&mut cache, candidate))
    }

    /// Canonical instance of an existing coordinate, in its own representation
    ///
    /// # Errors
    ///
    /// [`CoordinateError::NullArgument`] if `coord` is `None`.
    pub fn intern(&self, coord: Option<&AnyCoordinate>) -> Result<AnyCoordinate> {
        match require(coord, "intern")? {
            AnyCoordinate::Cartesian(c) => self
                .intern_cartesian(c.x(), c.y(), c.z())
                .map(AnyCoordinate::Cartesian),
            AnyCoordinate::Spherical(s) => self
                .intern_spherical(s.phi(), s.theta(), s.radius())
                .map(AnyCoordinate::Spherical),
        }
    }

    /// Number of distinct Cartesian coordinates interned so far
    pub fn cartesian_len(&self) -> Result<usize> {
        Ok(lock(&self.cartesian, "cartesian")?.len())
    }

    /// Number of distinct spherical coordinates interned so far
    pub fn spherical_len(&self) -> Result<usize> {
        Ok(lock(&self.spherical, "spherical")?.len())
    }
}

fn lock<'a, T>(cache: &'a Cache<T>, kind: &'static str) -> Result<MutexGuard<'a, Vec<Arc<T>>>> {
    cache.lock().map_err(|_| {
        warn!("{} coordinate cache lock is poisoned", kind);
        CoordinateError::RegistryPoisoned(kind)
    })
}

/// Returns the cached entry equal to `candidate`, inserting it first if absent
///
/// Must be called with the cache lock held.
fn lookup_or_insert<T>(cache: &mut Vec<Arc<T>>, candidate: T) -> Arc<T>
where
    T: PartialEq + fmt::Display,
{
    if let Some(existing) = cache.iter().find(|entry| ***entry == candidate) {
        trace!("registry hit for {}", candidate);
        return Arc::clone(existing);
    }

    debug!(
        "registry interning {} ({} entries cached)",
        candidate,
        cache.len() + 1
    );
    let entry = Arc::new(candidate);
    cache.push(Arc::clone(&entry));
    entry
}
