//! Distance and angular separation between coordinates
//!
//! Both metrics accept any mix of representations: [`cartesian_distance`]
//! works on the Cartesian projections, [`central_angle`] on the spherical ones.
//!
//! The `try_*` forms are for callers holding an optional partner (for example
//! a photo whose location may be unset). They report a missing partner as
//! [`CoordinateError::NullArgument`](crate::errors::CoordinateError::NullArgument).

use super::Coordinate;
use crate::constants::{EQUALITY_THRESHOLD, LATITUDE_OFFSET};
use crate::errors::{require, Result};

/// Euclidean distance between the Cartesian projections of `a` and `b`
///
/// The norm of the difference is taken with `hypot`, so any distance that fits
/// in an `f64` is returned finite. The componentwise differences themselves
/// can still overflow to infinity when the two points lie near `f64::MAX` on
/// opposite sides of an axis.
///
/// # Examples
///
/// ```rust
/// use geocoord::coordinates::cartesian::CartesianCoordinate;
/// use geocoord::coordinates::metrics::cartesian_distance;
///
/// let a = CartesianCoordinate::new(0.0, 0.0, 0.0).unwrap();
/// let b = CartesianCoordinate::new(1.0, 1.0, 1.0).unwrap();
/// assert!((cartesian_distance(&a, &b) - 3f64.sqrt()).abs() < 1e-12);
/// ```
pub fn cartesian_distance<A, B>(a: &A, b: &B) -> f64
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let a = a.as_cartesian();
    let b = b.as_cartesian();
    (b.x() - a.x())
        .hypot(b.y() - a.y())
        .hypot(b.z() - a.z())
}

/// Central angle between the spherical projections of `a` and `b`, in `[0, π]`
///
/// Uses the great-circle formula
///
/// ```text
/// Δσ = acos(sin(lat1)·sin(lat2) + cos(lat1)·cos(lat2)·cos(Δφ))
/// ```
///
/// with `lat = 90 - theta` and `Δφ = |φ2 - φ1|`. The 90 is subtracted from
/// the radian-valued theta without unit conversion; existing stored results
/// depend on this exact arithmetic. The radius plays no part.
///
/// # Examples
///
/// ```rust
/// use geocoord::coordinates::spherical::SphericalCoordinate;
/// use geocoord::coordinates::metrics::central_angle;
///
/// let a = SphericalCoordinate::new(0.0, 0.0, 0.0).unwrap();
/// let b = SphericalCoordinate::new(1.0, 1.0, 1.0).unwrap();
/// assert!((central_angle(&a, &b) - 0.8692655149272476).abs() < 1e-9);
/// ```
pub fn central_angle<A, B>(a: &A, b: &B) -> f64
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let a = a.as_spherical();
    let b = b.as_spherical();

    if a.bits_eq(&b) {
        return 0.0;
    }

    let lat1 = LATITUDE_OFFSET - a.theta();
    let lat2 = LATITUDE_OFFSET - b.theta();
    let delta_phi = (b.phi() - a.phi()).abs();

    let cos_sigma = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_phi.cos();

    // Handle numerical precision issues
    cos_sigma.clamp(-1.0, 1.0).acos()
}

/// Tolerance-based equality of the Cartesian projections
///
/// True when `|Δx| + |Δy| + |Δz|` is below [`EQUALITY_THRESHOLD`].
pub fn approx_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    let a = a.as_cartesian();
    let b = b.as_cartesian();

    let diff = (b.x() - a.x()).abs() + (b.y() - a.y()).abs() + (b.z() - a.z()).abs();
    diff < EQUALITY_THRESHOLD
}

/// Exact equality: bit-identical Cartesian projections
pub fn exact_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Coordinate + ?Sized,
    B: Coordinate + ?Sized,
{
    a.as_cartesian().bits_eq(&b.as_cartesian())
}

/// [`cartesian_distance`] with an optional partner
pub fn try_cartesian_distance<A>(a: &A, b: Option<&dyn Coordinate>) -> Result<f64>
where
    A: Coordinate + ?Sized,
{
    let b = require(b, "cartesian distance")?;
    Ok(cartesian_distance(a, b))
}

/// [`central_angle`] with an optional partner
pub fn try_central_angle<A>(a: &A, b: Option<&dyn Coordinate>) -> Result<f64>
where
    A: Coordinate + ?Sized,
{
    let b = require(b, "central angle")?;
    Ok(central_angle(a, b))
}

/// [`approx_equal`] with an optional partner
pub fn try_is_equal<A>(a: &A, b: Option<&dyn Coordinate>) -> Result<bool>
where
    A: Coordinate + ?Sized,
{
    let b = require(b, "equality")?;
    Ok(approx_equal(a, b))
}
