//! Conversions between the Cartesian and spherical representations
//!
//! # Mathematical Conversion
//!
//! Spherical to Cartesian:
//!
//! - `x = r * sin(theta) * cos(phi)`
//! - `y = r * sin(theta) * sin(phi)`
//! - `z = r * cos(theta)`
//!
//! Cartesian to spherical:
//!
//! - `r = sqrt(x² + y² + z²)`
//! - `theta = acos(z / r)`
//! - `phi = atan2(y, x)`
//!
//! The origin has no defined direction; it maps to `phi = 0, theta = 0`.

use super::cartesian::CartesianCoordinate;
use super::spherical::SphericalCoordinate;
use std::f64::consts::{PI, TAU};

/// Computes the Cartesian form of a spherical coordinate
///
/// # Examples
///
/// ```rust
/// use geocoord::coordinates::conversion::spherical_to_cartesian;
/// use geocoord::coordinates::spherical::SphericalCoordinate;
/// use std::f64::consts::PI;
///
/// let north = SphericalCoordinate::new(0.0, 0.0, 2.0).unwrap();
/// let cart = spherical_to_cartesian(&north);
/// assert_eq!(cart.z(), 2.0);
///
/// let x_axis = SphericalCoordinate::new(0.0, PI / 2.0, 1.0).unwrap();
/// assert!((spherical_to_cartesian(&x_axis).x() - 1.0).abs() < 1e-15);
/// ```
pub fn spherical_to_cartesian(coord: &SphericalCoordinate) -> CartesianCoordinate {
    let (sin_theta, cos_theta) = coord.theta().sin_cos();
    let (sin_phi, cos_phi) = coord.phi().sin_cos();
    let r = coord.radius();

    CartesianCoordinate::from_parts(
        r * sin_theta * cos_phi,
        r * sin_theta * sin_phi,
        r * cos_theta,
    )
}

/// Computes the spherical form of a Cartesian coordinate
///
/// # Examples
///
/// ```rust
/// use geocoord::coordinates::cartesian::CartesianCoordinate;
/// use geocoord::coordinates::conversion::cartesian_to_spherical;
///
/// let origin = cartesian_to_spherical(&CartesianCoordinate::ORIGIN);
/// assert_eq!((origin.phi(), origin.theta(), origin.radius()), (0.0, 0.0, 0.0));
///
/// let up = cartesian_to_spherical(&CartesianCoordinate::new(0.0, 0.0, 5.0).unwrap());
/// assert_eq!(up.theta(), 0.0);
/// assert_eq!(up.radius(), 5.0);
/// ```
pub fn cartesian_to_spherical(coord: &CartesianCoordinate) -> SphericalCoordinate {
    // Components rebuilt from a radius at f64::MAX can round the norm past it
    let radius = coord.magnitude().min(f64::MAX);

    if radius == 0.0 {
        return SphericalCoordinate::from_parts(0.0, 0.0, 0.0);
    }

    // Rounding can push the ratio just past ±1
    let theta = (coord.z() / radius).clamp(-1.0, 1.0).acos();

    let mut phi = coord.y().atan2(coord.x());
    // atan2 returns +π for (+0, negative x); the azimuth range is half-open
    if phi >= PI {
        phi -= TAU;
    }

    SphericalCoordinate::from_parts(phi, theta, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_2;

    fn cart(x: f64, y: f64, z: f64) -> CartesianCoordinate {
        CartesianCoordinate::new(x, y, z).unwrap()
    }

    fn sph(phi: f64, theta: f64, radius: f64) -> SphericalCoordinate {
        SphericalCoordinate::new(phi, theta, radius).unwrap()
    }

    #[test]
    fn test_axes_to_cartesian() {
        let x_axis = spherical_to_cartesian(&sph(0.0, FRAC_PI_2, 1.0));
        assert_abs_diff_eq!(x_axis.x(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(x_axis.y(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(x_axis.z(), 0.0, epsilon = 1e-15);

        let y_axis = spherical_to_cartesian(&sph(FRAC_PI_2, FRAC_PI_2, 1.0));
        assert_abs_diff_eq!(y_axis.x(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y_axis.y(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(y_axis.z(), 0.0, epsilon = 1e-15);

        let south = spherical_to_cartesian(&sph(0.0, PI, 3.0));
        assert_abs_diff_eq!(south.z(), -3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_axes_to_spherical() {
        let x_axis = cartesian_to_spherical(&cart(1.0, 0.0, 0.0));
        assert_eq!(x_axis.phi(), 0.0);
        assert_abs_diff_eq!(x_axis.theta(), FRAC_PI_2, epsilon = 1e-15);
        assert_eq!(x_axis.radius(), 1.0);

        let south = cartesian_to_spherical(&cart(0.0, 0.0, -2.0));
        assert_abs_diff_eq!(south.theta(), PI, epsilon = 1e-15);
        assert_eq!(south.radius(), 2.0);
    }

    #[test]
    fn test_origin_is_special_cased() {
        let origin = cartesian_to_spherical(&CartesianCoordinate::ORIGIN);
        assert_eq!(origin.phi(), 0.0);
        assert_eq!(origin.theta(), 0.0);
        assert_eq!(origin.radius(), 0.0);

        let negative_zero = cartesian_to_spherical(&cart(-0.0, -0.0, -0.0));
        assert!(!negative_zero.theta().is_nan());
        assert_eq!(negative_zero.radius(), 0.0);
    }

    #[test]
    fn test_negative_x_axis_folds_phi() {
        // atan2(+0, -1) is exactly π
        let coord = cartesian_to_spherical(&cart(-1.0, 0.0, 0.0));
        assert_eq!(coord.phi(), -PI);

        let below = cartesian_to_spherical(&cart(-1.0, -0.0, 0.0));
        assert_eq!(below.phi(), -PI);
    }

    #[test]
    fn test_conversion_from_and_to_spherical() {
        let c1 = cart(10.0, 20.0, 30.0);
        let c2 = spherical_to_cartesian(&cartesian_to_spherical(&c1));
        assert_abs_diff_eq!(c1.x(), c2.x(), epsilon = 1e-6);
        assert_abs_diff_eq!(c1.y(), c2.y(), epsilon = 1e-6);
        assert_abs_diff_eq!(c1.z(), c2.z(), epsilon = 1e-6);
    }

    #[test]
    fn test_conversion_from_and_to_cartesian() {
        let s1 = sph(-3.0, 2.0, 30.0);
        let s2 = cartesian_to_spherical(&spherical_to_cartesian(&s1));
        assert_abs_diff_eq!(s1.phi(), s2.phi(), epsilon = 1e-3);
        assert_abs_diff_eq!(s1.theta(), s2.theta(), epsilon = 1e-3);
        assert_abs_diff_eq!(s1.radius(), s2.radius(), epsilon = 1e-3);
    }

    #[test]
    fn test_random_round_trips_stay_valid() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..1000 {
            let original = cart(
                rng.gen_range(-1e3..1e3),
                rng.gen_range(-1e3..1e3),
                rng.gen_range(-1e3..1e3),
            );
            let spherical = cartesian_to_spherical(&original);
            assert!(SphericalCoordinate::new(
                spherical.phi(),
                spherical.theta(),
                spherical.radius()
            )
            .is_ok());

            let back = spherical_to_cartesian(&spherical);
            assert_abs_diff_eq!(original.x(), back.x(), epsilon = 1e-9);
            assert_abs_diff_eq!(original.y(), back.y(), epsilon = 1e-9);
            assert_abs_diff_eq!(original.z(), back.z(), epsilon = 1e-9);
        }
    }

    fn assert_valid_spherical(s: &SphericalCoordinate) {
        assert!(
            SphericalCoordinate::new(s.phi(), s.theta(), s.radius()).is_ok(),
            "conversion produced an invalid coordinate: {}",
            s
        );
    }

    #[test]
    fn test_large_cartesian_converts_finitely() {
        for original in [
            cart(1e300, -1e300, 1e300),
            cart(1e308, 1e308, 0.0),
            cart(f64::MAX, 0.0, 0.0),
            cart(0.0, -f64::MAX, 0.0),
            cart(0.0, 0.0, -f64::MAX),
        ] {
            let spherical = cartesian_to_spherical(&original);
            assert_valid_spherical(&spherical);
            assert_relative_eq!(spherical.radius(), original.magnitude(), max_relative = 1e-15);

            let back = spherical_to_cartesian(&spherical);
            for (a, b) in [
                (original.x(), back.x()),
                (original.y(), back.y()),
                (original.z(), back.z()),
            ] {
                assert!(b.is_finite(), "{} came back as {}", original, back);
                assert_abs_diff_eq!(a, b, epsilon = original.magnitude() * 1e-12);
            }
        }
    }

    #[test]
    fn test_large_spherical_converts_finitely() {
        let mut rng = StdRng::seed_from_u64(31337);
        for _ in 0..200 {
            let original = sph(
                rng.gen_range(-PI..PI),
                rng.gen_range(0.0..=PI),
                f64::MAX,
            );
            let cartesian = spherical_to_cartesian(&original);
            assert!(cartesian.x().is_finite());
            assert!(cartesian.y().is_finite());
            assert!(cartesian.z().is_finite());

            let back = cartesian_to_spherical(&cartesian);
            assert_valid_spherical(&back);
            assert_relative_eq!(back.radius(), f64::MAX, max_relative = 1e-12);
        }

        let huge = spherical_to_cartesian(&sph(0.3, 1.0, 1e300));
        assert_relative_eq!(huge.magnitude(), 1e300, max_relative = 1e-12);
    }
}
