use super::{
    cartesian::{Cartesian, azimuth_degrees, inclination_degrees},
    distance::{distance_spherical_arc, distance_spherical_direct},
};
use serde::{Deserialize, Serialize};

/// Represents a point in spherical coordinates. Relative to a Cartesian x-y-z coordinate system,
/// azimuth is the right hand rotation angle about +z where +x is 0, and inclination is the angle
/// from the +z axis. Both angles are in degrees.
/// Unique values are not enforced on construction; conversions from Cartesian produce an
/// azimuth in `[0, 360)` and an inclination in `[0, 180]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    pub radius: f64,
    pub azimuth: f64,
    pub inclination: f64,
}

impl Spherical {
    pub const ZERO: Self = Self { radius: 0.0, azimuth: 0.0, inclination: 0.0 };

    /// Creates a new `Spherical` instance with the given radius, azimuth, and inclination.
    ///
    /// # Arguments
    ///
    /// * `radius` - The radial distance from the origin.
    /// * `azimuth` - The azimuth angle in degrees.
    /// * `inclination` - The inclination angle from +z in degrees.
    pub fn new(radius: f64, azimuth: f64, inclination: f64) -> Self {
        Self {
            radius,
            azimuth,
            inclination,
        }
    }

    pub fn to_cartesian(self) -> Cartesian {
        Cartesian::from(self)
    }

    /// Straight-line (chord) distance to `other`.
    pub fn direct_distance(&self, other: &Spherical) -> f64 {
        distance_spherical_direct(self, other)
    }

    /// Arc length to `other` along the sphere of radius `self.radius`.
    /// The radius of `other` is not used.
    pub fn arc_distance(&self, other: &Spherical) -> f64 {
        distance_spherical_arc(self, other)
    }
}

impl From<Cartesian> for Spherical {
    /// Converts a `Cartesian` coordinate to a `Spherical` coordinate.
    ///
    /// The origin converts to `Spherical::ZERO`. On the z axis the azimuth is 0.
    fn from(cartesian: Cartesian) -> Self {
        let radius = cartesian.vec().norm();
        let azimuth = azimuth_degrees(cartesian.x, cartesian.y);
        let inclination = inclination_degrees(cartesian.z, radius);
        Spherical::new(radius, azimuth, inclination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const TOL: f64 = 1e-12;

    #[test]
    fn test_spherical_from_cartesian() {
        let spherical = Spherical::from(Cartesian::new(3.0, 4.0, 5.0));
        let expected_radius = 7.0710678118654755; // sqrt(3^2 + 4^2 + 5^2)
        let expected_azimuth = 53.13010235415598; // atan2(4.0, 3.0)
        let expected_inclination = 45.0; // acos(5.0 / 7.0710678118654755)

        assert_abs_diff_eq!(spherical.radius, expected_radius, epsilon = TOL);
        assert_abs_diff_eq!(spherical.azimuth, expected_azimuth, epsilon = TOL);
        assert_abs_diff_eq!(spherical.inclination, expected_inclination, epsilon = 1e-9);
    }

    #[test]
    fn test_spherical_from_origin() {
        let spherical = Cartesian::ZERO.to_spherical();
        assert_eq!(spherical, Spherical::ZERO);
        assert!(!spherical.inclination.is_nan());
    }

    #[test]
    fn test_spherical_poles_have_zero_azimuth() {
        let north = Cartesian::new(0.0, 0.0, 3.0).to_spherical();
        assert_abs_diff_eq!(north.radius, 3.0, epsilon = TOL);
        assert_eq!(north.azimuth, 0.0);
        assert_abs_diff_eq!(north.inclination, 0.0, epsilon = TOL);

        let south = Cartesian::new(0.0, 0.0, -3.0).to_spherical();
        assert_eq!(south.azimuth, 0.0);
        assert_abs_diff_eq!(south.inclination, 180.0, epsilon = TOL);
    }

    #[test]
    fn test_spherical_round_trip_poles_do_not_crash() {
        for inclination in [0.0, 180.0] {
            let back = Spherical::new(4.0, 77.0, inclination).to_cartesian().to_spherical();
            assert_relative_eq!(back.radius, 4.0, max_relative = 1e-9);
            assert_abs_diff_eq!(back.inclination, inclination, epsilon = 1e-9);
            assert!((0.0..360.0).contains(&back.azimuth));
        }
    }

    #[test]
    fn test_spherical_round_trip() {
        for radius in [0.5, 1.0, 7.25] {
            for azimuth in [0.0, 30.0, 90.0, 181.0, 300.0, 359.5] {
                for inclination in [1.0, 45.0, 90.0, 135.0, 179.0] {
                    let back = Spherical::new(radius, azimuth, inclination)
                        .to_cartesian()
                        .to_spherical();
                    assert_relative_eq!(back.radius, radius, max_relative = 1e-9);
                    assert_relative_eq!(back.azimuth, azimuth, epsilon = 1e-9, max_relative = 1e-9);
                    assert_relative_eq!(back.inclination, inclination, max_relative = 1e-9);
                }
            }
        }
    }
}
