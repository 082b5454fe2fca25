use super::cartesian::{Cartesian2, azimuth_degrees};
use serde::{Deserialize, Serialize};

/// Represents a point in 2D polar coordinates. The azimuth is in degrees,
/// measured counter-clockwise from +x.
///
/// Values are not normalized on construction. Conversions from Cartesian
/// always produce a non-negative radius and an azimuth in `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    pub azimuth: f64,
}

impl Polar {
    pub const ZERO: Self = Self { radius: 0.0, azimuth: 0.0 };

    /// Creates a new `Polar` instance.
    ///
    /// # Arguments
    ///
    /// * `radius` - The distance from the origin.
    /// * `azimuth` - The angle from +x in degrees.
    pub fn new(radius: f64, azimuth: f64) -> Self {
        Self { radius, azimuth }
    }

    pub fn to_cartesian(self) -> Cartesian2 {
        Cartesian2::from(self)
    }
}

impl From<Cartesian2> for Polar {
    /// Converts a `Cartesian2` coordinate to a `Polar` coordinate.
    fn from(cartesian: Cartesian2) -> Self {
        let radius = cartesian.x.hypot(cartesian.y);
        let azimuth = azimuth_degrees(cartesian.x, cartesian.y);
        Polar::new(radius, azimuth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_polar_from_cartesian() {
        let polar = Polar::from(Cartesian2::new(3.0, 4.0));
        assert_abs_diff_eq!(polar.radius, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polar.azimuth, 53.13010235415598, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_from_origin() {
        let polar = Cartesian2::ZERO.to_polar();
        assert_eq!(polar, Polar::ZERO);
    }

    #[test]
    fn test_polar_from_negative_y_is_wrapped() {
        let polar = Polar::from(Cartesian2::new(0.0, -2.0));
        assert_abs_diff_eq!(polar.radius, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polar.azimuth, 270.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_round_trip() {
        for radius in [0.25, 1.0, 3.5, 9.99] {
            for azimuth in [0.0, 1.0, 45.0, 90.0, 179.5, 180.0, 200.0, 270.0, 359.0] {
                let back = Polar::new(radius, azimuth).to_cartesian().to_polar();
                assert_relative_eq!(back.radius, radius, max_relative = 1e-9);
                assert_relative_eq!(back.azimuth, azimuth, epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }
}
