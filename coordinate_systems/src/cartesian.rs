use super::{angle::clamp_unit, angle::normalize_degrees, polar::Polar, spherical::Spherical};
use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// Represents a point in 2D Cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian2 {
    pub x: f64,
    pub y: f64,
}

impl Cartesian2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts the `Cartesian2` instance to a `Vector2`.
    pub fn vec(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Converts to polar coordinates. The origin maps to a radius and azimuth of 0.
    pub fn to_polar(self) -> Polar {
        Polar::from(self)
    }
}

impl From<Vector2<f64>> for Cartesian2 {
    fn from(v: Vector2<f64>) -> Cartesian2 {
        Cartesian2::new(v[0], v[1])
    }
}

impl From<Polar> for Cartesian2 {
    /// Converts a `Polar` coordinate to a `Cartesian2` coordinate.
    ///
    /// The radius is not validated, so a negative radius mirrors the point
    /// through the origin.
    fn from(polar: Polar) -> Self {
        let azimuth = polar.azimuth.to_radians();
        Self::new(polar.radius * azimuth.cos(), polar.radius * azimuth.sin())
    }
}

impl Neg for Cartesian2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Add<Cartesian2> for Cartesian2 {
    type Output = Self;
    fn add(self, rhs: Cartesian2) -> Cartesian2 {
        Cartesian2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Cartesian2> for Cartesian2 {
    type Output = Self;
    fn sub(self, rhs: Cartesian2) -> Cartesian2 {
        Cartesian2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Represents a point in 3D Cartesian coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    /// Creates a new `Cartesian` instance with the given x, y, and z components.
    ///
    /// # Arguments
    ///
    /// * `x` - The x component.
    /// * `y` - The y component.
    /// * `z` - The z component.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts the `Cartesian` instance to a `Vector3`.
    pub fn vec(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Converts to spherical coordinates. See `From<Cartesian> for Spherical`.
    pub fn to_spherical(self) -> Spherical {
        Spherical::from(self)
    }
}

impl From<Vector3<f64>> for Cartesian {
    /// Creates a new `Cartesian` instance from a `Vector3`.
    fn from(v: Vector3<f64>) -> Cartesian {
        Cartesian::new(v[0], v[1], v[2])
    }
}

impl From<Spherical> for Cartesian {
    /// Converts a `Spherical` coordinate to a `Cartesian` coordinate.
    ///
    /// Uses the physics convention: inclination is measured from +z and
    /// azimuth is the right hand rotation about +z where +x is 0.
    ///
    /// # Arguments
    ///
    /// * `sph` - A `Spherical` instance, angles in degrees.
    fn from(sph: Spherical) -> Self {
        let azimuth = sph.azimuth.to_radians();
        let inclination = sph.inclination.to_radians();
        let radius = sph.radius;

        let x = radius * inclination.sin() * azimuth.cos();
        let y = radius * inclination.sin() * azimuth.sin();
        let z = radius * inclination.cos();

        Self::new(x, y, z)
    }
}

impl Neg for Cartesian {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add<Cartesian> for Cartesian {
    type Output = Self;

    /// Adds two `Cartesian` coordinates component-wise.
    fn add(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<Cartesian> for Cartesian {
    type Output = Self;
    fn sub(self, rhs: Cartesian) -> Cartesian {
        Cartesian::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Azimuth in degrees of the projection of (x, y), wrapped into `[0, 360)`.
pub(crate) fn azimuth_degrees(x: f64, y: f64) -> f64 {
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Inclination in degrees from +z for a point at `radius`. The origin has an
/// inclination of 0.
pub(crate) fn inclination_degrees(z: f64, radius: f64) -> f64 {
    if radius == 0.0 {
        return 0.0;
    }
    clamp_unit(z / radius).acos().to_degrees()
}
