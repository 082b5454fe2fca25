use crate::cartesian::{Cartesian, Cartesian2};
use crate::distance::Distance;
use crate::polar::Polar;
use crate::spherical::Spherical;
use std::fmt;

/// Represents a point in any of the supported coordinate systems.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinateSystem {
    Polar(Polar),
    Cartesian2(Cartesian2),
    Spherical(Spherical),
    Cartesian(Cartesian),
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::Cartesian(Cartesian::default())
    }
}

impl CoordinateSystem {
    pub fn dimension(&self) -> usize {
        match self {
            CoordinateSystem::Polar(_) | CoordinateSystem::Cartesian2(_) => 2,
            CoordinateSystem::Spherical(_) | CoordinateSystem::Cartesian(_) => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::Polar(_) => "Polar",
            CoordinateSystem::Cartesian2(_) | CoordinateSystem::Cartesian(_) => "Cartesian",
            CoordinateSystem::Spherical(_) => "Spherical",
        }
    }

    /// Straight-line distance between two points of the same dimension.
    ///
    /// If both are of the same type they are measured directly, otherwise they
    /// are converted to Cartesian first. Returns `None` when the dimensions differ.
    pub fn distance(&self, other: &CoordinateSystem) -> Option<f64> {
        let d = match (self, other) {
            (CoordinateSystem::Polar(a), CoordinateSystem::Polar(b)) => a.distance(b),
            (CoordinateSystem::Cartesian2(a), CoordinateSystem::Cartesian2(b)) => a.distance(b),
            (CoordinateSystem::Spherical(a), CoordinateSystem::Spherical(b)) => a.direct_distance(b),
            (CoordinateSystem::Cartesian(a), CoordinateSystem::Cartesian(b)) => a.distance(b),
            _ if self.dimension() != other.dimension() => return None,
            _ if self.dimension() == 2 => {
                Cartesian2::try_from(*self).ok()?.distance(&Cartesian2::try_from(*other).ok()?)
            }
            _ => Cartesian::try_from(*self).ok()?.distance(&Cartesian::try_from(*other).ok()?),
        };
        Some(d)
    }
}

impl From<Polar> for CoordinateSystem {
    fn from(p: Polar) -> Self {
        Self::Polar(p)
    }
}

impl From<Cartesian2> for CoordinateSystem {
    fn from(c: Cartesian2) -> Self {
        Self::Cartesian2(c)
    }
}

impl From<Spherical> for CoordinateSystem {
    fn from(s: Spherical) -> Self {
        Self::Spherical(s)
    }
}

impl From<Cartesian> for CoordinateSystem {
    fn from(c: Cartesian) -> Self {
        Self::Cartesian(c)
    }
}

impl TryFrom<CoordinateSystem> for Cartesian2 {
    type Error = CoordinateSystem;

    /// Converts any 2D point to `Cartesian2`, handing back 3D points unchanged.
    fn try_from(cs: CoordinateSystem) -> Result<Self, Self::Error> {
        match cs {
            CoordinateSystem::Cartesian2(c) => Ok(c),
            CoordinateSystem::Polar(p) => Ok(p.into()),
            other => Err(other),
        }
    }
}

impl TryFrom<CoordinateSystem> for Cartesian {
    type Error = CoordinateSystem;

    /// Converts any 3D point to `Cartesian`, handing back 2D points unchanged.
    fn try_from(cs: CoordinateSystem) -> Result<Self, Self::Error> {
        match cs {
            CoordinateSystem::Cartesian(c) => Ok(c),
            CoordinateSystem::Spherical(s) => Ok(s.into()),
            other => Err(other),
        }
    }
}

impl fmt::Display for CoordinateSystem {
    /// Formats coordinates to two decimals, angles with a degree sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            CoordinateSystem::Polar(p) => {
                write!(f, "{name}: r = {:.2}, θ = {:.2}°", p.radius, p.azimuth)
            }
            CoordinateSystem::Cartesian2(c) => write!(f, "{name}: x = {:.2}, y = {:.2}", c.x, c.y),
            CoordinateSystem::Spherical(s) => write!(
                f,
                "{name}: r = {:.2}, θ = {:.2}°, φ = {:.2}°",
                s.radius, s.azimuth, s.inclination
            ),
            CoordinateSystem::Cartesian(c) => {
                write!(f, "{name}: x = {:.2}, y = {:.2}, z = {:.2}", c.x, c.y, c.z)
            }
        }
    }
}
