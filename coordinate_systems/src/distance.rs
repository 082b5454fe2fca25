//! Distances between two points expressed in the same coordinate system.

use crate::{angle::clamp_unit, cartesian::Cartesian, cartesian::Cartesian2, polar::Polar, spherical::Spherical};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance between two points of the same representation.
pub trait Distance {
    fn distance(&self, other: &Self) -> f64;
}

impl Distance for Cartesian2 {
    fn distance(&self, other: &Self) -> f64 {
        distance_cartesian_2d(self, other)
    }
}

impl Distance for Cartesian {
    fn distance(&self, other: &Self) -> f64 {
        distance_cartesian_3d(self, other)
    }
}

impl Distance for Polar {
    fn distance(&self, other: &Self) -> f64 {
        distance_polar(self, other)
    }
}

/// Euclidean distance in the plane.
pub fn distance_cartesian_2d(a: &Cartesian2, b: &Cartesian2) -> f64 {
    (b.vec() - a.vec()).norm()
}

/// Euclidean distance in space.
pub fn distance_cartesian_3d(a: &Cartesian, b: &Cartesian) -> f64 {
    (b.vec() - a.vec()).norm()
}

/// Distance between two polar points by the law of cosines.
///
/// The radicand is clamped at zero: for coincident points rounding can leave
/// it slightly negative.
pub fn distance_polar(a: &Polar, b: &Polar) -> f64 {
    let delta = (b.azimuth - a.azimuth).to_radians();
    let radicand = a.radius.powi(2) + b.radius.powi(2) - 2.0 * a.radius * b.radius * delta.cos();
    radicand.max(0.0).sqrt()
}

/// Straight-line distance between two spherical points, computed in Cartesian space.
pub fn distance_spherical_direct(a: &Spherical, b: &Spherical) -> f64 {
    distance_cartesian_3d(&a.to_cartesian(), &b.to_cartesian())
}

/// Great-circle arc length between the directions of `a` and `b` on the
/// sphere of radius `a.radius`.
///
/// `b.radius` is ignored: both points are taken to lie on the same sphere. The
/// cosine of the central angle is clamped to `[-1, 1]` so coincident points
/// give 0 instead of NaN.
pub fn distance_spherical_arc(a: &Spherical, b: &Spherical) -> f64 {
    let (inc1, inc2) = (a.inclination.to_radians(), b.inclination.to_radians());
    let delta_azimuth = (a.azimuth - b.azimuth).to_radians();
    let cos_central = inc1.cos() * inc2.cos() + inc1.sin() * inc2.sin() * delta_azimuth.cos();
    a.radius * clamp_unit(cos_central).acos()
}

/// The five metrics timed by the benchmark harness, in the order they run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceKind {
    /// Polar points converted to Cartesian, then Euclidean distance.
    Cartesian2D,
    /// Spherical points converted to Cartesian, then Euclidean distance.
    Cartesian3D,
    Polar,
    SphericalDirect,
    SphericalArc,
}

impl DistanceKind {
    pub const ALL: [DistanceKind; 5] = [
        DistanceKind::Cartesian2D,
        DistanceKind::Cartesian3D,
        DistanceKind::Polar,
        DistanceKind::SphericalDirect,
        DistanceKind::SphericalArc,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DistanceKind::Cartesian2D => "Cartesian 2D",
            DistanceKind::Cartesian3D => "Cartesian 3D",
            DistanceKind::Polar => "Polar",
            DistanceKind::SphericalDirect => "Spherical (direct)",
            DistanceKind::SphericalArc => "Spherical (arc)",
        }
    }

    /// Whether the metric consumes 3D (spherical) points rather than polar points.
    pub fn is_spatial(&self) -> bool {
        !matches!(self, DistanceKind::Cartesian2D | DistanceKind::Polar)
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    const TOL: f64 = 1e-9;

    fn sample_polars() -> Vec<Polar> {
        vec![
            Polar::new(0.0, 0.0),
            Polar::new(1.0, 0.0),
            Polar::new(2.5, 90.0),
            Polar::new(7.3, 213.7),
            Polar::new(9.9, 359.9),
        ]
    }

    fn sample_sphericals() -> Vec<Spherical> {
        vec![
            Spherical::new(1.0, 0.0, 90.0),
            Spherical::new(1.0, 90.0, 90.0),
            Spherical::new(3.2, 45.0, 0.0),
            Spherical::new(3.2, 300.0, 180.0),
            Spherical::new(6.1, 123.4, 56.7),
        ]
    }

    #[test]
    fn test_distance_cartesian_2d_345() {
        let d = distance_cartesian_2d(&Cartesian2::new(0.0, 0.0), &Cartesian2::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_distance_cartesian_3d() {
        let d = Cartesian::new(1.0, 2.0, 3.0).distance(&Cartesian::new(3.0, 5.0, 9.0));
        assert_abs_diff_eq!(d, 7.0, epsilon = TOL);
    }

    #[test]
    fn test_distance_polar_matches_cartesian() {
        for a in sample_polars() {
            for b in sample_polars() {
                let via_cartesian = a.to_cartesian().distance(&b.to_cartesian());
                assert_abs_diff_eq!(a.distance(&b), via_cartesian, epsilon = TOL);
            }
        }
    }

    #[test]
    fn test_distance_spherical_direct_matches_cartesian() {
        let a = Spherical::new(2.0, 0.0, 90.0);
        let b = Spherical::new(2.0, 0.0, 0.0);
        // (2, 0, 0) to (0, 0, 2)
        assert_abs_diff_eq!(a.direct_distance(&b), 8.0_f64.sqrt(), epsilon = TOL);
    }

    #[test]
    fn test_distance_spherical_arc_quarter_equator() {
        let a = Spherical::new(1.0, 0.0, 90.0);
        let b = Spherical::new(1.0, 90.0, 90.0);
        assert_abs_diff_eq!(distance_spherical_arc(&a, &b), FRAC_PI_2, epsilon = TOL);
    }

    #[test]
    fn test_distance_spherical_arc_pole_to_pole() {
        let a = Spherical::new(2.0, 10.0, 0.0);
        let b = Spherical::new(2.0, 250.0, 180.0);
        assert_abs_diff_eq!(a.arc_distance(&b), 2.0 * std::f64::consts::PI, epsilon = TOL);
    }

    #[test]
    fn test_distance_spherical_arc_ignores_second_radius() {
        let a = Spherical::new(1.0, 0.0, 90.0);
        let near = Spherical::new(1.0, 90.0, 90.0);
        let far = Spherical::new(50.0, 90.0, 90.0);
        assert_eq!(a.arc_distance(&near), a.arc_distance(&far));
        // only the first point's radius scales the arc
        assert_abs_diff_eq!(far.arc_distance(&a), 50.0 * FRAC_PI_2, epsilon = TOL);
    }

    #[test]
    fn test_distances_are_symmetric() {
        for a in sample_polars() {
            for b in sample_polars() {
                assert_abs_diff_eq!(a.distance(&b), b.distance(&a), epsilon = TOL);
                let (ca, cb) = (a.to_cartesian(), b.to_cartesian());
                assert_abs_diff_eq!(ca.distance(&cb), cb.distance(&ca), epsilon = TOL);
            }
        }
        for a in sample_sphericals() {
            for b in sample_sphericals() {
                assert_abs_diff_eq!(a.direct_distance(&b), b.direct_distance(&a), epsilon = TOL);
                let (ca, cb) = (a.to_cartesian(), b.to_cartesian());
                assert_abs_diff_eq!(ca.distance(&cb), cb.distance(&ca), epsilon = TOL);
                // arc distance is only symmetric on a shared sphere
                let b_same_sphere = Spherical::new(a.radius, b.azimuth, b.inclination);
                assert_abs_diff_eq!(
                    a.arc_distance(&b_same_sphere),
                    b_same_sphere.arc_distance(&a),
                    epsilon = TOL
                );
            }
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for p in sample_polars() {
            let d = p.distance(&p);
            assert!(!d.is_nan());
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-6);
            assert_eq!(p.to_cartesian().distance(&p.to_cartesian()), 0.0);
        }
        for s in sample_sphericals() {
            assert_eq!(s.direct_distance(&s), 0.0);
            assert_eq!(s.to_cartesian().distance(&s.to_cartesian()), 0.0);
            let arc = s.arc_distance(&s);
            assert!(!arc.is_nan());
            assert_abs_diff_eq!(arc, 0.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_distance_kind_order_and_labels() {
        assert_eq!(DistanceKind::ALL[0], DistanceKind::Cartesian2D);
        assert_eq!(DistanceKind::ALL[4], DistanceKind::SphericalArc);
        assert_eq!(DistanceKind::SphericalDirect.to_string(), "Spherical (direct)");
        assert!(!DistanceKind::Polar.is_spatial());
        assert!(DistanceKind::Cartesian3D.is_spatial());
    }
}
