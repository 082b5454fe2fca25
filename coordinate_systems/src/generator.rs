use crate::{error::GeneratorErrors, polar::Polar, spherical::Spherical};
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, Uniform},
    rngs::SmallRng,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_RADIUS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub max_radius: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_radius: DEFAULT_MAX_RADIUS,
        }
    }
}

/// Draws uniformly random points from a fixed domain: radius in
/// `[0, max_radius]`, azimuth in `[0, 360)` and inclination in `[0, 180]`,
/// all angles in degrees.
///
/// The random source is owned by the generator and passed in by the caller,
/// so tests can use a seeded source.
#[derive(Debug, Clone)]
pub struct PointGenerator<R: Rng = SmallRng> {
    rng: R,
    radius: Uniform<f64>,
    azimuth: Uniform<f64>,
    inclination: Uniform<f64>,
}

impl<R: Rng> PointGenerator<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Result<Self, GeneratorErrors> {
        if !config.max_radius.is_finite() || config.max_radius < 0.0 {
            return Err(GeneratorErrors::InvalidRadius(config.max_radius));
        }
        Ok(Self {
            rng,
            radius: Uniform::new_inclusive(0.0, config.max_radius)?,
            azimuth: Uniform::new(0.0, 360.0)?,
            inclination: Uniform::new_inclusive(0.0, 180.0)?,
        })
    }

    pub fn polar(&mut self) -> Polar {
        let radius = self.radius.sample(&mut self.rng);
        let azimuth = self.azimuth.sample(&mut self.rng);
        Polar::new(radius, azimuth)
    }

    pub fn spherical(&mut self) -> Spherical {
        let radius = self.radius.sample(&mut self.rng);
        let azimuth = self.azimuth.sample(&mut self.rng);
        let inclination = self.inclination.sample(&mut self.rng);
        Spherical::new(radius, azimuth, inclination)
    }

    pub fn polar_points(&mut self, n: usize) -> Vec<Polar> {
        (0..n).map(|_| self.polar()).collect()
    }

    pub fn spherical_points(&mut self, n: usize) -> Vec<Spherical> {
        (0..n).map(|_| self.spherical()).collect()
    }
}

impl PointGenerator<SmallRng> {
    /// A reproducible generator: the same seed yields the same points.
    pub fn from_seed(seed: u64, config: GeneratorConfig) -> Result<Self, GeneratorErrors> {
        Self::new(SmallRng::seed_from_u64(seed), config)
    }

    /// A generator seeded from the operating system, different on every run.
    pub fn from_os_rng(config: GeneratorConfig) -> Result<Self, GeneratorErrors> {
        Self::new(SmallRng::from_os_rng(), config)
    }
}
