pub mod angle;
pub mod cartesian;
pub mod coordinate_system;
pub mod distance;
pub mod error;
pub mod generator;
pub mod polar;
pub mod spherical;

pub use coordinate_system::CoordinateSystem;

pub mod prelude {
    pub use crate::{
        CoordinateSystem,
        cartesian::{Cartesian, Cartesian2},
        distance::{Distance, DistanceKind},
        error::GeneratorErrors,
        generator::{GeneratorConfig, PointGenerator},
        polar::Polar,
        spherical::Spherical,
    };
}
