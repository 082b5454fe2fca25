use rand::distr::uniform;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorErrors {
    #[error("max radius must be finite and non-negative, got {0}")]
    InvalidRadius(f64),
    #[error("{0}")]
    Distribution(#[from] uniform::Error),
}
