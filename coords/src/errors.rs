use coordinate_systems::error::GeneratorErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessErrors {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("expected an integer count but got '{0}'")]
    InvalidCount(String),
    #[error("input ended while waiting for a count")]
    InputClosed,
    #[error("{0}")]
    Generator(#[from] GeneratorErrors),
    #[error("could not serialize report: {0}")]
    Ron(#[from] ron::Error),
}
