use thiserror::Error;

pub type Result<T> = std::result::Result<T, XorSimError>;

#[derive(Debug, Error)]
pub enum XorSimError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("value {value} outside domain [0, {size})")]
    OutOfDomain { value: u64, size: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("scenario format error: {0}")]
    ScenarioFormat(String),
}
