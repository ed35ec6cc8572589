use thiserror::Error;

use crate::domain::validate::SolveInputError;

#[derive(Debug, Error)]
pub enum KnapsackError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported provider '{0}' (available: {1})")]
    UnsupportedProvider(String, String),

    #[error("solver backend error: {0}")]
    Backend(String),
}

impl From<SolveInputError> for KnapsackError {
    fn from(e: SolveInputError) -> Self {
        KnapsackError::Backend(e.details)
    }
}

pub type Result<T> = std::result::Result<T, KnapsackError>;
