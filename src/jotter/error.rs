use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("{0} cannot be empty")]
    EmptyField(Field),

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Prediction model unavailable: {0}")]
    OracleUnavailable(String),

    #[error("Word count must be between 1 and 20, got {0}")]
    InvalidWordCount(usize),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl JotError {
    /// True for failures reading or writing durable state.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, JotError::Io(_) | JotError::Serialization(_))
    }
}

pub type Result<T> = std::result::Result<T, JotError>;
