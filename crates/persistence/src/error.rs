//! Persistence error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Preference file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<tempfile::PersistError> for PersistenceError {
    fn from(e: tempfile::PersistError) -> Self {
        PersistenceError::Io(e.error)
    }
}
