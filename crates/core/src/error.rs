//! Error types for the voice intent resolver

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
///
/// Parsing itself never fails; this covers language codes coming from
/// storage or settings.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl Error {
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(code.into())
    }
}
