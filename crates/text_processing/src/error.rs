//! Error types for voice command processing
//!
//! Parsing itself never fails; these cover building a resolver from
//! configuration and writing the language preference.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TextProcessingError {
    /// Settings or lexicon file rejected
    #[error("Configuration error: {0}")]
    Config(#[from] voice_intent_config::ConfigError),

    /// Preference store unavailable
    #[error("Preference storage error: {0}")]
    Persistence(#[from] voice_intent_persistence::PersistenceError),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] voice_intent_core::Error),
}

/// Result type for text processing
pub type Result<T> = std::result::Result<T, TextProcessingError>;
