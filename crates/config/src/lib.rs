//! Configuration management for the voice intent resolver
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default.*`, `config/{env}.*`)
//! - Environment variables (VOICE_INTENT_ prefix, `__` separator)
//!
//! Category lexicons can be replaced with a YAML file, see [`LexiconConfig`].

pub mod constants;
pub mod lexicon;
pub mod settings;

pub use lexicon::{BengaliWordEntry, CategoryEntry, LexiconConfig};
pub use settings::{
    load_settings, load_settings_from, LexiconSettings, MatchMode, MatchingConfig, PreferenceBackend,
    PreferenceConfig, Settings, VoiceConfig,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Surface form '{form}' refers to unknown category '{category}'")]
    UnknownCategory { form: String, category: String },

    #[error("Category '{0}' is defined more than once")]
    DuplicateCategory(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
