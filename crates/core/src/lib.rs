//! Core types for the voice intent resolver
//!
//! This crate provides foundational types used across all other crates:
//! - Language definitions (English, Bengali) and script detection
//! - Intent value types (`ParsedIntent`, `VoiceIntent`)
//! - Error types

pub mod error;
pub mod intent;
pub mod language;

pub use error::{Error, Result};
pub use intent::{CommandKind, IntentType, ParsedIntent, VoiceIntent};
pub use language::{Language, Script};

/// Parse a stored language code, failing with [`Error::UnsupportedLanguage`]
pub fn parse_language(code: &str) -> Result<Language> {
    Language::from_str_loose(code).ok_or_else(|| Error::unsupported_language(code))
}
