//! Centralized defaults shared by settings, persistence and the resolver

/// Language used when no preference has been stored
pub const DEFAULT_LANGUAGE: &str = "en";

/// Storage key holding the voice-command language preference
pub const PREFERENCE_KEY: &str = "voiceCommandLanguage";

/// Prefix for environment variable overrides (`VOICE_INTENT__VOICE__DEFAULT_LANGUAGE`)
pub const ENV_PREFIX: &str = "VOICE_INTENT";

/// Default location of the JSON preference file
pub const DEFAULT_PREFERENCE_PATH: &str = "data/preferences.json";
