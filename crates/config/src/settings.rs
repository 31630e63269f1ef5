//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::{DEFAULT_LANGUAGE, DEFAULT_PREFERENCE_PATH, ENV_PREFIX, PREFERENCE_KEY};
use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Language preference defaults
    #[serde(default)]
    pub voice: VoiceConfig,

    /// Category matching behaviour
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Optional lexicon override
    #[serde(default)]
    pub lexicon: LexiconSettings,

    /// Where the language preference is persisted
    #[serde(default)]
    pub preferences: PreferenceConfig,
}

/// Voice language settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceConfig {
    /// Language code used when the user never picked one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Storage key for the persisted preference
    #[serde(default = "default_preference_key")]
    pub preference_key: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_preference_key() -> String {
    PREFERENCE_KEY.to_string()
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            preference_key: default_preference_key(),
        }
    }
}

/// How surface forms are compared with the spoken phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Raw bidirectional substring containment. Short phrases may match
    /// unrelated longer forms.
    #[default]
    Substring,
    /// Containment only on whole-word boundaries
    WordBoundary,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MatchingConfig {
    #[serde(default)]
    pub mode: MatchMode,
}

/// Lexicon source
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LexiconSettings {
    /// YAML file replacing the built-in lexicon
    #[serde(default)]
    pub path: Option<String>,
}

/// Preference storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceBackend {
    /// Process-local, lost on restart
    #[default]
    Memory,
    /// JSON object on disk
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceConfig {
    #[serde(default)]
    pub backend: PreferenceBackend,

    /// File used by the `file` backend
    #[serde(default = "default_preference_path")]
    pub path: String,
}

fn default_preference_path() -> String {
    DEFAULT_PREFERENCE_PATH.to_string()
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            backend: PreferenceBackend::default(),
            path: default_preference_path(),
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_voice()?;
        self.validate_preferences()?;
        self.validate_lexicon()?;
        Ok(())
    }

    fn validate_voice(&self) -> Result<(), ConfigError> {
        voice_intent_core::parse_language(&self.voice.default_language).map_err(|e| {
            ConfigError::InvalidValue {
                field: "voice.default_language".to_string(),
                message: e.to_string(),
            }
        })?;

        if self.voice.preference_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "voice.preference_key".to_string(),
                message: "Preference key cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    fn validate_preferences(&self) -> Result<(), ConfigError> {
        if self.preferences.backend == PreferenceBackend::File
            && self.preferences.path.trim().is_empty()
        {
            return Err(ConfigError::InvalidValue {
                field: "preferences.path".to_string(),
                message: "A path is required for the file backend".to_string(),
            });
        }
        Ok(())
    }

    fn validate_lexicon(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.lexicon.path {
            if !Path::new(path).is_file() {
                return Err(ConfigError::FileNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

/// Load settings from `config/` and the environment
///
/// Priority: env vars > config/{env}.* > config/default.* > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Same as [`load_settings`] with an explicit configuration directory
pub fn load_settings_from(dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::from(dir.join("default")).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder = builder.add_source(File::from(dir.join(env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::info!(
        default_language = %settings.voice.default_language,
        match_mode = ?settings.matching.mode,
        backend = ?settings.preferences.backend,
        "Loaded voice intent settings"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.voice.default_language, "en");
        assert_eq!(settings.voice.preference_key, "voiceCommandLanguage");
        assert_eq!(settings.matching.mode, MatchMode::Substring);
        assert_eq!(settings.preferences.backend, PreferenceBackend::Memory);
        assert!(settings.lexicon.path.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_default_language() {
        let mut settings = Settings::default();
        settings.voice.default_language = "xx".to_string();
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "voice.default_language"
        ));

        settings.voice.default_language = "bn".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_preference_key() {
        let mut settings = Settings::default();
        settings.voice.preference_key = "  ".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_backend_requires_path() {
        let mut settings = Settings::default();
        settings.preferences.backend = PreferenceBackend::File;
        settings.preferences.path = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_missing_lexicon_file() {
        let mut settings = Settings::default();
        settings.lexicon.path = Some("/definitely/not/here.yaml".to_string());
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut default = std::fs::File::create(dir.path().join("default.yaml")).unwrap();
        writeln!(
            default,
            "voice:\n  default_language: bn\nmatching:\n  mode: word_boundary\n"
        )
        .unwrap();
        let mut staging = std::fs::File::create(dir.path().join("staging.yaml")).unwrap();
        writeln!(staging, "voice:\n  default_language: en\n").unwrap();

        let settings = load_settings_from(dir.path(), None).unwrap();
        assert_eq!(settings.voice.default_language, "bn");
        assert_eq!(settings.matching.mode, MatchMode::WordBoundary);
        assert_eq!(settings.voice.preference_key, "voiceCommandLanguage");

        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.voice.default_language, "en");
        assert_eq!(settings.matching.mode, MatchMode::WordBoundary);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.yaml"),
            "voice:\n  default_language: klingon\n",
        )
        .unwrap();
        assert!(load_settings_from(dir.path(), None).is_err());
    }
}
