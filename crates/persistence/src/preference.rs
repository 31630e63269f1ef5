//! Typed access to the voice-command language preference

use std::sync::Arc;

use voice_intent_config::constants::PREFERENCE_KEY;
use voice_intent_config::VoiceConfig;
use voice_intent_core::Language;

use crate::{PersistenceError, PreferenceStore};

/// The user's voice-command language, stored under a single key
///
/// Reads are infallible: a store error is logged and the default language
/// is reported instead. The raw stored code is exposed as well, since the
/// store may hold a code this build has no patterns for.
#[derive(Clone)]
pub struct LanguagePreference {
    store: Arc<dyn PreferenceStore>,
    key: String,
    default: Language,
}

impl LanguagePreference {
    pub fn new(store: Arc<dyn PreferenceStore>, key: impl Into<String>, default: Language) -> Self {
        Self {
            store,
            key: key.into(),
            default,
        }
    }

    /// Build from settings; fails if the configured default is not supported
    pub fn from_config(
        store: Arc<dyn PreferenceStore>,
        config: &VoiceConfig,
    ) -> Result<Self, PersistenceError> {
        let default = voice_intent_core::parse_language(&config.default_language)
            .map_err(|e| PersistenceError::InvalidData(e.to_string()))?;
        Ok(Self::new(store, config.preference_key.clone(), default))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_language(&self) -> Language {
        self.default
    }

    /// Stored language code, or the default's code when unset/unreadable
    pub fn code(&self) -> String {
        match self.store.get(&self.key) {
            Ok(Some(code)) if !code.trim().is_empty() => code,
            Ok(_) => self.default.code().to_string(),
            Err(e) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "Failed to read language preference, using default"
                );
                self.default.code().to_string()
            }
        }
    }

    /// Stored language if it is one we support
    pub fn language(&self) -> Option<Language> {
        Language::from_str_loose(&self.code())
    }

    pub fn set(&self, language: Language) -> Result<(), PersistenceError> {
        self.store.set(&self.key, language.code())?;
        tracing::debug!(key = %self.key, language = %language.code(), "Stored language preference");
        Ok(())
    }

    /// Forget the stored choice so the default applies again
    pub fn clear(&self) -> Result<(), PersistenceError> {
        self.store.remove(&self.key)
    }
}

impl std::fmt::Debug for LanguagePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguagePreference")
            .field("key", &self.key)
            .field("default", &self.default)
            .finish()
    }
}

impl Default for LanguagePreference {
    fn default() -> Self {
        Self::new(
            Arc::new(crate::InMemoryPreferenceStore::new()),
            PREFERENCE_KEY,
            Language::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryPreferenceStore;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Err(PersistenceError::InvalidData("disk on fire".to_string()))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(PersistenceError::InvalidData("disk on fire".to_string()))
        }
        fn remove(&self, _key: &str) -> Result<(), PersistenceError> {
            Ok(())
        }
    }

    #[test]
    fn test_defaults_to_english() {
        let pref = LanguagePreference::default();
        assert_eq!(pref.key(), "voiceCommandLanguage");
        assert_eq!(pref.code(), "en");
        assert_eq!(pref.language(), Some(Language::English));
    }

    #[test]
    fn test_set_and_clear() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let pref = LanguagePreference::new(store.clone(), PREFERENCE_KEY, Language::English);

        pref.set(Language::Bengali).unwrap();
        assert_eq!(pref.code(), "bn");
        assert_eq!(pref.language(), Some(Language::Bengali));
        assert_eq!(
            store.get("voiceCommandLanguage").unwrap().as_deref(),
            Some("bn")
        );

        pref.clear().unwrap();
        assert_eq!(pref.code(), "en");
    }

    #[test]
    fn test_unsupported_stored_code_is_visible() {
        let store = Arc::new(InMemoryPreferenceStore::with_values([(
            "voiceCommandLanguage",
            "hi",
        )]));
        let pref = LanguagePreference::new(store, PREFERENCE_KEY, Language::English);
        assert_eq!(pref.code(), "hi");
        assert_eq!(pref.language(), None);
    }

    #[test]
    fn test_read_failure_falls_back() {
        let pref = LanguagePreference::new(Arc::new(BrokenStore), PREFERENCE_KEY, Language::Bengali);
        assert_eq!(pref.code(), "bn");
        assert!(pref.set(Language::English).is_err());
    }

    #[test]
    fn test_from_config() {
        let config = VoiceConfig {
            default_language: "bn".to_string(),
            preference_key: "lang".to_string(),
        };
        let pref =
            LanguagePreference::from_config(Arc::new(InMemoryPreferenceStore::new()), &config)
                .unwrap();
        assert_eq!(pref.key(), "lang");
        assert_eq!(pref.default_language(), Language::Bengali);

        let bad = VoiceConfig {
            default_language: "zz".to_string(),
            ..config
        };
        assert!(
            LanguagePreference::from_config(Arc::new(InMemoryPreferenceStore::new()), &bad)
                .is_err()
        );
    }
}
