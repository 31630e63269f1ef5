//! Language definitions for voice commands
//!
//! The storefront accepts voice commands in English and Bengali. Each
//! language carries its ISO code (the value persisted as the user's
//! preference), display names, and the locale handed to the external
//! speech-recognition engine.

use serde::{Deserialize, Serialize};

/// Supported voice-command languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Bengali,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Bengali => "bn",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Bengali => "Bengali",
        }
    }

    /// Name of the language written in its own script
    pub fn native_name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Bengali => "বাংলা",
        }
    }

    /// BCP 47 locale requested from the speech-recognition engine
    pub fn recognition_locale(&self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Bengali => "bn-BD",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::English => Script::Latin,
            Self::Bengali => Script::Bengali,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "en" | "eng" | "english" | "en-us" | "en-gb" => Some(Self::English),
            "bn" | "ben" | "bengali" | "bangla" | "bn-bd" | "bn-in" => Some(Self::Bengali),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Bengali]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Serialize a [`Language`] as its ISO code (`"en"`, `"bn"`)
///
/// Use with `#[serde(with = "voice_intent_core::language::code")]`.
pub mod code {
    use super::Language;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(language: &Language, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(language.code())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Language, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Language::from_str_loose(&raw)
            .ok_or_else(|| D::Error::custom(format!("unsupported language code: {}", raw)))
    }
}

/// Script systems seen in transcripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
    Bengali,
}

impl Script {
    /// Get Unicode range for this script (first block only)
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x024F),
            Self::Devanagari => (0x0900, 0x097F),
            Self::Bengali => (0x0980, 0x09FF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// True if any character of `text` belongs to this script
    pub fn appears_in(&self, text: &str) -> bool {
        text.chars().any(|c| self.contains_char(c))
    }

    /// Detect script from text (returns most frequent script)
    ///
    /// Whitespace and ASCII punctuation are ignored; ties resolve in the
    /// order Bengali, Devanagari, Latin.
    pub fn detect(text: &str) -> Option<Self> {
        let scripts = [Self::Bengali, Self::Devanagari, Self::Latin];
        let mut counts = [0usize; 3];

        for c in text.chars() {
            if c.is_whitespace() || c.is_ascii_punctuation() {
                continue;
            }
            if let Some(idx) = scripts.iter().position(|s| s.contains_char(c)) {
                counts[idx] += 1;
            }
        }

        let (idx, count) = counts
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|(_, count)| **count)?;
        if *count == 0 {
            return None;
        }
        Some(scripts[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::English.code(), "en");
        assert_eq!(Language::Bengali.code(), "bn");
    }

    #[test]
    fn test_language_script() {
        assert_eq!(Language::English.script(), Script::Latin);
        assert_eq!(Language::Bengali.script(), Script::Bengali);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from_str_loose("bn"), Some(Language::Bengali));
        assert_eq!(Language::from_str_loose(" Bangla "), Some(Language::Bengali));
        assert_eq!(Language::from_str_loose("EN-US"), Some(Language::English));
        assert_eq!(Language::from_str_loose("hi"), None);
        assert_eq!(Language::from_str_loose(""), None);
    }

    #[test]
    fn test_serde_name_and_code() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "code")]
            lang: Language,
        }

        assert_eq!(
            serde_json::to_string(&Language::Bengali).unwrap(),
            "\"bengali\""
        );
        let json = serde_json::to_string(&Wrapper { lang: Language::Bengali }).unwrap();
        assert_eq!(json, r#"{"lang":"bn"}"#);
        let back: Wrapper = serde_json::from_str(r#"{"lang":"en"}"#).unwrap();
        assert_eq!(back.lang, Language::English);
        assert!(serde_json::from_str::<Wrapper>(r#"{"lang":"xx"}"#).is_err());
    }

    #[test]
    fn test_bengali_block_boundaries() {
        assert!(Script::Bengali.contains_char('\u{0980}'));
        assert!(Script::Bengali.contains_char('\u{09FF}'));
        assert!(!Script::Bengali.contains_char('\u{097F}'));
        assert!(!Script::Bengali.contains_char('\u{0A00}'));
    }

    #[test]
    fn test_appears_in() {
        assert!(Script::Bengali.appears_in("show me মোবাইল"));
        assert!(!Script::Bengali.appears_in("show me laptops"));
        assert!(!Script::Bengali.appears_in(""));
    }

    #[test]
    fn test_script_detect() {
        assert_eq!(Script::detect("Hello world"), Some(Script::Latin));
        assert_eq!(Script::detect("নমস্কার"), Some(Script::Bengali));
        assert_eq!(Script::detect("नमस्ते"), Some(Script::Devanagari));
        assert_eq!(Script::detect("   "), None);
    }

    #[test]
    fn test_all_languages() {
        assert_eq!(Language::all().len(), 2);
    }
}
