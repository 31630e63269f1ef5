//! Supported voice-command languages, as offered to the user

use serde::Serialize;
use voice_intent_core::Language;

/// What a language picker and the speech engine need to know
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub language: Language,
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub recognition_locale: &'static str,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            language,
            code: language.code(),
            name: language.name(),
            native_name: language.native_name(),
            recognition_locale: language.recognition_locale(),
        }
    }
}

pub fn supported_languages() -> Vec<LanguageInfo> {
    Language::all().iter().copied().map(LanguageInfo::from).collect()
}
