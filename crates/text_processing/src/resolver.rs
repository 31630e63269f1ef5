//! Voice intent resolver
//!
//! Entry point for the voice UI. Owns the category matcher, the route table
//! and the stored language preference, and dispatches transcripts to the
//! category-command or navigation parsers.
//!
//! The two parsers choose their language differently: category commands go
//! by the script of the transcript, navigation commands by the stored
//! preference (with an English fallback).

use std::sync::Arc;

use voice_intent_config::{MatchMode, Settings};
use voice_intent_core::{IntentType, Language, ParsedIntent, Script, VoiceIntent};
use voice_intent_persistence::{create_store, LanguagePreference, PreferenceStore};

use crate::command;
use crate::languages::{self, LanguageInfo};
use crate::lexicon::{CategoryInfo, CategoryLexicon};
use crate::matcher::CategoryMatcher;
use crate::messages::{self, MessageKind};
use crate::navigation;
use crate::patterns;
use crate::routes::RouteTable;
use crate::Result;

#[derive(Debug, Clone)]
pub struct VoiceIntentResolver {
    matcher: CategoryMatcher,
    preference: LanguagePreference,
    routes: Arc<RouteTable>,
}

impl VoiceIntentResolver {
    /// Built-in lexicon and routes, substring matching
    pub fn new(preference: LanguagePreference) -> Self {
        Self {
            matcher: CategoryMatcher::default(),
            preference,
            routes: Arc::new(RouteTable::builtin()),
        }
    }

    /// Build everything, including the preference store, from settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let store = create_store(&settings.preferences)?;
        Self::with_store(store, settings)
    }

    /// Build from settings around an existing preference store
    pub fn with_store(store: Arc<dyn PreferenceStore>, settings: &Settings) -> Result<Self> {
        let preference = LanguagePreference::from_config(store, &settings.voice)?;
        let lexicon = match &settings.lexicon.path {
            Some(path) => Arc::new(CategoryLexicon::load(path)?),
            None => CategoryLexicon::builtin(),
        };

        tracing::info!(
            default_language = %preference.default_language().code(),
            match_mode = ?settings.matching.mode,
            categories = lexicon.len(),
            "Voice intent resolver ready"
        );

        Ok(Self {
            matcher: CategoryMatcher::new(lexicon, settings.matching.mode),
            preference,
            routes: Arc::new(RouteTable::builtin()),
        })
    }

    pub fn with_lexicon(mut self, lexicon: Arc<CategoryLexicon>) -> Self {
        self.matcher = CategoryMatcher::new(lexicon, self.matcher.mode());
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.matcher = CategoryMatcher::new(self.matcher.shared_lexicon(), mode);
        self
    }

    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = Arc::new(routes);
        self
    }

    pub fn matcher(&self) -> &CategoryMatcher {
        &self.matcher
    }

    pub fn lexicon(&self) -> &CategoryLexicon {
        self.matcher.lexicon()
    }

    pub fn preference(&self) -> &LanguagePreference {
        &self.preference
    }

    // Language preference

    /// Stored language code (`"en"` when unset), as stored
    pub fn current_language(&self) -> String {
        self.preference.code()
    }

    /// Stored language, if it is one with pattern tables
    pub fn active_language(&self) -> Option<Language> {
        self.preference.language()
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.preference.set(language)?;
        tracing::info!(language = %language.code(), "Voice command language changed");
        Ok(())
    }

    pub fn supported_languages() -> Vec<LanguageInfo> {
        languages::supported_languages()
    }

    // Categories

    pub fn match_category(&self, input: &str) -> Option<&str> {
        self.matcher.match_category(input)
    }

    pub fn parse_category_command(&self, voice_command: &str) -> ParsedIntent {
        command::parse_category_command(&self.matcher, voice_command)
    }

    pub fn category_display_name<'a>(&'a self, id: &'a str, language: Language) -> &'a str {
        self.lexicon().display_name(id, language)
    }

    pub fn all_categories(&self) -> Vec<CategoryInfo> {
        self.lexicon().all_categories()
    }

    pub fn is_valid_category(&self, id: &str) -> bool {
        self.lexicon().is_valid_category(id)
    }

    pub fn suggest_categories(&self, partial: &str, limit: usize) -> Vec<CategoryInfo> {
        self.lexicon().suggest(partial, limit)
    }

    // Navigation

    /// Parse a navigation or search command in the stored language
    ///
    /// Falls back to the English table when the stored language's table has
    /// no match. `None` means nothing actionable was recognized.
    pub fn parse_voice_intent(&self, transcript: &str) -> Option<VoiceIntent> {
        let normalized = patterns::normalize(transcript);
        if normalized.is_empty() {
            return None;
        }

        let code = self.preference.code();
        let active = Language::from_str_loose(&code);

        match active {
            Some(language) => {
                if let Some(intent) = Self::navigation_intent(language, &normalized) {
                    return Some(intent);
                }
            }
            None => {
                tracing::warn!(code = %code, "No navigation patterns for stored language, using English");
            }
        }

        if active != Some(Language::English) {
            if let Some(intent) = Self::navigation_intent(Language::English, &normalized) {
                tracing::debug!(
                    active = %code,
                    script = ?Script::detect(&normalized),
                    "Matched through English fallback"
                );
                return Some(intent);
            }
        }

        tracing::debug!(transcript = %normalized, language = %code, "No voice intent recognized");
        None
    }

    fn navigation_intent(language: Language, normalized: &str) -> Option<VoiceIntent> {
        let (intent_type, target) = navigation::match_navigation(language, normalized)?;
        tracing::debug!(
            intent = ?intent_type,
            target = %target,
            language = %language.code(),
            "Parsed voice intent"
        );
        Some(VoiceIntent {
            intent_type,
            target,
            language,
        })
    }

    /// Path for a navigation target under the stored language
    pub fn resolve_route(&self, target: &str) -> Option<&str> {
        self.routes.resolve(target, self.active_language())
    }

    /// Route name → path pairs available in the stored language
    pub fn available_routes(&self) -> Vec<(&str, &str)> {
        self.routes.routes_for(self.active_language())
    }

    // Messages

    /// Localized message; unknown kinds return `value` unchanged
    pub fn success_message(&self, kind: &str, value: &str) -> String {
        messages::success_message(self.active_language(), kind, value)
    }

    /// Message confirming a parsed navigation intent
    pub fn confirmation(&self, intent: &VoiceIntent) -> String {
        let kind = match intent.intent_type {
            IntentType::Navigation => MessageKind::Navigating,
            IntentType::Search => MessageKind::SearchResults,
        };
        messages::format_message(intent.language, kind, &intent.target)
    }
}

impl Default for VoiceIntentResolver {
    fn default() -> Self {
        Self::new(LanguagePreference::default())
    }
}
