//! Navigation command tables
//!
//! Per-language ordered patterns for "go to cart" / "কার্ট পেজে যাও" style
//! commands. Unlike category commands, the table is chosen by the stored
//! language preference rather than by the transcript's script.

use once_cell::sync::Lazy;

use voice_intent_core::{IntentType, Language};

use crate::patterns::{
    self, bengali_phrase, bengali_target, english_phrase, english_target, CommandPattern,
    PatternSpec,
};

const ENGLISH_SPECS: &[PatternSpec<IntentType>] = &[
    PatternSpec {
        name: "go_to",
        pattern: r"^(?:go\s+to|navigate\s+to|take\s+me\s+to)\s+(?P<phrase>.+)$",
        extract: english_target,
        kind: IntentType::Navigation,
    },
    PatternSpec {
        name: "open",
        pattern: r"^open\s+(?:up\s+)?(?P<phrase>.+)$",
        extract: english_target,
        kind: IntentType::Navigation,
    },
    PatternSpec {
        name: "search",
        pattern: r"^(?:search\s+for|search|find|look\s+for)\s+(?P<phrase>.+)$",
        extract: english_phrase,
        kind: IntentType::Search,
    },
    PatternSpec {
        name: "show",
        pattern: r"^show\s+(?P<phrase>.+)$",
        extract: english_phrase,
        kind: IntentType::Search,
    },
];

const BENGALI_SPECS: &[PatternSpec<IntentType>] = &[
    PatternSpec {
        name: "go_to",
        pattern: r"^(?P<phrase>.+?)(?:\s+(?:পেজে|পাতায়))?\s+(?:যাও|যান|চলো)$",
        extract: bengali_target,
        kind: IntentType::Navigation,
    },
    PatternSpec {
        name: "open_prefix",
        pattern: r"^(?:খোলো|খুলুন|খুলো)\s+(?P<phrase>.+)$",
        extract: bengali_target,
        kind: IntentType::Navigation,
    },
    PatternSpec {
        name: "open_suffix",
        pattern: r"^(?P<phrase>.+?)\s+(?:খুলো|খোলো|খুলুন)$",
        extract: bengali_target,
        kind: IntentType::Navigation,
    },
    PatternSpec {
        name: "search_suffix",
        pattern: r"^(?P<phrase>.+?)\s+(?:খুঁজুন|খুঁজো|খোঁজো|খুঁজে\s+দাও|সার্চ\s+করো)$",
        extract: bengali_phrase,
        kind: IntentType::Search,
    },
    PatternSpec {
        name: "search_prefix",
        pattern: r"^(?:খুঁজুন|খুঁজো|খোঁজো|খুঁজে\s+দাও|সার্চ\s+করো)\s+(?P<phrase>.+)$",
        extract: bengali_phrase,
        kind: IntentType::Search,
    },
    PatternSpec {
        name: "show",
        pattern: r"^(?P<phrase>.+?)\s+(?:দেখাও|দেখান)$",
        extract: bengali_phrase,
        kind: IntentType::Search,
    },
];

static ENGLISH_PATTERNS: Lazy<Vec<CommandPattern<IntentType>>> =
    Lazy::new(|| patterns::compile("navigation.en", ENGLISH_SPECS));

static BENGALI_PATTERNS: Lazy<Vec<CommandPattern<IntentType>>> =
    Lazy::new(|| patterns::compile("navigation.bn", BENGALI_SPECS));

pub fn navigation_patterns(language: Language) -> &'static [CommandPattern<IntentType>] {
    match language {
        Language::English => &ENGLISH_PATTERNS,
        Language::Bengali => &BENGALI_PATTERNS,
    }
}

/// Run one language's table over an already normalized transcript
pub fn match_navigation(language: Language, normalized: &str) -> Option<(IntentType, String)> {
    patterns::first_match(navigation_patterns(language), normalized)
        .map(|(pattern, target)| (pattern.kind, target))
}
