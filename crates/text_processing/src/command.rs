//! Category commands
//!
//! Turns "show me laptops" / "ল্যাপটপ দেখাও" style commands into a
//! [`ParsedIntent`]: either a canonical category or a free-text search.

use once_cell::sync::Lazy;

use voice_intent_core::{CommandKind, Language, ParsedIntent};

use crate::matcher::CategoryMatcher;
use crate::patterns::{self, bengali_phrase, english_phrase, CommandPattern, PatternSpec};

const ENGLISH_SPECS: &[PatternSpec<CommandKind>] = &[
    PatternSpec {
        name: "show",
        pattern: r"^(?:show|display|view)\s+(?:me\s+)?(?P<phrase>.+)$",
        extract: english_phrase,
        kind: CommandKind::Show,
    },
    PatternSpec {
        name: "find",
        pattern: r"^(?:find|search(?:\s+for)?|look\s+for)\s+(?:me\s+)?(?P<phrase>.+)$",
        extract: english_phrase,
        kind: CommandKind::Find,
    },
    PatternSpec {
        name: "want",
        pattern: r"^(?:give\s+me|i\s+want|i\s+need|get\s+me)\s+(?P<phrase>.+)$",
        extract: english_phrase,
        kind: CommandKind::Want,
    },
];

const BENGALI_SPECS: &[PatternSpec<CommandKind>] = &[
    PatternSpec {
        name: "show",
        pattern: r"^(?:দেখাও|দেখান|দেখা)\s+(?P<phrase>.+)$",
        extract: bengali_phrase,
        kind: CommandKind::Show,
    },
    PatternSpec {
        name: "find",
        pattern: r"^(?:খুঁজে\s+দাও|খুঁজুন|খুঁজো|খোঁজো|খোঁজ)\s+(?P<phrase>.+)$",
        extract: bengali_phrase,
        kind: CommandKind::Find,
    },
    PatternSpec {
        name: "want_shown",
        pattern: r"^আমাকে\s+(?P<phrase>.+?)\s+(?:দেখান|দেখাও)$",
        extract: bengali_phrase,
        kind: CommandKind::Want,
    },
    PatternSpec {
        name: "want",
        pattern: r"^(?P<phrase>.+?)\s+চাই$",
        extract: bengali_phrase,
        kind: CommandKind::Want,
    },
];

static ENGLISH_PATTERNS: Lazy<Vec<CommandPattern<CommandKind>>> =
    Lazy::new(|| patterns::compile("category_commands.en", ENGLISH_SPECS));

static BENGALI_PATTERNS: Lazy<Vec<CommandPattern<CommandKind>>> =
    Lazy::new(|| patterns::compile("category_commands.bn", BENGALI_SPECS));

/// Compiled category command table for a language
pub fn category_patterns(language: Language) -> &'static [CommandPattern<CommandKind>] {
    match language {
        Language::English => &ENGLISH_PATTERNS,
        Language::Bengali => &BENGALI_PATTERNS,
    }
}

/// Bengali if the command holds any Bengali letter, English otherwise
pub fn detect_command_language(text: &str) -> Language {
    if Language::Bengali.script().appears_in(text) {
        Language::Bengali
    } else {
        Language::English
    }
}

/// Parse a category command
///
/// The command's own script picks the pattern table; the stored language
/// preference plays no part. A recognised command whose phrase names no
/// category becomes a search for that phrase. Text matching no pattern is
/// tried as a bare category name, then taken as a search query verbatim.
pub fn parse_category_command(matcher: &CategoryMatcher, voice_command: &str) -> ParsedIntent {
    let normalized = patterns::normalize(voice_command);
    let language = detect_command_language(&normalized);
    if normalized.is_empty() {
        return ParsedIntent::empty(language);
    }

    if let Some((pattern, phrase)) = patterns::first_match(category_patterns(language), &normalized)
    {
        let intent = match matcher.match_category(&phrase) {
            Some(category) => ParsedIntent::category(category, pattern.kind, language),
            None => ParsedIntent::search(phrase, pattern.kind, language),
        };
        tracing::debug!(
            pattern = pattern.name,
            language = %language.code(),
            category = ?intent.category,
            "Parsed category command"
        );
        return intent;
    }

    match matcher.match_category(&normalized) {
        Some(category) => ParsedIntent::category(category, CommandKind::Direct, language),
        None => ParsedIntent::search(normalized, CommandKind::Search, language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(command: &str) -> ParsedIntent {
        parse_category_command(&CategoryMatcher::default(), command)
    }

    #[test]
    fn test_tables_compile() {
        assert_eq!(category_patterns(Language::English).len(), ENGLISH_SPECS.len());
        assert_eq!(category_patterns(Language::Bengali).len(), BENGALI_SPECS.len());
    }

    #[test]
    fn test_english_show() {
        let intent = parse("show me laptops");
        assert_eq!(intent.category.as_deref(), Some("laptop"));
        assert_eq!(intent.search_query, None);
        assert_eq!(intent.command, CommandKind::Show);
        assert_eq!(intent.language, Language::English);
    }

    #[test]
    fn test_english_verbs() {
        let intent = parse("Display the headphones.");
        assert_eq!(intent.category.as_deref(), Some("headphone"));
        assert_eq!(intent.command, CommandKind::Show);

        let intent = parse("search for smart watches");
        assert_eq!(intent.category.as_deref(), Some("watch"));
        assert_eq!(intent.command, CommandKind::Find);

        let intent = parse("look for cameras");
        assert_eq!(intent.category.as_deref(), Some("camera"));
        assert_eq!(intent.command, CommandKind::Find);

        let intent = parse("I need a new phone");
        assert_eq!(intent.category.as_deref(), Some("mobile"));
        assert_eq!(intent.command, CommandKind::Want);
    }

    #[test]
    fn test_find_without_category_is_search() {
        let intent = parse("find me something blue");
        assert_eq!(intent.category, None);
        assert_eq!(intent.search_query.as_deref(), Some("something blue"));
        assert_eq!(intent.command, CommandKind::Find);
        assert_eq!(intent.language, Language::English);
    }

    #[test]
    fn test_search_formal_is_not_search_for() {
        let intent = parse("search formal shirts");
        assert_eq!(intent.category.as_deref(), Some("fashion"));
        assert_eq!(intent.command, CommandKind::Find);
    }

    #[test]
    fn test_bengali_suffix_want() {
        let intent = parse("ল্যাপটপ চাই");
        assert_eq!(intent.category.as_deref(), Some("laptop"));
        assert_eq!(intent.command, CommandKind::Want);
        assert_eq!(intent.language, Language::Bengali);
    }

    #[test]
    fn test_bengali_verbs() {
        let intent = parse("দেখাও মোবাইল");
        assert_eq!(intent.category.as_deref(), Some("mobile"));
        assert_eq!(intent.command, CommandKind::Show);

        let intent = parse("খুঁজুন জুতা");
        assert_eq!(intent.category.as_deref(), Some("shoes"));
        assert_eq!(intent.command, CommandKind::Find);

        let intent = parse("খুঁজে দাও হেডফোন");
        assert_eq!(intent.category.as_deref(), Some("headphone"));
        assert_eq!(intent.command, CommandKind::Find);

        let intent = parse("আমাকে ঘড়ি দেখান");
        assert_eq!(intent.category.as_deref(), Some("watch"));
        assert_eq!(intent.command, CommandKind::Want);
    }

    #[test]
    fn test_bengali_unknown_phrase_is_search() {
        let intent = parse("খুঁজুন লাল গোলাপ");
        assert_eq!(intent.category, None);
        assert_eq!(intent.search_query.as_deref(), Some("লাল গোলাপ"));
        assert_eq!(intent.command, CommandKind::Find);
        assert_eq!(intent.language, Language::Bengali);
    }

    #[test]
    fn test_bare_category_is_direct() {
        let intent = parse("Headphones");
        assert_eq!(intent.category.as_deref(), Some("headphone"));
        assert_eq!(intent.command, CommandKind::Direct);

        let intent = parse("ট্যাবলেট");
        assert_eq!(intent.category.as_deref(), Some("tablet"));
        assert_eq!(intent.command, CommandKind::Direct);
        assert_eq!(intent.language, Language::Bengali);
    }

    #[test]
    fn test_unmatched_text_is_search() {
        let intent = parse("xyzzyqq");
        assert_eq!(intent.category, None);
        assert_eq!(intent.search_query.as_deref(), Some("xyzzyqq"));
        assert_eq!(intent.command, CommandKind::Search);
        assert_eq!(intent.language, Language::English);
    }

    #[test]
    fn test_empty_command() {
        for input in ["", "   "] {
            let intent = parse(input);
            assert_eq!(intent.category, None);
            assert_eq!(intent.search_query, None);
            assert_eq!(intent.command, CommandKind::Search);
            assert_eq!(intent.language, Language::English);
        }
    }

    #[test]
    fn test_bare_verb_falls_through() {
        // "show me" has no phrase, so it is not a show command
        let intent = parse("show me");
        assert_eq!(intent.command, CommandKind::Search);
        assert_eq!(intent.search_query.as_deref(), Some("show me"));
    }

    #[test]
    fn test_exactly_one_of_category_or_query() {
        for input in [
            "show me laptops",
            "find me something blue",
            "ল্যাপটপ চাই",
            "xyzzyqq",
            "tv",
            "give me a speaker",
        ] {
            let intent = parse(input);
            assert!(
                intent.category.is_some() ^ intent.search_query.is_some(),
                "{input}"
            );
        }
    }
}
