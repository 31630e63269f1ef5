//! Localized confirmation messages

use voice_intent_core::Language;

/// Message families the UI asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Navigating,
    Opening,
    Showing,
    SearchResults,
}

impl MessageKind {
    /// Accepts the UI's names (`searchResults`) and snake_case
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim() {
            "navigating" => Some(Self::Navigating),
            "opening" => Some(Self::Opening),
            "showing" => Some(Self::Showing),
            "searchResults" | "search_results" => Some(Self::SearchResults),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Navigating => "navigating",
            Self::Opening => "opening",
            Self::Showing => "showing",
            Self::SearchResults => "searchResults",
        }
    }
}

struct Templates {
    navigating: &'static str,
    opening: &'static str,
    showing: &'static str,
    search_results: &'static str,
}

impl Templates {
    fn get(&self, kind: MessageKind) -> &'static str {
        match kind {
            MessageKind::Navigating => self.navigating,
            MessageKind::Opening => self.opening,
            MessageKind::Showing => self.showing,
            MessageKind::SearchResults => self.search_results,
        }
    }
}

const ENGLISH: Templates = Templates {
    navigating: "Navigating to {}",
    opening: "Opening {}",
    showing: "Showing {}",
    search_results: "Search results for \"{}\"",
};

const BENGALI: Templates = Templates {
    navigating: "{} এ যাচ্ছি",
    opening: "{} খোলা হচ্ছে",
    showing: "{} দেখানো হচ্ছে",
    search_results: "\"{}\" এর অনুসন্ধান ফলাফল",
};

fn templates(language: Language) -> &'static Templates {
    match language {
        Language::English => &ENGLISH,
        Language::Bengali => &BENGALI,
    }
}

/// Format `kind` for `value` in `language`
///
/// `language` is `None` when the active code has no template family; English
/// is used then. Unknown kinds return `value` unchanged.
pub fn success_message(language: Option<Language>, kind: &str, value: &str) -> String {
    match MessageKind::parse(kind) {
        Some(kind) => format_message(language.unwrap_or(Language::English), kind, value),
        None => value.to_string(),
    }
}

pub fn format_message(language: Language, kind: MessageKind, value: &str) -> String {
    templates(language).get(kind).replacen("{}", value, 1)
}
