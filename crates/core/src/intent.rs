//! Intent value types produced from voice transcripts

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Which command phrasing produced a [`ParsedIntent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// "show me ...", "দেখাও ..."
    Show,
    /// "find ...", "খুঁজুন ..."
    Find,
    /// "i want ...", "... চাই"
    Want,
    /// The whole transcript named a category
    Direct,
    /// Nothing structural matched; free-text search
    Search,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Find => "find",
            Self::Want => "want",
            Self::Direct => "direct",
            Self::Search => "search",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of parsing a category command
///
/// Exactly one of `category` / `search_query` is set, except for empty
/// input where both are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    pub category: Option<String>,
    pub search_query: Option<String>,
    pub command: CommandKind,
    pub language: Language,
}

impl ParsedIntent {
    pub fn category(category: impl Into<String>, command: CommandKind, language: Language) -> Self {
        Self {
            category: Some(category.into()),
            search_query: None,
            command,
            language,
        }
    }

    pub fn search(query: impl Into<String>, command: CommandKind, language: Language) -> Self {
        Self {
            category: None,
            search_query: Some(query.into()),
            command,
            language,
        }
    }

    /// The no-match shape for empty transcripts
    pub fn empty(language: Language) -> Self {
        Self {
            category: None,
            search_query: None,
            command: CommandKind::Search,
            language,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search_query.is_none()
    }
}

/// Kind of action a navigation-layer intent asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntentType {
    Navigation,
    Search,
}

/// Result of parsing a navigation command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceIntent {
    #[serde(rename = "type")]
    pub intent_type: IntentType,
    pub target: String,
    /// Language whose pattern table matched (serialized as its code)
    #[serde(with = "crate::language::code")]
    pub language: Language,
}
