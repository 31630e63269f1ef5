//! Voice command processing for the storefront
//!
//! This crate turns transcripts from an external speech-recognition engine
//! into structured intents:
//! - **Category Lexicon**: bilingual surface forms → canonical category ids
//! - **Category Matcher**: exact, then bidirectional containment matching
//! - **Command Patterns**: ordered per-language regex tables
//! - **Resolver**: category commands, navigation intents, routes, messages
//!
//! # Example
//!
//! ```ignore
//! use voice_intent_text_processing::VoiceIntentResolver;
//!
//! let resolver = VoiceIntentResolver::default();
//!
//! let parsed = resolver.parse_category_command("show me laptops");
//! assert_eq!(parsed.category.as_deref(), Some("laptop"));
//!
//! if let Some(intent) = resolver.parse_voice_intent("go to cart") {
//!     println!("{:?}", resolver.resolve_route(&intent.target));
//! }
//! ```

pub mod command;
pub mod languages;
pub mod lexicon;
pub mod matcher;
pub mod messages;
pub mod navigation;
pub mod patterns;
pub mod routes;

mod error;
mod resolver;

pub use error::{Result, TextProcessingError};
pub use resolver::VoiceIntentResolver;

pub use command::parse_category_command;
pub use languages::{supported_languages, LanguageInfo};
pub use lexicon::{Category, CategoryInfo, CategoryLexicon};
pub use matcher::CategoryMatcher;
pub use messages::MessageKind;
pub use patterns::{CommandPattern, Extractor, PatternSpec};
pub use routes::RouteTable;

pub use voice_intent_config::MatchMode;
pub use voice_intent_core::{CommandKind, IntentType, Language, ParsedIntent, VoiceIntent};
