//! Ordered regex command patterns
//!
//! A pattern table is a list of [`PatternSpec`]s compiled once into
//! [`CommandPattern`]s. Each pattern pairs an anchored regex with an
//! extractor that pulls the payload phrase out of the captures, and a kind
//! tag the caller interprets. Tables are evaluated first-match-wins; an
//! extractor returning `None` makes the pattern count as not matched.

use regex::{Captures, Regex};
use std::fmt;

/// Pulls the payload out of a successful match
pub type Extractor = fn(&Captures<'_>, &str) -> Option<String>;

/// Uncompiled table row
#[derive(Clone, Copy)]
pub struct PatternSpec<K> {
    pub name: &'static str,
    pub pattern: &'static str,
    pub extract: Extractor,
    pub kind: K,
}

/// Compiled table row
#[derive(Clone)]
pub struct CommandPattern<K> {
    pub name: &'static str,
    pub regex: Regex,
    pub extract: Extractor,
    pub kind: K,
}

impl<K: fmt::Debug> fmt::Debug for PatternSpec<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternSpec")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<K: fmt::Debug> fmt::Debug for CommandPattern<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandPattern")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .field("kind", &self.kind)
            .finish()
    }
}

impl<K: Copy> CommandPattern<K> {
    /// Extracted payload if the pattern accepts `text`
    pub fn apply(&self, text: &str) -> Option<String> {
        let captures = self.regex.captures(text)?;
        (self.extract)(&captures, text)
    }
}

/// Compile a table, skipping (and logging) rows whose regex is invalid
pub fn compile<K: Copy>(table: &str, specs: &[PatternSpec<K>]) -> Vec<CommandPattern<K>> {
    specs
        .iter()
        .filter_map(|spec| match Regex::new(spec.pattern) {
            Ok(regex) => Some(CommandPattern {
                name: spec.name,
                regex,
                extract: spec.extract,
                kind: spec.kind,
            }),
            Err(e) => {
                tracing::warn!(table, pattern = spec.name, error = %e, "Invalid command pattern skipped");
                None
            }
        })
        .collect()
}

/// First pattern in table order that accepts `text`, with its payload
pub fn first_match<'a, K: Copy>(
    patterns: &'a [CommandPattern<K>],
    text: &str,
) -> Option<(&'a CommandPattern<K>, String)> {
    patterns.iter().find_map(|pattern| {
        let payload = pattern.apply(text)?;
        tracing::trace!(pattern = pattern.name, payload = %payload, "Command pattern matched");
        Some((pattern, payload))
    })
}

/// Lowercase and trim a transcript
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

const TRAILING_PUNCTUATION: &[char] = &['.', '?', '!', '।', ',', '৷'];

const ENGLISH_FILLERS: &[&str] = &["me", "the", "a", "an", "some", "my", "all"];

const BENGALI_FILLERS: &[&str] = &["আমাকে", "আমার", "আমি", "কিছু"];

const ENGLISH_PAGE_WORDS: &[&str] = &["page", "section", "screen", "tab"];

const BENGALI_PAGE_WORDS: &[&str] = &["পেজ", "পেজে", "পাতা", "পাতায়"];

/// Trim whitespace and trailing sentence punctuation
pub fn clean(text: &str) -> Option<String> {
    let cleaned = text
        .trim()
        .trim_end_matches(TRAILING_PUNCTUATION)
        .trim_end();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

fn strip_leading_words<'a>(mut text: &'a str, words: &[&str]) -> &'a str {
    loop {
        let trimmed = text.trim_start();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest),
            None => (trimmed, ""),
        };
        if words.contains(&head) {
            text = rest;
        } else {
            return trimmed;
        }
        if text.is_empty() {
            return text;
        }
    }
}

fn strip_trailing_word<'a>(text: &'a str, words: &[&str]) -> &'a str {
    let trimmed = text.trim_end();
    match trimmed.rsplit_once(char::is_whitespace) {
        Some((head, tail)) if words.contains(&tail) => head.trim_end(),
        _ => trimmed,
    }
}

fn payload<'t>(captures: &Captures<'t>) -> Option<&'t str> {
    captures
        .name("phrase")
        .or_else(|| captures.get(1))
        .map(|m| m.as_str())
}

/// The captured phrase as-is
pub fn phrase(captures: &Captures<'_>, _text: &str) -> Option<String> {
    clean(payload(captures)?)
}

/// The captured phrase minus leading English filler words
pub fn english_phrase(captures: &Captures<'_>, _text: &str) -> Option<String> {
    let cleaned = clean(payload(captures)?)?;
    clean(strip_leading_words(&cleaned, ENGLISH_FILLERS))
}

/// The captured phrase minus leading Bengali filler words
pub fn bengali_phrase(captures: &Captures<'_>, _text: &str) -> Option<String> {
    let cleaned = clean(payload(captures)?)?;
    clean(strip_leading_words(&cleaned, BENGALI_FILLERS))
}

/// A navigation target: fillers and a trailing "page" word removed
pub fn english_target(captures: &Captures<'_>, _text: &str) -> Option<String> {
    let cleaned = clean(payload(captures)?)?;
    let target = strip_leading_words(&cleaned, &["the", "my"]);
    clean(strip_trailing_word(target, ENGLISH_PAGE_WORDS))
}

/// Bengali navigation target with a trailing "page" word removed
pub fn bengali_target(captures: &Captures<'_>, _text: &str) -> Option<String> {
    let cleaned = clean(payload(captures)?)?;
    let target = strip_leading_words(&cleaned, &["আমার"]);
    clean(strip_trailing_word(target, BENGALI_PAGE_WORDS))
}
