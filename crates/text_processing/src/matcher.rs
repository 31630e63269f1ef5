//! Category matching
//!
//! Maps a free-form phrase in either language to a canonical category id.
//! Bengali forms are tried before English ones, and within a language an
//! exact hit beats containment. Containment is bidirectional: the phrase may
//! contain the form ("show me gaming laptops" → laptop) or the form may
//! contain the phrase ("lap" → laptop). The first form in declaration order
//! wins.

use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

use voice_intent_config::MatchMode;

use crate::lexicon::CategoryLexicon;

#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    lexicon: Arc<CategoryLexicon>,
    mode: MatchMode,
}

impl CategoryMatcher {
    pub fn new(lexicon: Arc<CategoryLexicon>, mode: MatchMode) -> Self {
        Self { lexicon, mode }
    }

    pub fn lexicon(&self) -> &CategoryLexicon {
        &self.lexicon
    }

    pub fn shared_lexicon(&self) -> Arc<CategoryLexicon> {
        Arc::clone(&self.lexicon)
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Canonical category id for `input`, if any form relates to it
    pub fn match_category(&self, input: &str) -> Option<&str> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        let lexicon = self.lexicon.as_ref();

        if let Some(category) = lexicon.bengali_exact(&normalized) {
            return Some(&category.id);
        }
        if let Some((_, category)) = lexicon
            .bengali_forms()
            .find(|(form, _)| self.related(&normalized, form))
        {
            return Some(&category.id);
        }

        if let Some(category) = lexicon.english_exact(&normalized) {
            return Some(&category.id);
        }
        if let Some((form, category)) = lexicon
            .english_forms()
            .find(|(form, _)| self.related(&normalized, form))
        {
            tracing::trace!(input = %normalized, form, category = %category.id, "Partial category match");
            return Some(&category.id);
        }

        None
    }

    fn related(&self, phrase: &str, form: &str) -> bool {
        match self.mode {
            MatchMode::Substring => phrase.contains(form) || form.contains(phrase),
            MatchMode::WordBoundary => {
                let phrase_words: Vec<&str> = phrase.unicode_words().collect();
                let form_words: Vec<&str> = form.unicode_words().collect();
                contains_words(&phrase_words, &form_words)
                    || contains_words(&form_words, &phrase_words)
            }
        }
    }
}

impl Default for CategoryMatcher {
    fn default() -> Self {
        Self::new(CategoryLexicon::builtin(), MatchMode::default())
    }
}

/// True when `needle` occurs as a contiguous run of whole words in `haystack`
fn contains_words(haystack: &[&str], needle: &[&str]) -> bool {
    !needle.is_empty()
        && haystack.len() >= needle.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}
