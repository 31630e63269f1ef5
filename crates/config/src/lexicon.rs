//! Category lexicon configuration
//!
//! Schema for YAML files that replace the built-in category lexicon.
//! Declaration order is significant: the matcher walks categories,
//! synonyms and Bengali words in the order they appear in the file.
//!
//! ```yaml
//! categories:
//!   - id: laptop
//!     label_en: Laptops
//!     label_bn: ল্যাপটপ
//!     synonyms: [laptop, laptops, notebook]
//! bengali_words:
//!   - word: ল্যাপটপ
//!     category: laptop
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::ConfigError;

/// A canonical category with its labels and English synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    /// Language-neutral identifier (e.g. `laptop`)
    pub id: String,
    /// English display label
    pub label_en: String,
    /// Bengali display label
    pub label_bn: String,
    /// English surface forms
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A Bengali surface form pointing at a category id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BengaliWordEntry {
    pub word: String,
    pub category: String,
}

/// Full lexicon definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconConfig {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
    #[serde(default)]
    pub bengali_words: Vec<BengaliWordEntry>,
}

impl LexiconConfig {
    /// Load and validate from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|_| ConfigError::FileNotFound(path.as_ref().display().to_string()))?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            categories = config.categories.len(),
            bengali_words = config.bengali_words.len(),
            "Loaded category lexicon"
        );
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Every referenced category must be defined exactly once, with both labels
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut ids = HashSet::new();
        for entry in &self.categories {
            if entry.id.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "categories.id".to_string(),
                    message: "Category id cannot be empty".to_string(),
                });
            }
            if entry.label_en.trim().is_empty() || entry.label_bn.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("categories.{}", entry.id),
                    message: "Both label_en and label_bn are required".to_string(),
                });
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateCategory(entry.id.clone()));
            }
        }

        for word in &self.bengali_words {
            if !ids.contains(word.category.as_str()) {
                return Err(ConfigError::UnknownCategory {
                    form: word.word.clone(),
                    category: word.category.clone(),
                });
            }
        }

        Ok(())
    }
}
