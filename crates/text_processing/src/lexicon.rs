//! Category lexicon
//!
//! Bilingual dictionaries mapping surface forms to canonical category ids.
//! Two sources are merged: a Bengali word table and an English
//! category-to-synonyms table. Both are kept in declaration order, which
//! the matcher relies on when several forms overlap.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use voice_intent_config::{BengaliWordEntry, CategoryEntry, LexiconConfig};
use voice_intent_core::Language;

use crate::Result;

struct CategoryDef {
    id: &'static str,
    label_en: &'static str,
    label_bn: &'static str,
    synonyms: &'static [&'static str],
}

// Headphones are declared before mobiles so that "headphone" wins over the
// shorter "phone" in substring matching; likewise laptops before books
// ("macbook", "notebook").
const CATEGORIES: &[CategoryDef] = &[
    CategoryDef {
        id: "laptop",
        label_en: "Laptops",
        label_bn: "ল্যাপটপ",
        synonyms: &[
            "laptop",
            "laptops",
            "notebook",
            "notebooks",
            "macbook",
            "ultrabook",
            "chromebook",
        ],
    },
    CategoryDef {
        id: "headphone",
        label_en: "Headphones",
        label_bn: "হেডফোন",
        synonyms: &[
            "headphone",
            "headphones",
            "earphone",
            "earphones",
            "earbuds",
            "headset",
            "airpods",
        ],
    },
    CategoryDef {
        id: "mobile",
        label_en: "Mobile Phones",
        label_bn: "মোবাইল ফোন",
        synonyms: &[
            "mobile",
            "mobiles",
            "phone",
            "phones",
            "smartphone",
            "smartphones",
            "cellphone",
            "iphone",
            "android",
        ],
    },
    CategoryDef {
        id: "tablet",
        label_en: "Tablets",
        label_bn: "ট্যাবলেট",
        synonyms: &["tablet", "tablets", "ipad"],
    },
    CategoryDef {
        id: "camera",
        label_en: "Cameras",
        label_bn: "ক্যামেরা",
        synonyms: &["camera", "cameras", "dslr", "webcam"],
    },
    CategoryDef {
        id: "watch",
        label_en: "Watches",
        label_bn: "ঘড়ি",
        synonyms: &["watch", "watches", "smartwatch", "smart watch", "wristwatch"],
    },
    CategoryDef {
        id: "television",
        label_en: "Televisions",
        label_bn: "টেলিভিশন",
        synonyms: &["television", "televisions", "tv", "smart tv"],
    },
    CategoryDef {
        id: "gaming",
        label_en: "Gaming",
        label_bn: "গেমিং",
        synonyms: &["gaming", "game", "games", "console", "playstation", "xbox"],
    },
    CategoryDef {
        id: "speaker",
        label_en: "Speakers",
        label_bn: "স্পিকার",
        synonyms: &["speaker", "speakers", "soundbar", "bluetooth speaker"],
    },
    CategoryDef {
        id: "accessories",
        label_en: "Accessories",
        label_bn: "এক্সেসরিজ",
        synonyms: &[
            "accessories",
            "accessory",
            "keyboard",
            "mouse",
            "charger",
            "cable",
            "adapter",
        ],
    },
    CategoryDef {
        id: "monitor",
        label_en: "Monitors",
        label_bn: "মনিটর",
        synonyms: &["monitor", "monitors", "screen"],
    },
    CategoryDef {
        id: "fashion",
        label_en: "Fashion",
        label_bn: "ফ্যাশন",
        synonyms: &["fashion", "clothing", "clothes", "shirt", "dress", "jeans"],
    },
    CategoryDef {
        id: "shoes",
        label_en: "Shoes",
        label_bn: "জুতা",
        synonyms: &["shoes", "shoe", "sneakers", "footwear", "boots"],
    },
    CategoryDef {
        id: "books",
        label_en: "Books",
        label_bn: "বই",
        synonyms: &["books", "book", "novel", "novels"],
    },
    CategoryDef {
        id: "beauty",
        label_en: "Beauty",
        label_bn: "সৌন্দর্য",
        synonyms: &["beauty", "makeup", "cosmetics", "skincare"],
    },
    CategoryDef {
        id: "appliance",
        label_en: "Home Appliances",
        label_bn: "গৃহস্থালী যন্ত্রপাতি",
        synonyms: &[
            "appliance",
            "appliances",
            "refrigerator",
            "fridge",
            "washing machine",
            "microwave",
        ],
    },
];

const BENGALI_WORDS: &[(&str, &str)] = &[
    ("ল্যাপটপ", "laptop"),
    ("নোটবুক", "laptop"),
    ("ম্যাকবুক", "laptop"),
    ("কম্পিউটার", "laptop"),
    ("হেডফোন", "headphone"),
    ("ইয়ারফোন", "headphone"),
    ("ইয়ারবাড", "headphone"),
    ("মোবাইল", "mobile"),
    ("স্মার্টফোন", "mobile"),
    ("ফোন", "mobile"),
    ("ট্যাবলেট", "tablet"),
    ("ক্যামেরা", "camera"),
    ("স্মার্টওয়াচ", "watch"),
    ("ঘড়ি", "watch"),
    ("টেলিভিশন", "television"),
    ("টিভি", "television"),
    ("গেমিং", "gaming"),
    ("গেম", "gaming"),
    ("স্পিকার", "speaker"),
    ("সাউন্ডবার", "speaker"),
    ("কীবোর্ড", "accessories"),
    ("মাউস", "accessories"),
    ("চার্জার", "accessories"),
    ("মনিটর", "monitor"),
    ("পোশাক", "fashion"),
    ("জামা", "fashion"),
    ("শার্ট", "fashion"),
    ("জুতা", "shoes"),
    ("জুতো", "shoes"),
    ("বই", "books"),
    ("প্রসাধনী", "beauty"),
    ("মেকআপ", "beauty"),
    ("ফ্রিজ", "appliance"),
    ("ওয়াশিং মেশিন", "appliance"),
];

static BUILTIN: Lazy<Arc<CategoryLexicon>> = Lazy::new(|| {
    let categories = CATEGORIES
        .iter()
        .map(|def| CategoryEntry {
            id: def.id.to_string(),
            label_en: def.label_en.to_string(),
            label_bn: def.label_bn.to_string(),
            synonyms: def.synonyms.iter().map(|s| s.to_string()).collect(),
        })
        .collect();
    let words = BENGALI_WORDS
        .iter()
        .map(|(word, category)| BengaliWordEntry {
            word: word.to_string(),
            category: category.to_string(),
        })
        .collect();
    Arc::new(CategoryLexicon::from_entries(categories, words))
});

/// A canonical category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub label_en: String,
    pub label_bn: String,
    /// English surface forms, lowercased, declaration order
    pub synonyms: Vec<String>,
}

impl Category {
    pub fn label(&self, language: Language) -> &str {
        match language {
            Language::English => &self.label_en,
            Language::Bengali => &self.label_bn,
        }
    }
}

/// Category summary for suggestion lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub value: String,
    pub label: String,
    pub synonyms: Vec<String>,
}

impl From<&Category> for CategoryInfo {
    fn from(category: &Category) -> Self {
        Self {
            value: category.id.clone(),
            label: category.label_en.clone(),
            synonyms: category.synonyms.clone(),
        }
    }
}

/// Immutable bilingual surface-form dictionary
///
/// Every surface form points at an entry of `categories` by index, so a
/// lookup can never yield an id without display names.
#[derive(Debug, Clone)]
pub struct CategoryLexicon {
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
    bengali_forms: Vec<(String, usize)>,
    bengali_exact: HashMap<String, usize>,
    english_forms: Vec<(String, usize)>,
    english_exact: HashMap<String, usize>,
}

impl CategoryLexicon {
    /// The built-in storefront lexicon (shared, built once)
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Build from a validated configuration
    pub fn from_config(config: LexiconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_entries(config.categories, config.bengali_words))
    }

    /// Load a YAML lexicon file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_config(LexiconConfig::load(path)?)
    }

    fn from_entries(categories: Vec<CategoryEntry>, words: Vec<BengaliWordEntry>) -> Self {
        let mut lexicon = Self {
            categories: Vec::with_capacity(categories.len()),
            by_id: HashMap::new(),
            bengali_forms: Vec::new(),
            bengali_exact: HashMap::new(),
            english_forms: Vec::new(),
            english_exact: HashMap::new(),
        };

        for entry in categories {
            if lexicon.by_id.contains_key(&entry.id) {
                tracing::warn!(category = %entry.id, "Duplicate category ignored");
                continue;
            }
            let idx = lexicon.categories.len();
            let synonyms: Vec<String> = entry
                .synonyms
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect();
            for synonym in &synonyms {
                lexicon.english_forms.push((synonym.clone(), idx));
                lexicon.english_exact.entry(synonym.clone()).or_insert(idx);
            }
            lexicon.by_id.insert(entry.id.clone(), idx);
            lexicon.categories.push(Category {
                id: entry.id,
                label_en: entry.label_en,
                label_bn: entry.label_bn,
                synonyms,
            });
        }

        for BengaliWordEntry { word, category } in words {
            let form = word.trim().to_lowercase();
            match lexicon.by_id.get(&category) {
                Some(&idx) if !form.is_empty() => {
                    lexicon.bengali_forms.push((form.clone(), idx));
                    lexicon.bengali_exact.entry(form).or_insert(idx);
                }
                Some(_) => {}
                None => {
                    tracing::warn!(word = %word, category = %category, "Bengali word for unknown category ignored");
                }
            }
        }

        tracing::debug!(
            categories = lexicon.categories.len(),
            english_forms = lexicon.english_forms.len(),
            bengali_forms = lexicon.bengali_forms.len(),
            "Built category lexicon"
        );

        lexicon
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&idx| &self.categories[idx])
    }

    pub fn is_valid_category(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Canonical categories in declaration order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Bilingual label; unknown ids come back unchanged
    pub fn display_name<'a>(&'a self, id: &'a str, language: Language) -> &'a str {
        self.get(id).map(|c| c.label(language)).unwrap_or(id)
    }

    /// All categories with English labels, declaration order
    pub fn all_categories(&self) -> Vec<CategoryInfo> {
        self.categories.iter().map(CategoryInfo::from).collect()
    }

    /// Categories whose id, labels or synonyms start with `partial`, then
    /// those that merely contain it; each group in declaration order
    pub fn suggest(&self, partial: &str, limit: usize) -> Vec<CategoryInfo> {
        let needle = partial.trim().to_lowercase();
        if needle.is_empty() || limit == 0 {
            return Vec::new();
        }

        let forms = |c: &Category| -> Vec<String> {
            let mut forms = vec![
                c.id.to_lowercase(),
                c.label_en.to_lowercase(),
                c.label_bn.to_lowercase(),
            ];
            forms.extend(c.synonyms.iter().cloned());
            forms.extend(
                self.bengali_forms
                    .iter()
                    .filter(|(_, idx)| self.categories[*idx].id == c.id)
                    .map(|(form, _)| form.clone()),
            );
            forms
        };

        let mut prefix = Vec::new();
        let mut infix = Vec::new();
        for category in &self.categories {
            let forms = forms(category);
            if forms.iter().any(|f| f.starts_with(&needle)) {
                prefix.push(CategoryInfo::from(category));
            } else if forms.iter().any(|f| f.contains(&needle)) {
                infix.push(CategoryInfo::from(category));
            }
        }

        prefix.into_iter().chain(infix).take(limit).collect()
    }

    pub(crate) fn bengali_exact(&self, form: &str) -> Option<&Category> {
        self.bengali_exact.get(form).map(|&idx| &self.categories[idx])
    }

    pub(crate) fn english_exact(&self, form: &str) -> Option<&Category> {
        self.english_exact.get(form).map(|&idx| &self.categories[idx])
    }

    /// Bengali surface forms in declaration order
    pub fn bengali_forms(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.bengali_forms
            .iter()
            .map(|(form, idx)| (form.as_str(), &self.categories[*idx]))
    }

    /// English synonyms flattened in declaration order
    pub fn english_forms(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.english_forms
            .iter()
            .map(|(form, idx)| (form.as_str(), &self.categories[*idx]))
    }
}

impl Default for CategoryLexicon {
    fn default() -> Self {
        Self::builtin().as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_consistent() {
        let lexicon = CategoryLexicon::builtin();
        assert_eq!(lexicon.len(), CATEGORIES.len());
        assert_eq!(lexicon.bengali_forms().count(), BENGALI_WORDS.len());
        for (_, category) in lexicon.bengali_forms().chain(lexicon.english_forms()) {
            assert!(lexicon.is_valid_category(&category.id));
            assert!(!category.label_en.is_empty());
            assert!(!category.label_bn.is_empty());
        }
    }

    #[test]
    fn test_builtin_forms_are_unique() {
        let lexicon = CategoryLexicon::builtin();
        let mut english: Vec<&str> = lexicon.english_forms().map(|(f, _)| f).collect();
        let total = english.len();
        english.sort_unstable();
        english.dedup();
        assert_eq!(english.len(), total);

        let mut bengali: Vec<&str> = lexicon.bengali_forms().map(|(f, _)| f).collect();
        let total = bengali.len();
        bengali.sort_unstable();
        bengali.dedup();
        assert_eq!(bengali.len(), total);
    }

    #[test]
    fn test_display_name() {
        let lexicon = CategoryLexicon::builtin();
        assert_eq!(lexicon.display_name("laptop", Language::English), "Laptops");
        assert_eq!(lexicon.display_name("laptop", Language::Bengali), "ল্যাপটপ");
        assert_eq!(lexicon.display_name("mobile", Language::Bengali), "মোবাইল ফোন");
        assert_eq!(lexicon.display_name("spaceship", Language::English), "spaceship");
        assert_eq!(lexicon.display_name("", Language::Bengali), "");
    }

    #[test]
    fn test_all_categories_order_and_labels() {
        let lexicon = CategoryLexicon::builtin();
        let all = lexicon.all_categories();
        let ids: Vec<&str> = all.iter().map(|c| c.value.as_str()).collect();
        let declared: Vec<&str> = CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(ids, declared);

        for info in &all {
            assert!(lexicon.is_valid_category(&info.value));
            assert_eq!(lexicon.display_name(&info.value, Language::English), info.label);
            assert!(!info.synonyms.is_empty());
        }
    }

    #[test]
    fn test_from_config_validates() {
        let config = LexiconConfig {
            categories: vec![],
            bengali_words: vec![BengaliWordEntry {
                word: "ঘড়ি".to_string(),
                category: "watch".to_string(),
            }],
        };
        assert!(CategoryLexicon::from_config(config).is_err());
    }

    #[test]
    fn test_from_config_normalizes_forms() {
        let config = LexiconConfig {
            categories: vec![CategoryEntry {
                id: "tea".to_string(),
                label_en: "Tea".to_string(),
                label_bn: "চা".to_string(),
                synonyms: vec!["  Green Tea ".to_string(), "".to_string()],
            }],
            bengali_words: vec![],
        };
        let lexicon = CategoryLexicon::from_config(config).unwrap();
        assert_eq!(lexicon.get("tea").unwrap().synonyms, vec!["green tea"]);
        assert_eq!(lexicon.english_exact("green tea").map(|c| c.id.as_str()), Some("tea"));
    }

    #[test]
    fn test_suggest_prefix_before_infix() {
        let lexicon = CategoryLexicon::builtin();

        let hits = lexicon.suggest("lap", 5);
        assert_eq!(hits[0].value, "laptop");

        // "phone" starts mobile forms, but is only inside "headphone"
        let hits: Vec<String> = lexicon
            .suggest("phone", 5)
            .into_iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(hits, vec!["mobile", "headphone"]);

        assert_eq!(lexicon.suggest("ঘড়", 3)[0].value, "watch");
        assert!(lexicon.suggest("", 3).is_empty());
        assert!(lexicon.suggest("laptop", 0).is_empty());
        assert_eq!(lexicon.suggest("s", 2).len(), 2);
    }
}
