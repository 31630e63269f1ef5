//! Route name to path tables
//!
//! English routes are always available; the active language's table is
//! layered on top and wins on key collision.

use std::collections::HashMap;

use voice_intent_core::Language;

const ENGLISH_ROUTES: &[(&str, &str)] = &[
    ("home", "/"),
    ("homepage", "/"),
    ("cart", "/cart"),
    ("shopping cart", "/cart"),
    ("wishlist", "/wishlist"),
    ("products", "/products"),
    ("shop", "/products"),
    ("orders", "/orders"),
    ("profile", "/profile"),
    ("account", "/profile"),
    ("dashboard", "/dashboard"),
    ("login", "/login"),
    ("sign in", "/login"),
    ("register", "/register"),
    ("sign up", "/register"),
    ("checkout", "/checkout"),
    ("contact", "/contact"),
    ("about", "/about"),
    ("support", "/support"),
    ("settings", "/settings"),
];

const BENGALI_ROUTES: &[(&str, &str)] = &[
    ("হোম", "/"),
    ("কার্ট", "/cart"),
    ("উইশলিস্ট", "/wishlist"),
    ("পছন্দের তালিকা", "/wishlist"),
    ("পণ্য", "/products"),
    ("প্রোডাক্ট", "/products"),
    ("অর্ডার", "/orders"),
    ("প্রোফাইল", "/profile"),
    ("ড্যাশবোর্ড", "/dashboard"),
    ("লগইন", "/login"),
    ("রেজিস্টার", "/register"),
    ("চেকআউট", "/checkout"),
    ("যোগাযোগ", "/contact"),
    ("সাপোর্ট", "/support"),
    ("সেটিংস", "/settings"),
];

// Case endings a spoken Bengali target may carry ("কার্টে", "হোমে")
const BENGALI_LOCATIVE_SUFFIXES: &[&str] = &["তে", "য়", "ে"];

#[derive(Debug, Clone)]
pub struct RouteTable {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl RouteTable {
    /// The storefront's built-in routes
    pub fn builtin() -> Self {
        let mut table = Self {
            tables: HashMap::new(),
        };
        table.extend(Language::English, ENGLISH_ROUTES.iter().copied());
        table.extend(Language::Bengali, BENGALI_ROUTES.iter().copied());
        table
    }

    /// Add or replace routes for one language
    pub fn extend<I, K, V>(&mut self, language: Language, routes: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let table = self.tables.entry(language).or_default();
        for (name, path) in routes {
            table.insert(name.as_ref().trim().to_lowercase(), path.into());
        }
    }

    pub fn with_routes<I, K, V>(mut self, language: Language, routes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.extend(language, routes);
        self
    }

    /// Path for `target`, looked up in the active language first, then English
    ///
    /// `active` is `None` when the stored preference names a language with
    /// no route table; only English routes apply then.
    pub fn resolve(&self, target: &str, active: Option<Language>) -> Option<&str> {
        let key = target.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        let layers = self.layers(active);
        if let Some(path) = layers.iter().find_map(|table| table.get(&key)) {
            return Some(path.as_str());
        }

        if active == Some(Language::Bengali) {
            return BENGALI_LOCATIVE_SUFFIXES
                .iter()
                .filter_map(|suffix| key.strip_suffix(suffix))
                .filter(|stem| !stem.is_empty())
                .find_map(|stem| layers.iter().find_map(|table| table.get(stem)))
                .map(String::as_str);
        }

        None
    }

    /// Merged name → path view for the active language, sorted by name
    pub fn routes_for(&self, active: Option<Language>) -> Vec<(&str, &str)> {
        let mut merged: HashMap<&str, &str> = HashMap::new();
        for table in self.layers(active).into_iter().rev() {
            for (name, path) in table {
                merged.insert(name, path);
            }
        }
        let mut routes: Vec<(&str, &str)> = merged.into_iter().collect();
        routes.sort_unstable();
        routes
    }

    fn layers(&self, active: Option<Language>) -> Vec<&HashMap<String, String>> {
        let mut layers = Vec::with_capacity(2);
        if let Some(language) = active.filter(|l| *l != Language::English) {
            if let Some(table) = self.tables.get(&language) {
                layers.push(table);
            }
        }
        if let Some(table) = self.tables.get(&Language::English) {
            layers.push(table);
        }
        layers
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::builtin()
    }
}
