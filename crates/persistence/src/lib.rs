//! Preference persistence for the voice intent resolver
//!
//! Provides storage for the voice-command language preference:
//! - `PreferenceStore` trait (synchronous get/set/remove by key)
//! - In-memory store for tests and embedding
//! - JSON file store with atomic rewrites
//! - `LanguagePreference`, a typed view over the `voiceCommandLanguage` key

pub mod error;
pub mod file;
pub mod preference;
pub mod store;

pub use error::PersistenceError;
pub use file::JsonFilePreferenceStore;
pub use preference::LanguagePreference;
pub use store::{InMemoryPreferenceStore, PreferenceStore};

use std::sync::Arc;
use voice_intent_config::{PreferenceBackend, PreferenceConfig};

/// Create the preference store selected in configuration
pub fn create_store(config: &PreferenceConfig) -> Result<Arc<dyn PreferenceStore>, PersistenceError> {
    match config.backend {
        PreferenceBackend::Memory => {
            tracing::info!("Using in-memory preference store");
            Ok(Arc::new(InMemoryPreferenceStore::new()))
        }
        PreferenceBackend::File => {
            let store = JsonFilePreferenceStore::open(&config.path)?;
            tracing::info!(path = %config.path, "Using file preference store");
            Ok(Arc::new(store))
        }
    }
}
