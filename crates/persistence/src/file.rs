//! JSON file backed preference store

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{PersistenceError, PreferenceStore};

/// Preferences kept as a flat JSON object on disk
///
/// The file is read once on open and rewritten atomically (temp file +
/// rename) on every change.
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl JsonFilePreferenceStore {
    /// Open the store, creating an empty one if the file does not exist yet
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            parse_preferences(&content)?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(
            path = %path.display(),
            entries = values.len(),
            "Opened preference file"
        );

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), PersistenceError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, values)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

fn parse_preferences(content: &str) -> Result<BTreeMap<String, String>, PersistenceError> {
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let value: serde_json::Value = serde_json::from_str(content)?;
    let object = value.as_object().ok_or_else(|| {
        PersistenceError::InvalidData("preference file must hold a JSON object".to_string())
    })?;

    object
        .iter()
        .map(|(key, value)| match value.as_str() {
            Some(s) => Ok((key.clone(), s.to_string())),
            None => Err(PersistenceError::InvalidData(format!(
                "preference '{}' is not a string",
                key
            ))),
        })
        .collect()
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let mut values = self.values.write();
        let previous = values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush(&values) {
            // Keep memory and disk in agreement
            match previous {
                Some(old) => values.insert(key.to_string(), old),
                None => values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PersistenceError> {
        let mut values = self.values.write();
        if let Some(old) = values.remove(key) {
            if let Err(e) = self.flush(&values) {
                values.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFilePreferenceStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get("voiceCommandLanguage").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = JsonFilePreferenceStore::open(&path).unwrap();
        store.set("voiceCommandLanguage", "bn").unwrap();
        drop(store);

        let reopened = JsonFilePreferenceStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("voiceCommandLanguage").unwrap().as_deref(),
            Some("bn")
        );

        reopened.remove("voiceCommandLanguage").unwrap();
        let again = JsonFilePreferenceStore::open(&path).unwrap();
        assert_eq!(again.get("voiceCommandLanguage").unwrap(), None);
    }

    #[test]
    fn test_rejects_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            JsonFilePreferenceStore::open(&path),
            Err(PersistenceError::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_non_string_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"voiceCommandLanguage": 7}"#).unwrap();
        assert!(JsonFilePreferenceStore::open(&path).is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonFilePreferenceStore::open(&path),
            Err(PersistenceError::Serialization(_))
        ));
    }

    #[test]
    fn test_empty_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "").unwrap();
        let store = JsonFilePreferenceStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }
}
