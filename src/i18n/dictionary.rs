//! Locale dictionaries: translation key to display string.
//!
//! Dictionaries are loaded once at startup from `<dir>/<code>.json`, one per
//! registered locale. Anything that cannot be loaded degrades to an empty
//! dictionary so pages render raw keys instead of failing.

use crate::i18n::LocaleRegistry;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dictionary {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable translation table for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dictionary(BTreeMap<String, String>);

impl Dictionary {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read one dictionary file.
///
/// Nested JSON objects are flattened into dotted keys (`{"cart": {"title": ..}}`
/// becomes `cart.title`). Non-string leaves are rendered with their JSON text.
pub fn load_dictionary_file(path: &Path) -> Result<Dictionary, DictionaryError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| DictionaryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut entries = BTreeMap::new();
    flatten_into(&mut entries, String::new(), value);
    Ok(Dictionary(entries))
}

fn flatten_into(entries: &mut BTreeMap<String, String>, prefix: String, value: serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let full = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(entries, full, child);
            }
        }
        serde_json::Value::String(text) => {
            entries.insert(prefix, text);
        }
        serde_json::Value::Null => {}
        other => {
            entries.insert(prefix, other.to_string());
        }
    }
}

/// Explicit locale code to dictionary mapping, validated against the registry.
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    dictionaries: HashMap<&'static str, Arc<Dictionary>>,
    fallback: Arc<Dictionary>,
}

impl DictionaryStore {
    /// Load every enabled registry locale from `dir`.
    ///
    /// A missing or malformed file registers that locale with an empty
    /// dictionary. Files for codes outside the registry are reported and
    /// ignored. Never fails.
    pub fn load_dir(dir: &Path) -> Self {
        let registry = LocaleRegistry::get();
        let mut dictionaries = HashMap::new();

        for locale in registry.list_enabled() {
            let path = dir.join(format!("{}.json", locale.code));
            let dictionary = match load_dictionary_file(&path) {
                Ok(dictionary) => {
                    info!(
                        "Loaded {} dictionary ({} keys)",
                        locale.code,
                        dictionary.len()
                    );
                    dictionary
                }
                Err(e) => {
                    warn!("{}; {} pages will render raw keys", e, locale.name);
                    Dictionary::default()
                }
            };
            dictionaries.insert(locale.code, Arc::new(dictionary));
        }

        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                let is_json = path.extension().is_some_and(|ext| ext == "json");
                let code = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
                if is_json && !registry.is_enabled(code) {
                    warn!("Ignoring dictionary for unregistered locale: {}", path.display());
                }
            }
        }

        Self {
            dictionaries,
            fallback: Arc::new(Dictionary::default()),
        }
    }

    /// Dictionary for `code`, or `None` for unknown locales.
    pub fn get(&self, code: &str) -> Option<Arc<Dictionary>> {
        self.dictionaries.get(code).cloned()
    }

    /// Dictionary for `code`, falling back to the empty dictionary.
    pub fn load(&self, code: &str) -> Arc<Dictionary> {
        match self.get(code) {
            Some(dictionary) => dictionary,
            None => {
                debug!("No dictionary for locale '{}', using empty fallback", code);
                Arc::clone(&self.fallback)
            }
        }
    }

    pub fn locales(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.dictionaries.keys().copied().collect();
        codes.sort_unstable();
        codes
    }
}
