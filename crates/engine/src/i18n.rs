//! Localisation lookup.
//!
//! The host owns its translation tables; rules code only needs key lookup.
//! A missing key returns `None` so the caller can fall back to English.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::loader::{load_json, LoadError};

/// Key → display string lookup.
pub trait Localize {
    fn localize(&self, key: &str) -> Option<String>;
}

impl Localize for HashMap<String, String> {
    fn localize(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Flat translation table loaded from a JSON object of strings.
///
/// ```json
/// { "LAUNDRY.PrereqMet": "Prerequisites met", "LAUNDRY.PrereqUnmetLabel": "Unmet" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: HashMap<String, String>,
}

impl Translations {
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let translations: Self = load_json(path)?;
        tracing::debug!(path = %path.display(), keys = translations.len(), "Loaded translations");
        Ok(translations)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localize for Translations {
    fn localize(&self, key: &str) -> Option<String> {
        // Blank entries count as missing.
        self.entries
            .get(key)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }
}
