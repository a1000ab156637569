use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::catalog::Language;
use crate::TARGET_SOURCE;

/// Looks up a display name for a known stable key in a given language.
///
/// Used by the matcher when one language has no record for a key. Returning
/// `None` is not an error: the matcher falls back to the sentinel name.
pub trait NameResolver {
    fn resolve_name(&self, stable_key: &str, language: Language) -> Option<String>;
}

impl<F> NameResolver for F
where
    F: Fn(&str, Language) -> Option<String>,
{
    fn resolve_name(&self, stable_key: &str, language: Language) -> Option<String> {
        self(stable_key, language)
    }
}

/// Offline name lookup table, one map of `stable key -> name` per language.
///
/// ```json
/// { "en": { "10000089": "Furina" }, "zh": { "10000089": "芙宁娜" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameTable {
    #[serde(default)]
    en: HashMap<String, String>,
    #[serde(default)]
    zh: HashMap<String, String>,
}

impl NameTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read name table {}", path.display()))?;
        let table: NameTable = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse name table {}", path.display()))?;
        info!(
            target: TARGET_SOURCE,
            "Loaded name table with {} EN and {} ZH names", table.en.len(), table.zh.len()
        );
        Ok(table)
    }

    pub fn insert(&mut self, stable_key: &str, language: Language, name: &str) {
        self.names_mut(language)
            .insert(stable_key.to_string(), name.to_string());
    }

    fn names(&self, language: Language) -> &HashMap<String, String> {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }

    fn names_mut(&mut self, language: Language) -> &mut HashMap<String, String> {
        match language {
            Language::En => &mut self.en,
            Language::Zh => &mut self.zh,
        }
    }
}

impl NameResolver for NameTable {
    fn resolve_name(&self, stable_key: &str, language: Language) -> Option<String> {
        self.names(language)
            .get(stable_key)
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}
