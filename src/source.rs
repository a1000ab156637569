//! Record sources.
//!
//! Scraping happens elsewhere; this crate reads what the scrapers produced.
//! A source hands out the raw records of one kind in one language, in the
//! order the scraper emitted them.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::catalog::{CatalogRecord, EntityKind, Language};
use crate::TARGET_SOURCE;

pub trait RecordSource {
    fn records<R>(&self, language: Language) -> Result<Vec<R>>
    where
        R: CatalogRecord + DeserializeOwned;
}

/// Directory of JSON snapshots named `{kind}.{lang}.json`, e.g. `weapons.zh.json`.
#[derive(Debug, Clone)]
pub struct SnapshotDir {
    root: PathBuf,
}

impl SnapshotDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, kind: EntityKind, language: Language) -> PathBuf {
        self.root
            .join(format!("{}.{}.json", kind.plural(), language.code()))
    }
}

impl RecordSource for SnapshotDir {
    fn records<R>(&self, language: Language) -> Result<Vec<R>>
    where
        R: CatalogRecord + DeserializeOwned,
    {
        let path = self.path_for(R::KIND, language);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let records: Vec<R> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed {} snapshot {}", R::KIND, path.display()))?;
        info!(
            target: TARGET_SOURCE,
            "Loaded {} {} {} records from {}",
            records.len(),
            language,
            R::KIND,
            path.display()
        );
        Ok(records)
    }
}

/// In-memory source holding raw JSON per kind and language.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    snapshots: HashMap<(EntityKind, Language), Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: EntityKind, language: Language, records: Value) -> Self {
        self.snapshots.insert((kind, language), records);
        self
    }
}

impl RecordSource for MemorySource {
    fn records<R>(&self, language: Language) -> Result<Vec<R>>
    where
        R: CatalogRecord + DeserializeOwned,
    {
        match self.snapshots.get(&(R::KIND, language)) {
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("Malformed {} {} records", language, R::KIND)),
            None => Ok(Vec::new()),
        }
    }
}
