use anyhow::{Context, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use super::types::{GameData, I18nGameData};
use super::{I18N_FILE, RESOURCES_FILE};
use crate::TARGET_OUTPUT;

/// Load the data of previously generated modules in `dir`.
///
/// Missing files yield empty data so a first run can start from scratch.
pub fn load_existing(dir: &Path) -> Result<GameData> {
    let resources = read_if_present(&dir.join(RESOURCES_FILE))?;
    let i18n = read_if_present(&dir.join(I18N_FILE))?;
    let data = parse_generated(resources.as_deref().unwrap_or(""), i18n.as_deref().unwrap_or(""))?;
    info!(
        target: TARGET_OUTPUT,
        "Loaded existing data: {} characters, {} artifacts, {} weapons, {} half-sets",
        data.characters.len(),
        data.artifacts.len(),
        data.weapons.len(),
        data.half_sets.len()
    );
    Ok(data)
}

/// Parse the contents of `resources.ts` and `i18n-game.ts`.
///
/// Exports that are absent parse as empty; exports that are present but do
/// not hold valid data are an error.
pub fn parse_generated(resources: &str, i18n: &str) -> Result<GameData> {
    Ok(GameData {
        characters: parse_export(resources, "characters")?,
        artifacts: parse_export(resources, "artifacts")?,
        weapons: parse_export(resources, "weapons")?,
        half_sets: parse_export(resources, "artifactHalfSets")?,
        i18n: parse_export::<I18nGameData>(i18n, "i18nGameData")?,
    })
}

/// Locate the JSON literal assigned by `export const NAME[: TYPE] = ...;`.
///
/// The literal ends at the first `;` that is followed by another export or by
/// the end of the file.
pub fn extract_export<'c>(content: &'c str, name: &str) -> Result<Option<&'c str>> {
    let pattern = format!(
        r"(?s)export const {}(?::[^=]*)? = (.*?);\s*(?:export|$)",
        regex::escape(name)
    );
    let re = Regex::new(&pattern).with_context(|| format!("Invalid export pattern for {}", name))?;
    Ok(re
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str()))
}

fn parse_export<T: DeserializeOwned + Default>(content: &str, name: &str) -> Result<T> {
    match extract_export(content, name)? {
        Some(json) => serde_json::from_str(json)
            .with_context(|| format!("Failed to parse existing export {}", name)),
        None => {
            if !content.is_empty() {
                warn!(target: TARGET_OUTPUT, "Export {} not found in existing data", name);
            }
            Ok(T::default())
        }
    }
}

fn read_if_present(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        info!(target: TARGET_OUTPUT, "No existing {}, starting empty", path.display());
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .with_context(|| format!("Failed to read {}", path.display()))
}
