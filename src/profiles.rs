//! Character enrichment from an offline profile table.
//!
//! The catalog scrape only knows element and rarity; weapon type, region and
//! release date come from a separately collected profile table. Anything the
//! table cannot answer goes through the [`Corrections`] capability, which the
//! caller may back with a file, a prompt or nothing at all.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::catalog::{CharacterRecord, EntityKind};
use crate::TARGET_SOURCE;

pub const VALID_WEAPON_TYPES: &[&str] = &["Sword", "Claymore", "Polearm", "Bow", "Catalyst"];

const DEFAULT_WEAPON_TYPE: &str = "Sword";
const DEFAULT_REGION: &str = "None";
const TRAVELER_PREFIX: &str = "Traveler";
const TRAVELER_RELEASE_DATE: &str = "2020-09-28";

/// Profile facts for one character, as collected from the community wiki.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    pub name: String,
    pub element: String,
    pub rarity: u8,
    #[serde(alias = "weapon")]
    pub weapon_type: String,
    pub region: String,
    pub release_date: String,
}

/// Fields added to a character by enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub weapon_type: String,
    pub region: String,
    pub release_date: String,
    pub from_profile: bool,
}

/// Answers for values the scrape could not determine.
///
/// Returning `None` means "no correction"; the caller then applies its default.
pub trait Corrections {
    fn weapon_type(&self, _character: &str) -> Option<String> {
        None
    }

    fn rarity(&self, _kind: EntityKind, _name: &str) -> Option<u8> {
        None
    }
}

/// Corrections that never answer.
pub struct NoCorrections;

impl Corrections for NoCorrections {}

/// Corrections loaded from a JSON file.
///
/// ```json
/// { "weaponTypes": { "Ineffa": "Polearm" }, "characterRarities": { "Ineffa": 5 } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionTable {
    #[serde(default)]
    weapon_types: HashMap<String, String>,
    #[serde(default)]
    character_rarities: HashMap<String, u8>,
    #[serde(default)]
    weapon_rarities: HashMap<String, u8>,
}

impl CorrectionTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read corrections {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse corrections {}", path.display()))
    }
}

impl Corrections for CorrectionTable {
    fn weapon_type(&self, character: &str) -> Option<String> {
        self.weapon_types.get(character).cloned()
    }

    fn rarity(&self, kind: EntityKind, name: &str) -> Option<u8> {
        match kind {
            EntityKind::Character => self.character_rarities.get(name).copied(),
            EntityKind::Weapon => self.weapon_rarities.get(name).copied(),
            EntityKind::Artifact => None,
        }
    }
}

/// Profiles indexed by `(element, rarity, name)`.
#[derive(Debug, Clone, Default)]
pub struct ProfileTable {
    profiles: HashMap<(String, u8, String), CharacterProfile>,
}

impl ProfileTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profiles {}", path.display()))?;
        let profiles: Vec<CharacterProfile> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse profiles {}", path.display()))?;
        let table: ProfileTable = profiles.into_iter().collect();
        info!(target: TARGET_SOURCE, "Loaded {} character profiles", table.len());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn get(&self, element: &str, rarity: u8, name: &str) -> Option<&CharacterProfile> {
        self.profiles
            .get(&(element.to_string(), rarity, name.to_string()))
    }

    /// Weapon type, region and release date for a primary-language character.
    ///
    /// The Traveler appears under one profile regardless of element. Without a
    /// profile the weapon type comes from `corrections` (validated, defaulting
    /// to Sword), the region is `None` and the release date is `today`.
    pub fn enrich(
        &self,
        character: &CharacterRecord,
        corrections: &dyn Corrections,
        today: NaiveDate,
    ) -> Enrichment {
        let is_traveler = character.display_name.starts_with(TRAVELER_PREFIX);
        let profile = if is_traveler {
            self.get("None", 5, TRAVELER_PREFIX)
        } else {
            self.get(&character.element, character.rarity, &character.display_name)
        };

        if let Some(profile) = profile {
            return Enrichment {
                weapon_type: profile.weapon_type.clone(),
                region: profile.region.clone(),
                release_date: profile.release_date.clone(),
                from_profile: true,
            };
        }

        warn!(
            target: TARGET_SOURCE,
            "Character {} not found in profile data", character.display_name
        );

        let weapon_type = corrections
            .weapon_type(&character.display_name)
            .and_then(|answer| canonical_weapon_type(&answer))
            .unwrap_or_else(|| DEFAULT_WEAPON_TYPE.to_string());

        let release_date = if is_traveler {
            TRAVELER_RELEASE_DATE.to_string()
        } else {
            today.format("%Y-%m-%d").to_string()
        };

        Enrichment {
            weapon_type,
            region: DEFAULT_REGION.to_string(),
            release_date,
            from_profile: false,
        }
    }
}

impl FromIterator<CharacterProfile> for ProfileTable {
    fn from_iter<I: IntoIterator<Item = CharacterProfile>>(iter: I) -> Self {
        let profiles = iter
            .into_iter()
            .map(|p| ((p.element.clone(), p.rarity, p.name.clone()), p))
            .collect();
        ProfileTable { profiles }
    }
}

/// Case-insensitive match against the known weapon types.
pub fn canonical_weapon_type(value: &str) -> Option<String> {
    let value = value.trim();
    VALID_WEAPON_TYPES
        .iter()
        .find(|weapon| weapon.eq_ignore_ascii_case(value))
        .map(|weapon| weapon.to_string())
}
