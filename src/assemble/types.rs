use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::halfset::EffectTexts;

/// A value in both languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub en: T,
    pub zh: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterOutput {
    pub id: String,
    pub element: String,
    pub rarity: u8,
    pub weapon_type: String,
    pub region: String,
    pub release_date: String,
    pub image_url: String,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactOutput {
    pub id: String,
    pub rarity: u8,
    pub image_url: String,
    pub image_paths: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponOutput {
    pub id: String,
    pub rarity: u8,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub secondary_stat: String,
    pub base_atk: u32,
    pub secondary_stat_value: String,
    pub image_url: String,
    pub image_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactI18n {
    pub name: Localized<String>,
    pub effects: EffectTexts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponI18n {
    pub name: Localized<String>,
    pub effect: Localized<String>,
}

/// Canonical records of one kind plus their per-id translations.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled<O, I> {
    pub records: Vec<O>,
    pub i18n: BTreeMap<String, I>,
}

impl<O, I> Default for Assembled<O, I> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            i18n: BTreeMap::new(),
        }
    }
}

pub type AssembledCharacters = Assembled<CharacterOutput, Localized<String>>;
pub type AssembledArtifacts = Assembled<ArtifactOutput, ArtifactI18n>;
pub type AssembledWeapons = Assembled<WeaponOutput, WeaponI18n>;
