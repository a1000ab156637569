use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::{CatalogRecord, EntityKind};
use crate::SENTINEL;

/// A character as scraped in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default, alias = "entry_id")]
    pub stable_key: String,
    #[serde(alias = "name")]
    pub display_name: String,
    pub element: String,
    pub rarity: u8,
    pub image_url: String,
}

/// An artifact set as scraped in one language.
///
/// `effects` holds the set bonus texts in piece order, so the first entry is
/// the two-piece bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    #[serde(default, alias = "entry_id")]
    pub stable_key: String,
    #[serde(alias = "name")]
    pub display_name: String,
    #[serde(default)]
    pub image_urls: BTreeMap<String, String>,
    #[serde(default)]
    pub effects: Vec<String>,
}

/// A weapon as scraped in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponRecord {
    #[serde(default, alias = "entry_id")]
    pub stable_key: String,
    #[serde(alias = "name")]
    pub display_name: String,
    pub rarity: u8,
    pub image_url: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub secondary_stat: String,
    pub secondary_stat_value: String,
    pub base_atk: u32,
    pub effect: String,
}

impl CatalogRecord for CharacterRecord {
    const KIND: EntityKind = EntityKind::Character;

    fn stable_key(&self) -> &str {
        &self.stable_key
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    fn invariant_mismatch(&self, other: &Self) -> Option<String> {
        if self.element != other.element || self.rarity != other.rarity {
            Some(format!(
                "element/rarity mismatch: {} {}* vs {} {}*",
                self.element, self.rarity, other.element, other.rarity
            ))
        } else {
            None
        }
    }
}

impl CatalogRecord for ArtifactRecord {
    const KIND: EntityKind = EntityKind::Artifact;

    fn stable_key(&self) -> &str {
        &self.stable_key
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    fn blank_effects(&mut self) {
        self.effects = vec![SENTINEL.to_string(); self.effects.len()];
    }
}

impl CatalogRecord for WeaponRecord {
    const KIND: EntityKind = EntityKind::Weapon;

    fn stable_key(&self) -> &str {
        &self.stable_key
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    fn blank_effects(&mut self) {
        self.effect = SENTINEL.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_blanking_keeps_cardinality() {
        let mut artifact = ArtifactRecord {
            stable_key: "2015".to_string(),
            display_name: "Gladiator's Finale".to_string(),
            image_urls: BTreeMap::new(),
            effects: vec!["ATK +18%.".to_string(), "Normal Attack DMG +35%.".to_string()],
        };
        artifact.blank_effects();
        assert_eq!(artifact.effects, vec!["???", "???"]);
    }

    #[test]
    fn test_snapshot_field_aliases() {
        let json = r#"{"entry_id": "1001", "name": "Amber", "element": "Pyro", "rarity": 4, "image_url": "https://example.org/amber.png"}"#;
        let character: CharacterRecord = serde_json::from_str(json).unwrap();
        assert_eq!(character.stable_key, "1001");
        assert_eq!(character.display_name, "Amber");

        // Missing required fields are rejected rather than defaulted
        let truncated = r#"{"entry_id": "1001", "name": "Amber"}"#;
        assert!(serde_json::from_str::<CharacterRecord>(truncated).is_err());
    }

    #[test]
    fn test_character_invariant_mismatch() {
        let en = CharacterRecord {
            stable_key: "1".to_string(),
            display_name: "Amber".to_string(),
            element: "Pyro".to_string(),
            rarity: 4,
            image_url: String::new(),
        };
        let mut zh = en.clone();
        zh.display_name = "安柏".to_string();
        assert!(en.invariant_mismatch(&zh).is_none());

        zh.rarity = 5;
        assert!(en.invariant_mismatch(&zh).is_some());
    }
}
