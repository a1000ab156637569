use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::assemble::{ArtifactI18n, ArtifactOutput, CharacterOutput, Localized, WeaponI18n, WeaponOutput};
use crate::halfset::{EffectTexts, HalfSet};

/// Everything exported by `i18n-game.ts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nGameData {
    #[serde(default)]
    pub characters: BTreeMap<String, Localized<String>>,
    #[serde(default)]
    pub artifacts: BTreeMap<String, ArtifactI18n>,
    #[serde(default)]
    pub weapons: BTreeMap<String, WeaponI18n>,
    #[serde(default)]
    pub artifact_half_sets: BTreeMap<u32, Localized<String>>,
}

/// The full contents of both generated modules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameData {
    pub characters: Vec<CharacterOutput>,
    pub artifacts: Vec<ArtifactOutput>,
    pub weapons: Vec<WeaponOutput>,
    pub half_sets: Vec<HalfSet>,
    pub i18n: I18nGameData,
}

impl GameData {
    /// Artifact ids in record order together with their effect texts, as the
    /// half-set clusterer consumes them.
    pub fn half_set_inputs(&self) -> (Vec<String>, BTreeMap<String, EffectTexts>) {
        let ids = self.artifacts.iter().map(|a| a.id.clone()).collect();
        let effects = self
            .i18n
            .artifacts
            .iter()
            .map(|(id, entry)| (id.clone(), entry.effects.clone()))
            .collect();
        (ids, effects)
    }

    /// Replace the half-sets and their translated canonical texts.
    pub fn set_half_sets(&mut self, half_sets: Vec<HalfSet>) {
        self.i18n.artifact_half_sets = half_sets
            .iter()
            .map(|hs| {
                (
                    hs.id,
                    Localized {
                        en: hs.canonical_text_primary.clone(),
                        zh: hs.canonical_text_secondary.clone(),
                    },
                )
            })
            .collect();
        self.half_sets = half_sets;
    }
}
