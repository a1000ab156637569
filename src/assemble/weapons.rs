use std::collections::HashSet;
use tracing::info;

use super::types::{AssembledWeapons, Localized, WeaponI18n, WeaponOutput};
use super::{claim_id, corrected_rarity};
use crate::catalog::{EntityKind, MatchedPair, WeaponRecord};
use crate::profiles::Corrections;
use crate::TARGET_MATCH;

/// Build weapon records and name/effect translations from matched pairs.
pub fn assemble_weapons(
    pairs: Vec<MatchedPair<WeaponRecord>>,
    corrections: &dyn Corrections,
) -> AssembledWeapons {
    let mut assembled = AssembledWeapons::default();
    let mut seen = HashSet::new();

    for mut pair in pairs {
        let rarity = corrected_rarity(
            EntityKind::Weapon,
            &pair.primary.display_name,
            pair.primary.rarity,
            1..=5,
            corrections,
        );
        pair.primary.rarity = rarity;
        pair.secondary.rarity = rarity;

        let Some(id) = claim_id(&pair, &mut seen) else {
            continue;
        };
        let MatchedPair {
            primary, secondary, ..
        } = pair;

        assembled.records.push(WeaponOutput {
            image_path: format!("/weapon/{}.png", id),
            id: id.clone(),
            rarity,
            weapon_type: primary.weapon_type,
            secondary_stat: primary.secondary_stat,
            base_atk: primary.base_atk,
            secondary_stat_value: primary.secondary_stat_value,
            image_url: primary.image_url,
        });
        assembled.i18n.insert(
            id,
            WeaponI18n {
                name: Localized {
                    en: primary.display_name,
                    zh: secondary.display_name,
                },
                effect: Localized {
                    en: primary.effect,
                    zh: secondary.effect,
                },
            },
        );
    }

    info!(target: TARGET_MATCH, "Assembled {} weapons", assembled.records.len());
    assembled
}
