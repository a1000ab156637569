use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::info;

use super::types::{AssembledCharacters, CharacterOutput, Localized};
use super::{claim_id, corrected_rarity};
use crate::catalog::{CharacterRecord, EntityKind, MatchedPair};
use crate::profiles::{Corrections, ProfileTable};
use crate::TARGET_MATCH;

/// Build character records and name translations from matched pairs.
pub fn assemble_characters(
    pairs: Vec<MatchedPair<CharacterRecord>>,
    profiles: &ProfileTable,
    corrections: &dyn Corrections,
    today: NaiveDate,
) -> AssembledCharacters {
    let mut assembled = AssembledCharacters::default();
    let mut seen = HashSet::new();
    let mut enriched = 0;

    for mut pair in pairs {
        let rarity = corrected_rarity(
            EntityKind::Character,
            &pair.primary.display_name,
            pair.primary.rarity,
            4..=5,
            corrections,
        );
        pair.primary.rarity = rarity;
        pair.secondary.rarity = rarity;

        let Some(id) = claim_id(&pair, &mut seen) else {
            continue;
        };

        let enrichment = profiles.enrich(&pair.primary, corrections, today);
        if enrichment.from_profile {
            enriched += 1;
        }

        let MatchedPair {
            primary, secondary, ..
        } = pair;

        assembled.records.push(CharacterOutput {
            image_path: format!("/character/{}.png", id),
            id: id.clone(),
            element: primary.element,
            rarity,
            weapon_type: enrichment.weapon_type,
            region: enrichment.region,
            release_date: enrichment.release_date,
            image_url: primary.image_url,
        });
        assembled.i18n.insert(
            id,
            Localized {
                en: primary.display_name,
                zh: secondary.display_name,
            },
        );
    }

    info!(
        target: TARGET_MATCH,
        "Assembled {} characters ({} enriched from profiles)",
        assembled.records.len(),
        enriched
    );
    assembled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::{CharacterProfile, CorrectionTable, NoCorrections};

    fn pair(key: &str, en: &str, zh: &str, rarity: u8) -> MatchedPair<CharacterRecord> {
        let primary = CharacterRecord {
            stable_key: key.to_string(),
            display_name: en.to_string(),
            element: "Hydro".to_string(),
            rarity,
            image_url: format!("https://example.org/{}.png", key),
        };
        let mut secondary = primary.clone();
        secondary.display_name = zh.to_string();
        MatchedPair::new(primary, secondary)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_assemble_characters() {
        let profiles: ProfileTable = vec![CharacterProfile {
            name: "Furina".to_string(),
            element: "Hydro".to_string(),
            rarity: 5,
            weapon_type: "Sword".to_string(),
            region: "Fontaine".to_string(),
            release_date: "2023-11-08".to_string(),
        }]
        .into_iter()
        .collect();

        let assembled = assemble_characters(
            vec![pair("89", "Furina", "芙宁娜", 5), pair("90", "???", "某人", 4)],
            &profiles,
            &NoCorrections,
            today(),
        );

        // The placeholder name cannot produce an id
        assert_eq!(assembled.records.len(), 1);
        let furina = &assembled.records[0];
        assert_eq!(furina.id, "furina");
        assert_eq!(furina.region, "Fontaine");
        assert_eq!(furina.image_path, "/character/furina.png");
        assert_eq!(assembled.i18n["furina"].zh, "芙宁娜");
    }

    #[test]
    fn test_zero_rarity_is_corrected() {
        let corrections: CorrectionTable =
            serde_json::from_str(r#"{"characterRarities": {"Mualani": 5, "Kachina": 9}}"#).unwrap();

        let assembled = assemble_characters(
            vec![pair("1", "Mualani", "玛拉妮", 0), pair("2", "Kachina", "卡齐娜", 0)],
            &ProfileTable::default(),
            &corrections,
            today(),
        );

        assert_eq!(assembled.records[0].rarity, 5);
        // Out-of-range answers leave the scraped value alone
        assert_eq!(assembled.records[1].rarity, 0);
    }
}
