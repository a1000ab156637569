use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

use super::claim_id;
use super::types::{ArtifactI18n, ArtifactOutput, AssembledArtifacts, Localized};
use crate::catalog::{ArtifactRecord, MatchedPair};
use crate::config::{SyncConfig, ARTIFACT_SLOTS};
use crate::halfset::EffectTexts;
use crate::TARGET_MATCH;

/// Build artifact set records and name/effect translations from matched pairs.
///
/// Sets on the configured skip list are left out entirely. Record order
/// follows the pairs, which keeps the newest-first order half-set
/// clustering expects.
pub fn assemble_artifacts(
    pairs: Vec<MatchedPair<ArtifactRecord>>,
    config: &SyncConfig,
) -> AssembledArtifacts {
    let mut assembled = AssembledArtifacts::default();
    let mut seen = HashSet::new();

    for pair in pairs {
        let Some(id) = claim_id(&pair, &mut seen) else {
            continue;
        };
        if config.skip_list.contains(&id) {
            debug!(target: TARGET_MATCH, "Skipping artifact {} (skip list)", id);
            continue;
        }
        let MatchedPair {
            primary, secondary, ..
        } = pair;

        let rarity = if config
            .rarity_four_artifacts
            .iter()
            .any(|name| *name == primary.display_name)
        {
            4
        } else {
            5
        };

        let image_paths: BTreeMap<String, String> = ARTIFACT_SLOTS
            .iter()
            .map(|(slot, suffix)| {
                (slot.to_string(), format!("/artifact/{}{}.png", id, suffix))
            })
            .collect();

        assembled.records.push(ArtifactOutput {
            id: id.clone(),
            rarity,
            image_url: primary.image_urls.get("flower").cloned().unwrap_or_default(),
            image_paths,
        });
        assembled.i18n.insert(
            id,
            ArtifactI18n {
                name: Localized {
                    en: primary.display_name,
                    zh: secondary.display_name,
                },
                effects: EffectTexts::new(primary.effects, secondary.effects),
            },
        );
    }

    info!(target: TARGET_MATCH, "Assembled {} artifact sets", assembled.records.len());
    assembled
}
