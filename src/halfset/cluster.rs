use anyhow::{bail, Result};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, info};

use super::types::{EffectTexts, HalfSet, SkipList};
use crate::catalog::Language;
use crate::effect::normalize_effect_text;
use crate::TARGET_HALFSET;

/// Group artifact sets into half-sets by their normalized two-piece bonus.
///
/// `artifact_ids` is expected newest-first; it is processed oldest-first so
/// half-set ids follow release order. Ids on the skip list, ids without an
/// effects entry and ids lacking text in either language stay unclustered.
///
/// An id joins an existing half-set when either of its normalized texts equals
/// a text the half-set was registered under. Each half-set keeps the shortest
/// text seen per language; on equal length the earlier text stays.
///
/// The result is sorted by member count, then id, both descending.
///
/// # Errors
/// Fails when `artifact_ids` lists the same id twice.
pub fn cluster_half_sets(
    artifact_ids: &[String],
    effects: &BTreeMap<String, EffectTexts>,
    skip_list: &SkipList,
) -> Result<Vec<HalfSet>> {
    let mut seen = HashSet::with_capacity(artifact_ids.len());
    for id in artifact_ids {
        if !seen.insert(id.as_str()) {
            bail!("Artifact id '{}' is listed more than once", id);
        }
    }

    let mut half_sets: Vec<HalfSet> = Vec::new();
    let mut text_to_id: HashMap<String, u32> = HashMap::new();

    let oldest_first = artifact_ids
        .iter()
        .filter(|id| !skip_list.contains(id))
        .rev();

    for artifact_id in oldest_first {
        let Some(texts) = effects.get(artifact_id) else {
            debug!(target: TARGET_HALFSET, "No effects for {}, leaving unclustered", artifact_id);
            continue;
        };
        let (Some(first_en), Some(first_zh)) = (
            texts.get(Language::En).first(),
            texts.get(Language::Zh).first(),
        ) else {
            debug!(
                target: TARGET_HALFSET,
                "Incomplete effects for {}, leaving unclustered", artifact_id
            );
            continue;
        };

        let normalized_en = normalize_effect_text(first_en, Language::En);
        let normalized_zh = normalize_effect_text(first_zh, Language::Zh);

        let existing_id = text_to_id
            .get(&normalized_en)
            .or_else(|| text_to_id.get(&normalized_zh))
            .copied();

        if let Some(existing_id) = existing_id {
            if let Some(half_set) = half_sets.iter_mut().find(|hs| hs.id == existing_id) {
                half_set.member_ids.push(artifact_id.clone());
                keep_shorter(&mut half_set.canonical_text_primary, normalized_en);
                keep_shorter(&mut half_set.canonical_text_secondary, normalized_zh);
                debug!(
                    target: TARGET_HALFSET,
                    "{} joins half-set {} ({} members)",
                    artifact_id,
                    existing_id,
                    half_set.member_ids.len()
                );
            }
        } else {
            let id = half_sets.len() as u32 + 1;
            text_to_id.insert(normalized_en.clone(), id);
            text_to_id.insert(normalized_zh.clone(), id);
            debug!(
                target: TARGET_HALFSET,
                "New half-set {} from {}: '{}' / '{}'",
                id, artifact_id, normalized_en, normalized_zh
            );
            half_sets.push(HalfSet {
                id,
                member_ids: vec![artifact_id.clone()],
                canonical_text_primary: normalized_en,
                canonical_text_secondary: normalized_zh,
            });
        }
    }

    half_sets.sort_by(|a, b| {
        b.member_ids
            .len()
            .cmp(&a.member_ids.len())
            .then_with(|| b.id.cmp(&a.id))
    });

    info!(
        target: TARGET_HALFSET,
        "Generated {} half-sets from {} artifacts", half_sets.len(), artifact_ids.len()
    );
    for half_set in &half_sets {
        debug!(
            target: TARGET_HALFSET,
            "Half-set {}: {} sets - {}",
            half_set.id,
            half_set.member_ids.len(),
            half_set.canonical_text_primary
        );
    }

    Ok(half_sets)
}

/// Replace `current` only when `candidate` is strictly shorter.
fn keep_shorter(current: &mut String, candidate: String) {
    if candidate.chars().count() < current.chars().count() {
        *current = candidate;
    }
}
