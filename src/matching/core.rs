use anyhow::{bail, Result};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, error, info, warn};

use super::resolver::NameResolver;
use super::types::{MatchIssue, MatchOutcome};
use crate::catalog::{CatalogRecord, Language, MatchedPair};
use crate::{SENTINEL, TARGET_MATCH};

/// Pairs records of one entity kind across the two languages by stable key.
#[derive(Default)]
pub struct EntityMatcher<'a> {
    resolver: Option<&'a dyn NameResolver>,
}

impl<'a> EntityMatcher<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver used to name synthesized placeholders.
    pub fn with_resolver(mut self, resolver: &'a dyn NameResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Match primary-language records against secondary-language records.
    ///
    /// Every non-empty stable key found on either side yields exactly one pair,
    /// emitted newest-first (see [`processing_order`]). A side without a record
    /// for the key gets a placeholder copied from the other side.
    ///
    /// # Errors
    /// A stable key that appears twice within one language collection is an
    /// upstream contract violation and aborts the match.
    pub fn match_records<R: CatalogRecord>(
        &self,
        primary: &[R],
        secondary: &[R],
    ) -> Result<MatchOutcome<R>> {
        let primary_by_key = index_by_key(primary, Language::PRIMARY)?;
        let secondary_by_key = index_by_key(secondary, Language::SECONDARY)?;

        let all_keys: BTreeSet<&str> = primary_by_key
            .keys()
            .chain(secondary_by_key.keys())
            .copied()
            .collect();

        info!(
            target: TARGET_MATCH,
            "Matching {} {} keys ({} {}, {} {})",
            all_keys.len(),
            R::KIND,
            primary_by_key.len(),
            Language::PRIMARY,
            secondary_by_key.len(),
            Language::SECONDARY
        );

        let mut pairs = Vec::with_capacity(all_keys.len());
        let mut issues = Vec::new();

        for key in processing_order(all_keys) {
            let pair = match (primary_by_key.get(key), secondary_by_key.get(key)) {
                (Some(&primary), Some(&secondary)) => {
                    if let Some(detail) = primary.invariant_mismatch(secondary) {
                        error!(
                            target: TARGET_MATCH,
                            "{} {} ({}) - {}",
                            R::KIND, key, primary.display_name(), detail
                        );
                        issues.push(MatchIssue::ConsistencyMismatch {
                            key: key.to_string(),
                            detail,
                        });
                    }
                    MatchedPair::new(primary.clone(), secondary.clone())
                }
                (Some(&primary), None) => {
                    let (placeholder, issue) = self.synthesize(primary, Language::SECONDARY);
                    issues.push(issue);
                    MatchedPair {
                        primary: primary.clone(),
                        secondary: placeholder,
                        placeholder: Some(Language::SECONDARY),
                    }
                }
                (None, Some(&secondary)) => {
                    let (placeholder, issue) = self.synthesize(secondary, Language::PRIMARY);
                    issues.push(issue);
                    MatchedPair {
                        primary: placeholder,
                        secondary: secondary.clone(),
                        placeholder: Some(Language::PRIMARY),
                    }
                }
                // Keys come from the union of both indexes
                (None, None) => continue,
            };
            pairs.push(pair);
        }

        Ok(MatchOutcome { pairs, issues })
    }

    /// Build the missing `language` side as a copy of `existing`.
    fn synthesize<R: CatalogRecord>(&self, existing: &R, language: Language) -> (R, MatchIssue) {
        let key = existing.stable_key();
        info!(
            target: TARGET_MATCH,
            "{} '{}' (ID: {}) only exists in {}, synthesizing {} counterpart",
            R::KIND,
            existing.display_name(),
            key,
            language.counterpart(),
            language
        );

        let resolved = self
            .resolver
            .and_then(|resolver| resolver.resolve_name(key, language))
            .filter(|name| !name.trim().is_empty());
        let name_resolved = resolved.is_some();

        let name = resolved.unwrap_or_else(|| {
            warn!(
                target: TARGET_MATCH,
                "No {} name for {} {}, using placeholder", language, R::KIND, key
            );
            SENTINEL.to_string()
        });

        let mut placeholder = existing.clone();
        placeholder.set_display_name(name);
        placeholder.blank_effects();

        let issue = MatchIssue::MissingCounterpart {
            key: key.to_string(),
            missing: language,
            name_resolved,
        };
        (placeholder, issue)
    }
}

/// Index records by stable key, skipping records without one.
fn index_by_key<R: CatalogRecord>(
    records: &[R],
    language: Language,
) -> Result<HashMap<&str, &R>> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        let key = record.stable_key();
        if key.trim().is_empty() {
            warn!(
                target: TARGET_MATCH,
                "{} '{}' has no {} stable key, skipping",
                R::KIND,
                record.display_name(),
                language
            );
            continue;
        }
        if index.insert(key, record).is_some() {
            bail!(
                "Duplicate {} stable key '{}' in {} records",
                R::KIND,
                key,
                language
            );
        }
    }
    debug!(
        target: TARGET_MATCH,
        "Indexed {} of {} {} records", index.len(), records.len(), language
    );
    Ok(index)
}

/// Order stable keys newest-first.
///
/// Numeric keys of any length sort by value, descending. Keys that are not
/// plain digits rank above every numeric key, so they come first; among
/// themselves they are ordered by reverse string comparison.
pub fn processing_order<'k>(keys: impl IntoIterator<Item = &'k str>) -> Vec<&'k str> {
    let mut ordered: Vec<&str> = keys.into_iter().collect();
    ordered.sort_by(|a, b| compare_keys(b, a));
    ordered
}

/// Digits of an all-digit key without leading zeros.
fn numeric_key(key: &str) -> Option<&str> {
    if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
        Some(key.trim_start_matches('0'))
    } else {
        None
    }
}

fn compare_keys(a: &str, b: &str) -> Ordering {
    match (numeric_key(a), numeric_key(b)) {
        // Shorter digit strings are smaller; equal lengths compare digit by digit
        (Some(x), Some(y)) => x
            .len()
            .cmp(&y.len())
            .then_with(|| x.cmp(y))
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ArtifactRecord, CharacterRecord, WeaponRecord};
    use std::collections::{BTreeMap, HashSet};

    fn character(key: &str, name: &str, element: &str, rarity: u8) -> CharacterRecord {
        CharacterRecord {
            stable_key: key.to_string(),
            display_name: name.to_string(),
            element: element.to_string(),
            rarity,
            image_url: format!("https://example.org/{}.png", key),
        }
    }

    fn artifact(key: &str, name: &str, effects: &[&str]) -> ArtifactRecord {
        ArtifactRecord {
            stable_key: key.to_string(),
            display_name: name.to_string(),
            image_urls: BTreeMap::new(),
            effects: effects.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_processing_order() {
        let keys = ["9", "120", "abc", "15", "zz", "0"];
        assert_eq!(
            processing_order(keys),
            vec!["zz", "abc", "120", "15", "9", "0"]
        );
    }

    #[test]
    fn test_processing_order_of_long_numeric_keys() {
        let keys = ["99999999999999999999", "x1", "100000000000000000000", "0042", "7"];
        assert_eq!(
            processing_order(keys),
            vec!["x1", "100000000000000000000", "99999999999999999999", "0042", "7"]
        );
    }

    #[test]
    fn test_every_key_yields_one_pair() {
        let en = vec![
            character("1", "Amber", "Pyro", 4),
            character("2", "Kaeya", "Cryo", 4),
            character("", "Traveler", "None", 5),
        ];
        let zh = vec![
            character("2", "凯亚", "Cryo", 4),
            character("3", "丽莎", "Electro", 4),
        ];

        let outcome = EntityMatcher::new().match_records(&en, &zh).unwrap();
        let keys: Vec<&str> = outcome.pairs.iter().map(|p| p.stable_key()).collect();
        assert_eq!(keys, vec!["3", "2", "1"]);

        let unique: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());

        for pair in &outcome.pairs {
            assert_eq!(pair.primary.stable_key, pair.secondary.stable_key);
        }
        assert_eq!(outcome.placeholder_count(), 2);
        assert_eq!(outcome.mismatch_count(), 0);
    }

    #[test]
    fn test_placeholder_uses_resolver_or_sentinel() {
        let en = vec![character("10", "Furina", "Hydro", 5)];
        let zh = vec![character("11", "娜维娅", "Geo", 5)];

        let resolver = |key: &str, language: Language| {
            (key == "10" && language == Language::Zh).then(|| "芙宁娜".to_string())
        };
        let outcome = EntityMatcher::new()
            .with_resolver(&resolver)
            .match_records(&en, &zh)
            .unwrap();

        let navia = &outcome.pairs[0];
        assert_eq!(navia.placeholder, Some(Language::En));
        assert_eq!(navia.primary.display_name, SENTINEL);
        assert_eq!(navia.primary.element, "Geo");

        let furina = &outcome.pairs[1];
        assert_eq!(furina.placeholder, Some(Language::Zh));
        assert_eq!(furina.get(Language::Zh).display_name, "芙宁娜");

        assert!(outcome.issues.contains(&MatchIssue::MissingCounterpart {
            key: "11".to_string(),
            missing: Language::En,
            name_resolved: false,
        }));
    }

    #[test]
    fn test_placeholder_effects_are_sentinels() {
        let en = vec![artifact("5", "Obsidian Codex", &["HP +20%.", "CRIT Rate +40%."])];
        let outcome = EntityMatcher::new()
            .match_records::<ArtifactRecord>(&en, &[])
            .unwrap();

        let pair = &outcome.pairs[0];
        assert_eq!(pair.secondary.effects, vec![SENTINEL, SENTINEL]);
        // The primary side keeps its real text
        assert_eq!(pair.primary.effects[0], "HP +20%.");

        let weapon = WeaponRecord {
            stable_key: "7".to_string(),
            display_name: "护摩之杖".to_string(),
            rarity: 5,
            image_url: String::new(),
            weapon_type: "Polearm".to_string(),
            secondary_stat: "CRIT DMG".to_string(),
            secondary_stat_value: "66.2%".to_string(),
            base_atk: 608,
            effect: "生命值提升20%。".to_string(),
        };
        let outcome = EntityMatcher::new()
            .match_records(&[], &[weapon])
            .unwrap();
        assert_eq!(outcome.pairs[0].primary.effect, SENTINEL);
        assert_eq!(outcome.pairs[0].secondary.effect, "生命值提升20%。");
    }

    #[test]
    fn test_mismatch_is_reported_but_pair_kept() {
        let en = vec![character("4", "Lisa", "Electro", 4)];
        let zh = vec![character("4", "丽莎", "Electro", 5)];

        let outcome = EntityMatcher::new().match_records(&en, &zh).unwrap();
        assert_eq!(outcome.pairs.len(), 1);
        assert_eq!(outcome.mismatch_count(), 1);
        assert_eq!(outcome.pairs[0].primary.rarity, 4);
        assert_eq!(outcome.pairs[0].placeholder, None);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let en = vec![
            character("4", "Lisa", "Electro", 4),
            character("4", "Lisa (Trial)", "Electro", 4),
        ];
        assert!(EntityMatcher::new().match_records(&en, &[]).is_err());
    }
}
