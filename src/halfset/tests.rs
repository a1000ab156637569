use std::collections::BTreeMap;

use super::*;
use crate::catalog::Language;
use crate::SENTINEL;

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

fn effects(entries: &[(&str, &str, &str)]) -> BTreeMap<String, EffectTexts> {
    entries
        .iter()
        .map(|(id, en, zh)| {
            (
                id.to_string(),
                EffectTexts::new(vec![en.to_string()], vec![zh.to_string()]),
            )
        })
        .collect()
}

#[test]
fn test_shared_bonus_forms_one_half_set() {
    let artifact_ids = ids(&["a", "b", "c"]);
    let texts = effects(&[
        ("a", "Increase by 20% ATK.", "攻击力提高20%。"),
        ("b", "+15% DEF.", "防御力提高15%。"),
        ("c", "+20% ATK", "攻击力提高20%"),
    ]);

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets.len(), 2);

    // c is oldest, so it opens half-set 1 and a joins it later
    assert_eq!(half_sets[0].id, 1);
    assert_eq!(half_sets[0].member_ids, vec!["c", "a"]);
    assert_eq!(half_sets[0].canonical_text_primary, "+20% ATK");

    assert_eq!(half_sets[1].id, 2);
    assert_eq!(half_sets[1].member_ids, vec!["b"]);
}

#[test]
fn test_ties_on_size_put_newer_half_set_first() {
    let artifact_ids = ids(&["new", "mid", "old"]);
    let texts = effects(&[
        ("new", "Pyro DMG Bonus +15%", "获得15%火元素伤害加成"),
        ("mid", "Hydro DMG Bonus +15%", "获得15%水元素伤害加成"),
        ("old", "Cryo DMG Bonus +15%", "获得15%冰元素伤害加成"),
    ]);

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    let order: Vec<u32> = half_sets.iter().map(|hs| hs.id).collect();
    assert_eq!(order, vec![3, 2, 1]);
    assert_eq!(half_sets[0].member_ids, vec!["new"]);
}

#[test]
fn test_skip_list_members_never_cluster() {
    let artifact_ids = ids(&["gladiators_finale", "berserker", "shimenawas_reminiscence"]);
    let texts = effects(&[
        ("gladiators_finale", "ATK +18%.", "攻击力提高18%。"),
        ("berserker", "ATK +18%.", "攻击力提高18%。"),
        ("shimenawas_reminiscence", "ATK +18%.", "攻击力提高18%。"),
    ]);
    let skip_list: SkipList = ["berserker"].into_iter().collect();

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &skip_list).unwrap();
    assert_eq!(half_sets.len(), 1);
    assert_eq!(
        half_sets[0].member_ids,
        vec!["shimenawas_reminiscence", "gladiators_finale"]
    );
    assert!(half_sets.iter().all(|hs| !hs.contains("berserker")));
}

#[test]
fn test_either_language_joins_half_set() {
    let artifact_ids = ids(&["later", "earlier"]);
    let texts = effects(&[
        // English wording differs, Chinese matches
        ("later", "Energy Recharge increased by 20%", "元素充能效率提高20%"),
        ("earlier", "Energy Recharge +20%.", "元素充能效率提高20%。"),
    ]);

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets.len(), 1);
    assert_eq!(half_sets[0].member_ids, vec!["earlier", "later"]);
    assert_eq!(half_sets[0].canonical_text_primary, "Energy Recharge +20%");
}

#[test]
fn test_canonical_text_shrinks_per_language() {
    let artifact_ids = ids(&["newer", "older"]);
    let texts = effects(&[
        ("newer", "Healing Bonus +15%", "治疗加成提高15%"),
        ("older", "Healing Bonus +15%.", "角色治疗加成提高15%。"),
    ]);

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets.len(), 1);
    // Chinese shrinks to the shorter variant, English is unchanged
    assert_eq!(half_sets[0].canonical_text(Language::Zh), "治疗加成提高15%");
    assert_eq!(half_sets[0].canonical_text(Language::En), "Healing Bonus +15%");
}

#[test]
fn test_equal_length_keeps_existing_text() {
    let artifact_ids = ids(&["b", "a"]);
    let texts = effects(&[
        ("b", "ATK +18%", "攻击力提升18%"),
        ("a", "ATK +18%", "攻击力提高18%"),
    ]);

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets[0].canonical_text_secondary, "攻击力提高18%");
}

#[test]
fn test_incomplete_effects_are_left_out() {
    let artifact_ids = ids(&["no_zh", "missing", "complete"]);
    let mut texts = effects(&[("complete", "HP +20%", "生命值提高20%")]);
    texts.insert(
        "no_zh".to_string(),
        EffectTexts::new(vec!["HP +20%".to_string()], Vec::new()),
    );

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets.len(), 1);
    assert_eq!(half_sets[0].member_ids, vec!["complete"]);
}

#[test]
fn test_placeholder_text_matches_like_any_text() {
    let artifact_ids = ids(&["fresh_b", "fresh_a"]);
    let texts = effects(&[
        ("fresh_a", "Anemo DMG Bonus +15%", SENTINEL),
        ("fresh_b", "Geo DMG Bonus +15%", SENTINEL),
    ]);

    // Different English text, but the shared Chinese text joins them
    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets.len(), 1);
    assert_eq!(half_sets[0].member_ids, vec!["fresh_a", "fresh_b"]);
    assert_eq!(half_sets[0].canonical_text(Language::En), "Geo DMG Bonus +15%");
    assert_eq!(half_sets[0].canonical_text(Language::Zh), SENTINEL);
}

#[test]
fn test_placeholder_text_is_kept_while_shortest() {
    let artifact_ids = ids(&["later", "placeholder", "real"]);
    let texts = effects(&[
        ("real", "ATK +18%", "攻击力提高18%"),
        ("placeholder", "ATK +18%", SENTINEL),
        ("later", "ATK +18%", "攻击力提高18%"),
    ]);

    let half_sets = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(half_sets.len(), 1);
    assert_eq!(half_sets[0].member_ids, vec!["real", "placeholder", "later"]);
    // The shorter placeholder wins and a longer text never replaces it
    assert_eq!(half_sets[0].canonical_text(Language::Zh), SENTINEL);
}

#[test]
fn test_clustering_is_deterministic() {
    let artifact_ids = ids(&["d", "c", "b", "a"]);
    let texts = effects(&[
        ("a", "ATK +18%", "攻击力提高18%"),
        ("b", "HP +20%", "生命值提高20%"),
        ("c", "ATK +18%.", "攻击力提高18%。"),
        ("d", "Increase by 20% HP", "生命值提高20%"),
    ]);

    let first = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    let second = cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let artifact_ids = ids(&["a", "a"]);
    let texts = effects(&[("a", "ATK +18%", "攻击力提高18%")]);
    assert!(cluster_half_sets(&artifact_ids, &texts, &SkipList::new()).is_err());
}
