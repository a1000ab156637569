//! One refresh of the generated data.
//!
//! Each selected entity kind is read in both languages, matched, assembled
//! and swapped into the previously generated data; kinds that were not
//! selected are carried over untouched. Half-sets are recomputed from the
//! artifact data whenever artifacts or half-sets are selected.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::assemble::{assemble_artifacts, assemble_characters, assemble_weapons};
use crate::catalog::{
    ArtifactRecord, CatalogRecord, CharacterRecord, Language, MatchedPair, WeaponRecord,
};
use crate::config::SyncConfig;
use crate::halfset::cluster_half_sets;
use crate::matching::{EntityMatcher, MatchIssue, NameResolver};
use crate::output::GameData;
use crate::profiles::{Corrections, ProfileTable};
use crate::source::RecordSource;
use crate::{TARGET_HALFSET, TARGET_MATCH};

/// Which parts of the data to refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub characters: bool,
    pub weapons: bool,
    pub artifacts: bool,
    pub half_sets: bool,
}

impl Selection {
    pub fn all() -> Self {
        Self {
            characters: true,
            weapons: true,
            artifacts: true,
            half_sets: true,
        }
    }

    /// Selection from command line flags; no flag at all means everything.
    pub fn from_flags(characters: bool, weapons: bool, artifacts: bool, half_sets: bool) -> Self {
        if !(characters || weapons || artifacts || half_sets) {
            return Self::all();
        }
        Self {
            characters,
            weapons,
            artifacts,
            half_sets,
        }
    }

    fn recluster(&self) -> bool {
        self.artifacts || self.half_sets
    }
}

/// Inputs shared by every stage of a run.
pub struct SyncContext<'a> {
    pub config: &'a SyncConfig,
    pub profiles: &'a ProfileTable,
    pub corrections: &'a dyn Corrections,
    pub resolver: Option<&'a dyn NameResolver>,
    pub today: NaiveDate,
}

/// What a run changed and what it found along the way.
#[derive(Debug, Default)]
pub struct SyncReport {
    pub issues: Vec<MatchIssue>,
    pub characters: Option<usize>,
    pub weapons: Option<usize>,
    pub artifacts: Option<usize>,
    pub half_sets: Option<usize>,
}

impl SyncReport {
    pub fn mismatch_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| matches!(issue, MatchIssue::ConsistencyMismatch { .. }))
            .count()
    }
}

/// Refresh the selected parts of `data` from `source`.
pub fn run_sync<S: RecordSource>(
    source: &S,
    mut data: GameData,
    selection: Selection,
    ctx: &SyncContext<'_>,
) -> Result<(GameData, SyncReport)> {
    let mut matcher = EntityMatcher::new();
    if let Some(resolver) = ctx.resolver {
        matcher = matcher.with_resolver(resolver);
    }
    let mut report = SyncReport::default();

    if selection.characters {
        let pairs = match_kind::<CharacterRecord, _>(source, &matcher, &mut report)?;
        let assembled = assemble_characters(pairs, ctx.profiles, ctx.corrections, ctx.today);
        report.characters = Some(assembled.records.len());
        data.characters = assembled.records;
        data.i18n.characters = assembled.i18n;
    }

    if selection.weapons {
        let pairs = match_kind::<WeaponRecord, _>(source, &matcher, &mut report)?;
        let assembled = assemble_weapons(pairs, ctx.corrections);
        report.weapons = Some(assembled.records.len());
        data.weapons = assembled.records;
        data.i18n.weapons = assembled.i18n;
    }

    if selection.artifacts {
        let pairs = match_kind::<ArtifactRecord, _>(source, &matcher, &mut report)?;
        let assembled = assemble_artifacts(pairs, ctx.config);
        report.artifacts = Some(assembled.records.len());
        data.artifacts = assembled.records;
        data.i18n.artifacts = assembled.i18n;
    }

    if selection.recluster() {
        if data.artifacts.is_empty() {
            warn!(
                target: TARGET_HALFSET,
                "No artifact data available, keeping {} existing half-sets",
                data.half_sets.len()
            );
        } else {
            let (ids, effects) = data.half_set_inputs();
            let half_sets = cluster_half_sets(&ids, &effects, &ctx.config.skip_list)
                .context("Failed to cluster artifact half-sets")?;
            report.half_sets = Some(half_sets.len());
            data.set_half_sets(half_sets);
        }
    }

    info!(
        target: TARGET_MATCH,
        "Sync finished with {} issues ({} mismatches)",
        report.issues.len(),
        report.mismatch_count()
    );
    Ok((data, report))
}

fn match_kind<R, S>(
    source: &S,
    matcher: &EntityMatcher<'_>,
    report: &mut SyncReport,
) -> Result<Vec<MatchedPair<R>>>
where
    R: CatalogRecord + DeserializeOwned,
    S: RecordSource,
{
    let primary: Vec<R> = source.records(Language::PRIMARY)?;
    let secondary: Vec<R> = source.records(Language::SECONDARY)?;
    let outcome = matcher
        .match_records(&primary, &secondary)
        .with_context(|| format!("Failed to match {} records", R::KIND))?;

    info!(
        target: TARGET_MATCH,
        "Matched {} {} pairs ({} placeholders, {} mismatches)",
        outcome.pairs.len(),
        R::KIND,
        outcome.placeholder_count(),
        outcome.mismatch_count()
    );
    report.issues.extend(outcome.issues);
    Ok(outcome.pairs)
}
