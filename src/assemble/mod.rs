//! Canonical record assembly.
//!
//! Turns matched pairs into the records and translation tables written to the
//! generated data modules. The primary-language side supplies every
//! language-invariant value and the identifier.

pub mod artifacts;
pub mod characters;
pub mod types;
pub mod weapons;

pub use artifacts::assemble_artifacts;
pub use characters::assemble_characters;
pub use types::*;
pub use weapons::assemble_weapons;

use std::collections::HashSet;
use tracing::{error, warn};

use crate::catalog::{CatalogRecord, EntityKind, Language, MatchedPair};
use crate::ident::generate_id;
use crate::profiles::Corrections;
use crate::TARGET_MATCH;

/// Derive the identifier for a pair, refusing empty or already-used ids.
pub(crate) fn claim_id<R: CatalogRecord>(
    pair: &MatchedPair<R>,
    seen: &mut HashSet<String>,
) -> Option<String> {
    let name = pair.primary.display_name();
    let id = generate_id(name);
    if id.is_empty() {
        error!(
            target: TARGET_MATCH,
            "{} {} has no usable {} name ('{}'), leaving it out",
            R::KIND,
            pair.stable_key(),
            Language::PRIMARY,
            name
        );
        return None;
    }
    if !seen.insert(id.clone()) {
        error!(
            target: TARGET_MATCH,
            "{} {} maps to id '{}' which is already taken, leaving it out",
            R::KIND,
            pair.stable_key(),
            id
        );
        return None;
    }
    Some(id)
}

/// Resolve an unknown (zero) rarity through `corrections`.
///
/// Returns the rarity to use for both slots; an unanswered or out-of-range
/// correction keeps the scraped value.
pub(crate) fn corrected_rarity(
    kind: EntityKind,
    name: &str,
    rarity: u8,
    valid: std::ops::RangeInclusive<u8>,
    corrections: &dyn Corrections,
) -> u8 {
    if rarity != 0 {
        return rarity;
    }
    match corrections.rarity(kind, name) {
        Some(answer) if valid.contains(&answer) => answer,
        Some(answer) => {
            warn!(
                target: TARGET_MATCH,
                "Ignoring rarity {} for {} {} (expected {}-{})",
                answer,
                kind,
                name,
                valid.start(),
                valid.end()
            );
            rarity
        }
        None => {
            warn!(
                target: TARGET_MATCH,
                "Rarity 0 detected for {} {} and no correction available", kind, name
            );
            rarity
        }
    }
}
