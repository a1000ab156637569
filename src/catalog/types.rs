use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language slot of a scraped record.
///
/// English fills the primary slot and Simplified Chinese the secondary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub const PRIMARY: Language = Language::En;
    pub const SECONDARY: Language = Language::Zh;

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    pub fn is_primary(&self) -> bool {
        *self == Self::PRIMARY
    }

    /// The opposite language slot.
    pub fn counterpart(&self) -> Language {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code().to_uppercase())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "en-us" => Ok(Language::En),
            "zh" | "zh-cn" => Ok(Language::Zh),
            other => Err(anyhow!("Unsupported language tag: {}", other)),
        }
    }
}

/// Entity kinds handled by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Character,
    Artifact,
    Weapon,
}

impl EntityKind {
    /// File stem used for snapshots of this kind, e.g. `artifacts`.
    pub fn plural(&self) -> &'static str {
        match self {
            EntityKind::Character => "characters",
            EntityKind::Artifact => "artifacts",
            EntityKind::Weapon => "weapons",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Character => write!(f, "character"),
            EntityKind::Artifact => write!(f, "artifact"),
            EntityKind::Weapon => write!(f, "weapon"),
        }
    }
}

/// Behaviour the matcher needs from every record kind.
pub trait CatalogRecord: Clone + fmt::Debug {
    const KIND: EntityKind;

    /// Language-independent key; empty when the scraper could not find one.
    fn stable_key(&self) -> &str;

    fn display_name(&self) -> &str;

    fn set_display_name(&mut self, name: String);

    /// Replace every effect text with the sentinel, keeping the same cardinality.
    fn blank_effects(&mut self) {}

    /// Describe a disagreement on fields that must not vary between languages.
    fn invariant_mismatch(&self, _other: &Self) -> Option<String> {
        None
    }
}

/// One entity reconciled across both languages.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair<R> {
    pub primary: R,
    pub secondary: R,
    /// Which slot, if any, holds a synthesized placeholder.
    pub placeholder: Option<Language>,
}

impl<R: CatalogRecord> MatchedPair<R> {
    pub fn new(primary: R, secondary: R) -> Self {
        Self {
            primary,
            secondary,
            placeholder: None,
        }
    }

    /// Placeholders are copies of their counterpart, so both slots share the key.
    pub fn stable_key(&self) -> &str {
        self.primary.stable_key()
    }

    pub fn get(&self, language: Language) -> &R {
        if language.is_primary() {
            &self.primary
        } else {
            &self.secondary
        }
    }
}
