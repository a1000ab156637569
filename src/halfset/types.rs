use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::catalog::Language;

/// Bonus texts of one artifact set in both languages, in piece order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTexts {
    #[serde(default)]
    pub en: Vec<String>,
    #[serde(default)]
    pub zh: Vec<String>,
}

impl EffectTexts {
    pub fn new(en: Vec<String>, zh: Vec<String>) -> Self {
        Self { en, zh }
    }

    pub fn get(&self, language: Language) -> &[String] {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }
}

/// Artifact sets sharing an equivalent two-piece bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfSet {
    pub id: u32,
    #[serde(rename = "setIds")]
    pub member_ids: Vec<String>,
    #[serde(rename = "normalizedEffectTextEn")]
    pub canonical_text_primary: String,
    #[serde(rename = "normalizedEffectTextZh")]
    pub canonical_text_secondary: String,
}

impl HalfSet {
    pub fn canonical_text(&self, language: Language) -> &str {
        match language {
            Language::En => &self.canonical_text_primary,
            Language::Zh => &self.canonical_text_secondary,
        }
    }

    pub fn contains(&self, member_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == member_id)
    }
}

/// Artifact ids that never take part in half-set clustering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList(HashSet<String>);

impl SkipList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SkipList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        SkipList(iter.into_iter().map(Into::into).collect())
    }
}
