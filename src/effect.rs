//! Effect text normalization.
//!
//! Bonus descriptions are scraped independently per language and differ in
//! cosmetic ways (terminal punctuation, "Increase by" phrasing). Normalizing
//! them first lets equivalent bonuses compare equal as plain strings.

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::Language;

const EN_TERMINAL: char = '.';
const ZH_TERMINAL: char = '。';

lazy_static! {
    static ref INCREASE_BY: Regex =
        Regex::new(r"(?i)increase by ").expect("increase-by pattern is valid");
}

/// Canonicalize a bonus description for the given language.
///
/// Surrounding whitespace and the terminal full stop are removed. A run of
/// terminal stops is removed as a whole, which keeps the function idempotent.
/// English text additionally has every "increase by " rewritten to `+`.
pub fn normalize_effect_text(text: &str, language: Language) -> String {
    let terminal = match language {
        Language::En => EN_TERMINAL,
        Language::Zh => ZH_TERMINAL,
    };

    let mut normalized = text.trim();
    while let Some(stripped) = normalized.strip_suffix(terminal) {
        normalized = stripped.trim_end();
    }

    match language {
        Language::En => INCREASE_BY.replace_all(normalized, "+").into_owned(),
        Language::Zh => normalized.to_string(),
    }
}
