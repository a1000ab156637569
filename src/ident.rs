use unicode_normalization::UnicodeNormalization;

/// Generate a URL- and file-safe identifier from a display name.
///
/// Accents are folded away, spaces become underscores and anything outside
/// `[a-z0-9_]` is dropped, so "Gladiator's Finale" becomes `gladiators_finale`.
pub fn generate_id(name: &str) -> String {
    name.nfkd()
        .collect::<String>()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}
