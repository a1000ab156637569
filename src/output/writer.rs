use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::info;

use super::types::{GameData, I18nGameData};
use super::{GENERATED_MARKER, I18N_FILE, RESOURCES_FILE};
use crate::TARGET_OUTPUT;

const RESOURCES_IMPORT: &str =
    "import { ArtifactHalfSet, ArtifactSet, Character, Weapon } from './types';\n";

/// Render `resources.ts`.
pub fn render_resources(data: &GameData) -> Result<String> {
    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push('\n');
    out.push_str(RESOURCES_IMPORT);
    out.push('\n');

    export_const(&mut out, "characters", Some("Character[]"), &data.characters)?;
    out.push('\n');
    export_const(&mut out, "artifacts", Some("ArtifactSet[]"), &data.artifacts)?;
    out.push('\n');
    export_const(&mut out, "artifactHalfSets", Some("ArtifactHalfSet[]"), &data.half_sets)?;
    out.push('\n');
    export_const(&mut out, "weapons", Some("Weapon[]"), &data.weapons)?;
    Ok(out)
}

/// Render `i18n-game.ts`.
pub fn render_i18n(i18n: &I18nGameData) -> Result<String> {
    let mut out = String::new();
    out.push_str(GENERATED_MARKER);
    out.push('\n');
    export_const(&mut out, "i18nGameData", None, i18n)?;
    Ok(out)
}

/// Write both modules into `dir`, replacing any previous contents.
pub fn write_modules(dir: &Path, data: &GameData) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let resources_path = dir.join(RESOURCES_FILE);
    fs::write(&resources_path, render_resources(data)?)
        .with_context(|| format!("Failed to write {}", resources_path.display()))?;
    info!(target: TARGET_OUTPUT, "Written resources to {}", resources_path.display());

    let i18n_path = dir.join(I18N_FILE);
    fs::write(&i18n_path, render_i18n(&data.i18n)?)
        .with_context(|| format!("Failed to write {}", i18n_path.display()))?;
    info!(target: TARGET_OUTPUT, "Written i18n data to {}", i18n_path.display());

    Ok(())
}

fn export_const<T: Serialize + ?Sized>(
    out: &mut String,
    name: &str,
    type_name: Option<&str>,
    value: &T,
) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {}", name))?;
    match type_name {
        Some(type_name) => writeln!(out, "export const {}: {} = {};", name, type_name, json)?,
        None => writeln!(out, "export const {} = {};", name, json)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::Localized;
    use crate::halfset::HalfSet;

    #[test]
    fn test_render_resources_layout() {
        let mut data = GameData::default();
        data.set_half_sets(vec![HalfSet {
            id: 9,
            member_ids: vec!["gladiators_finale".to_string()],
            canonical_text_primary: "ATK +18%".to_string(),
            canonical_text_secondary: "攻击力提高18%".to_string(),
        }]);

        let rendered = render_resources(&data).unwrap();
        assert!(rendered.starts_with(GENERATED_MARKER));
        assert!(rendered.contains("export const characters: Character[] = [];\n"));
        assert!(rendered.contains("export const artifactHalfSets: ArtifactHalfSet[] = [\n  {\n    \"id\": 9,"));
        assert!(rendered.contains("\"setIds\": [\n      \"gladiators_finale\"\n    ]"));
        // Chinese text is written as UTF-8, not escaped
        assert!(rendered.contains("攻击力提高18%"));
        assert!(rendered.ends_with("export const weapons: Weapon[] = [];\n"));
    }

    #[test]
    fn test_render_i18n() {
        let mut i18n = I18nGameData::default();
        i18n.characters.insert(
            "furina".to_string(),
            Localized {
                en: "Furina".to_string(),
                zh: "芙宁娜".to_string(),
            },
        );

        let rendered = render_i18n(&i18n).unwrap();
        assert!(rendered.starts_with(GENERATED_MARKER));
        assert!(rendered.contains("export const i18nGameData = {\n  \"characters\": {\n    \"furina\": {"));
        assert!(rendered.contains("\"artifactHalfSets\": {}"));
    }
}
