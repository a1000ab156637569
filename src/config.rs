use std::path::PathBuf;
use tracing::{info, warn};

use crate::environment::{get_env_var_as_vec, get_env_var_or};
use crate::halfset::SkipList;

/// Starter and low-rarity sets whose two-piece bonus is not worth grouping.
pub const DEFAULT_HALFSET_SKIP_LIST: &[&str] = &[
    "adventurer",
    "brave_heart",
    "lucky_dog",
    "traveling_doctor",
    "resolution_of_sojourner",
    "tiny_miracle",
    "berserker",
    "the_exile",
    "defenders_will",
    "martial_artist",
    "gambler",
    "scholar",
];

/// Artifact sets that top out at four stars, by English name.
pub const DEFAULT_RARITY_FOUR_ARTIFACTS: &[&str] = &["Instructor"];

/// Artifact slots and the image file suffix used for each.
pub const ARTIFACT_SLOTS: &[(&str, &str)] = &[
    ("flower", ""),
    ("plume", "2"),
    ("sands", "3"),
    ("goblet", "4"),
    ("circlet", "5"),
];

pub const DEFAULT_SNAPSHOT_DIR: &str = "snapshots";
pub const DEFAULT_OUTPUT_DIR: &str = "src/data";

/// Configuration for one sync run, passed explicitly into the pipeline.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub skip_list: SkipList,
    pub rarity_four_artifacts: Vec<String>,
    pub snapshot_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            skip_list: DEFAULT_HALFSET_SKIP_LIST.iter().copied().collect(),
            rarity_four_artifacts: DEFAULT_RARITY_FOUR_ARTIFACTS
                .iter()
                .map(|name| name.to_string())
                .collect(),
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl SyncConfig {
    /// Defaults overridden by `GAMEDEX_*` environment variables.
    ///
    /// - `GAMEDEX_HALFSET_SKIP`: `;`-separated artifact ids
    /// - `GAMEDEX_RARITY4_ARTIFACTS`: `;`-separated English set names
    /// - `GAMEDEX_SNAPSHOT_DIR`, `GAMEDEX_OUTPUT_DIR`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let skip_list: SkipList = match get_env_var_as_vec("GAMEDEX_HALFSET_SKIP", ';') {
            Some(ids) => ids.into_iter().collect(),
            None => defaults.skip_list,
        };
        if skip_list.is_empty() {
            warn!("Half-set skip list is empty, every artifact set will be clustered");
        } else {
            info!("Half-set skip list has {} ids", skip_list.len());
        }

        let rarity_four_artifacts = get_env_var_as_vec("GAMEDEX_RARITY4_ARTIFACTS", ';')
            .unwrap_or(defaults.rarity_four_artifacts);

        Self {
            skip_list,
            rarity_four_artifacts,
            snapshot_dir: PathBuf::from(get_env_var_or(
                "GAMEDEX_SNAPSHOT_DIR",
                DEFAULT_SNAPSHOT_DIR,
            )),
            output_dir: PathBuf::from(get_env_var_or("GAMEDEX_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
        }
    }

    pub fn with_snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = dir.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
