use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use gamedex::config::SyncConfig;
use gamedex::logging::configure_logging;
use gamedex::matching::{NameResolver, NameTable};
use gamedex::output::{load_existing, write_modules};
use gamedex::profiles::{CorrectionTable, Corrections, NoCorrections, ProfileTable};
use gamedex::source::SnapshotDir;
use gamedex::sync::{run_sync, Selection, SyncContext};

/// Rebuild the bilingual game catalog from scraped snapshots.
///
/// Without any of the selection flags every part is refreshed.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Refresh characters
    #[arg(short, long)]
    character: bool,

    /// Refresh weapons
    #[arg(short, long)]
    weapon: bool,

    /// Refresh artifact sets (implies half-sets)
    #[arg(short, long)]
    artifact: bool,

    /// Recompute artifact half-sets from the current artifact data
    #[arg(long)]
    half_set: bool,

    /// Directory holding `{kind}.{lang}.json` snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Directory receiving the generated modules
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Name table used for records missing in one language
    #[arg(long)]
    names: Option<PathBuf>,

    /// Character profiles (weapon type, region, release date)
    #[arg(long)]
    profiles: Option<PathBuf>,

    /// Corrections for values the scrape could not determine
    #[arg(long)]
    corrections: Option<PathBuf>,
}

fn main() -> Result<()> {
    configure_logging();
    let cli = Cli::parse();

    let mut config = SyncConfig::from_env();
    if let Some(dir) = cli.snapshot_dir {
        config = config.with_snapshot_dir(dir);
    }
    if let Some(dir) = cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let selection = Selection::from_flags(cli.character, cli.weapon, cli.artifact, cli.half_set);
    info!("Refreshing {:?}", selection);

    let names = cli.names.as_deref().map(NameTable::load).transpose()?;
    let profiles = match cli.profiles.as_deref() {
        Some(path) => ProfileTable::load(path)?,
        None => ProfileTable::default(),
    };
    if selection.characters && profiles.is_empty() {
        warn!("No character profiles available, characters get default details");
    }
    let corrections: Box<dyn Corrections> = match cli.corrections.as_deref() {
        Some(path) => Box::new(CorrectionTable::load(path)?),
        None => Box::new(NoCorrections),
    };

    let ctx = SyncContext {
        config: &config,
        profiles: &profiles,
        corrections: corrections.as_ref(),
        resolver: names.as_ref().map(|table| table as &dyn NameResolver),
        today: Local::now().date_naive(),
    };

    let existing = load_existing(&config.output_dir).with_context(|| {
        format!(
            "Failed to load existing data from {}",
            config.output_dir.display()
        )
    })?;
    let source = SnapshotDir::new(&config.snapshot_dir);
    let (data, report) = run_sync(&source, existing, selection, &ctx)?;

    for issue in &report.issues {
        warn!("{}", issue);
    }
    write_modules(&config.output_dir, &data)?;

    info!(
        "Done: {} characters, {} artifacts, {} half-sets, {} weapons",
        data.characters.len(),
        data.artifacts.len(),
        data.half_sets.len(),
        data.weapons.len()
    );
    Ok(())
}
