//! Generated data modules.
//!
//! The frontend imports the catalog from two TypeScript modules that are
//! re-written in full on every run: `resources.ts` with the records and
//! half-sets, and `i18n-game.ts` with every translated string.

pub mod existing;
pub mod types;
pub mod writer;

pub use existing::{load_existing, parse_generated};
pub use types::*;
pub use writer::{render_i18n, render_resources, write_modules};

pub const RESOURCES_FILE: &str = "resources.ts";
pub const I18N_FILE: &str = "i18n-game.ts";

pub const GENERATED_MARKER: &str =
    "// This file is auto-generated by gamedex\n// Do not edit this file directly\n";
