pub mod assemble;
pub mod catalog;
pub mod config;
pub mod effect;
pub mod environment;
pub mod halfset;
pub mod ident;
pub mod logging;
pub mod matching;
pub mod output;
pub mod profiles;
pub mod source;
pub mod sync;

pub const TARGET_MATCH: &str = "match";
pub const TARGET_HALFSET: &str = "halfset";
pub const TARGET_OUTPUT: &str = "output";
pub const TARGET_SOURCE: &str = "source";

/// Placeholder text carried by synthesized records in place of scraped text.
pub const SENTINEL: &str = "???";
