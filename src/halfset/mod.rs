//! Half-set clustering.
//!
//! Groups artifact sets whose two-piece bonus is equivalent in either
//! language, so the bonus text is presented once per group.

pub mod cluster;
#[cfg(test)]
mod tests;
pub mod types;

pub use cluster::cluster_half_sets;
pub use types::*;
