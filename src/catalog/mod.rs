//! Catalog data model shared by the matcher, the clusterer and the writer.
//!
//! Every entity kind is an explicit record type. The [`CatalogRecord`] trait is
//! the seam the matcher works through: it exposes the stable key, lets the
//! display name be replaced, and knows how to blank the kind's effect text when
//! a placeholder counterpart has to be synthesized.

pub mod records;
pub mod types;

pub use records::*;
pub use types::*;
