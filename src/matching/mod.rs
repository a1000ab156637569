pub mod core;
pub mod resolver;
pub mod types;

pub use self::core::{processing_order, EntityMatcher};
pub use self::resolver::{NameResolver, NameTable};
pub use self::types::*;
