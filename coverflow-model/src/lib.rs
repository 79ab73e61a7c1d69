//! Core data model definitions shared across the cover flow crates.
#![allow(missing_docs)]

pub mod album;
pub mod error;
pub mod ids;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use album::{AlbumRecord, CoverRef};
pub use error::{ModelError, Result as ModelResult};
pub use ids::AlbumId;
