//! Engine/UI focused snapshot of the model surface.
//! Prefer importing from this module when wiring presentation layers.

pub use super::album::{AlbumRecord, CoverRef};
pub use super::error::ModelError;
pub use super::ids::AlbumId;
