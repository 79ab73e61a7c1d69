//! Carousel selection model
//!
//! Owns the canonical current index and the continuous scroll offset of the
//! cover flow. Drags only move a transient offset; the index is committed on
//! release by snapping to the nearest item.

pub mod model;
pub mod state;

pub use model::SelectionModel;
pub use state::{DragCommit, SelectionState};
