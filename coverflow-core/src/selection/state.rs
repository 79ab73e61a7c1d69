//! Selection state values

use serde::Serialize;

/// Canonical selection: committed index plus resting and transient offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SelectionState {
    /// `None` exactly when the dataset is empty.
    pub current_index: Option<usize>,
    /// Resting offset, always `current_index * stride` between gestures.
    pub scroll_offset: f32,
    /// Transient offset applied while a drag is in progress.
    pub drag_offset: f32,
}

impl SelectionState {
    /// Offset the renderer should draw at right now.
    #[inline]
    pub fn live_offset(&self) -> f32 {
        self.scroll_offset + self.drag_offset
    }
}

/// Result of committing a carousel drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCommit {
    pub previous_index: usize,
    pub target_index: usize,
    /// `target - previous`, clamped to the configured bound.
    pub direction_delta: i32,
}

impl DragCommit {
    pub fn changed(&self) -> bool {
        self.previous_index != self.target_index
    }
}
