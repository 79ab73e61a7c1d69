//! SelectionModel: drag-to-offset mapping and snap-to-nearest commits

use std::ops::Range;

use tracing::debug;

use super::state::{DragCommit, SelectionState};
use crate::config::CarouselConfig;
use crate::error::SelectionError;
use crate::geometry::{self, ItemMetrics};

#[derive(Debug, Clone)]
pub struct SelectionModel {
    state: SelectionState,
    album_count: usize,

    // Layout
    metrics: ItemMetrics,
    viewport_width: f32,
    viewport_center: f32,
    overscan: usize,

    // Behavior
    max_direction_delta: i32,
    dragging: bool,
}

impl SelectionModel {
    pub fn new(config: &CarouselConfig, album_count: usize) -> Self {
        let mut model = Self {
            state: SelectionState::default(),
            album_count: 0,
            metrics: config.metrics(),
            viewport_width: config.viewport_width,
            viewport_center: config.resolved_viewport_center(),
            overscan: config.overscan_items,
            max_direction_delta: config.max_direction_delta.max(1),
            dragging: false,
        };
        model.set_album_count(album_count);
        model
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index
    }

    pub fn album_count(&self) -> usize {
        self.album_count
    }

    pub fn metrics(&self) -> ItemMetrics {
        self.metrics
    }

    pub fn viewport_center(&self) -> f32 {
        self.viewport_center
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn live_offset(&self) -> f32 {
        self.state.live_offset()
    }

    /// Update the viewport width used for visible-range computation.
    pub fn set_viewport(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
    }

    /// Pointer moved during a carousel drag. Dragging right moves content
    /// left, so the transient offset is the negated translation.
    pub fn on_drag_changed(&mut self, translation: f32) {
        if self.album_count == 0 {
            return;
        }
        self.dragging = true;
        self.state.drag_offset = -translation;
    }

    /// Pointer released: snap to the nearest item and commit it.
    ///
    /// Returns `None` when there is nothing to select.
    pub fn on_drag_ended(&mut self, translation: f32) -> Option<DragCommit> {
        let previous_index = self.state.current_index?;
        let last = self.album_count.checked_sub(1)?;

        let estimated = self.state.scroll_offset - translation;
        // f32::round breaks exact halves away from zero
        let raw = (estimated / self.metrics.stride()).round();
        let target_index = if raw.is_nan() {
            previous_index
        } else {
            raw.clamp(0.0, last as f32) as usize
        };

        self.commit(target_index);
        self.dragging = false;

        let bound = i64::from(self.max_direction_delta);
        let direction_delta = (target_index as i64 - previous_index as i64)
            .clamp(-bound, bound) as i32;

        debug!(
            previous_index,
            target_index, direction_delta, estimated, "carousel drag committed"
        );

        Some(DragCommit {
            previous_index,
            target_index,
            direction_delta,
        })
    }

    /// Strict programmatic jump. Callers are expected to pass an index that
    /// is already in range; on failure the state is left untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SelectionError> {
        if self.album_count == 0 {
            return Err(SelectionError::EmptyDataset);
        }
        if index >= self.album_count {
            return Err(SelectionError::InvalidIndex {
                index,
                count: self.album_count,
            });
        }
        self.commit(index);
        self.dragging = false;
        Ok(())
    }

    /// Jump for externally injected indices: clamp into range instead of
    /// failing. Returns the committed index, or `None` when empty.
    pub fn jump_to_clamped(&mut self, index: usize) -> Option<usize> {
        let last = self.album_count.checked_sub(1)?;
        let index = index.min(last);
        self.commit(index);
        self.dragging = false;
        Some(index)
    }

    /// Dataset replaced: re-clamp the selection against the new count.
    pub fn set_album_count(&mut self, count: usize) {
        self.album_count = count;
        self.dragging = false;
        match count.checked_sub(1) {
            None => {
                self.state = SelectionState::default();
            }
            Some(last) => {
                let index = self.state.current_index.unwrap_or(0).min(last);
                self.commit(index);
            }
        }
    }

    /// Focus distance of `index` against the live offset.
    pub fn focus_distance(&self, index: usize) -> f32 {
        geometry::focus_distance(
            index,
            self.live_offset(),
            self.viewport_center,
            self.metrics,
        )
    }

    /// Items intersecting the viewport (plus overscan) at the live offset.
    pub fn visible_range(&self) -> Range<usize> {
        geometry::visible_range(
            self.live_offset(),
            self.viewport_width,
            self.viewport_center,
            self.metrics,
            self.album_count,
            self.overscan,
        )
    }

    fn commit(&mut self, index: usize) {
        self.state = SelectionState {
            current_index: Some(index),
            scroll_offset: self.metrics.rest_offset(index),
            drag_offset: 0.0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(count: usize) -> SelectionModel {
        let config = CarouselConfig {
            item_width: 200.0,
            item_spacing: 4.0,
            ..CarouselConfig::default()
        };
        SelectionModel::new(&config, count)
    }

    #[test]
    fn starts_at_first_album() {
        let m = model(5);
        assert_eq!(m.current_index(), Some(0));
        assert_eq!(m.state().scroll_offset, 0.0);
        assert_eq!(model(0).current_index(), None);
    }

    #[test]
    fn drag_changes_are_transient() {
        let mut m = model(5);
        m.on_drag_changed(-80.0);
        assert!(m.is_dragging());
        assert_eq!(m.state().drag_offset, 80.0);
        assert_eq!(m.live_offset(), 80.0);
        assert_eq!(m.current_index(), Some(0));
    }

    #[test]
    fn drag_of_minus_150_commits_second_album() {
        let mut m = model(10);
        let commit = m.on_drag_ended(-150.0).expect("non-empty");
        assert_eq!(commit.target_index, 1);
        assert_eq!(commit.direction_delta, 1);
        assert_eq!(m.current_index(), Some(1));
        assert_eq!(m.state().scroll_offset, 204.0);
        assert_eq!(m.state().drag_offset, 0.0);
        assert!(!m.is_dragging());
    }

    #[test]
    fn drag_to_item_centre_commits_that_item() {
        for k in 0..12usize {
            let mut m = model(12);
            m.on_drag_ended(-(k as f32 * 204.0));
            assert_eq!(m.current_index(), Some(k));
        }
    }

    #[test]
    fn exact_half_rounds_away_from_zero() {
        // From rest 0, half a stride left wins the next album
        let mut m = model(4);
        m.on_drag_ended(-102.0);
        assert_eq!(m.current_index(), Some(1));

        // From album 1, half a stride right keeps album 1 (0.5 rounds up)
        let mut m = model(4);
        m.jump_to(1).expect("in range");
        m.on_drag_ended(102.0);
        assert_eq!(m.current_index(), Some(1));

        // From album 2, one and a half strides right lands on album 1
        let mut m = model(4);
        m.jump_to(2).expect("in range");
        m.on_drag_ended(306.0);
        assert_eq!(m.current_index(), Some(1));
    }

    #[test]
    fn overscrolling_clamps_to_either_end() {
        let mut m = model(6);
        m.jump_to(3).expect("in range");
        let commit = m.on_drag_ended(10_000.0).expect("non-empty");
        assert_eq!(commit.target_index, 0);

        let commit = m.on_drag_ended(-10_000.0).expect("non-empty");
        assert_eq!(commit.target_index, 5);
        assert_eq!(m.state().scroll_offset, 5.0 * 204.0);
    }

    #[test]
    fn direction_delta_is_bounded() {
        let mut m = model(40);
        let commit = m.on_drag_ended(-20.0 * 204.0).expect("non-empty");
        assert_eq!(commit.target_index, 20);
        assert_eq!(commit.direction_delta, 5);

        let commit = m.on_drag_ended(12.0 * 204.0).expect("non-empty");
        assert_eq!(commit.target_index, 8);
        assert_eq!(commit.direction_delta, -5);
    }

    #[test]
    fn jump_to_is_idempotent() {
        let mut m = model(8);
        m.jump_to(6).expect("in range");
        let first = m.state();
        m.jump_to(6).expect("in range");
        assert_eq!(m.state(), first);
    }

    #[test]
    fn jump_to_rejects_out_of_range_without_mutating() {
        let mut m = model(3);
        m.jump_to(2).expect("in range");
        let before = m.state();
        assert_eq!(
            m.jump_to(3),
            Err(SelectionError::InvalidIndex { index: 3, count: 3 })
        );
        assert_eq!(m.state(), before);
    }

    #[test]
    fn jump_to_clamped_keeps_state_valid() {
        let mut m = model(3);
        assert_eq!(m.jump_to_clamped(99), Some(2));
        assert_eq!(m.current_index(), Some(2));
        assert_eq!(model(0).jump_to_clamped(1), None);
    }

    #[test]
    fn empty_dataset_operations_are_noops() {
        let mut m = model(0);
        m.on_drag_changed(-40.0);
        assert_eq!(m.state(), SelectionState::default());
        assert_eq!(m.on_drag_ended(-40.0), None);
        assert_eq!(m.jump_to(0), Err(SelectionError::EmptyDataset));
        assert_eq!(m.visible_range(), 0..0);
    }

    #[test]
    fn dataset_replacement_reclamps_selection() {
        let mut m = model(20);
        m.jump_to(15).expect("in range");
        m.on_drag_changed(-30.0);

        m.set_album_count(10);
        assert_eq!(m.current_index(), Some(9));
        assert_eq!(m.state().scroll_offset, 9.0 * 204.0);
        assert_eq!(m.state().drag_offset, 0.0);

        m.set_album_count(0);
        assert_eq!(m.current_index(), None);

        m.set_album_count(4);
        assert_eq!(m.current_index(), Some(0));
    }
}
