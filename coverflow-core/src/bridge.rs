//! Cross-sync bridge between the carousel selection and the scrubber bar
//!
//! Neither model owns the other. The bridge is handed both by the screen
//! controller for the duration of a call and owns only the screen-scoped
//! notification channel that renderers subscribe to.

use std::time::Instant;

use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, trace, warn};

use crate::scrubber::ScrubberWindow;
use crate::selection::{DragCommit, SelectionModel};

/// Default buffered events per subscriber before lagging.
const EVENT_CAPACITY: usize = 64;

/// Which input produced a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrigin {
    Carousel,
    Scrubber,
    External,
}

/// "Jump to index" notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionEvent {
    pub index: usize,
    pub origin: SelectionOrigin,
}

#[derive(Debug, Clone)]
pub struct CrossSyncBridge {
    events: broadcast::Sender<SelectionEvent>,
}

impl Default for CrossSyncBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossSyncBridge {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        Self { events }
    }

    /// Receive every committed selection change made through this bridge.
    pub fn subscribe(&self) -> broadcast::Receiver<SelectionEvent> {
        self.events.subscribe()
    }

    /// Carousel → scrubber: follow the committed index and lean the
    /// highlight in the direction of travel.
    pub fn carousel_committed(
        &self,
        commit: DragCommit,
        scrubber: &mut ScrubberWindow,
        now: Instant,
    ) {
        scrubber.sync_selection(Some(commit.target_index));
        scrubber.lean(commit.direction_delta, now);
        if commit.changed() {
            self.emit(SelectionEvent {
                index: commit.target_index,
                origin: SelectionOrigin::Carousel,
            });
        }
    }

    /// Scrubber → carousel: jump immediately to the album under the pointer.
    /// Runs on every slot selection, not only on release.
    pub fn scrubber_selected(
        &self,
        album_index: Option<usize>,
        selection: &mut SelectionModel,
        scrubber: &mut ScrubberWindow,
    ) -> Option<usize> {
        let album_index = album_index?;
        let previous = selection.current_index();
        if let Err(err) = selection.jump_to(album_index) {
            warn!(album_index, %err, "scrubber selected an unusable album");
            return None;
        }
        scrubber.sync_selection(selection.current_index());

        if previous != Some(album_index) {
            debug!(album_index, "scrubber moved selection");
            self.emit(SelectionEvent {
                index: album_index,
                origin: SelectionOrigin::Scrubber,
            });
        }
        Some(album_index)
    }

    /// Externally injected jump; clamped into range rather than rejected.
    pub fn external_jump(
        &self,
        index: usize,
        selection: &mut SelectionModel,
        scrubber: &mut ScrubberWindow,
    ) -> Option<usize> {
        let previous = selection.current_index();
        let Some(committed) = selection.jump_to_clamped(index) else {
            debug!(index, "jump ignored, no albums loaded");
            return None;
        };
        if committed != index {
            warn!(requested = index, committed, "jump index clamped");
        }
        scrubber.sync_selection(Some(committed));

        if previous != Some(committed) {
            self.emit(SelectionEvent {
                index: committed,
                origin: SelectionOrigin::External,
            });
        }
        Some(committed)
    }

    fn emit(&self, event: SelectionEvent) {
        if self.events.send(event).is_err() {
            trace!(?event, "no selection subscribers");
        }
    }
}
