//! Cover flow screen controller
//!
//! Owns the album dataset, the two sibling models and the bridge that
//! couples them. Every transition happens synchronously inside
//! [`CoverFlowController::update`]; the host supplies the clock.

pub mod frame;
pub mod messages;

use std::sync::Arc;
use std::time::Instant;

use coverflow_model::AlbumRecord;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::bridge::{CrossSyncBridge, SelectionEvent};
use crate::catalog::DatasetUpdate;
use crate::config::{ConfigError, EngineConfig};
use crate::scrubber::{ScrubberPhase, ScrubberWindow};
use crate::selection::SelectionModel;

pub use frame::{FocusFrame, ItemFocus, ScrubberFrame};
pub use messages::{CoverFlowMessage, GestureEvent, GesturePhase};

/// Availability of the album sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetStatus {
    #[default]
    Loading,
    Ready,
    /// Last fetch failed; carries the collaborator's description.
    Unavailable(String),
}

/// What changed during one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateOutcome {
    pub selection_changed: bool,
    /// The host should keep sending [`CoverFlowMessage::Tick`].
    pub animating: bool,
}

#[derive(Debug)]
pub struct CoverFlowController {
    config: EngineConfig,
    albums: Arc<[AlbumRecord]>,
    status: DatasetStatus,
    selection: SelectionModel,
    scrubber: ScrubberWindow,
    bridge: CrossSyncBridge,
}

impl CoverFlowController {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let selection = SelectionModel::new(&config.carousel, 0);
        let scrubber = ScrubberWindow::new(config.scrubber, 0, None);
        Ok(Self {
            config,
            albums: Arc::from(Vec::<AlbumRecord>::new()),
            status: DatasetStatus::Loading,
            selection,
            scrubber,
            bridge: CrossSyncBridge::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn albums(&self) -> &[AlbumRecord] {
        &self.albums
    }

    pub fn dataset_status(&self) -> &DatasetStatus {
        &self.status
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn scrubber(&self) -> &ScrubberWindow {
        &self.scrubber
    }

    pub fn selected_album(&self) -> Option<&AlbumRecord> {
        self.selection
            .current_index()
            .and_then(|index| self.albums.get(index))
    }

    /// Subscribe to "jump to index" notifications for this screen.
    pub fn subscribe(&self) -> broadcast::Receiver<SelectionEvent> {
        self.bridge.subscribe()
    }

    pub fn update(
        &mut self,
        message: CoverFlowMessage,
        now: Instant,
    ) -> UpdateOutcome {
        let before = self.selection.current_index();

        match message {
            CoverFlowMessage::CarouselGesture(event) => {
                self.handle_carousel_gesture(event, now)
            }
            CoverFlowMessage::ScrubberGesture(event) => {
                self.handle_scrubber_gesture(event, now)
            }
            CoverFlowMessage::JumpTo(index) => {
                self.bridge.external_jump(
                    index,
                    &mut self.selection,
                    &mut self.scrubber,
                );
            }
            CoverFlowMessage::Tick => {
                self.scrubber.tick(now);
            }
            CoverFlowMessage::DatasetReplaced(update) => {
                self.replace_dataset(update)
            }
            CoverFlowMessage::ViewportResized(width) => {
                self.selection.set_viewport(width);
            }
        }

        UpdateOutcome {
            selection_changed: self.selection.current_index() != before,
            animating: !matches!(
                self.scrubber.phase(),
                ScrubberPhase::Idle
            ),
        }
    }

    fn handle_carousel_gesture(&mut self, event: GestureEvent, now: Instant) {
        match event.phase {
            GesturePhase::Begin | GesturePhase::Change => {
                self.selection.on_drag_changed(event.value)
            }
            GesturePhase::End => {
                if let Some(commit) = self.selection.on_drag_ended(event.value)
                {
                    self.bridge.carousel_committed(
                        commit,
                        &mut self.scrubber,
                        now,
                    );
                }
            }
        }
    }

    fn handle_scrubber_gesture(&mut self, event: GestureEvent, now: Instant) {
        let album = match event.phase {
            GesturePhase::Begin => self.scrubber.pointer_down(event.value, now),
            GesturePhase::Change | GesturePhase::End => {
                self.scrubber.pointer_moved(event.value)
            }
        };
        self.bridge
            .scrubber_selected(album, &mut self.selection, &mut self.scrubber);

        if event.phase == GesturePhase::End {
            self.scrubber.pointer_up(now);
        }
    }

    fn replace_dataset(&mut self, update: DatasetUpdate) {
        match update {
            DatasetUpdate::Replaced(albums) => {
                info!(count = albums.len(), "album dataset replaced");
                self.albums = albums;
                self.status = DatasetStatus::Ready;
            }
            DatasetUpdate::Unavailable(reason) => {
                warn!(%reason, "album dataset unavailable");
                self.albums = Arc::from(Vec::<AlbumRecord>::new());
                self.status = DatasetStatus::Unavailable(reason);
            }
        }

        let count = self.albums.len();
        self.selection.set_album_count(count);
        self.scrubber
            .set_album_count(count, self.selection.current_index());
        debug!(
            count,
            current_index = ?self.selection.current_index(),
            first_album_index = self.scrubber.first_album_index(),
            "selection re-clamped"
        );
    }

    /// Visual parameters for the items currently in view.
    pub fn focus_frame(&self) -> FocusFrame {
        let style = &self.config.focus;
        let side = self.config.carousel.item_width.round().max(1.0) as u32;
        let items = self
            .selection
            .visible_range()
            .filter_map(|index| {
                let album = self.albums.get(index)?;
                Some(ItemFocus {
                    index,
                    album_id: album.id,
                    cover_url: album
                        .cover_ref
                        .sized(side, side)
                        .ok()
                        .map(String::from),
                    visual: style
                        .visual_for(self.selection.focus_distance(index)),
                })
            })
            .collect();

        FocusFrame {
            current_index: self.selection.current_index(),
            live_offset: self.selection.live_offset(),
            items,
        }
    }

    pub fn scrubber_frame(&self) -> ScrubberFrame {
        ScrubberFrame {
            phase: self.scrubber.phase(),
            first_album_index: self.scrubber.first_album_index(),
            highlight: self.scrubber.highlight(),
            highlight_slot: self.scrubber.highlight_slot(),
            slots: self.scrubber.slots(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogClient, StaticCatalog};

    async fn loaded(count: usize) -> CoverFlowController {
        let mut controller =
            CoverFlowController::new(EngineConfig::default()).expect("config");
        let albums = StaticCatalog::sample(count)
            .fetch_albums()
            .await
            .expect("static catalog");
        controller.update(
            CoverFlowMessage::DatasetReplaced(DatasetUpdate::Replaced(
                albums.into(),
            )),
            Instant::now(),
        );
        controller
    }

    #[test]
    fn starts_loading_and_empty() {
        let controller =
            CoverFlowController::new(EngineConfig::default()).expect("config");
        assert_eq!(controller.dataset_status(), &DatasetStatus::Loading);
        assert_eq!(controller.selected_album(), None);
        assert!(controller.focus_frame().items.is_empty());
        assert!(controller.scrubber_frame().slots.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.scrubber.slot_count = 0;
        assert!(matches!(
            CoverFlowController::new(config),
            Err(ConfigError::NoSlots)
        ));
    }

    #[tokio::test]
    async fn focus_frame_centres_current_album() {
        let controller = loaded(12).await;
        let frame = controller.focus_frame();
        let current = frame
            .items
            .iter()
            .find(|item| item.index == 0)
            .expect("current item visible");
        assert_eq!(current.visual.distance, 0.0);
        assert!(current.visual.is_focused);
        assert!(frame.items.iter().all(|item| item.index < 12));
        assert_eq!(
            current.cover_url.as_deref(),
            Some("https://covers.example.com/0/200x200.jpg")
        );
    }

    #[tokio::test]
    async fn fetch_failure_degrades_to_empty() {
        let mut controller = loaded(12).await;
        controller.update(
            CoverFlowMessage::JumpTo(7),
            Instant::now(),
        );
        controller.update(
            CoverFlowMessage::DatasetReplaced(DatasetUpdate::Unavailable(
                "timeout".into(),
            )),
            Instant::now(),
        );
        assert_eq!(
            controller.dataset_status(),
            &DatasetStatus::Unavailable("timeout".into())
        );
        assert_eq!(controller.selection().current_index(), None);

        // Index operations are no-ops now
        let outcome = controller.update(
            CoverFlowMessage::CarouselGesture(GestureEvent::end(-400.0)),
            Instant::now(),
        );
        assert!(!outcome.selection_changed);
        assert_eq!(controller.selection().current_index(), None);
    }
}
