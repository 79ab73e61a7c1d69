//! Render-ready snapshots produced by the controller

use coverflow_model::AlbumId;
use serde::Serialize;

use crate::geometry::ItemVisual;
use crate::scrubber::{ScrubberPhase, SlotView};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemFocus {
    pub index: usize,
    pub album_id: AlbumId,
    /// Artwork URL resolved for the item size; `None` if the catalog's
    /// reference does not form a valid URL.
    pub cover_url: Option<String>,
    #[serde(flatten)]
    pub visual: ItemVisual,
}

/// Visual parameters for every item in the visible range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusFrame {
    pub current_index: Option<usize>,
    pub live_offset: f32,
    pub items: Vec<ItemFocus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrubberFrame {
    pub phase: ScrubberPhase,
    pub first_album_index: usize,
    pub highlight: f32,
    pub highlight_slot: usize,
    pub slots: Vec<SlotView>,
}
