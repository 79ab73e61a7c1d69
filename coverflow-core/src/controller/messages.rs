//! Input messages for the cover flow screen

use serde::{Deserialize, Serialize};

use crate::catalog::DatasetUpdate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Begin,
    Change,
    End,
}

/// One event from a continuous gesture stream. For the carousel `value` is
/// the horizontal translation since the gesture began; for the scrubber it
/// is the pointer's x fraction of the bar width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub phase: GesturePhase,
    pub value: f32,
}

impl GestureEvent {
    pub fn begin(value: f32) -> Self {
        Self {
            phase: GesturePhase::Begin,
            value,
        }
    }

    pub fn change(value: f32) -> Self {
        Self {
            phase: GesturePhase::Change,
            value,
        }
    }

    pub fn end(value: f32) -> Self {
        Self {
            phase: GesturePhase::End,
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub enum CoverFlowMessage {
    // Gestures
    CarouselGesture(GestureEvent),
    ScrubberGesture(GestureEvent),

    // Programmatic navigation (clamped)
    JumpTo(usize),

    // Frame clock
    Tick,

    // Catalog
    DatasetReplaced(DatasetUpdate),

    // Layout
    ViewportResized(f32),
}
