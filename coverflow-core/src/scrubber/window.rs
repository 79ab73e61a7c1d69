//! ScrubberWindow: fixed slot bar mapped onto a sliding window of albums

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use super::timer::{SettleTimer, SettleToken};
use super::weight::slot_weight;
use crate::animator::SettleAnimator;
use crate::config::ScrubberConfig;

/// Scrubber interaction state. All transient interaction data lives in the
/// variant so there is a single source of truth for "what is the bar doing".
#[derive(Debug, Clone, PartialEq)]
pub enum ScrubberMode {
    /// Highlight rests on the slot of the current selection.
    Idle,
    /// Highlight follows the pointer over an anchored window.
    Dragging { slot: usize },
    /// Highlight eases back toward its idle slot.
    Settling {
        token: SettleToken,
        animator: SettleAnimator,
    },
}

/// Payload-free view of [`ScrubberMode`] for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrubberPhase {
    Idle,
    Dragging,
    Settling,
}

/// One drawn slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlotView {
    pub slot: usize,
    pub album_index: usize,
    pub weight: f32,
}

#[derive(Debug, Clone)]
pub struct ScrubberWindow {
    config: ScrubberConfig,
    album_count: usize,
    current_index: Option<usize>,
    first_album_index: usize,
    /// Continuous highlight position in slot units.
    highlight: f32,
    mode: ScrubberMode,
    timer: SettleTimer,
}

impl ScrubberWindow {
    pub fn new(
        config: ScrubberConfig,
        album_count: usize,
        current_index: Option<usize>,
    ) -> Self {
        let mut window = Self {
            config: ScrubberConfig {
                slot_count: config.slot_count.max(1),
                ..config
            },
            album_count,
            current_index: current_index
                .filter(|_| album_count > 0)
                .map(|i| i.min(album_count.saturating_sub(1))),
            first_album_index: 0,
            highlight: (config.slot_count.max(1) / 2) as f32,
            mode: ScrubberMode::Idle,
            timer: SettleTimer::new(),
        };
        window.recompute_idle_window();
        window
    }

    pub fn slot_count(&self) -> usize {
        self.config.slot_count
    }

    pub fn center_slot(&self) -> usize {
        self.config.center_slot()
    }

    pub fn album_count(&self) -> usize {
        self.album_count
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn first_album_index(&self) -> usize {
        self.first_album_index
    }

    pub fn mode(&self) -> &ScrubberMode {
        &self.mode
    }

    pub fn phase(&self) -> ScrubberPhase {
        match self.mode {
            ScrubberMode::Idle => ScrubberPhase::Idle,
            ScrubberMode::Dragging { .. } => ScrubberPhase::Dragging,
            ScrubberMode::Settling { .. } => ScrubberPhase::Settling,
        }
    }

    /// Continuous highlight position (slot units) for smooth rendering.
    pub fn highlight(&self) -> f32 {
        self.highlight
    }

    /// Highlighted slot, rounded to the nearest whole slot.
    pub fn highlight_slot(&self) -> usize {
        let last = self.slot_count() - 1;
        (self.highlight.round().max(0.0) as usize).min(last)
    }

    /// Upper bound for `first_album_index`.
    #[inline]
    pub fn max_first_album_index(&self) -> usize {
        self.album_count.saturating_sub(self.slot_count())
    }

    /// Album shown in `slot`, clamped onto the dataset.
    pub fn album_for_slot(&self, slot: usize) -> Option<usize> {
        let last = self.album_count.checked_sub(1)?;
        let slot = slot.min(self.slot_count() - 1);
        Some((self.first_album_index + slot).min(last))
    }

    /// Slot under a pointer at fraction `f` of the bar width.
    pub fn slot_for_fraction(&self, fraction: f32) -> usize {
        let f = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let slot = (f * self.slot_count() as f32).floor() as usize;
        slot.min(self.slot_count() - 1)
    }

    /// Slot where the current album sits in the idle window. Equals the
    /// centre slot unless the window is pinned against either end.
    pub fn idle_slot(&self) -> usize {
        match self.current_index {
            Some(current) => current
                .saturating_sub(self.idle_first_album_index())
                .min(self.slot_count() - 1),
            None => self.center_slot(),
        }
    }

    pub fn slots(&self) -> Vec<SlotView> {
        if self.album_count == 0 {
            return Vec::new();
        }
        (0..self.slot_count())
            .filter_map(|slot| {
                self.album_for_slot(slot).map(|album_index| SlotView {
                    slot,
                    album_index,
                    weight: self.weight(slot),
                })
            })
            .collect()
    }

    pub fn weight(&self, slot: usize) -> f32 {
        slot_weight(
            slot,
            self.highlight,
            self.config.weight_spread,
            self.config.weight_exponent,
        )
    }

    /// Dataset replaced: re-clamp the window and drop any pending settle.
    pub fn set_album_count(&mut self, count: usize, current: Option<usize>) {
        self.album_count = count;
        self.current_index = current
            .filter(|_| count > 0)
            .map(|i| i.min(count.saturating_sub(1)));

        match self.mode {
            ScrubberMode::Dragging { slot } if count > 0 => {
                self.first_album_index =
                    self.first_album_index.min(self.max_first_album_index());
                self.highlight = slot as f32;
            }
            _ => {
                self.cancel_settle();
                self.mode = ScrubberMode::Idle;
                self.recompute_idle_window();
            }
        }
    }

    /// Carousel selection changed. While dragging the window stays anchored
    /// so the bar does not slide under the finger.
    pub fn sync_selection(&mut self, current: Option<usize>) {
        self.current_index = current
            .filter(|_| self.album_count > 0)
            .map(|i| i.min(self.album_count.saturating_sub(1)));

        match self.phase() {
            ScrubberPhase::Idle => self.recompute_idle_window(),
            ScrubberPhase::Dragging => {}
            ScrubberPhase::Settling => {
                self.first_album_index = self.idle_first_album_index();
                let target = self.idle_slot() as f32;
                if let ScrubberMode::Settling { animator, .. } = &mut self.mode
                {
                    animator.retarget(target);
                }
            }
        }
    }

    /// Pointer went down on the bar. Cancels any pending settle and returns
    /// the album under the pointer.
    pub fn pointer_down(&mut self, fraction: f32, _now: Instant) -> Option<usize> {
        if self.album_count == 0 {
            return None;
        }
        self.cancel_settle();

        let slot = self.slot_for_fraction(fraction);
        let current = self.current_index.unwrap_or(0);
        // Anchor so the current album sits under the finger
        self.first_album_index =
            current.saturating_sub(slot).min(self.max_first_album_index());
        self.highlight = slot as f32;
        self.mode = ScrubberMode::Dragging { slot };

        debug!(
            slot,
            first_album_index = self.first_album_index,
            "scrubber drag started"
        );
        self.album_for_slot(slot)
    }

    /// Pointer moved while dragging; returns the album under the pointer.
    pub fn pointer_moved(&mut self, fraction: f32) -> Option<usize> {
        if !matches!(self.mode, ScrubberMode::Dragging { .. }) {
            return None;
        }
        let slot = self.slot_for_fraction(fraction);
        self.mode = ScrubberMode::Dragging { slot };
        self.highlight = slot as f32;
        self.album_for_slot(slot)
    }

    /// Pointer released: recentre the window and ease the highlight back.
    pub fn pointer_up(&mut self, now: Instant) {
        if !matches!(self.mode, ScrubberMode::Dragging { .. }) {
            return;
        }
        let from = self.highlight;
        self.recompute_idle_window();
        self.begin_settle(from, now);
        debug!(from, to = self.idle_slot(), "scrubber settling");
    }

    /// Offset the idle highlight toward the carousel's direction of travel
    /// and let it settle back.
    pub fn lean(&mut self, direction_delta: i32, now: Instant) {
        if direction_delta == 0
            || self.album_count == 0
            || matches!(self.mode, ScrubberMode::Dragging { .. })
        {
            return;
        }
        let from = match self.mode {
            // Continue from wherever the running settle has got to
            ScrubberMode::Settling { .. } => self.highlight,
            _ => {
                let idle = self.idle_slot() as i64;
                let last = (self.slot_count() - 1) as i64;
                let from = (idle + i64::from(direction_delta)).clamp(0, last);
                if from == idle {
                    return;
                }
                from as f32
            }
        };
        self.recompute_idle_window();
        self.begin_settle(from, now);
    }

    /// Advance the settle animation. Returns true while still animating.
    pub fn tick(&mut self, now: Instant) -> bool {
        let ScrubberMode::Settling { token, animator } = &mut self.mode else {
            return false;
        };
        let token = *token;
        if let Some(position) = animator.tick(now) {
            self.highlight = position;
        }
        if self.timer.poll(now) == Some(token) {
            self.mode = ScrubberMode::Idle;
            self.recompute_idle_window();
            debug!(slot = self.idle_slot(), "scrubber settled");
            return false;
        }
        true
    }

    fn begin_settle(&mut self, from: f32, now: Instant) {
        self.cancel_settle();
        let duration = self.config.settle_duration();
        let token = self.timer.arm(now, duration);
        let animator = SettleAnimator::start(
            from,
            self.idle_slot() as f32,
            now,
            duration,
            self.config.easing,
        );
        self.highlight = from;
        self.mode = ScrubberMode::Settling { token, animator };
    }

    fn cancel_settle(&mut self) {
        if let ScrubberMode::Settling { token, animator } = &mut self.mode {
            animator.cancel();
            self.timer.cancel(*token);
        }
    }

    fn idle_first_album_index(&self) -> usize {
        self.current_index
            .unwrap_or(0)
            .saturating_sub(self.center_slot())
            .min(self.max_first_album_index())
    }

    fn recompute_idle_window(&mut self) {
        self.first_album_index = self.idle_first_album_index();
        if matches!(self.mode, ScrubberMode::Idle) {
            self.highlight = self.idle_slot() as f32;
        }
    }
}
