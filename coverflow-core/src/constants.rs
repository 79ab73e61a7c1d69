//! Engine constants
//!
//! Shared defaults for carousel geometry, scrubber windowing and settle
//! animation. Tuning should happen here so every consumer of the default
//! config updates consistently.

/// Carousel item geometry defaults (album covers).
pub mod carousel {
    /// Cover width in points.
    pub const ITEM_WIDTH: f32 = 200.0;
    /// Gap between neighbouring covers.
    pub const ITEM_SPACING: f32 = 4.0;
    /// Viewport width used until the host reports a real one.
    pub const VIEWPORT_WIDTH: f32 = 390.0;
    /// Items kept in the visible range beyond each viewport edge.
    pub const OVERSCAN_ITEMS: usize = 2;
    /// Bound applied to the index delta reported after a drag commit.
    pub const MAX_DIRECTION_DELTA: i32 = 5;
}

/// Scrubber bar defaults.
pub mod scrubber {
    /// Number of slots drawn in the bar. Some layouts use 28.
    pub const SLOT_COUNT: usize = 25;
    /// Time the highlight takes to return to its idle slot (ms).
    pub const SETTLE_DURATION_MS: u64 = 1_200;
    /// Slot distance at which a slot's weight reaches zero.
    pub const WEIGHT_SPREAD: f32 = 6.0;
    /// Sharpening exponent for the weight falloff.
    pub const WEIGHT_EXPONENT: f32 = 2.5;
    /// Easing kind for settles: 0=Linear,1=EaseIn,2=EaseOut,3=EaseInOut.
    pub const EASING_KIND: u8 = 2;
}

/// Presentation mapping defaults for focus distance.
pub mod focus {
    pub const FOCUSED_SCALE: f32 = 1.15;
    pub const MIN_SCALE: f32 = 0.7;
    pub const SCALE_FALLOFF: f32 = 0.15;
    pub const MIN_OPACITY: f32 = 0.35;
    pub const OPACITY_FALLOFF: f32 = 0.25;
    pub const MAX_ROTATION_DEGREES: f32 = 45.0;
    pub const PARALLAX_STRENGTH: f32 = 18.0;
    /// Items closer than this (in item widths) count as focused.
    pub const FOCUS_THRESHOLD: f32 = 0.5;
}
