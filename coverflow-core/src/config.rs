//! Engine configuration
//!
//! Plain serde structs whose defaults come from [`crate::constants`]. Loading
//! from files and the environment lives in the `coverflow-config` crate; this
//! module only defines the shape and the guard rails.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::constants::{carousel, scrubber};
use crate::geometry::{FocusStyle, ItemMetrics};

/// Easing function type for settle animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingKind {
    Linear = 0,
    EaseIn = 1,
    #[default]
    EaseOut = 2,
    EaseInOut = 3,
}

impl EasingKind {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => Self::Linear,
            1 => Self::EaseIn,
            2 => Self::EaseOut,
            3 => Self::EaseInOut,
            _ => Self::EaseOut,
        }
    }

    /// Map linear progress `t` in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

/// Carousel geometry and commit behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub item_width: f32,
    pub item_spacing: f32,
    /// Initial viewport width; the host updates it on resize.
    pub viewport_width: f32,
    /// Resting centre in content coordinates. `None` means `item_width / 2`,
    /// i.e. the layout insets the first cover so it rests centred.
    pub viewport_center: Option<f32>,
    pub overscan_items: usize,
    /// Bound for the direction delta reported on drag commits.
    pub max_direction_delta: i32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_width: carousel::ITEM_WIDTH,
            item_spacing: carousel::ITEM_SPACING,
            viewport_width: carousel::VIEWPORT_WIDTH,
            viewport_center: None,
            overscan_items: carousel::OVERSCAN_ITEMS,
            max_direction_delta: carousel::MAX_DIRECTION_DELTA,
        }
    }
}

impl CarouselConfig {
    pub fn metrics(&self) -> ItemMetrics {
        ItemMetrics::new(self.item_width, self.item_spacing)
    }

    pub fn resolved_viewport_center(&self) -> f32 {
        self.viewport_center.unwrap_or(self.item_width / 2.0)
    }
}

/// Scrubber bar windowing and settle behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubberConfig {
    pub slot_count: usize,
    pub settle_duration_ms: u64,
    pub weight_spread: f32,
    pub weight_exponent: f32,
    pub easing: EasingKind,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            slot_count: scrubber::SLOT_COUNT,
            settle_duration_ms: scrubber::SETTLE_DURATION_MS,
            weight_spread: scrubber::WEIGHT_SPREAD,
            weight_exponent: scrubber::WEIGHT_EXPONENT,
            easing: EasingKind::from_u8(scrubber::EASING_KIND),
        }
    }
}

impl ScrubberConfig {
    pub fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_duration_ms)
    }

    pub fn center_slot(&self) -> usize {
        self.slot_count / 2
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub carousel: CarouselConfig,
    pub scrubber: ScrubberConfig,
    pub focus: FocusStyle,
}

/// Guard-rail failures for an [`EngineConfig`].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("item stride must be positive (width {width} + spacing {spacing})")]
    NonPositiveStride { width: f32, spacing: f32 },
    #[error("item width must be positive, got {0}")]
    NonPositiveItemWidth(f32),
    #[error("scrubber needs at least one slot")]
    NoSlots,
    #[error("scrubber weight spread must be positive, got {0}")]
    NonPositiveSpread(f32),
    #[error("scrubber weight exponent must be positive, got {0}")]
    NonPositiveExponent(f32),
    #[error("settle duration must be non-zero")]
    ZeroSettleDuration,
    #[error("max direction delta must be positive, got {0}")]
    NonPositiveDirectionDelta(i32),
}

impl EngineConfig {
    /// Check the invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.carousel;
        if c.item_width.is_nan() || c.item_width <= 0.0 {
            return Err(ConfigError::NonPositiveItemWidth(c.item_width));
        }
        let stride = c.item_width + c.item_spacing;
        if stride.is_nan() || stride <= 0.0 {
            return Err(ConfigError::NonPositiveStride {
                width: c.item_width,
                spacing: c.item_spacing,
            });
        }
        if c.max_direction_delta <= 0 {
            return Err(ConfigError::NonPositiveDirectionDelta(
                c.max_direction_delta,
            ));
        }

        let s = &self.scrubber;
        if s.slot_count == 0 {
            return Err(ConfigError::NoSlots);
        }
        if s.weight_spread.is_nan() || s.weight_spread <= 0.0 {
            return Err(ConfigError::NonPositiveSpread(s.weight_spread));
        }
        if s.weight_exponent.is_nan() || s.weight_exponent <= 0.0 {
            return Err(ConfigError::NonPositiveExponent(s.weight_exponent));
        }
        if s.settle_duration_ms == 0 {
            return Err(ConfigError::ZeroSettleDuration);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_slots_are_rejected() {
        let mut config = EngineConfig::default();
        config.scrubber.slot_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoSlots));
    }

    #[test]
    fn nan_width_is_rejected() {
        let mut config = EngineConfig::default();
        config.carousel.item_width = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveItemWidth(_))
        ));
    }

    #[test]
    fn easing_codes_decode_with_ease_out_fallback() {
        assert_eq!(EasingKind::from_u8(0), EasingKind::Linear);
        assert_eq!(EasingKind::from_u8(3), EasingKind::EaseInOut);
        assert_eq!(EasingKind::from_u8(200), EasingKind::EaseOut);
        assert_eq!(
            ScrubberConfig::default().easing,
            EasingKind::from_u8(scrubber::EASING_KIND)
        );
    }

    #[test]
    fn easing_endpoints_are_fixed() {
        for code in 0..4u8 {
            let kind = EasingKind::from_u8(code);
            assert_eq!(kind.apply(0.0), 0.0, "{kind:?}");
            assert_eq!(kind.apply(1.0), 1.0, "{kind:?}");
        }
        assert!(EasingKind::EaseOut.apply(0.5) > 0.5);
        assert!(EasingKind::EaseIn.apply(0.5) < 0.5);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{ "scrubber": { "slot_count": 28 } }"#)
                .expect("valid json");
        assert_eq!(config.scrubber.slot_count, 28);
        assert_eq!(config.scrubber.settle_duration_ms, 1_200);
        assert_eq!(config.carousel, CarouselConfig::default());
    }
}
