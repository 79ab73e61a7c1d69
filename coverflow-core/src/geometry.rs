//! Focus geometry: pure mapping from scroll position to per-item focus.
//!
//! Every function here takes the state it needs as parameters and returns
//! plain numbers; renderers consume the results without holding onto any
//! engine state.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::constants::focus;

/// Item width and spacing along the carousel axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemMetrics {
    pub item_width: f32,
    pub item_spacing: f32,
}

impl ItemMetrics {
    pub const fn new(item_width: f32, item_spacing: f32) -> Self {
        Self {
            item_width,
            item_spacing,
        }
    }

    /// Distance between the leading edges of neighbouring items.
    #[inline]
    pub fn stride(&self) -> f32 {
        self.item_width + self.item_spacing
    }

    /// Resting scroll offset that puts `index` at the centre.
    #[inline]
    pub fn rest_offset(&self, index: usize) -> f32 {
        index as f32 * self.stride()
    }

    #[inline]
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        count as f32 * self.item_width
            + count.saturating_sub(1) as f32 * self.item_spacing
    }
}

/// Signed distance, in item widths, of `index`'s centre from the viewport
/// centre. Zero means perfectly centred; negative values lie to the left.
#[inline]
pub fn focus_distance(
    index: usize,
    scroll_offset: f32,
    viewport_center: f32,
    metrics: ItemMetrics,
) -> f32 {
    let stride = metrics.stride();
    let item_center =
        index as f32 * stride - scroll_offset + metrics.item_width / 2.0;
    (item_center - viewport_center) / stride
}

/// Indices whose frames intersect the viewport, widened by `overscan` on each
/// side and clamped to `0..count`.
///
/// `viewport_center` anchors the viewport in content coordinates: the visible
/// span is `[center - width/2, center + width/2]` shifted by the live offset.
pub fn visible_range(
    live_offset: f32,
    viewport_width: f32,
    viewport_center: f32,
    metrics: ItemMetrics,
    count: usize,
    overscan: usize,
) -> Range<usize> {
    if count == 0 {
        return 0..0;
    }
    let stride = metrics.stride();
    let left = live_offset + viewport_center - viewport_width / 2.0;
    let right = left + viewport_width;

    // Item i spans [i*stride, i*stride + item_width)
    let first = ((left - metrics.item_width) / stride).floor() + 1.0;
    let last = ((right - 1e-4) / stride).floor();

    let first = first.max(0.0) as usize;
    if last < 0.0 {
        return 0..overscan.min(count);
    }
    let last = last as usize;

    let start = first.saturating_sub(overscan).min(count);
    let end = last
        .saturating_add(1)
        .saturating_add(overscan)
        .min(count);
    start..end.max(start)
}

/// Downstream mapping from focus distance to visual parameters. These are
/// presentation constants, tunable per layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusStyle {
    pub focused_scale: f32,
    pub min_scale: f32,
    pub scale_falloff: f32,
    pub min_opacity: f32,
    pub opacity_falloff: f32,
    pub max_rotation_degrees: f32,
    pub parallax_strength: f32,
    pub focus_threshold: f32,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self {
            focused_scale: focus::FOCUSED_SCALE,
            min_scale: focus::MIN_SCALE,
            scale_falloff: focus::SCALE_FALLOFF,
            min_opacity: focus::MIN_OPACITY,
            opacity_falloff: focus::OPACITY_FALLOFF,
            max_rotation_degrees: focus::MAX_ROTATION_DEGREES,
            parallax_strength: focus::PARALLAX_STRENGTH,
            focus_threshold: focus::FOCUS_THRESHOLD,
        }
    }
}

/// Visual parameters for one carousel item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemVisual {
    pub distance: f32,
    pub is_focused: bool,
    pub scale: f32,
    pub opacity: f32,
    pub rotation_degrees: f32,
    pub parallax: f32,
}

impl FocusStyle {
    pub fn visual_for(&self, distance: f32) -> ItemVisual {
        let magnitude = distance.abs();
        let is_focused = magnitude < self.focus_threshold;

        let scale = if is_focused {
            self.focused_scale
        } else {
            (1.0 - magnitude * self.scale_falloff).max(self.min_scale)
        };
        let opacity =
            (1.0 - magnitude * self.opacity_falloff).max(self.min_opacity);
        let rotation_degrees = if is_focused {
            0.0
        } else {
            (-distance * self.max_rotation_degrees)
                .clamp(-self.max_rotation_degrees, self.max_rotation_degrees)
        };

        ItemVisual {
            distance,
            is_focused,
            scale,
            opacity,
            rotation_degrees,
            parallax: -distance * self.parallax_strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS: ItemMetrics = ItemMetrics::new(200.0, 4.0);

    #[test]
    fn centred_item_has_zero_distance() {
        for count in 1..40usize {
            for current in 0..count {
                let offset = METRICS.rest_offset(current);
                let d = focus_distance(current, offset, 100.0, METRICS);
                assert_eq!(d, 0.0, "count={count} current={current}");
            }
        }
    }

    #[test]
    fn neighbours_sit_one_stride_away() {
        let offset = METRICS.rest_offset(3);
        assert_eq!(focus_distance(4, offset, 100.0, METRICS), 1.0);
        assert_eq!(focus_distance(2, offset, 100.0, METRICS), -1.0);
        assert_eq!(focus_distance(6, offset, 100.0, METRICS), 3.0);
    }

    #[test]
    fn distance_tracks_live_drag_offset() {
        // Half a stride into a drag toward item 1
        let d0 = focus_distance(0, 102.0, 100.0, METRICS);
        let d1 = focus_distance(1, 102.0, 100.0, METRICS);
        assert!((d0 + 0.5).abs() < 1e-6);
        assert!((d1 - 0.5).abs() < 1e-6);
    }

    #[test]
    fn visible_range_covers_viewport_with_overscan() {
        // 390 wide viewport centred on item 5: roughly items 4..=6 visible
        let offset = METRICS.rest_offset(5);
        let range = visible_range(offset, 390.0, 100.0, METRICS, 20, 0);
        assert_eq!(range, 4..7);
        let range = visible_range(offset, 390.0, 100.0, METRICS, 20, 2);
        assert_eq!(range, 2..9);
    }

    #[test]
    fn visible_range_clamps_at_edges() {
        let range = visible_range(0.0, 390.0, 100.0, METRICS, 3, 2);
        assert_eq!(range, 0..3);
        assert_eq!(visible_range(0.0, 390.0, 100.0, METRICS, 0, 2), 0..0);
    }

    #[test]
    fn focused_item_is_enlarged_and_flat() {
        let style = FocusStyle::default();
        let v = style.visual_for(0.0);
        assert!(v.is_focused);
        assert_eq!(v.scale, style.focused_scale);
        assert_eq!(v.rotation_degrees, 0.0);
        assert_eq!(v.opacity, 1.0);
    }

    #[test]
    fn distant_items_bottom_out_at_minimums() {
        let style = FocusStyle::default();
        let v = style.visual_for(-12.0);
        assert!(!v.is_focused);
        assert_eq!(v.scale, style.min_scale);
        assert_eq!(v.opacity, style.min_opacity);
        assert_eq!(v.rotation_degrees, style.max_rotation_degrees);
        let right = style.visual_for(1.0);
        assert!(right.rotation_degrees < 0.0);
    }
}
