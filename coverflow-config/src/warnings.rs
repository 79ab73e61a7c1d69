//! Non-fatal configuration findings

use coverflow_core::EngineConfig;

/// Slot counts the scrubber was tuned for.
const USUAL_SLOT_COUNTS: std::ops::RangeInclusive<usize> = 25..=28;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Inspect a valid configuration for values that work but probably
/// were not intended.
pub fn collect_warnings(config: &EngineConfig) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();
    let slots = config.scrubber.slot_count;

    if slots % 2 == 0 {
        warnings.push_with_hint(
            format!("scrubber.slot_count = {slots} has no true centre slot"),
            format!("the idle highlight rests on slot {}", slots / 2),
        );
    }

    if !USUAL_SLOT_COUNTS.contains(&slots) {
        warnings.push_with_hint(
            format!("scrubber.slot_count = {slots} is outside 25..=28"),
            "weights and spread are tuned for 25 to 28 slots",
        );
    }

    if config.focus.focus_threshold > 0.5 {
        warnings.push_with_hint(
            format!(
                "focus.focus_threshold = {} lets two neighbours count as focused",
                config.focus.focus_threshold
            ),
            "keep the threshold at or below 0.5",
        );
    }

    if config.carousel.item_spacing < 0.0 {
        warnings.push("carousel.item_spacing is negative; covers overlap");
    }

    warnings
}
