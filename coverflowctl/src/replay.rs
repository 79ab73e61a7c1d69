//! Scripted gesture replay
//!
//! A script is a JSON array of steps, each stamped with milliseconds since
//! the start of the replay:
//!
//! ```json
//! [
//!   { "at_ms": 0,   "target": "carousel", "phase": "begin",  "value": -20 },
//!   { "at_ms": 40,  "target": "carousel", "phase": "end",    "value": -150 },
//!   { "at_ms": 100, "target": "scrubber", "phase": "begin",  "value": 0.22 },
//!   { "at_ms": 900, "target": "tick" }
//! ]
//! ```

use std::path::Path;
use std::time::{Duration, Instant};

use coverflow_core::{
    CoverFlowController, CoverFlowMessage, GestureEvent, GesturePhase,
    ScrubberPhase,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read replay script {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid replay script: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("step {step}: {target:?} steps need a phase")]
    MissingPhase { step: usize, target: StepTarget },
    #[error("step {step}: at_ms {at_ms} is earlier than the previous step ({previous})")]
    OutOfOrder { step: usize, at_ms: u64, previous: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepTarget {
    Carousel,
    Scrubber,
    Jump,
    Tick,
    Resize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReplayStep {
    pub at_ms: u64,
    pub target: StepTarget,
    #[serde(default)]
    pub phase: Option<GesturePhase>,
    #[serde(default)]
    pub value: f32,
}

impl ReplayStep {
    fn message(&self, step: usize) -> Result<CoverFlowMessage, ReplayError> {
        let gesture = || {
            self.phase
                .map(|phase| GestureEvent {
                    phase,
                    value: self.value,
                })
                .ok_or(ReplayError::MissingPhase {
                    step,
                    target: self.target,
                })
        };

        Ok(match self.target {
            StepTarget::Carousel => {
                CoverFlowMessage::CarouselGesture(gesture()?)
            }
            StepTarget::Scrubber => {
                CoverFlowMessage::ScrubberGesture(gesture()?)
            }
            StepTarget::Jump => {
                CoverFlowMessage::JumpTo(self.value.max(0.0) as usize)
            }
            StepTarget::Tick => CoverFlowMessage::Tick,
            StepTarget::Resize => CoverFlowMessage::ViewportResized(self.value),
        })
    }
}

/// Engine state after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub at_ms: u64,
    pub target: StepTarget,
    pub current_index: Option<usize>,
    pub selection_changed: bool,
    pub animating: bool,
    pub live_offset: f32,
    pub scrubber_phase: ScrubberPhase,
    pub first_album_index: usize,
    pub highlight: f32,
    pub highlight_slot: usize,
}

pub fn parse_script(raw: &str) -> Result<Vec<ReplayStep>, ReplayError> {
    let steps: Vec<ReplayStep> = serde_json::from_str(raw)?;

    let mut previous = 0;
    for (step, entry) in steps.iter().enumerate() {
        if entry.at_ms < previous {
            return Err(ReplayError::OutOfOrder {
                step,
                at_ms: entry.at_ms,
                previous,
            });
        }
        previous = entry.at_ms;
    }
    Ok(steps)
}

pub async fn read_script(path: &Path) -> Result<Vec<ReplayStep>, ReplayError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| {
        ReplayError::Read {
            path: path.display().to_string(),
            source,
        }
    })?;
    parse_script(&raw)
}

/// Feed every step to the controller on a synthetic clock starting at
/// `start`, reporting the state after each one.
pub fn run(
    controller: &mut CoverFlowController,
    steps: &[ReplayStep],
    start: Instant,
) -> Result<Vec<StepReport>, ReplayError> {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let message = step.message(index)?;
            let now = start + Duration::from_millis(step.at_ms);
            let outcome = controller.update(message, now);
            debug!(step = index, at_ms = step.at_ms, ?outcome, "replayed step");

            let scrubber = controller.scrubber();
            Ok(StepReport {
                at_ms: step.at_ms,
                target: step.target,
                current_index: controller.selection().current_index(),
                selection_changed: outcome.selection_changed,
                animating: outcome.animating,
                live_offset: controller.selection().live_offset(),
                scrubber_phase: scrubber.phase(),
                first_album_index: scrubber.first_album_index(),
                highlight: scrubber.highlight(),
                highlight_slot: scrubber.highlight_slot(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverflow_core::{
        CatalogClient, DatasetUpdate, EngineConfig, StaticCatalog,
    };

    async fn controller(count: usize) -> CoverFlowController {
        let mut controller =
            CoverFlowController::new(EngineConfig::default()).expect("config");
        let albums = StaticCatalog::sample(count)
            .fetch_albums()
            .await
            .expect("sample");
        controller.update(
            CoverFlowMessage::DatasetReplaced(DatasetUpdate::Replaced(
                albums.into(),
            )),
            Instant::now(),
        );
        controller
    }

    #[test]
    fn rejects_steps_out_of_order() {
        let raw = r#"[
            { "at_ms": 100, "target": "tick" },
            { "at_ms": 50, "target": "tick" }
        ]"#;
        assert!(matches!(
            parse_script(raw),
            Err(ReplayError::OutOfOrder { step: 1, .. })
        ));
    }

    #[test]
    fn gesture_steps_need_a_phase() {
        let step = ReplayStep {
            at_ms: 0,
            target: StepTarget::Scrubber,
            phase: None,
            value: 0.5,
        };
        assert!(matches!(
            step.message(3),
            Err(ReplayError::MissingPhase { step: 3, .. })
        ));
    }

    #[tokio::test]
    async fn replays_drag_then_scrubber_tap() {
        let steps = parse_script(
            r#"[
                { "at_ms": 0, "target": "carousel", "phase": "begin", "value": -20 },
                { "at_ms": 30, "target": "carousel", "phase": "end", "value": -150 },
                { "at_ms": 60, "target": "scrubber", "phase": "begin", "value": 0.22 },
                { "at_ms": 80, "target": "scrubber", "phase": "end", "value": 0.22 },
                { "at_ms": 5000, "target": "tick" }
            ]"#,
        )
        .expect("script");

        let mut controller = controller(10).await;
        let reports =
            run(&mut controller, &steps, Instant::now()).expect("replay");

        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].live_offset, 20.0);
        assert_eq!(reports[1].current_index, Some(1));
        assert!(reports[1].selection_changed);
        // 0.22 of 25 slots is slot 5
        assert_eq!(reports[2].current_index, Some(5));
        assert_eq!(reports[2].scrubber_phase, ScrubberPhase::Dragging);
        assert_eq!(reports[3].scrubber_phase, ScrubberPhase::Settling);
        assert_eq!(reports[4].scrubber_phase, ScrubberPhase::Idle);
        assert!(!reports[4].animating);
    }

    #[tokio::test]
    async fn jump_steps_are_clamped() {
        let steps = parse_script(r#"[{ "at_ms": 0, "target": "jump", "value": 40 }]"#)
            .expect("script");
        let mut controller = controller(10).await;
        let reports =
            run(&mut controller, &steps, Instant::now()).expect("replay");
        assert_eq!(reports[0].current_index, Some(9));
    }
}
