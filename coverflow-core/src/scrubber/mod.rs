//! Scrubber window model
//!
//! A fixed number of slots drawn as a miniature bar under the carousel. The
//! slots map onto a sliding window of albums; the highlight is either resting
//! on the current album, following a pointer, or settling back after release.

pub mod timer;
pub mod weight;
pub mod window;

pub use timer::{SettleTimer, SettleToken};
pub use weight::slot_weight;
pub use window::{ScrubberMode, ScrubberPhase, ScrubberWindow, SlotView};
