//! Cover flow selection and position-mapping engine.
//!
//! The crate is the state core behind a horizontally paged album carousel
//! and its miniature scrubber bar:
//!
//! - [`selection`] turns drag translations into a live offset and commits the
//!   nearest album on release.
//! - [`geometry`] maps the live offset to a signed per-item focus distance
//!   and the visual parameters derived from it.
//! - [`scrubber`] keeps a fixed slot bar mapped onto a sliding album window
//!   and runs the idle / dragging / settling state machine.
//! - [`bridge`] keeps the two in sync and publishes selection changes.
//! - [`controller`] owns all of the above for one screen.
//!
//! Nothing here draws; renderers consume the numbers.
#![allow(missing_docs)]

pub mod animator;
pub mod bridge;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod scrubber;
pub mod selection;

pub use bridge::{CrossSyncBridge, SelectionEvent, SelectionOrigin};
pub use catalog::{
    CatalogClient, CatalogError, DatasetUpdate, JsonFileCatalog,
    StaticCatalog, load_catalog,
};
pub use config::{
    CarouselConfig, ConfigError, EasingKind, EngineConfig, ScrubberConfig,
};
pub use controller::{
    CoverFlowController, CoverFlowMessage, DatasetStatus, FocusFrame,
    GestureEvent, GesturePhase, ScrubberFrame, UpdateOutcome,
};
pub use error::{CoreError, Result, SelectionError};
pub use geometry::{FocusStyle, ItemMetrics, ItemVisual, focus_distance};
pub use scrubber::{ScrubberMode, ScrubberPhase, ScrubberWindow};
pub use selection::{DragCommit, SelectionModel, SelectionState};

pub use coverflow_model as model;
