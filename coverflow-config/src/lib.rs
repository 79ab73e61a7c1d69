//! Configuration loading for the cover flow engine.
//!
//! Resolves an [`EngineConfig`](coverflow_core::EngineConfig) from, in order,
//! an explicit path, `COVERFLOW_CONFIG_PATH`, inline `COVERFLOW_CONFIG_JSON`,
//! a `coverflow.toml` in the working directory, and finally built-in defaults.
#![allow(missing_docs)]

pub mod loader;
pub mod warnings;

pub use loader::{
    ConfigFormat, ConfigLoad, ConfigLoadError, ConfigLoader,
    ConfigLoaderOptions, ConfigSource, EnvSources, render_toml,
};
pub use warnings::{ConfigWarning, ConfigWarnings, collect_warnings};
