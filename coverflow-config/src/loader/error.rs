use std::path::PathBuf;

use coverflow_core::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("config file {path} does not exist")]
    MissingConfig { path: PathBuf },
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("failed to render config as toml")]
    Render(#[source] toml::ser::Error),
    #[error("invalid engine configuration: {0}")]
    Invalid(#[from] ConfigError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
