use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// Index failures raised by the strict selection API.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no albums loaded")]
    EmptyDataset,

    #[error("index {index} out of range for {count} albums")]
    InvalidIndex { index: usize, count: usize },
}

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
