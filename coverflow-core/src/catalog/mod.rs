//! Catalog contract
//!
//! The catalog is an external collaborator: it produces the ordered album
//! sequence, once per fetch, or fails. The engine never merges or patches a
//! dataset; every successful fetch replaces the previous one wholesale.

pub mod json_file;
pub mod static_catalog;

use std::sync::Arc;

use async_trait::async_trait;
use coverflow_model::AlbumRecord;
use thiserror::Error;
use tracing::{info, warn};

pub use json_file::{CatalogEntry, JsonFileCatalog};
pub use static_catalog::StaticCatalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog entry: {0}")]
    InvalidEntry(#[from] coverflow_model::ModelError),
}

/// Source of the album sequence.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_albums(&self) -> Result<Vec<AlbumRecord>, CatalogError>;
}

/// Outcome of one fetch, ready to be handed to the screen controller.
#[derive(Debug, Clone)]
pub enum DatasetUpdate {
    Replaced(Arc<[AlbumRecord]>),
    /// Fetch failed; carries the collaborator's description.
    Unavailable(String),
}

/// Fetch once and convert the result into a dataset update. No retries:
/// retry policy belongs to the client.
pub async fn load_catalog(client: &dyn CatalogClient) -> DatasetUpdate {
    match client.fetch_albums().await {
        Ok(albums) => {
            info!(count = albums.len(), "catalog fetched");
            DatasetUpdate::Replaced(albums.into())
        }
        Err(err) => {
            warn!(%err, "catalog fetch failed");
            DatasetUpdate::Unavailable(err.to_string())
        }
    }
}
