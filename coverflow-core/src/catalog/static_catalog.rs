use async_trait::async_trait;
use coverflow_model::{AlbumId, AlbumRecord, CoverRef};

use super::{CatalogClient, CatalogError};

/// In-memory catalog, used for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    albums: Vec<AlbumRecord>,
}

impl StaticCatalog {
    pub fn new(albums: Vec<AlbumRecord>) -> Self {
        Self { albums }
    }

    /// `count` placeholder albums with stable ids.
    pub fn sample(count: usize) -> Self {
        let albums = (0..count)
            .map(|i| AlbumRecord {
                id: AlbumId::from_catalog_key(&format!("sample-{i}")),
                title: format!("Album {i}"),
                artist: format!("Artist {}", i % 7),
                cover_ref: CoverRef::new(format!(
                    "https://covers.example.com/{i}/{{w}}x{{h}}.jpg"
                )),
                year: Some(1960 + (i % 60) as u16),
            })
            .collect();
        Self { albums }
    }

    pub fn albums(&self) -> &[AlbumRecord] {
        &self.albums
    }
}

#[async_trait]
impl CatalogClient for StaticCatalog {
    async fn fetch_albums(&self) -> Result<Vec<AlbumRecord>, CatalogError> {
        Ok(self.albums.clone())
    }
}
