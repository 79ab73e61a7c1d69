//! File-backed catalog reading a JSON export of the album list

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use coverflow_model::{AlbumId, AlbumRecord, CoverRef};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CatalogClient, CatalogError};

/// One album as it appears in a catalog export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Catalog-native identifier; mapped to a stable [`AlbumId`].
    pub key: String,
    pub title: String,
    pub artist: String,
    pub artwork_url: String,
    #[serde(default)]
    pub year: Option<u16>,
}

impl TryFrom<CatalogEntry> for AlbumRecord {
    type Error = CatalogError;

    fn try_from(entry: CatalogEntry) -> Result<Self, Self::Error> {
        Ok(AlbumRecord::new(
            AlbumId::from_catalog_key(&entry.key),
            entry.title,
            entry.artist,
            CoverRef::new(entry.artwork_url),
            entry.year,
        )?)
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a JSON array of [`CatalogEntry`] values.
    pub fn parse(raw: &str) -> Result<Vec<AlbumRecord>, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        entries.into_iter().map(AlbumRecord::try_from).collect()
    }
}

#[async_trait]
impl CatalogClient for JsonFileCatalog {
    async fn fetch_albums(&self) -> Result<Vec<AlbumRecord>, CatalogError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let albums = Self::parse(&raw)?;
        debug!(path = %self.path.display(), count = albums.len(), "catalog file parsed");
        Ok(albums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const EXPORT: &str = r#"[
        { "key": "1440857781", "title": "Blue", "artist": "Joni Mitchell",
          "artwork_url": "https://covers.example.com/blue/{w}x{h}.jpg", "year": 1971 },
        { "key": "1440857782", "title": "Hejira", "artist": "Joni Mitchell",
          "artwork_url": "https://covers.example.com/hejira/{w}x{h}.jpg" }
    ]"#;

    #[test]
    fn parses_entries_in_order() {
        let albums = JsonFileCatalog::parse(EXPORT).expect("valid export");
        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].title, "Blue");
        assert_eq!(albums[0].year, Some(1971));
        assert_eq!(albums[1].year, None);
        assert_eq!(albums[1].id, AlbumId::from_catalog_key("1440857782"));
    }

    #[test]
    fn rejects_entries_without_title() {
        let raw = r#"[{ "key": "x", "title": "", "artist": "a", "artwork_url": "u" }]"#;
        assert!(matches!(
            JsonFileCatalog::parse(raw),
            Err(CatalogError::InvalidEntry(_))
        ));
    }

    #[tokio::test]
    async fn reads_export_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(EXPORT.as_bytes()).expect("write export");

        let catalog = JsonFileCatalog::new(file.path());
        let albums = catalog.fetch_albums().await.expect("fetch");
        assert_eq!(albums.len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_an_io_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog = JsonFileCatalog::new(dir.path().join("missing.json"));
        assert!(matches!(
            catalog.fetch_albums().await,
            Err(CatalogError::Io(_))
        ));
    }
}
