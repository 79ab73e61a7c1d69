use url::Url;

use crate::error::{ModelError, Result};
use crate::ids::AlbumId;

/// Artwork reference as handed out by the catalog.
///
/// Catalog artwork URLs are frequently templates carrying `{w}` and `{h}`
/// placeholders for the requested pixel size. The raw string is kept as-is
/// and only resolved into a [`Url`] on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CoverRef(pub String);

impl CoverRef {
    pub fn new(raw: impl Into<String>) -> Self {
        CoverRef(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the reference contains size placeholders.
    pub fn is_template(&self) -> bool {
        self.0.contains("{w}") || self.0.contains("{h}")
    }

    /// Resolve the reference for a concrete artwork size.
    pub fn sized(&self, width: u32, height: u32) -> Result<Url> {
        let expanded = self
            .0
            .replace("{w}", &width.to_string())
            .replace("{h}", &height.to_string());
        Url::parse(&expanded).map_err(|source| ModelError::InvalidCoverRef {
            raw: self.0.clone(),
            source,
        })
    }

    /// Resolve the reference without size expansion.
    pub fn to_url(&self) -> Result<Url> {
        Url::parse(&self.0).map_err(|source| ModelError::InvalidCoverRef {
            raw: self.0.clone(),
            source,
        })
    }
}

/// Immutable album value supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlbumRecord {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub cover_ref: CoverRef,
    pub year: Option<u16>,
}

impl AlbumRecord {
    /// Build a record, rejecting entries without a title.
    pub fn new(
        id: AlbumId,
        title: impl Into<String>,
        artist: impl Into<String>,
        cover_ref: CoverRef,
        year: Option<u16>,
    ) -> Result<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModelError::InvalidAlbum(format!(
                "album {id} has an empty title"
            )));
        }
        Ok(Self {
            id,
            title,
            artist: artist.into(),
            cover_ref,
            year,
        })
    }

    /// "Title - Artist (Year)" label used by logs and the CLI.
    pub fn display_label(&self) -> String {
        match self.year {
            Some(year) => format!("{} - {} ({year})", self.title, self.artist),
            None => format!("{} - {}", self.title, self.artist),
        }
    }
}
