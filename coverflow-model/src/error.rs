use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug)]
pub enum ModelError {
    InvalidCoverRef { raw: String, source: url::ParseError },
    InvalidAlbum(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidCoverRef { raw, source } => {
                write!(f, "invalid cover reference '{raw}': {source}")
            }
            ModelError::InvalidAlbum(msg) => write!(f, "invalid album: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::InvalidCoverRef { source, .. } => Some(source),
            ModelError::InvalidAlbum(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
