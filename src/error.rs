//! Error types for the content pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading and resolving content
#[derive(Error, Debug)]
pub enum ContentError {
    /// A directory or file in the content store could not be read
    #[error("storage error at {path:?}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry's content does not match its expected schema
    #[error("parse error in {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    /// No backing file exists for the requested identifier
    #[error("no entry found for id `{id}`")]
    NotFound { id: String },
}

impl ContentError {
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContentError::not_found("missing-post");
        assert_eq!(err.to_string(), "no entry found for id `missing-post`");

        let err = ContentError::parse("/tmp/a.md", "missing field `title`");
        assert!(err.to_string().contains("a.md"));
        assert!(err.to_string().contains("missing field `title`"));
    }
}
