#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("column {column:?} is declared more than once")]
    DuplicateColumn { column: String },

    #[error("invalid constraint on column {column:?}: {message}")]
    InvalidConstraint { column: String, message: String },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
