//! Schema error types.

use std::path::PathBuf;

/// Errors that can occur while loading a schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema JSON is malformed or uses an unsupported module kind,
    /// parameter type or platform.
    #[error("invalid schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The schema file could not be read.
    #[error("failed to read schema {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
