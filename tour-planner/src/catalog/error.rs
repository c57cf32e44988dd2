//! Catalog error types.

use std::io;
use std::path::PathBuf;

/// Errors that can occur when reading a ticket catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be opened
    #[error("failed to open catalog {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Delimited-text framing failed (I/O error or invalid UTF-8)
    #[error("malformed catalog: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not have exactly six fields
    #[error("line {line}: expected 6 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    /// A field could not be parsed
    #[error("line {line}: invalid {field}: {message}")]
    Field {
        line: u64,
        field: &'static str,
        message: String,
    },
}
