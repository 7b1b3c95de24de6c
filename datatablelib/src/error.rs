//! Error types for datatablelib
//!
//! Rendering never fails: malformed cells and filter values degrade to
//! defined fallbacks. Errors only surface at the configuration boundary
//! (loading files, validating column sets, addressing columns by key).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while configuring or driving a table
#[derive(Error, Debug)]
pub enum DatatableError {
    /// Failed to read a configuration or data file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A file did not contain the expected JSON shape
    #[error("invalid JSON in '{path}': {source}")]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// JSON parse error on in-memory input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two columns share the same key
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),

    /// A column key that is not part of the configuration
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// Sorting was requested on a column with `sortable: false`
    #[error("column is not sortable: {0}")]
    NotSortable(String),

    /// Filtering was requested on a column with `filterable: false`
    #[error("column is not filterable: {0}")]
    NotFilterable(String),

    /// Number input was fed to a column that is not of type `number`
    #[error("column is not a number column: {0}")]
    NotNumeric(String),

    /// Page size outside of the supported set
    #[error("invalid page size {0} (expected one of 5, 10, 20, 50, 100)")]
    InvalidPageSize(usize),
}
