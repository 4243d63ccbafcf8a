//! FILENAME: core/catalog/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The input did not have the two-level string mapping shape.
    /// `path` points at the offending node, e.g. `$["ui/menu.txt"]["Start"]`.
    #[error("Malformed catalog at {path}: {message}")]
    Parse { path: String, message: String },
}

impl CatalogError {
    pub(crate) fn parse(path: String, message: impl Into<String>) -> Self {
        CatalogError::Parse {
            path,
            message: message.into(),
        }
    }
}
