//! FILENAME: core/persistence/src/error.rs

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalog(#[from] catalog::CatalogError),

    #[error("XLSX write error: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Column \"{0}\" not found in the header row")]
    MissingColumn(String),
}

/// Coarse classification used when reporting failures to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source file does not exist.
    MissingInput,
    /// The source exists but could not be read or understood.
    Parse,
    /// The destination could not be written.
    Write,
}

impl PersistenceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PersistenceError::MissingInput(_) => ErrorKind::MissingInput,
            PersistenceError::Write { .. } | PersistenceError::XlsxWrite(_) => ErrorKind::Write,
            PersistenceError::Read { .. }
            | PersistenceError::Json(_)
            | PersistenceError::Catalog(_)
            | PersistenceError::XlsxRead(_)
            | PersistenceError::InvalidFormat(_)
            | PersistenceError::SheetNotFound(_)
            | PersistenceError::MissingColumn(_) => ErrorKind::Parse,
        }
    }
}
