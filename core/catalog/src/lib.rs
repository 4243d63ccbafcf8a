//! FILENAME: core/catalog/src/lib.rs
//! PURPOSE: Library root for the translation catalog model.
//! CONTEXT: A catalog maps a source file path to its strings
//! (original -> translation). Translators edit it as a flat table,
//! so this crate owns both shapes and the conversions between them.
//!
//! PIPELINE: JSON Value --> Catalog --> Table --> (spreadsheet) --> Table --> Catalog

pub mod convert;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use convert::{catalog_to_table, table_to_catalog, Conversion};
pub use error::CatalogError;
pub use model::{Catalog, FileEntries, Row, Status, Table, TableSummary};
