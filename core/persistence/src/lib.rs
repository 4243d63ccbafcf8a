//! FILENAME: core/persistence/src/lib.rs
//! Transheet Persistence Module
//!
//! Handles loading and saving the catalog as JSON and the translation
//! table as an XLSX workbook.

pub mod columns;
mod error;
mod json;
mod xlsx_reader;
mod xlsx_writer;


pub use error::{ErrorKind, PersistenceError};
pub use json::{catalog_from_json_str, catalog_to_json_string, load_catalog, save_catalog};
pub use xlsx_reader::load_table;
pub use xlsx_writer::save_table;

/// Default worksheet name, matching what spreadsheet programs create.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Options for the exported worksheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOptions {
    pub sheet_name: String,
}

impl SheetOptions {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SHEET_NAME)
    }
}
