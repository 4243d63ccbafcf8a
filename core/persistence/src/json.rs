//! FILENAME: core/persistence/src/json.rs
//! PURPOSE: Loads and saves the catalog as a JSON document.
//! CONTEXT: Output uses 4-space indentation and writes non-ASCII text
//! as-is, so full-width punctuation stays readable in diffs.

use std::fs;
use std::path::Path;

use catalog::Catalog;
use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};

use crate::PersistenceError;

const INDENT: &[u8] = b"    ";
const BOM: char = '\u{feff}';

pub fn load_catalog(path: &Path) -> Result<Catalog, PersistenceError> {
    if !path.exists() {
        return Err(PersistenceError::MissingInput(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = catalog_from_json_str(&text)?;
    debug!(
        "loaded {} entries in {} files from {}",
        catalog.entry_count(),
        catalog.file_count(),
        path.display()
    );
    Ok(catalog)
}

pub fn catalog_from_json_str(text: &str) -> Result<Catalog, PersistenceError> {
    let value: Value = serde_json::from_str(text.trim_start_matches(BOM))?;
    Ok(Catalog::from_value(value)?)
}

pub fn catalog_to_json_string(catalog: &Catalog) -> Result<String, PersistenceError> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    catalog.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    String::from_utf8(buf).map_err(|e| PersistenceError::InvalidFormat(e.to_string()))
}

pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), PersistenceError> {
    let text = catalog_to_json_string(catalog)?;
    fs::write(path, text).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote {} entries to {}", catalog.entry_count(), path.display());
    Ok(())
}
