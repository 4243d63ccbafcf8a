//! FILENAME: core/catalog/src/convert.rs
//! PURPOSE: The two conversions between the nested catalog and the flat table.
//! CONTEXT: Both are pure single-pass functions; loading and saving happen
//! in the persistence crate.

use log::debug;

use crate::model::{Catalog, Row, Table};

/// Flattens a catalog into one row per entry, outer order then inner order.
pub fn catalog_to_table(catalog: &Catalog) -> Table {
    catalog
        .entries()
        .map(|(file_path, original, translation)| Row::new(file_path, original, translation))
        .collect()
}

/// Result of folding a table back into a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub catalog: Catalog,
    /// Rows upserted into the catalog, duplicates included.
    pub written: usize,
    /// Rows dropped because the file path or original text was empty.
    pub skipped: usize,
}

/// Rebuilds a catalog from table rows.
///
/// Rows missing a file path or original text are skipped. A repeated
/// (file path, original) pair overwrites the earlier translation, so the
/// last row wins. The incoming status column plays no part.
pub fn table_to_catalog(table: &Table) -> Conversion {
    let mut conversion = Conversion::default();

    for (index, row) in table.iter().enumerate() {
        if !row.has_keys() {
            debug!("skipping row {}: empty file path or original text", index + 1);
            conversion.skipped += 1;
            continue;
        }

        if let Some(previous) = conversion
            .catalog
            .insert(row.file_path.as_str(), row.original.as_str(), row.translation.as_str())
        {
            debug!(
                "row {} overwrites {:?} in {} (was {:?})",
                index + 1,
                row.original,
                row.file_path,
                previous
            );
        }
        conversion.written += 1;
    }

    conversion
}
