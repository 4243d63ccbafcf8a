//! FILENAME: app/src/commands.rs
// PURPOSE: The two conversions, wired to storage.

use std::path::Path;

use anyhow::{Context, Result};
use catalog::{catalog_to_table, table_to_catalog, TableSummary};
use log::info;
use persistence::{load_catalog, load_table, save_catalog, save_table, SheetOptions};

/// Counts reported after folding a workbook back into JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub written: usize,
    pub skipped: usize,
    pub entries: usize,
}

pub fn json_to_excel(json: &Path, excel: &Path, options: &SheetOptions) -> Result<TableSummary> {
    info!("reading JSON {}", json.display());
    let catalog = load_catalog(json).with_context(|| format!("failed to read JSON {}", json.display()))?;

    let table = catalog_to_table(&catalog);
    save_table(&table, excel, options)
        .with_context(|| format!("failed to save Excel {}", excel.display()))?;

    info!("exported {} files to {}", catalog.file_count(), excel.display());
    Ok(table.summary())
}

pub fn excel_to_json(excel: &Path, json: &Path) -> Result<ImportReport> {
    info!("reading Excel {}", excel.display());
    let table = load_table(excel).with_context(|| format!("failed to read Excel {}", excel.display()))?;

    let conversion = table_to_catalog(&table);
    save_catalog(&conversion.catalog, json)
        .with_context(|| format!("failed to save JSON {}", json.display()))?;

    info!("updated {} with {} files", json.display(), conversion.catalog.file_count());
    Ok(ImportReport {
        written: conversion.written,
        skipped: conversion.skipped,
        entries: conversion.catalog.entry_count(),
    })
}
