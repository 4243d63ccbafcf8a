//! FILENAME: core/catalog/src/model.rs
//! PURPOSE: Defines the catalog (nested) and table (flat) shapes of the translation data.
//! CONTEXT: `Catalog` is what lives on disk as JSON, `Table` is what the
//! translator sees in the spreadsheet. Both keep insertion order so the
//! files diff cleanly between runs.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::error::CatalogError;

/// Strings of a single source file: original text -> translated text.
pub type FileEntries = IndexMap<String, String>;

// ============================================================================
// CATALOG
// ============================================================================

/// Nested translation catalog: file path -> { original -> translation }.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    files: IndexMap<String, FileEntries>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates an already-parsed JSON document into a catalog.
    ///
    /// The top level and every file entry must be objects and every leaf a
    /// string. `null` leaves are read as an empty (untranslated) string.
    pub fn from_value(value: Value) -> Result<Self, CatalogError> {
        let root = match value {
            Value::Object(map) => map,
            other => {
                return Err(CatalogError::parse(
                    "$".to_string(),
                    format!("expected an object of files, found {}", describe(&other)),
                ))
            }
        };

        let mut catalog = Catalog::new();
        for (file_path, entries) in root {
            let file_node = format!("$[{}]", quote(&file_path));
            let entries = match entries {
                Value::Object(map) => map,
                other => {
                    return Err(CatalogError::parse(
                        file_node,
                        format!("expected an object of strings, found {}", describe(&other)),
                    ))
                }
            };

            let target = catalog.files.entry(file_path).or_default();
            for (original, translation) in entries {
                let translation = match translation {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => {
                        return Err(CatalogError::parse(
                            format!("{}[{}]", file_node, quote(&original)),
                            format!("expected a string, found {}", describe(&other)),
                        ))
                    }
                };
                target.insert(original, translation);
            }
        }

        Ok(catalog)
    }

    /// Upserts a single entry. An existing key keeps its position and gets
    /// the new translation; the previous translation is returned.
    pub fn insert(
        &mut self,
        file_path: impl Into<String>,
        original: impl Into<String>,
        translation: impl Into<String>,
    ) -> Option<String> {
        self.files
            .entry(file_path.into())
            .or_default()
            .insert(original.into(), translation.into())
    }

    pub fn get(&self, file_path: &str, original: &str) -> Option<&str> {
        self.files
            .get(file_path)
            .and_then(|entries| entries.get(original))
            .map(String::as_str)
    }

    pub fn file(&self, file_path: &str) -> Option<&FileEntries> {
        self.files.get(file_path)
    }

    pub fn files(&self) -> impl Iterator<Item = (&str, &FileEntries)> {
        self.files.iter().map(|(path, entries)| (path.as_str(), entries))
    }

    /// Every (file path, original, translation) triple, outer order then inner order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.files.iter().flat_map(|(path, entries)| {
            entries
                .iter()
                .map(move |(original, translation)| (path.as_str(), original.as_str(), translation.as_str()))
        })
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn entry_count(&self) -> usize {
        self.files.values().map(IndexMap::len).sum()
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn quote(key: &str) -> String {
    Value::String(key.to_string()).to_string()
}

// ============================================================================
// STATUS
// ============================================================================

/// Whether an entry has been translated yet. Always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Translated,
    Untranslated,
}

impl Status {
    pub fn of(translation: &str) -> Self {
        if translation.is_empty() {
            Status::Untranslated
        } else {
            Status::Translated
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Translated => "translated",
            Status::Untranslated => "untranslated",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// ROW / TABLE
// ============================================================================

/// One spreadsheet line. The status column is computed from `translation`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub file_path: String,
    pub original: String,
    pub translation: String,
}

impl Row {
    pub fn new(
        file_path: impl Into<String>,
        original: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Row {
            file_path: file_path.into(),
            original: original.into(),
            translation: translation.into(),
        }
    }

    pub fn status(&self) -> Status {
        Status::of(&self.translation)
    }

    /// A row can only be folded back into a catalog if both keys are present.
    pub fn has_keys(&self) -> bool {
        !self.file_path.is_empty() && !self.original.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub total: usize,
    pub translated: usize,
    pub untranslated: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> TableSummary {
        let translated = self
            .rows
            .iter()
            .filter(|row| row.status() == Status::Translated)
            .count();
        TableSummary {
            total: self.rows.len(),
            translated,
            untranslated: self.rows.len() - translated,
        }
    }
}

impl From<Vec<Row>> for Table {
    fn from(rows: Vec<Row>) -> Self {
        Table { rows }
    }
}

impl FromIterator<Row> for Table {
    fn from_iter<I: IntoIterator<Item = Row>>(iter: I) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
