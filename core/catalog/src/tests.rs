//! FILENAME: core/catalog/src/tests.rs
//! PURPOSE: Unit tests for the catalog model and conversions.

use serde_json::json;

use crate::convert::{catalog_to_table, table_to_catalog};
use crate::error::CatalogError;
use crate::model::{Catalog, Row, Status, Table};

fn entries(catalog: &Catalog) -> Vec<(String, String, String)> {
    catalog
        .entries()
        .map(|(p, o, t)| (p.to_string(), o.to_string(), t.to_string()))
        .collect()
}

fn sample_catalog() -> Catalog {
    Catalog::from_value(json!({
        "scenario/001.ks": {
            "おはよう": "Good morning",
            "さようなら": "",
            "［選択肢］": "[Choice]"
        },
        "a.txt": {
            "Hello": "",
            "Bye": "Goodbye"
        }
    }))
    .unwrap()
}

// ========================================
// BOUNDARY VALIDATION
// ========================================

#[test]
fn from_value_preserves_order() {
    let catalog = sample_catalog();
    let files: Vec<&str> = catalog.files().map(|(path, _)| path).collect();
    assert_eq!(files, vec!["scenario/001.ks", "a.txt"]);

    let originals: Vec<&str> = catalog
        .file("scenario/001.ks")
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(originals, vec!["おはよう", "さようなら", "［選択肢］"]);
    assert_eq!(catalog.entry_count(), 5);
    assert_eq!(catalog.file_count(), 2);
}

#[test]
fn from_value_rejects_non_object_root() {
    let err = Catalog::from_value(json!(["a.txt"])).unwrap_err();
    assert_eq!(
        err,
        CatalogError::Parse {
            path: "$".to_string(),
            message: "expected an object of files, found an array".to_string(),
        }
    );
}

#[test]
fn from_value_rejects_non_object_file() {
    let err = Catalog::from_value(json!({ "a.txt": "Hello" })).unwrap_err();
    match err {
        CatalogError::Parse { path, message } => {
            assert_eq!(path, "$[\"a.txt\"]");
            assert!(message.contains("a string"));
        }
    }
}

#[test]
fn from_value_rejects_non_string_leaf() {
    let err = Catalog::from_value(json!({ "a.txt": { "Hello": 3 } })).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed catalog at $[\"a.txt\"][\"Hello\"]: expected a string, found a number"
    );
}

#[test]
fn from_value_reads_null_as_untranslated() {
    let catalog = Catalog::from_value(json!({ "a.txt": { "Hello": null } })).unwrap();
    assert_eq!(catalog.get("a.txt", "Hello"), Some(""));
}

#[test]
fn from_value_keeps_empty_file() {
    let catalog = Catalog::from_value(json!({ "empty.txt": {} })).unwrap();
    assert_eq!(catalog.file_count(), 1);
    assert_eq!(catalog.entry_count(), 0);
    assert!(catalog_to_table(&catalog).is_empty());
}

// ========================================
// STATUS
// ========================================

#[test]
fn status_is_derived_from_translation() {
    assert_eq!(Status::of(""), Status::Untranslated);
    assert_eq!(Status::of(" "), Status::Translated);
    assert_eq!(Row::new("a.txt", "hi", "salut").status(), Status::Translated);
    assert_eq!(Row::new("a.txt", "hi", "").status().label(), "untranslated");
    assert_eq!(Status::Translated.to_string(), "translated");
}

#[test]
fn summary_counts_statuses() {
    let table = catalog_to_table(&sample_catalog());
    let summary = table.summary();
    assert_eq!(summary.total, 5);
    assert_eq!(summary.translated, 3);
    assert_eq!(summary.untranslated, 2);
}

// ========================================
// CATALOG -> TABLE
// ========================================

#[test]
fn catalog_to_table_example() {
    let catalog = Catalog::from_value(json!({ "a.txt": { "Hello": "", "Bye": "Goodbye" } })).unwrap();
    let table = catalog_to_table(&catalog);

    let rows: Vec<(&str, &str, &str, &str)> = table
        .iter()
        .map(|r| {
            (
                r.file_path.as_str(),
                r.original.as_str(),
                r.translation.as_str(),
                r.status().label(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("a.txt", "Hello", "", "untranslated"),
            ("a.txt", "Bye", "Goodbye", "translated"),
        ]
    );
}

#[test]
fn catalog_to_table_visits_outer_then_inner() {
    let table = catalog_to_table(&sample_catalog());
    let keys: Vec<(&str, &str)> = table
        .iter()
        .map(|r| (r.file_path.as_str(), r.original.as_str()))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("scenario/001.ks", "おはよう"),
            ("scenario/001.ks", "さようなら"),
            ("scenario/001.ks", "［選択肢］"),
            ("a.txt", "Hello"),
            ("a.txt", "Bye"),
        ]
    );
}

#[test]
fn catalog_to_table_on_empty_catalog() {
    assert!(catalog_to_table(&Catalog::new()).is_empty());
}

// ========================================
// TABLE -> CATALOG
// ========================================

#[test]
fn round_trip_reproduces_catalog() {
    let catalog = sample_catalog();
    let conversion = table_to_catalog(&catalog_to_table(&catalog));

    assert_eq!(conversion.written, 5);
    assert_eq!(conversion.skipped, 0);
    assert_eq!(entries(&conversion.catalog), entries(&catalog));
    assert_eq!(conversion.catalog, catalog);
}

#[test]
fn last_write_wins() {
    let table = Table::from(vec![
        Row::new("a.txt", "hi", "bonjour"),
        Row::new("a.txt", "hi", "salut"),
    ]);
    let conversion = table_to_catalog(&table);

    assert_eq!(conversion.catalog.get("a.txt", "hi"), Some("salut"));
    assert_eq!(conversion.written, 2);
    assert_eq!(conversion.catalog.entry_count(), 1);
}

#[test]
fn overwritten_key_keeps_first_position() {
    let table = Table::from(vec![
        Row::new("a.txt", "one", "1"),
        Row::new("a.txt", "two", "2"),
        Row::new("a.txt", "one", "uno"),
    ]);
    let conversion = table_to_catalog(&table);
    assert_eq!(
        entries(&conversion.catalog),
        vec![
            ("a.txt".to_string(), "one".to_string(), "uno".to_string()),
            ("a.txt".to_string(), "two".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn rows_without_keys_are_skipped() {
    let table = Table::from(vec![
        Row::new("", "Hello", "Bonjour"),
        Row::new("a.txt", "", "orphan"),
        Row::new("", "", ""),
        Row::new("a.txt", "Bye", "Au revoir"),
    ]);
    let conversion = table_to_catalog(&table);

    assert_eq!(conversion.written, 1);
    assert_eq!(conversion.skipped, 3);
    assert_eq!(conversion.catalog.file_count(), 1);
    assert_eq!(conversion.catalog.get("a.txt", ""), None);
    assert!(conversion.catalog.file("").is_none());
}

#[test]
fn empty_translation_is_still_written() {
    let table = Table::from(vec![Row::new("a.txt", "Hello", "")]);
    let conversion = table_to_catalog(&table);
    assert_eq!(conversion.written, 1);
    assert_eq!(conversion.catalog.get("a.txt", "Hello"), Some(""));
}

#[test]
fn table_to_catalog_is_idempotent() {
    let table = Table::from(vec![
        Row::new("b.txt", "x", "1"),
        Row::new("a.txt", "y", ""),
        Row::new("b.txt", "x", "2"),
        Row::new("", "z", "dropped"),
    ]);
    let first = table_to_catalog(&table);
    let second = table_to_catalog(&table);
    assert_eq!(first, second);
    assert_eq!(entries(&first.catalog), entries(&second.catalog));
}
