// FILENAME: core/persistence/src/xlsx_reader.rs

use crate::columns::Column;
use crate::PersistenceError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use catalog::{Row, Table};
use log::{debug, warn};
use std::path::Path;

/// Positions of the known columns within the header row.
#[derive(Debug, Default)]
struct ColumnMap {
    file_path: Option<usize>,
    original: Option<usize>,
    translation: Option<usize>,
}

impl ColumnMap {
    fn from_header(header: &[Data]) -> Self {
        let mut map = ColumnMap::default();
        for (idx, cell) in header.iter().enumerate() {
            let slot = match Column::from_header(&cell_to_string(cell)) {
                Some(Column::FilePath) => &mut map.file_path,
                Some(Column::Original) => &mut map.original,
                Some(Column::Translation) => &mut map.translation,
                // Status is derived, its cells are never read
                Some(Column::Status) | None => continue,
            };
            if slot.is_none() {
                *slot = Some(idx);
            }
        }
        map
    }
}

/// Loads the first worksheet of `path` as a table. The first row is the header.
pub fn load_table(path: &Path) -> Result<Table, PersistenceError> {
    if !path.exists() {
        return Err(PersistenceError::MissingInput(path.to_path_buf()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PersistenceError::InvalidFormat("Workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PersistenceError::SheetNotFound(format!("{}: {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header = match rows.next() {
        Some(header) => header,
        None => {
            return Err(PersistenceError::InvalidFormat(format!(
                "Sheet \"{}\" is empty",
                sheet_name
            )))
        }
    };

    let columns = ColumnMap::from_header(header);
    let file_path_col = columns
        .file_path
        .ok_or_else(|| PersistenceError::MissingColumn(Column::FilePath.label().to_string()))?;
    let original_col = columns
        .original
        .ok_or_else(|| PersistenceError::MissingColumn(Column::Original.label().to_string()))?;
    if columns.translation.is_none() {
        warn!(
            "no \"{}\" column in sheet \"{}\"; every entry will be untranslated",
            Column::Translation.label(),
            sheet_name
        );
    }

    let mut table = Table::new();
    for cells in rows {
        if cells.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        let read = |col: Option<usize>| {
            col.and_then(|c| cells.get(c))
                .map(cell_to_string)
                .unwrap_or_default()
        };
        table.push(Row::new(
            read(Some(file_path_col)),
            read(Some(original_col)),
            read(columns.translation),
        ));
    }

    debug!("read {} rows from sheet \"{}\" of {}", table.len(), sheet_name, path.display());
    Ok(table)
}

/// Every cell is treated as text; blanks and error cells become "".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => unescape_xstring(s),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if !dt.is_duration() => datetime.format(DATETIME_FORMAT).to_string(),
            _ => format_number(dt.as_f64()),
        },
    }
}

// Same shape as a date cell read as text by pandas
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn format_number(n: f64) -> String {
    // Drop the ".0" on whole numbers so a typed "42" reads back as "42"
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

/// Decodes the `_xHHHH_` escapes of an OOXML string (ST_Xstring).
///
/// Writers use them for control characters and `\r`, and escape a literal
/// `_xHHHH_` as `_x005F_xHHHH_`. Decoded text is not rescanned.
fn unescape_xstring(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find("_x") {
        out.push_str(&rest[..pos]);
        let candidate = &rest[pos..];
        match decode_escape(candidate) {
            Some(ch) => {
                out.push(ch);
                rest = &candidate[7..];
            }
            None => {
                out.push_str("_x");
                rest = &candidate[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// `s` starts with `_x`; returns the character if it is a full `_xHHHH_` escape.
fn decode_escape(s: &str) -> Option<char> {
    let bytes = s.as_bytes();
    if bytes.len() < 7 || bytes[6] != b'_' || !bytes[2..6].iter().all(u8::is_ascii_hexdigit) {
        return None;
    }
    u32::from_str_radix(&s[2..6], 16).ok().and_then(char::from_u32)
}
