//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::columns::HEADERS;
use crate::{PersistenceError, SheetOptions};
use catalog::Table;
use log::debug;
use rust_xlsxwriter::{Format, FormatAlign, Workbook as XlsxWorkbook};
use std::path::Path;

// Column widths in Excel character units, one per header.
const COLUMN_WIDTHS: [f64; 4] = [36.0, 48.0, 48.0, 14.0];

pub fn save_table(table: &Table, path: &Path, options: &SheetOptions) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    let header_format = Format::new().set_bold();
    let text_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, width)?;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
    }
    // Keep the header visible while scrolling
    worksheet.set_freeze_panes(1, 0)?;

    for (index, row) in table.iter().enumerate() {
        let xlsx_row = u32::try_from(index + 1).map_err(|_| {
            PersistenceError::InvalidFormat(format!("too many rows for a worksheet: {}", table.len()))
        })?;

        let cells = [
            row.file_path.as_str(),
            row.original.as_str(),
            row.translation.as_str(),
            row.status().label(),
        ];
        for (col, value) in cells.iter().enumerate() {
            // Blank cells read back as empty strings
            if value.is_empty() {
                continue;
            }
            worksheet.write_string_with_format(xlsx_row, col as u16, *value, &text_format)?;
        }
    }

    xlsx.save(path)?;
    debug!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
