//! FILENAME: core/persistence/src/columns.rs
//! PURPOSE: Header labels of the translation worksheet.

pub const FILE_PATH: &str = "file path (do not edit)";
pub const ORIGINAL: &str = "original";
pub const TRANSLATION: &str = "translation";
pub const STATUS: &str = "status";

/// Header row in the order the writer emits it.
pub const HEADERS: [&str; 4] = [FILE_PATH, ORIGINAL, TRANSLATION, STATUS];

// Workbooks exported by the earlier Chinese-labelled tool.
const LEGACY_FILE_PATH: &str = "文件路径 (勿改)";
const LEGACY_ORIGINAL: &str = "原文";
const LEGACY_TRANSLATION: &str = "译文";
const LEGACY_STATUS: &str = "状态";

/// Logical column a header cell refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FilePath,
    Original,
    Translation,
    Status,
}

impl Column {
    pub fn label(&self) -> &'static str {
        match self {
            Column::FilePath => FILE_PATH,
            Column::Original => ORIGINAL,
            Column::Translation => TRANSLATION,
            Column::Status => STATUS,
        }
    }

    /// Matches a header cell, ignoring surrounding whitespace.
    pub fn from_header(header: &str) -> Option<Self> {
        match header.trim() {
            FILE_PATH | LEGACY_FILE_PATH => Some(Column::FilePath),
            ORIGINAL | LEGACY_ORIGINAL => Some(Column::Original),
            TRANSLATION | LEGACY_TRANSLATION => Some(Column::Translation),
            STATUS | LEGACY_STATUS => Some(Column::Status),
            _ => None,
        }
    }
}
