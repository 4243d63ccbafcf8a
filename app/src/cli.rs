//! FILENAME: app/src/cli.rs
// PURPOSE: Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "transheet")]
#[command(about = "Convert a translation catalog between JSON and an Excel workbook")]
#[command(version)]
pub struct Cli {
    /// Conversion to run. Without it an interactive menu is shown.
    #[arg(value_enum)]
    pub mode: Option<Mode>,

    /// Path of the JSON catalog
    #[arg(short, long)]
    pub json: Option<PathBuf>,

    /// Path of the Excel workbook
    #[arg(short, long)]
    pub excel: Option<PathBuf>,

    /// Never prompt; fall back to the default file names
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Worksheet name used when exporting
    #[arg(long)]
    pub sheet: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            self.verbose.min(i8::MAX as u8) as i8
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// JSON catalog -> Excel workbook, for translating
    #[value(alias = "to_excel")]
    ToExcel,
    /// Excel workbook -> JSON catalog, to fold translations back in
    #[value(alias = "to_json")]
    ToJson,
}
