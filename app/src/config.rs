//! FILENAME: app/src/config.rs
//! PURPOSE: Default file names and resolution of the paths a run works on.
//! CONTEXT: Explicit flags win; otherwise the user is asked, with the
//! default offered. `assume_defaults` skips the questions entirely.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use persistence::SheetOptions;

use crate::cli::Cli;
use crate::prompt::Prompt;

pub const DEFAULT_JSON: &str = "zh.json";
pub const DEFAULT_EXCEL: &str = "translation_work.xlsx";

#[derive(Debug, Clone)]
pub struct Config {
    pub json: Option<PathBuf>,
    pub excel: Option<PathBuf>,
    pub default_json: PathBuf,
    pub default_excel: PathBuf,
    pub sheet: SheetOptions,
    pub assume_defaults: bool,
}

/// The pair of files a conversion reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub json: PathBuf,
    pub excel: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json: None,
            excel: None,
            default_json: PathBuf::from(DEFAULT_JSON),
            default_excel: PathBuf::from(DEFAULT_EXCEL),
            sheet: SheetOptions::default(),
            assume_defaults: false,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Config {
            json: cli.json.clone(),
            excel: cli.excel.clone(),
            assume_defaults: cli.yes,
            ..Config::default()
        };
        if let Some(ref sheet) = cli.sheet {
            config.sheet = SheetOptions::new(sheet.as_str());
        }
        config
    }

    pub fn resolve_paths<R: BufRead, W: Write>(&self, prompt: &mut Prompt<R, W>) -> io::Result<Paths> {
        let json = match (&self.json, self.assume_defaults) {
            (Some(path), _) => path.clone(),
            (None, true) => self.default_json.clone(),
            (None, false) => prompt.ask_path("JSON file", &self.default_json)?,
        };
        let excel = match (&self.excel, self.assume_defaults) {
            (Some(path), _) => path.clone(),
            (None, true) => self.default_excel.clone(),
            (None, false) => prompt.ask_path("Excel file", &self.default_excel)?,
        };
        Ok(Paths { json, excel })
    }
}
