//! FILENAME: app/src/lib.rs
//! PURPOSE: Wires the command line, prompting and the two conversions together.
//! CONTEXT: `run` is the binary's entry point; `execute` takes the already
//! built configuration and an injectable prompt so it can be driven from tests.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod prompt;

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};
use clap::Parser;

pub use cli::{Cli, Mode};
pub use commands::{excel_to_json, json_to_excel, ImportReport};
pub use config::{Config, Paths, DEFAULT_EXCEL, DEFAULT_JSON};
pub use prompt::Prompt;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity());

    let config = Config::from_cli(&cli);
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());
    execute(cli.mode, &config, &mut prompt)
}

/// Runs one conversion. Without a `mode` the menu is shown first.
pub fn execute<R: BufRead, W: Write>(
    mode: Option<Mode>,
    config: &Config,
    prompt: &mut Prompt<R, W>,
) -> Result<()> {
    let mode = match mode {
        Some(mode) => mode,
        None if config.assume_defaults => bail!("no mode given; pass to-excel or to-json"),
        None => match prompt.choose_mode()? {
            Some(mode) => mode,
            None => bail!("invalid choice"),
        },
    };

    let paths = config.resolve_paths(prompt)?;

    match mode {
        Mode::ToExcel => {
            let summary = json_to_excel(&paths.json, &paths.excel, &config.sheet)?;
            let out = prompt.output();
            writeln!(out, "Converted {} -> {}", paths.json.display(), paths.excel.display())?;
            writeln!(
                out,
                "Total entries: {} ({} translated, {} untranslated)",
                summary.total, summary.translated, summary.untranslated
            )?;
        }
        Mode::ToJson => {
            let report = excel_to_json(&paths.excel, &paths.json)?;
            let out = prompt.output();
            writeln!(out, "Converted {} -> {}", paths.excel.display(), paths.json.display())?;
            writeln!(out, "Rows processed: {}", report.written)?;
            writeln!(out, "Entries in catalog: {}", report.entries)?;
            if report.skipped > 0 {
                writeln!(out, "Rows skipped (no file path or original): {}", report.skipped)?;
            }
        }
    }

    Ok(())
}
