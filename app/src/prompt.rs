//! FILENAME: app/src/prompt.rs
//! PURPOSE: Interactive questions for file names and the conversion menu.
//! CONTEXT: Generic over the reader/writer so tests can script the answers.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::cli::Mode;

pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks a question and returns the trimmed answer, or `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a path; an empty answer or end of input picks `default`.
    pub fn ask_path(&mut self, label: &str, default: &Path) -> io::Result<PathBuf> {
        let question = format!("{} (default: {}): ", label, default.display());
        match self.ask(&question)? {
            Some(answer) if !answer.is_empty() => Ok(PathBuf::from(answer)),
            _ => Ok(default.to_path_buf()),
        }
    }

    /// Shows the conversion menu. `Ok(None)` means the answer was not a menu entry.
    pub fn choose_mode(&mut self) -> io::Result<Option<Mode>> {
        writeln!(self.output, "--- Translation catalog converter ---")?;
        writeln!(self.output, "1. JSON -> Excel (send out for translation)")?;
        writeln!(self.output, "2. Excel -> JSON (bring translations back)")?;

        let mode = match self.ask("Choose (1/2): ")?.as_deref() {
            Some("1") => Some(Mode::ToExcel),
            Some("2") => Some(Mode::ToJson),
            _ => None,
        };
        Ok(mode)
    }
}
