//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for transheet integration tests.

#![allow(dead_code)]

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;
use transheet_lib::{execute, Config, Mode, Prompt};

pub const SAMPLE_JSON: &str = r#"{
    "scenario/001.ks": {
        "「おはよう」": "「早上好」",
        "さようなら": ""
    },
    "a.txt": {
        "Hello": "",
        "Bye": "Goodbye"
    }
}"#;

/// A scratch directory whose default file names live inside it.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn with_sample_json() -> Self {
        let harness = Self::new();
        harness.write_json(SAMPLE_JSON);
        harness
    }

    pub fn json_path(&self) -> PathBuf {
        self.dir.path().join("zh.json")
    }

    pub fn excel_path(&self) -> PathBuf {
        self.dir.path().join("translation_work.xlsx")
    }

    pub fn write_json(&self, text: &str) {
        fs::write(self.json_path(), text).expect("write json fixture");
    }

    pub fn read_json(&self) -> String {
        fs::read_to_string(self.json_path()).expect("read json output")
    }

    /// Config whose defaults point into the scratch directory.
    pub fn config(&self) -> Config {
        Config {
            default_json: self.json_path(),
            default_excel: self.excel_path(),
            ..Config::default()
        }
    }

    /// Runs a conversion with scripted stdin; returns (result, stdout text).
    pub fn run(&self, mode: Option<Mode>, config: &Config, stdin: &str) -> (anyhow::Result<()>, String) {
        let mut prompt = Prompt::new(Cursor::new(stdin.as_bytes().to_vec()), Vec::new());
        let result = execute(mode, config, &mut prompt);
        let output = String::from_utf8(prompt.into_output()).expect("utf-8 output");
        (result, output)
    }
}
