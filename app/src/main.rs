//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point.

fn main() -> anyhow::Result<()> {
    transheet_lib::run()
}
