//! FILENAME: app/src/logging.rs
// PURPOSE: Log output for the command-line tool.
// FORMAT: level target: message, written to stderr

use tracing_subscriber::EnvFilter;

/// Installs the stderr logger. `RUST_LOG` overrides the verbosity flags.
/// The library crates log through `log`; the subscriber picks those up too.
pub fn init(verbosity: i8) {
    let level = match verbosity {
        i8::MIN..=-1 => "error",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
