//! Logger setup.
//!
//! Normal command output goes through `log::info!`, so the default format
//! prints bare messages. `--verbose` switches to timestamped records and
//! turns on debug output from the library crates. `RUST_LOG` still wins
//! over both.

use std::io::Write;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Where log records are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget {
    Stdout,
    /// Used when stdout carries data, e.g. JSON export.
    Stderr,
}

/// Level for this binary's own records.
pub(crate) fn cli_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Level for records from the scanning crates. Their per-system info lines
/// only show up with `--verbose`.
pub(crate) fn library_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub(crate) fn init(verbose: bool, quiet: bool, target: LogTarget) {
    let mut builder = Builder::new();
    builder
        .filter_level(cli_level(verbose, quiet))
        .filter_module("romshelf_lib", library_level(verbose).min(cli_level(verbose, quiet)))
        .filter_module("romshelf_frontend", library_level(verbose).min(cli_level(verbose, quiet)))
        .target(match target {
            LogTarget::Stdout => Target::Stdout,
            LogTarget::Stderr => Target::Stderr,
        });

    if !verbose {
        builder.format(|buf, record| {
            if record.level() <= log::Level::Warn {
                let style = buf.default_level_style(record.level());
                writeln!(buf, "{style}{}{style:#}: {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        });
    }

    builder.parse_env(Env::default());
    // A second init (e.g. in tests) keeps the first logger.
    let _ = builder.try_init();
}
