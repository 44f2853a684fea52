//! romshelf CLI
//!
//! Command-line interface for cataloging ROM libraries that keep one folder
//! per system, with Pegasus or EmulationStation metadata where available.

mod cli_types;
mod commands;
mod error;
mod logging;
mod spinner;

use std::process::ExitCode;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::ScanMode;
use error::CliError;
use logging::LogTarget;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // JSON on stdout must not be interleaved with log output
    let target = match &cli.command {
        Commands::Export { output: None, .. } => LogTarget::Stderr,
        _ => LogTarget::Stdout,
    };
    logging::init(cli.verbose, cli.quiet, target);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;
    let root = || romshelf_lib::settings::resolve_library_path(cli.root.clone());

    match cli.command {
        Commands::Scan {
            sequential,
            workers,
        } => commands::scan::run_scan(
            &root(),
            ScanMode {
                sequential,
                workers,
                quiet,
            },
        ),
        Commands::Export { ref output, compact } => commands::export::run_export(
            &root(),
            ScanMode {
                sequential: false,
                workers: None,
                quiet,
            },
            output.as_deref(),
            compact,
        ),
        Commands::Systems => commands::systems::run_systems(&root()),
        Commands::Config { ref action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::SetRoot { path } => commands::config::run_config_set_root(path),
            ConfigAction::ClearRoot => commands::config::run_config_clear_root(),
        },
    }
}
