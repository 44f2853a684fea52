//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "romshelf")]
#[command(about = "Catalog ROM libraries organized in per-system folders", long_about = None)]
pub(crate) struct Cli {
    /// Library root containing one folder per system (defaults to the saved
    /// root, then the current directory)
    #[arg(short, long, global = true, env = "ROMSHELF_ROOT")]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Scan the library and print a summary of every system
    Scan {
        /// Scan one system folder at a time instead of using workers
        #[arg(long)]
        sequential: bool,

        /// Number of concurrent scan workers (defaults to settings, then CPU count)
        #[arg(short, long)]
        workers: Option<usize>,
    },

    /// Scan the library and write the full catalog as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// List system folders and the metadata convention each one uses
    Systems,

    /// Show or change saved settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the saved settings
    Show,
    /// Print the settings file path
    Path,
    /// Save a default library root
    SetRoot {
        /// Library root to remember
        path: PathBuf,
    },
    /// Forget the saved library root
    ClearRoot,
}
