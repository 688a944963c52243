//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use pbrom_lib::ConsoleType;

#[derive(Parser)]
#[command(name = "pbrom")]
#[command(about = "Browse per-console ROM folders", long_about = None)]
pub(crate) struct Cli {
    /// Console name or alias (e.g., nes, gba, genesis); defaults to the settings file
    #[arg(short, long, global = true)]
    pub console: Option<ConsoleType>,

    /// Storage base containing one folder per console
    #[arg(short, long, global = true)]
    pub base: Option<PathBuf>,

    /// Removable-media base, used instead of --base when it exists
    #[arg(long, global = true)]
    pub removable: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging (accepted/rejected files, cursor moves)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List all supported consoles
    Consoles,

    /// Create the ROM folder for the selected console (or every console)
    Init {
        /// Create folders for every console type
        #[arg(long)]
        all: bool,
    },

    /// Scan the ROM folder and print the catalog
    List,

    /// Print the current ROM
    Current,

    /// Step to the next ROM (wraps around) and save the position
    Next,

    /// Step to the previous ROM (stops at the first) and save the position
    Prev,

    /// Jump to a catalog index and save the position
    Goto {
        /// Zero-based catalog index
        index: usize,
    },

    /// Interactive browsing session on stdin
    Browse,

    /// Manage the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings
    Show,

    /// Print the settings file path
    Path,

    /// Update settings values
    Set {
        /// Internal storage base
        #[arg(long)]
        internal: Option<PathBuf>,

        /// Removable-media storage base
        #[arg(long)]
        removable: Option<PathBuf>,

        /// Console used when --console is not given
        #[arg(long)]
        default_console: Option<ConsoleType>,
    },
}
