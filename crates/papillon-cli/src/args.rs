use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::cli::{AccountCommands, GradesCommands, QrCommands, SubjectArgs};

/// Command-line companion for Papillon
///
/// Keeps canteen QR codes, school accounts and their grades in a local
/// database, and assigns colours and emojis to school subjects.
#[derive(Parser)]
#[command(version, about, name = "papillon")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/papillon/papillon.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage canteen QR codes
    #[command(alias = "q")]
    Qr {
        #[command(subcommand)]
        command: QrCommands,
    },
    /// Manage school accounts and multi-service spaces
    #[command(alias = "a")]
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Show the colour, name and emoji of a subject for an account
    #[command(alias = "s")]
    Subject(SubjectArgs),
    /// Refresh and show grades
    #[command(alias = "g")]
    Grades {
        #[command(subcommand)]
        command: GradesCommands,
    },
}

impl Commands {
    /// Snapshot file standing in for the school portal, if the command takes
    /// one.
    pub fn snapshot_file(&self) -> Option<&Path> {
        match self {
            Commands::Grades { command } => command.snapshot_file(),
            _ => None,
        }
    }
}
