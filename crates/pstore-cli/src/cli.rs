//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pstore_core::SortField;

#[derive(Debug, Parser)]
#[command(name = "pstore", version, about = "Browse and manage files in your personal storage")]
pub struct Cli {
    /// Path to a TOML config file (defaults to $PSTORE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List stored files
    List {
        /// Only show files whose name contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Sort the listing instead of keeping server order
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Delete a file by id
    Delete {
        id: String,
    },
    /// Store a token obtained from the login page
    Login {
        token: String,
    },
    /// Forget the stored token
    Logout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Size,
    Date,
    Type,
}

impl From<SortArg> for SortField {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Name => SortField::Name,
            SortArg::Size => SortField::Size,
            SortArg::Date => SortField::Date,
            SortArg::Type => SortField::Type,
        }
    }
}
