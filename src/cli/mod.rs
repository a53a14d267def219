//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{CatalogCommand, CheckCommand, InitCommand};
use std::ffi::OsString;

/// Bitrise step catalog and workflow scaffolder
#[derive(Debug, Parser, Clone)]
#[command(name = "steplist")]
#[command(author = "Steplist Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Bitrise step catalog and workflow scaffolder", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List pinned catalog steps
    Catalog(CatalogCommand),

    /// Scaffold a bitrise.yml for a project
    Init(InitCommand),

    /// Check step references in a bitrise.yml against the catalog
    Check(CheckCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
