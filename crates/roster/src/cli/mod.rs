//! CLI argument parsing and command dispatch.
//!
//! This module provides the command-line interface for roster using clap's derive API.
//! Each command has its own argument struct with validation and helpful error messages.
//!
//! # Commands
//!
//! - `init`: Write a default `roster.yaml`
//! - `list`: Search, sort and page through employees
//! - `show`: Show one employee
//! - `add`: Add an employee
//! - `update`: Change fields of an employee
//! - `delete`: Delete an employee
//! - `groups`: List the group reference data
//! - `shell`: Run commands interactively against one store
//!
//! # Global Flags
//!
//! - `--json`: Output in JSON format (applies to all commands)
//! - `--config`: Read configuration from the given file
//!
//! # Example
//!
//! ```bash
//! roster list --status Active --sort-by basicSalary --order desc --page 2
//! roster show 42
//! roster update 42 --status inactive
//! roster groups --search ops
//! ```
//!
//! The store lives in memory and is seeded on every start, so changes made
//! by `add`, `update` and `delete` only carry over to later commands inside
//! a `shell` session.

mod args;
mod execute;
mod shell;
mod types;
mod validators;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Re-export argument structs
pub use args::{AddArgs, DeleteArgs, GroupsArgs, InitArgs, ListArgs, ShowArgs, UpdateArgs};

// Re-export types
pub use types::StatusArg;

// Re-export validators for external use
pub use validators::{
    parse_date, parse_employee_id, parse_salary, parse_timestamp, validate_email,
    validate_non_blank,
};

pub use shell::split_line;

/// Roster - employee records administration
///
/// Search, page through and edit a seeded set of employee records.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./roster.yaml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default configuration file
    ///
    /// Creates `roster.yaml` in the current directory with every setting at
    /// its default value.
    Init(InitArgs),

    /// List employees with optional filters
    ///
    /// Text filters match case-insensitive substrings; status must match
    /// exactly. Results are sorted, then split into pages.
    List(ListArgs),

    /// Show all fields of an employee
    Show(ShowArgs),

    /// Add a new employee
    ///
    /// The new employee gets an id one higher than any id used so far.
    Add(AddArgs),

    /// Update an existing employee
    ///
    /// Only provided fields are changed; other fields remain unchanged.
    Update(UpdateArgs),

    /// Delete an employee
    ///
    /// Use `--force` to skip confirmation.
    Delete(DeleteArgs),

    /// List the available groups
    Groups(GroupsArgs),

    /// Start an interactive session
    ///
    /// Reads commands line by line against a single seeded store, so
    /// changes are visible to later commands. Type `exit` or `quit` to leave.
    Shell,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Output mode selected by the global flags
    pub fn output_mode(&self) -> crate::output::OutputMode {
        if self.json {
            crate::output::OutputMode::Json
        } else {
            crate::output::OutputMode::Text
        }
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;

        let output_mode = self.output_mode();
        let current_dir = std::env::current_dir()?;

        match &self.command {
            Some(Commands::Init(args)) => execute::execute_init(args, &current_dir).await,
            Some(Commands::Shell) => {
                let mut app = App::from_directory(self.config.as_deref(), &current_dir).await?;
                shell::run(&mut app, output_mode, &mut std::io::stdin().lock()).await
            }
            Some(command) => {
                let mut app = App::from_directory(self.config.as_deref(), &current_dir).await?;
                execute::run(&mut app, command, output_mode, &mut std::io::stdin().lock()).await
            }
            None => {
                println!("Roster employee records");
                println!("Use --help for more information");
                Ok(())
            }
        }
    }
}
