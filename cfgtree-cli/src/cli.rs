//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, CountCommand, DumpCommand, FieldsCommand, GetCommand, KeysCommand,
    PathCommand,
};
use crate::utils::Assignment;
use clap::{Parser, Subcommand};

/// Build a configuration tree from assignments and query it.
#[derive(Parser)]
#[command(name = "cfgtree")]
#[command(version, about = "Build and query hierarchical configuration trees", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path separator (empty to disable splitting)
    #[arg(
        long,
        value_name = "SEP",
        global = true,
        env = "CFGTREE_PATH_SEP",
        default_value = "."
    )]
    pub sep: String,

    /// Store VALUE at PATH before running the command (repeatable)
    #[arg(long = "set", value_name = "PATH=VALUE", global = true)]
    pub assignments: Vec<Assignment>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Read a value from the tree
    Get(GetCommand),

    /// Count the children of a node
    Count(CountCommand),

    /// List the field names of a dict
    Fields(FieldsCommand),

    /// List the paths of all leaves
    Keys(KeysCommand),

    /// Show the absolute path of a node
    Path(PathCommand),

    /// Print the tree
    Dump(DumpCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
