//! Dump command implementation.
//!
//! This module implements the `dump` command, which renders the whole tree
//! (or one subtree) in various formats (YAML, JSON, flat).

use crate::error::CliError;
use crate::utils::{build_tree, resolve_node, GlobalOptions};
use clap::{Args, ValueEnum};

/// Print the tree.
#[derive(Args)]
pub struct DumpCommand {
    /// Subtree to print; omit for the whole tree
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "yaml",
        env = "CFGTREE_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the dump command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML document
    Yaml,
    /// Pretty-printed JSON
    Json,
    /// One `path = value` line per leaf
    Flat,
}

impl From<OutputFormat> for cfgtree::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => cfgtree::OutputFormat::Yaml,
            OutputFormat::Json => cfgtree::OutputFormat::Json,
            OutputFormat::Flat => cfgtree::OutputFormat::Flat,
        }
    }
}

impl DumpCommand {
    /// Execute the dump command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = build_tree(global)?;
        let node = resolve_node(&tree, self.path.as_deref(), None, global)?;

        let format = cfgtree::OutputFormat::from(self.format);
        let formatter = format.create_formatter(global.options().display_sep());
        let output = formatter.format(&node)?;

        // serde_yaml already ends its documents with a newline
        if output.ends_with('\n') {
            print!("{output}");
        } else {
            println!("{output}");
        }
        Ok(())
    }
}
