//! Fields command implementation.

use crate::error::CliError;
use crate::utils::{build_tree, resolve_node, GlobalOptions};
use clap::Args;

/// List the field names of a dict, one per line.
#[derive(Args)]
pub struct FieldsCommand {
    /// Dict to list; omit for the root
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

impl FieldsCommand {
    /// Execute the fields command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = build_tree(global)?;
        let node = resolve_node(&tree, self.path.as_deref(), None, global)?;

        for field in node.get_fields() {
            println!("{field}");
        }
        Ok(())
    }
}
