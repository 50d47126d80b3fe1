//! Keys command implementation.
//!
//! Prints the full path of every leaf below a node, sorted, one per line.

use crate::error::CliError;
use crate::utils::{build_tree, resolve_node, GlobalOptions};
use clap::Args;

/// List the paths of all leaves.
#[derive(Args)]
pub struct KeysCommand {
    /// Node to list under; omit for the root
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

impl KeysCommand {
    /// Execute the keys command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = build_tree(global)?;
        let node = resolve_node(&tree, self.path.as_deref(), None, global)?;

        for key in node.flattened_keys(&global.options()) {
            println!("{key}");
        }
        Ok(())
    }
}
