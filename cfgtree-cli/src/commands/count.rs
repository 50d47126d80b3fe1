//! Count command implementation.

use crate::error::CliError;
use crate::utils::{build_tree, resolve_node, GlobalOptions};
use clap::Args;

/// Count the children of a node.
///
/// With NAME, counts the field of that exact name (never split on the
/// separator). Without it, counts the node's own children. Arrays count
/// their holes.
#[derive(Args)]
pub struct CountCommand {
    /// Field to count; omit to count the node itself
    #[arg(value_name = "NAME", default_value = "")]
    pub name: String,

    /// Node to count under, instead of the root
    #[arg(long, value_name = "PATH")]
    pub at: Option<String>,
}

impl CountCommand {
    /// Execute the count command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = build_tree(global)?;
        let node = resolve_node(&tree, self.at.as_deref(), None, global)?;

        println!("{}", node.count_field(&self.name)?);
        Ok(())
    }
}
