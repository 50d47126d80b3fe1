//! Command to show the absolute path of a node.
//!
//! The node is looked up and its path is rebuilt from its parent links, so
//! the output shows how the lookup was actually resolved.

use crate::error::CliError;
use crate::utils::{build_tree, GlobalOptions};
use clap::Args;

/// Show the absolute path of a node.
#[derive(Args)]
pub struct PathCommand {
    /// Node to look up
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,

    /// Array index appended to the path
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Separator to print between segments (defaults to --sep, or ".")
    #[arg(long, value_name = "SEP")]
    pub display_sep: Option<String>,
}

impl PathCommand {
    /// Execute the path command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = build_tree(global)?;
        let opts = global.options();
        let node = tree.child(&self.path, self.index, &opts)?;

        let sep = self
            .display_sep
            .unwrap_or_else(|| opts.display_sep().to_string());
        println!("{}", node.path(&sep));
        Ok(())
    }
}
