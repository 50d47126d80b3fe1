//! Get command implementation.
//!
//! Reads one node of the tree, either as it is stored or through one of the
//! library's typed getters.

use crate::error::CliError;
use crate::utils::{build_tree, render_node, GlobalOptions};
use clap::{Args, ValueEnum};

/// Read a value from the tree.
#[derive(Args)]
pub struct GetCommand {
    /// Path of the value to read
    #[arg(value_name = "PATH", default_value = "")]
    pub path: String,

    /// Array index appended to the path
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Read the value as this type
    #[arg(long = "type", value_enum, default_value = "auto", ignore_case = true)]
    pub as_type: ValueType,
}

/// Type a value is read as.
#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ValueType {
    /// Whatever is stored; containers print as JSON
    Auto,
    /// Boolean
    Bool,
    /// Signed integer
    Int,
    /// Unsigned integer
    Uint,
    /// Floating point number
    Float,
    /// String
    String,
    /// Node kind (empty, leaf, dict or array)
    Kind,
}

impl GetCommand {
    /// Execute the get command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let tree = build_tree(global)?;
        let opts = global.options();
        let (path, idx) = (self.path.as_str(), self.index);

        let output = match self.as_type {
            ValueType::Auto => render_node(&tree.child(path, idx, &opts)?)?,
            ValueType::Bool => tree.bool(path, idx, &opts)?.to_string(),
            ValueType::Int => tree.int(path, idx, &opts)?.to_string(),
            ValueType::Uint => tree.uint(path, idx, &opts)?.to_string(),
            ValueType::Float => tree.float(path, idx, &opts)?.to_string(),
            ValueType::String => tree.string(path, idx, &opts)?,
            ValueType::Kind => tree.child(path, idx, &opts)?.kind().to_string(),
        };

        println!("{output}");
        Ok(())
    }
}
