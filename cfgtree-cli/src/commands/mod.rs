//! CLI command implementations.
//!
//! Every command first builds the tree from the global `--set` assignments,
//! then runs one query against it:
//! - `get`: Read a value, optionally through a typed getter
//! - `count`: Count the children of a node
//! - `fields`: List the field names of a dict
//! - `keys`: List the paths of all leaves
//! - `path`: Show the absolute path of a node
//! - `dump`: Print the tree as YAML, JSON, or flat lines
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod count;
pub mod dump;
pub mod fields;
pub mod get;
pub mod keys;
pub mod path;

pub use completions::CompletionsCommand;
pub use count::CountCommand;
pub use dump::DumpCommand;
pub use fields::FieldsCommand;
pub use get::GetCommand;
pub use keys::KeysCommand;
pub use path::PathCommand;
