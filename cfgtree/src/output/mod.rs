//! Output formatting for configuration trees.
//!
//! Trees can be rendered as YAML, JSON, or a flat list of `path = value`
//! lines. All formatters take the tree by reference and never modify it.

mod formatters;

use crate::node::Config;
use crate::Result;

pub use formatters::{FlatFormatter, JsonFormatter, YamlFormatter};

/// Trait for rendering a tree into a string.
pub trait OutputFormatter {
    /// Format the given tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    fn format(&self, tree: &Config) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML document.
    Yaml,
    /// Pretty-printed JSON.
    Json,
    /// One `path = value` line per leaf.
    Flat,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// `sep` is the separator the flat format joins path segments with.
    #[must_use]
    pub fn create_formatter(&self, sep: &str) -> Box<dyn OutputFormatter> {
        match self {
            Self::Yaml => Box::new(YamlFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Flat => Box::new(FlatFormatter::new(sep)),
        }
    }
}
