//! Output formatter implementations.

use super::OutputFormatter;
use crate::node::Config;
use crate::Result;

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, tree: &Config) -> Result<String> {
        Ok(serde_yaml::to_string(tree)?)
    }
}

/// Formatter for pretty-printed JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, tree: &Config) -> Result<String> {
        Ok(serde_json::to_string_pretty(tree)?)
    }
}

/// Formatter printing one `path = value` line per leaf.
///
/// Lines are sorted by path. Strings are quoted, empty containers are
/// printed as `{}`.
pub struct FlatFormatter {
    sep: String,
}

impl FlatFormatter {
    /// Create a flat formatter joining path segments with `sep`.
    #[must_use]
    pub fn new(sep: &str) -> Self {
        Self {
            sep: sep.to_string(),
        }
    }
}

impl OutputFormatter for FlatFormatter {
    fn format(&self, tree: &Config) -> Result<String> {
        let mut lines = Vec::new();

        if tree.is_leaf() {
            lines.push(serde_json::to_string(tree)?);
        }

        for (key, node) in tree.flattened_entries(&self.sep) {
            let rendered = if node.is_leaf() {
                serde_json::to_string(&node)?
            } else {
                "{}".to_string()
            };
            lines.push(format!("{key} = {rendered}"));
        }

        Ok(lines.join("\n"))
    }
}
