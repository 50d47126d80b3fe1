//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared across commands: parsing
//! `PATH=VALUE` assignments, building the tree they describe, and rendering
//! single nodes for output.

use crate::error::CliError;
use cfgtree::{Config, Options, Scalar};
use std::str::FromStr;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path separator; empty disables splitting.
    pub sep: String,

    /// Assignments the tree is built from, in order.
    pub assignments: Vec<Assignment>,
}

impl GlobalOptions {
    /// Accessor options for this invocation.
    pub fn options(&self) -> Options {
        Options::new().with_path_sep(self.sep.as_str())
    }
}

/// One `PATH=VALUE` pair from `--set`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// Path to write, split on the global separator.
    pub path: String,
    /// Value to store there.
    pub value: Scalar,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, raw) = s
            .split_once('=')
            .ok_or_else(|| format!("expected PATH=VALUE, got '{s}'"))?;
        if path.is_empty() {
            return Err(format!("missing path in '{s}'"));
        }
        Ok(Self {
            path: path.to_string(),
            value: infer_scalar(raw),
        })
    }
}

/// Infer the scalar type of a raw command-line value.
///
/// `null`, `true` and `false` are recognized literally. Integers become
/// `Int`, or `Uint` when they only fit unsigned; numbers with a fraction or
/// exponent become `Float`. A value wrapped in double quotes is always a
/// string, with the quotes removed. Anything else is a string as given.
pub fn infer_scalar(raw: &str) -> Scalar {
    if let Some(quoted) = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return Scalar::String(quoted.to_string());
    }

    match raw {
        "null" => return Scalar::Nil,
        "true" => return Scalar::Bool(true),
        "false" => return Scalar::Bool(false),
        _ => {}
    }

    if let Ok(i) = raw.parse::<i64>() {
        return Scalar::Int(i);
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Scalar::Uint(u);
    }
    if raw.contains(['.', 'e', 'E']) {
        if let Ok(f) = raw.parse::<f64>() {
            if f.is_finite() {
                return Scalar::Float(f);
            }
        }
    }

    Scalar::String(raw.to_string())
}

/// Build the tree described by the global `--set` assignments.
///
/// Assignments are applied in order; a later one replaces an earlier one at
/// the same path.
pub fn build_tree(global: &GlobalOptions) -> Result<Config, CliError> {
    let opts = global.options();
    let tree = Config::new();

    for assignment in &global.assignments {
        log::debug!("set {} = {}", assignment.path, assignment.value);
        tree.set_scalar(&assignment.path, None, assignment.value.clone(), &opts)?;
    }

    Ok(tree)
}

/// Resolve an optional path against the tree; no path means the root.
pub fn resolve_node(
    tree: &Config,
    path: Option<&str>,
    index: Option<usize>,
    global: &GlobalOptions,
) -> Result<Config, CliError> {
    Ok(tree.child(path.unwrap_or(""), index, &global.options())?)
}

/// Render one node for printing: leaves as their plain value, containers as
/// compact JSON.
pub fn render_node(node: &Config) -> Result<String, CliError> {
    match node.scalar() {
        Some(scalar) => Ok(scalar.to_string()),
        None => serde_json::to_string(node).map_err(|e| CliError::Library(e.into())),
    }
}
