//! Generic introspection: shape, fields, counts, parents and paths.

use std::fmt;

use super::{Config, Value};
use crate::error::Result;
use crate::options::Options;
use crate::path::{join_key, ConfigPath};

/// What a node currently holds.
///
/// `Empty` is a container without children, which has no shape yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Container without children.
    Empty,
    /// Scalar leaf.
    Leaf,
    /// Dict with at least one field.
    Dict,
    /// Array with at least one slot.
    Array,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Leaf => write!(f, "leaf"),
            Self::Dict => write!(f, "dict"),
            Self::Array => write!(f, "array"),
        }
    }
}

impl Config {
    /// Current kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match &self.node.borrow().value {
            Value::Leaf(_) => NodeKind::Leaf,
            value if value.is_neutral() => NodeKind::Empty,
            Value::Dict(_) => NodeKind::Dict,
            Value::Array(_) => NodeKind::Array,
        }
    }

    /// Returns true if this node is a dict with at least one field.
    #[must_use]
    pub fn is_dict(&self) -> bool {
        self.kind() == NodeKind::Dict
    }

    /// Returns true if this node is an array with at least one slot.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.kind() == NodeKind::Array
    }

    /// Returns true if this node is a scalar leaf.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Leaf
    }

    /// Returns true if this node is a dict holding `name`.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        match &self.node.borrow().value {
            Value::Dict(fields) => fields.contains_key(name),
            _ => false,
        }
    }

    /// Names of the direct fields of a dict; empty for anything else.
    #[must_use]
    pub fn get_fields(&self) -> Vec<String> {
        match &self.node.borrow().value {
            Value::Dict(fields) => fields.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Count the children of this node (`name` empty) or of its child `name`.
    ///
    /// Dicts count their fields, arrays their length including holes, and a
    /// leaf counts as 1. `name` is a single segment: it is never split, and
    /// a digit-only name addresses an array index.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NotFound`] if `name` does not exist and
    /// [`crate::Error::TypeMismatch`] if `name` does not fit this node's
    /// shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{Config, Options};
    ///
    /// let c = Config::new();
    /// c.set_int("a", Some(0), 1, &Options::new()).unwrap();
    /// c.set_int("a", Some(5), 2, &Options::new()).unwrap();
    ///
    /// assert_eq!(c.count_field("a").unwrap(), 6);
    /// assert_eq!(c.count_field("").unwrap(), 1);
    /// ```
    pub fn count_field(&self, name: &str) -> Result<usize> {
        if name.is_empty() {
            return Ok(self.len());
        }
        let opts = Options::new();
        let target = ConfigPath::parse(name, None, &opts)?;
        Ok(self.lookup(&target, opts.display_sep())?.len())
    }

    /// Number of direct children; 1 for a leaf.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.node.borrow().value {
            Value::Leaf(_) => 1,
            Value::Dict(fields) => fields.len(),
            Value::Array(elems) => elems.len(),
        }
    }

    /// Returns true for a container without children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind() == NodeKind::Empty
    }

    /// The node this one is attached to, `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<Config> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| Config { node })
    }

    /// The root of the tree this node belongs to.
    #[must_use]
    pub fn root(&self) -> Config {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Absolute path of this node, keys joined with `sep`.
    ///
    /// A root has the empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{Config, Options};
    ///
    /// let c = Config::new();
    /// c.set_int("a.0.b", None, 1, &Options::new().with_path_sep(".")).unwrap();
    ///
    /// let b = c.child("a.0.b", None, &Options::new().with_path_sep(".")).unwrap();
    /// assert_eq!(b.path("/"), "a/0/b");
    /// assert_eq!(c.path("/"), "");
    /// ```
    #[must_use]
    pub fn path(&self, sep: &str) -> String {
        let mut keys = Vec::new();
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            if let Some(key) = current.key() {
                keys.push(key.to_string());
            }
            current = parent;
        }
        keys.reverse();
        keys.join(sep)
    }

    /// Absolute path a field of this node has (or would have).
    #[must_use]
    pub fn path_of(&self, field: &str, sep: &str) -> String {
        join_key(&self.path(sep), field, sep)
    }

    /// Paths of every leaf below this node, relative to it and sorted.
    ///
    /// Empty containers are listed too, since they carry no leaf of their
    /// own; holes are skipped. Keys are joined with the options' separator,
    /// `"."` by default.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{Config, Options};
    ///
    /// let opts = Options::new().with_path_sep(".");
    /// let c = Config::new();
    /// c.set_int("server.port", None, 80, &opts).unwrap();
    /// c.set_string("hosts.1", None, "b", &opts).unwrap();
    ///
    /// assert_eq!(c.flattened_keys(&opts), vec!["hosts.1", "server.port"]);
    /// ```
    #[must_use]
    pub fn flattened_keys(&self, opts: &Options) -> Vec<String> {
        self.flattened_entries(opts.display_sep())
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    /// Like [`Config::flattened_keys`], keeping the node for each key.
    pub(crate) fn flattened_entries(&self, sep: &str) -> Vec<(String, Config)> {
        let mut entries = Vec::new();
        self.collect_entries("", sep, &mut entries);
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    fn collect_entries(&self, prefix: &str, sep: &str, out: &mut Vec<(String, Config)>) {
        let children: Vec<(String, Config)> = match &self.node.borrow().value {
            Value::Leaf(_) => Vec::new(),
            Value::Dict(fields) => fields
                .iter()
                .map(|(name, child)| (name.clone(), child.clone()))
                .collect(),
            Value::Array(elems) => elems
                .iter()
                .enumerate()
                .filter_map(|(idx, elem)| elem.as_ref().map(|e| (idx.to_string(), e.clone())))
                .collect(),
        };

        if children.is_empty() {
            if !prefix.is_empty() {
                out.push((prefix.to_string(), self.clone()));
            }
            return;
        }

        for (key, child) in children {
            child.collect_entries(&join_key(prefix, &key, sep), sep, out);
        }
    }
}
