//! The configuration tree.
//!
//! A tree is made of nodes, each of which is exactly one of:
//!
//! - a **leaf** holding a [`Scalar`] (bool, int, uint, float, string or nil),
//! - a **dict** mapping field names to child nodes,
//! - an **array** of child nodes, indexable, possibly with holes.
//!
//! [`Config`] is a handle to one node. Handles are cheap to clone and alias
//! the same node: a handle obtained through [`Config::child`] writes straight
//! into the tree it came from.
//!
//! # Ownership
//!
//! Parents own their children. Every child keeps a weak back-reference to its
//! parent plus the key it is attached under; both are only used to rebuild
//! absolute paths ([`Config::path`]) and to answer [`Config::parent`].
//!
//! # Shape
//!
//! A container with no children is shape-neutral and becomes a dict or an
//! array on its first write. Once it has children its shape is fixed: a write
//! that needs the other shape fails with [`Error::TypeMismatch`] and leaves
//! the tree as it was.
//!
//! # Examples
//!
//! ```
//! use cfgtree::{Config, Options};
//!
//! let c = Config::new();
//! c.set_bool("a", Some(0), true, &Options::new()).unwrap();
//! c.set_int("a", Some(1), 42, &Options::new()).unwrap();
//!
//! let a = c.child("a", None, &Options::new()).unwrap();
//! assert!(a.is_array());
//! assert_eq!(c.count_field("a").unwrap(), 2);
//! assert_eq!(c.int("a", Some(1), &Options::new()).unwrap(), 42);
//! ```
//!
//! [`Error::TypeMismatch`]: crate::Error::TypeMismatch

mod accessors;
mod introspect;
mod resolve;
mod scalar;
mod serialize;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use introspect::NodeKind;
pub use scalar::Scalar;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::path::Segment;

/// Handle to a node of a configuration tree.
///
/// Cloning a `Config` clones the handle, not the subtree; use
/// [`Config::deep_clone`] for a structural copy. Equality (`==`) compares
/// structure and values, [`Config::ptr_eq`] compares identity.
///
/// `Config` is deliberately `!Send`: the tree has no internal
/// synchronization.
#[derive(Clone)]
pub struct Config {
    node: Rc<RefCell<Node>>,
}

pub(crate) struct Node {
    value: Value,
    parent: Weak<RefCell<Node>>,
    key: Option<Segment>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Value {
    Leaf(Scalar),
    Dict(BTreeMap<String, Config>),
    /// `None` slots are holes.
    Array(Vec<Option<Config>>),
}

impl Value {
    fn empty() -> Self {
        Self::Dict(BTreeMap::new())
    }

    /// Name used in type mismatch errors.
    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Leaf(scalar) => scalar.describe(),
            Self::Dict(_) => "dict".to_string(),
            Self::Array(_) => "array".to_string(),
        }
    }

    /// Containers without children can still take either shape.
    fn is_neutral(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Dict(fields) => fields.is_empty(),
            Self::Array(elems) => elems.is_empty(),
        }
    }
}

impl Config {
    /// Create an empty, shape-neutral root.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Config;
    ///
    /// let c = Config::new();
    /// assert!(!c.is_dict());
    /// assert!(!c.is_array());
    /// assert!(c.parent().is_none());
    /// assert_eq!(c.path("."), "");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_value(Value::empty())
    }

    /// Create a detached leaf node.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{Config, Options, Scalar};
    ///
    /// let leaf = Config::leaf(Scalar::Int(7));
    /// assert!(leaf.is_leaf());
    /// assert_eq!(leaf.int("", None, &Options::new()).unwrap(), 7);
    /// ```
    #[must_use]
    pub fn leaf(scalar: Scalar) -> Self {
        Self::from_value(Value::Leaf(scalar))
    }

    fn from_value(value: Value) -> Self {
        Self {
            node: Rc::new(RefCell::new(Node {
                value,
                parent: Weak::new(),
                key: None,
            })),
        }
    }

    /// Returns true if both handles point at the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// Copy this subtree into a new, detached tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{Config, Options};
    ///
    /// let c = Config::new();
    /// c.set_int("x", None, 1, &Options::new()).unwrap();
    ///
    /// let copy = c.deep_clone();
    /// copy.set_int("x", None, 2, &Options::new()).unwrap();
    /// assert_eq!(c.int("x", None, &Options::new()).unwrap(), 1);
    /// ```
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        let node = self.node.borrow();
        match &node.value {
            Value::Leaf(scalar) => Self::leaf(scalar.clone()),
            Value::Dict(fields) => {
                let copy = Self::new();
                for (name, child) in fields {
                    copy.attach(Segment::Field(name.clone()), child.deep_clone());
                }
                copy
            }
            Value::Array(elems) => {
                let copy = Self::from_value(Value::Array(vec![None; elems.len()]));
                for (idx, elem) in elems.iter().enumerate() {
                    if let Some(elem) = elem {
                        copy.attach(Segment::Index(idx), elem.deep_clone());
                    }
                }
                copy
            }
        }
    }

    /// Attachment key of this node under its parent, `None` for a root.
    #[must_use]
    pub fn key(&self) -> Option<Segment> {
        self.node.borrow().key.clone()
    }

    /// The leaf value, if this node is a leaf.
    #[must_use]
    pub fn scalar(&self) -> Option<Scalar> {
        match &self.node.borrow().value {
            Value::Leaf(scalar) => Some(scalar.clone()),
            _ => None,
        }
    }

    fn is_detached(&self) -> bool {
        self.node.borrow().parent.upgrade().is_none()
    }

    /// Make `child` a root again; used when it is replaced in its parent.
    fn detach(&self) {
        let mut node = self.node.borrow_mut();
        node.parent = Weak::new();
        node.key = None;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.node.borrow().value == other.node.borrow().value
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node.borrow();
        f.debug_struct("Config")
            .field("key", &node.key)
            .field("value", &node.value)
            .finish()
    }
}
