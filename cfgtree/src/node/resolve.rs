//! Walking paths through the tree.
//!
//! Reads fail on the first missing segment. Writes create whatever is
//! missing (auto-vivification), extending arrays with holes as needed, but
//! never reshape a container that already has children.
//!
//! A write runs in two passes. The first pass walks the existing prefix of
//! the path read-only and checks every container against the segment it has
//! to take. Everything past the first missing slot is created fresh, and a
//! fresh node is shape-neutral, so once the check passes the second
//! (mutating) pass cannot fail. A rejected write therefore leaves no
//! half-built nodes behind. The same pass rejects any index above
//! [`MAX_ARRAY_INDEX`], including indices in the part still to be created.

use std::collections::BTreeMap;
use std::rc::Rc;

use super::{Config, Value};
use crate::error::{Error, Result};
use crate::path::{join_key, join_segments, ConfigPath, Segment, MAX_ARRAY_INDEX};

/// Result of looking up one segment in one container.
enum Slot {
    Present(Config),
    Missing,
    WrongShape { found: String },
}

impl Config {
    /// Walk `path` without modifying anything.
    pub(crate) fn lookup(&self, path: &ConfigPath, sep: &str) -> Result<Config> {
        let mut current = self.clone();
        for seg in path.segments() {
            current = match current.slot(seg) {
                Slot::Present(next) => next,
                Slot::Missing => {
                    return Err(Error::NotFound {
                        path: join_key(&current.path(sep), &seg.to_string(), sep),
                    })
                }
                Slot::WrongShape { found } => {
                    return Err(Error::TypeMismatch {
                        path: current.path(sep),
                        expected: seg.container_name(),
                        found,
                    })
                }
            };
        }
        Ok(current)
    }

    /// Store `value` at `path`, creating intermediate nodes.
    ///
    /// The previous occupant of the final slot, if any, is detached.
    pub(crate) fn assign(&self, path: &ConfigPath, sep: &str, value: Config) -> Result<()> {
        let Some((last, prefix)) = path.segments().split_last() else {
            return Err(Error::InvalidPath {
                path: String::new(),
                reason: "an empty path cannot replace the node itself".to_string(),
            });
        };

        self.check_writable(path.segments(), sep)?;

        let mut current = self.clone();
        for seg in prefix {
            current = current.child_or_create(seg, sep)?;
        }
        current.prepare(last, sep)?;
        current.attach(last.clone(), value);
        Ok(())
    }

    fn check_writable(&self, segments: &[Segment], sep: &str) -> Result<()> {
        self.check_indices(segments, sep)?;

        let mut current = self.clone();
        for (pos, seg) in segments.iter().enumerate() {
            current.check_container(seg, sep)?;
            if pos + 1 == segments.len() {
                break;
            }
            match current.slot(seg) {
                Slot::Present(next) => current = next,
                // The rest of the path will be created fresh. A wrong shape
                // cannot show up here after `check_container` passed.
                Slot::Missing | Slot::WrongShape { .. } => break,
            }
        }
        Ok(())
    }

    /// Every index on the path, created or not, must leave room to grow the
    /// array up to it.
    fn check_indices(&self, segments: &[Segment], sep: &str) -> Result<()> {
        let too_large = segments
            .iter()
            .position(|seg| matches!(seg, Segment::Index(idx) if *idx > MAX_ARRAY_INDEX));
        let Some(pos) = too_large else {
            return Ok(());
        };

        let path = join_key(&self.path(sep), &join_segments(&segments[..=pos], sep), sep);
        log::debug!("rejecting write: index in '{path}' exceeds {MAX_ARRAY_INDEX}");
        Err(Error::InvalidPath {
            path,
            reason: format!("array index out of range (maximum is {MAX_ARRAY_INDEX})"),
        })
    }

    fn check_container(&self, seg: &Segment, sep: &str) -> Result<()> {
        let found = {
            let node = self.node.borrow();
            let compatible = match (&node.value, seg) {
                (Value::Dict(_), Segment::Field(_)) | (Value::Array(_), Segment::Index(_)) => true,
                (Value::Leaf(_), _) => false,
                (value, _) => value.is_neutral(),
            };
            if compatible {
                return Ok(());
            }
            node.value.describe()
        };

        let path = self.path(sep);
        log::debug!(
            "rejecting write: '{path}' is {found}, segment '{seg}' needs {}",
            seg.container_name()
        );
        Err(Error::TypeMismatch {
            path,
            expected: seg.container_name(),
            found,
        })
    }

    fn slot(&self, seg: &Segment) -> Slot {
        let node = self.node.borrow();
        match (&node.value, seg) {
            (Value::Dict(fields), Segment::Field(name)) => {
                fields.get(name).cloned().map_or(Slot::Missing, Slot::Present)
            }
            (Value::Array(elems), Segment::Index(idx)) => elems
                .get(*idx)
                .cloned()
                .flatten()
                .map_or(Slot::Missing, Slot::Present),
            (value, _) if value.is_neutral() => Slot::Missing,
            (value, _) => Slot::WrongShape {
                found: value.describe(),
            },
        }
    }

    /// Give a neutral container the shape `seg` needs.
    fn prepare(&self, seg: &Segment, sep: &str) -> Result<()> {
        self.check_container(seg, sep)?;
        reshape_neutral(&mut self.node.borrow_mut().value, seg);
        Ok(())
    }

    fn child_or_create(&self, seg: &Segment, sep: &str) -> Result<Config> {
        self.prepare(seg, sep)?;
        if let Slot::Present(existing) = self.slot(seg) {
            return Ok(existing);
        }

        log::trace!(
            "creating intermediate node '{}'",
            join_key(&self.path(sep), &seg.to_string(), sep)
        );
        let created = Config::new();
        self.attach(seg.clone(), created.clone());
        Ok(created)
    }

    /// Put `child` into the slot `key` of this (already shaped) container.
    pub(crate) fn attach(&self, key: Segment, child: Config) {
        {
            let mut child_node = child.node.borrow_mut();
            child_node.parent = Rc::downgrade(&self.node);
            child_node.key = Some(key.clone());
        }

        let replaced = {
            let mut node = self.node.borrow_mut();
            reshape_neutral(&mut node.value, &key);
            match (&mut node.value, key) {
                (Value::Dict(fields), Segment::Field(name)) => fields.insert(name, child),
                // Writes bound `idx` by `MAX_ARRAY_INDEX` before getting here.
                (Value::Array(elems), Segment::Index(idx)) => {
                    if elems.len() <= idx {
                        elems.resize(idx.saturating_add(1), None);
                    }
                    elems[idx].replace(child)
                }
                // Callers check the container first.
                _ => unreachable!("attach on a container of the wrong shape"),
            }
        };

        if let Some(old) = replaced {
            old.detach();
        }
    }

    /// The node to splice in for `set_child`: `child` itself when it is a
    /// free-standing root, otherwise a copy so the tree stays a tree.
    pub(crate) fn attachable(&self, child: &Config) -> Config {
        if child.is_detached() && !child.ptr_eq(&self.root()) {
            child.clone()
        } else {
            child.deep_clone()
        }
    }
}

fn reshape_neutral(value: &mut Value, seg: &Segment) {
    if !value.is_neutral() {
        return;
    }
    let reshaped = match (&*value, seg) {
        (Value::Dict(_), Segment::Index(_)) => Value::Array(Vec::new()),
        (Value::Array(_), Segment::Field(_)) => Value::Dict(BTreeMap::new()),
        _ => return,
    };
    *value = reshaped;
}
