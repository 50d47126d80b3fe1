//! `serde` serialization of trees.
//!
//! Dicts become maps (keys in sorted order), arrays become sequences with
//! holes written as `null`, leaves become plain scalars. An empty container
//! is written as an empty map.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use super::{Config, Value};

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.node.borrow();
        match &node.value {
            Value::Leaf(scalar) => scalar.serialize(serializer),
            Value::Dict(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, child) in fields {
                    map.serialize_entry(name, child)?;
                }
                map.end()
            }
            Value::Array(elems) => {
                let mut seq = serializer.serialize_seq(Some(elems.len()))?;
                for elem in elems {
                    seq.serialize_element(elem)?;
                }
                seq.end()
            }
        }
    }
}
