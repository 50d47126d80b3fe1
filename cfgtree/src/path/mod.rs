//! Path parsing for tree addressing.
//!
//! A path string plus an optional trailing index is turned into a
//! [`ConfigPath`]: an ordered list of [`Segment`]s that the tree walks one by
//! one.
//!
//! # Splitting
//!
//! Without a separator the whole string is a single segment. With
//! [`Options::with_path_sep`](crate::Options::with_path_sep) the string is
//! split on the separator, keeping empty pieces as empty field names.
//!
//! # Trailing index
//!
//! A `Some(i)` index is appended as one more [`Segment::Index`], so `"a"`
//! with index `3` addresses the same node as `"a.3"` split on `"."`.
//! `None` leaves the path as it is.
//!
//! # Examples
//!
//! ```
//! use cfgtree::path::{ConfigPath, Segment};
//! use cfgtree::Options;
//!
//! let opts = Options::new().with_path_sep(".");
//! let path = ConfigPath::parse("a.1.b", Some(0), &opts).unwrap();
//! assert_eq!(
//!     path.segments(),
//!     &[
//!         Segment::Field("a".to_string()),
//!         Segment::Index(1),
//!         Segment::Field("b".to_string()),
//!         Segment::Index(0),
//!     ]
//! );
//! ```

mod segment;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use segment::Segment;

use std::fmt;

use crate::error::Result;
use crate::options::Options;

/// Largest array index a write may use.
///
/// Writing to index `i` grows the array to `i + 1` slots, so writes past
/// this bound are rejected with [`Error::InvalidPath`](crate::Error::InvalidPath)
/// instead of allocating. Reads are not bounded: a larger index simply
/// finds nothing.
pub const MAX_ARRAY_INDEX: usize = 1 << 20;

/// A parsed path: the segments to walk from the node an accessor was called on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPath {
    segments: Vec<Segment>,
}

impl ConfigPath {
    /// Parse `path` and append `idx` when given.
    ///
    /// An empty `path` contributes no segments, so `("", None)` addresses the
    /// node itself and `("", Some(i))` addresses its element `i`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPath`] if a digit-only segment does not
    /// fit into `usize`.
    pub fn parse(path: &str, idx: Option<usize>, opts: &Options) -> Result<Self> {
        let mut segments = Vec::new();

        if !path.is_empty() {
            match opts.path_sep() {
                Some(sep) => {
                    for raw in path.split(sep) {
                        segments.push(Segment::parse(raw)?);
                    }
                }
                None => segments.push(Segment::parse(path)?),
            }
        }

        if let Some(idx) = idx {
            segments.push(Segment::Index(idx));
        }

        Ok(Self { segments })
    }

    /// Build a path directly from segments.
    #[must_use]
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The segments in walk order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns true if the path addresses the starting node itself.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Render the path with `sep` between segments.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        join_segments(&self.segments, sep)
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(crate::options::DEFAULT_DISPLAY_SEP))
    }
}

/// Join segments with `sep`.
pub(crate) fn join_segments(segments: &[Segment], sep: &str) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Join a prefix path and one more key, leaving out the separator when the
/// prefix is empty.
pub(crate) fn join_key(prefix: &str, key: &str, sep: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}{sep}{key}")
    }
}
