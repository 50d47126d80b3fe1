//! Single path segments: dict field names and array indices.

use std::fmt;

use crate::error::{Error, Result};

/// One unit of a split path.
///
/// A segment made up solely of ASCII digits is always an array index; there
/// is no way to address a dict field whose name is all digits. Anything else
/// (including `-1`, `+1` and the empty string) is a field name.
///
/// The same type doubles as the attachment key a node keeps for its parent.
///
/// # Examples
///
/// ```
/// use cfgtree::path::Segment;
///
/// assert_eq!(Segment::parse("port").unwrap(), Segment::Field("port".to_string()));
/// assert_eq!(Segment::parse("007").unwrap(), Segment::Index(7));
/// assert_eq!(Segment::parse("-1").unwrap(), Segment::Field("-1".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Dict field name.
    Field(String),
    /// Zero-based array index.
    Index(usize),
}

impl Segment {
    /// Classify a raw segment string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the segment is all digits but does
    /// not fit into `usize`.
    pub fn parse(raw: &str) -> Result<Self> {
        if is_index(raw) {
            raw.parse::<usize>()
                .map(Self::Index)
                .map_err(|e| Error::InvalidPath {
                    path: raw.to_string(),
                    reason: format!("array index out of range: {e}"),
                })
        } else {
            Ok(Self::Field(raw.to_string()))
        }
    }

    /// Returns true for array index segments.
    #[must_use]
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// Shape name of the container this segment needs.
    #[must_use]
    pub(crate) fn container_name(&self) -> &'static str {
        match self {
            Self::Field(_) => "dict",
            Self::Index(_) => "array",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<usize> for Segment {
    fn from(idx: usize) -> Self {
        Self::Index(idx)
    }
}

fn is_index(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}
