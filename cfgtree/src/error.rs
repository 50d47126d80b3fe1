//! Error types for the cfgtree library.
//!
//! Every accessor reports failures through [`Error`]; nothing in the tree
//! panics on a missing field or a wrong type.

use thiserror::Error;

/// Result type alias for operations that may fail with a cfgtree error.
///
/// # Examples
///
/// ```
/// use cfgtree::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the cfgtree library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested field name or array index does not exist.
    ///
    /// Holes in arrays are reported the same way.
    #[error("missing field '{path}'")]
    NotFound {
        /// Absolute path of the missing location.
        path: String,
    },

    /// A node has the wrong shape for the requested segment, or a leaf
    /// cannot be coerced to the requested type without loss.
    #[error("type mismatch at '{path}': expected {expected}, found {found}")]
    TypeMismatch {
        /// Absolute path of the offending node.
        path: String,
        /// What the operation needed (`dict`, `array`, `int`, ...).
        expected: &'static str,
        /// What was actually stored there.
        found: String,
    },

    /// The path itself cannot address anything.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The path as given by the caller.
        path: String,
        /// Why the path was rejected.
        reason: String,
    },

    /// Formatting a tree for output failed.
    #[error("failed to serialize to {format}: {message}")]
    Serialization {
        /// Output format name.
        format: &'static str,
        /// Message from the underlying serializer.
        message: String,
    },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "json",
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "yaml",
            message: err.to_string(),
        }
    }
}

impl Error {
    /// Check if error indicates a missing field or index.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Error;
    ///
    /// let err = Error::NotFound { path: "a.2".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a shape or coercion mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Error;
    ///
    /// let err = Error::TypeMismatch {
    ///     path: "a".to_string(),
    ///     expected: "array",
    ///     found: "dict".to_string(),
    /// };
    /// assert!(err.is_type_mismatch());
    /// ```
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }
}
