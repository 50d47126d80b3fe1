//! Per-call options for tree accessors.

/// Separator used when an operation has to print a path but the caller
/// supplied none (error messages, [`Options::display_sep`]).
pub const DEFAULT_DISPLAY_SEP: &str = ".";

/// Options passed to a single accessor call.
///
/// There is no global state: every `set_*`/getter call receives its own
/// options. Without a separator the path string is one atomic segment.
///
/// # Examples
///
/// ```
/// use cfgtree::{Config, Options};
///
/// let opts = Options::new().with_path_sep(".");
/// let c = Config::new();
/// c.set_int("server.port", None, 8080, &opts).unwrap();
///
/// assert_eq!(c.int("server.port", None, &opts).unwrap(), 8080);
/// // Without a separator "server.port" is a single field name.
/// assert!(c.int("server.port", None, &Options::new()).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    path_sep: Option<String>,
}

impl Options {
    /// Create options with no path separator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Split paths on `sep` for this call.
    ///
    /// An empty separator disables splitting.
    #[must_use]
    pub fn with_path_sep(mut self, sep: impl Into<String>) -> Self {
        let sep = sep.into();
        self.path_sep = if sep.is_empty() { None } else { Some(sep) };
        self
    }

    /// The configured separator, if any.
    #[must_use]
    pub fn path_sep(&self) -> Option<&str> {
        self.path_sep.as_deref()
    }

    /// Separator to use when rendering paths for this call.
    #[must_use]
    pub fn display_sep(&self) -> &str {
        self.path_sep().unwrap_or(DEFAULT_DISPLAY_SEP)
    }
}
