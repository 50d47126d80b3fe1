//! Common test utilities for integration tests.

use cfgtree::{Config, Options};

/// Options splitting paths on `"."`.
#[allow(dead_code)]
pub fn dotted() -> Options {
    Options::new().with_path_sep(".")
}

/// Options that never split paths.
#[allow(dead_code)]
pub fn unsplit() -> Options {
    Options::new()
}

/// Builder for trees used across tests.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_int("server.port", 8080)
///     .with_string("server.host", "localhost")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    tree: Config,
    opts: Options,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture splitting paths on `"."`.
    pub fn new() -> Self {
        Self {
            tree: Config::new(),
            opts: dotted(),
        }
    }

    /// Stores an int leaf.
    pub fn with_int(self, path: &str, value: i64) -> Self {
        self.tree.set_int(path, None, value, &self.opts).unwrap();
        self
    }

    /// Stores a string leaf.
    pub fn with_string(self, path: &str, value: &str) -> Self {
        self.tree.set_string(path, None, value, &self.opts).unwrap();
        self
    }

    /// Stores a bool leaf.
    pub fn with_bool(self, path: &str, value: bool) -> Self {
        self.tree.set_bool(path, None, value, &self.opts).unwrap();
        self
    }

    /// Returns the built tree.
    pub fn build(self) -> Config {
        self.tree
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}
