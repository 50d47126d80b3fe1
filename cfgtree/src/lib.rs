#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cfgtree
//!
//! A hierarchical configuration value tree with path addressing and typed
//! access.
//!
//! A tree is built from dicts, arrays and scalar leaves. Values are read and
//! written through paths such as `"server.ports.0"`, split on a separator
//! chosen per call, with an optional trailing array index. Writes create any
//! missing intermediate nodes; reads coerce between scalar types only when
//! no information is lost.
//!
//! ## Core Types
//!
//! - [`Config`]: handle to a node of a tree, with all accessors
//! - [`Scalar`] and [`NodeKind`]: leaf values and node shapes
//! - [`Options`]: per-call settings such as the path separator
//! - [`ConfigPath`] and [`Segment`]: parsed paths
//! - [`Error`] and [`Result`]: error handling types
//! - [`OutputFormat`]: YAML, JSON and flat rendering of a tree
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cfgtree::{Config, Options};
//!
//! let opts = Options::new().with_path_sep(".");
//! let c = Config::new();
//!
//! c.set_string("server.host", None, "localhost", &opts).unwrap();
//! c.set_uint("server.ports", Some(1), 8443, &opts).unwrap();
//!
//! assert_eq!(c.string("server.host", None, &opts).unwrap(), "localhost");
//! assert_eq!(c.count_field("server").unwrap(), 2);
//!
//! // index 0 was never written
//! let err = c.uint("server.ports.0", None, &opts).unwrap_err();
//! assert!(err.is_not_found());
//! ```

pub mod error;
pub mod logging;
pub mod node;
pub mod options;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use node::{Config, NodeKind, Scalar};
pub use options::Options;
pub use output::{OutputFormat, OutputFormatter};
pub use path::{ConfigPath, Segment, MAX_ARRAY_INDEX};
