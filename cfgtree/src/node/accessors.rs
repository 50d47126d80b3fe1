//! Typed setters and getters.
//!
//! Every accessor takes a path, an optional trailing array index and the
//! per-call [`Options`]. Setters create missing intermediate nodes; getters
//! fail with [`Error::NotFound`] on a missing location and with
//! [`Error::TypeMismatch`] when the stored value cannot be read as the
//! requested type.

use super::{Config, Scalar, Value};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::path::ConfigPath;

impl Config {
    /// Store a bool leaf at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if an existing node on the way has the
    /// wrong shape, and [`Error::InvalidPath`] for an empty path without
    /// index. The tree is unchanged on error.
    pub fn set_bool(&self, path: &str, idx: Option<usize>, value: bool, opts: &Options) -> Result<()> {
        self.set_scalar(path, idx, Scalar::Bool(value), opts)
    }

    /// Store a signed integer leaf at `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    pub fn set_int(&self, path: &str, idx: Option<usize>, value: i64, opts: &Options) -> Result<()> {
        self.set_scalar(path, idx, Scalar::Int(value), opts)
    }

    /// Store an unsigned integer leaf at `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    pub fn set_uint(&self, path: &str, idx: Option<usize>, value: u64, opts: &Options) -> Result<()> {
        self.set_scalar(path, idx, Scalar::Uint(value), opts)
    }

    /// Store a float leaf at `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    pub fn set_float(&self, path: &str, idx: Option<usize>, value: f64, opts: &Options) -> Result<()> {
        self.set_scalar(path, idx, Scalar::Float(value), opts)
    }

    /// Store a string leaf at `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    pub fn set_string(
        &self,
        path: &str,
        idx: Option<usize>,
        value: impl Into<String>,
        opts: &Options,
    ) -> Result<()> {
        self.set_scalar(path, idx, Scalar::String(value.into()), opts)
    }

    /// Store a null leaf at `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    pub fn set_nil(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<()> {
        self.set_scalar(path, idx, Scalar::Nil, opts)
    }

    /// Store any scalar at `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    pub fn set_scalar(&self, path: &str, idx: Option<usize>, value: Scalar, opts: &Options) -> Result<()> {
        let target = ConfigPath::parse(path, idx, opts)?;
        self.assign(&target, opts.display_sep(), Config::leaf(value))
    }

    /// Attach a whole subtree at `path`.
    ///
    /// A free-standing root is spliced in as is, so `child` keeps working as
    /// a handle into this tree. A node that already belongs to a tree (or is
    /// the root of this tree) is copied first.
    ///
    /// # Errors
    ///
    /// See [`Config::set_bool`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::{Config, Options};
    ///
    /// let opts = Options::new();
    /// let c = Config::new();
    /// let child = Config::new();
    /// child.set_int("test", None, 42, &opts).unwrap();
    ///
    /// c.set_child("child", None, &child, &opts).unwrap();
    ///
    /// assert_eq!(child.path("."), "child");
    /// assert!(child.parent().unwrap().ptr_eq(&c));
    /// assert_eq!(c.child("child", None, &opts).unwrap().int("test", None, &opts).unwrap(), 42);
    /// ```
    pub fn set_child(&self, path: &str, idx: Option<usize>, child: &Config, opts: &Options) -> Result<()> {
        let target = ConfigPath::parse(path, idx, opts)?;
        let node = self.attachable(child);
        self.assign(&target, opts.display_sep(), node)
    }

    /// Get the node at `path` without any coercion.
    ///
    /// The result may be a dict, an array or a leaf.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if a segment is missing (holes included)
    /// and [`Error::TypeMismatch`] if a node on the way has the wrong shape.
    pub fn child(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<Config> {
        let target = ConfigPath::parse(path, idx, opts)?;
        self.lookup(&target, opts.display_sep())
    }

    /// Read a bool.
    ///
    /// # Errors
    ///
    /// As [`Config::child`], plus [`Error::TypeMismatch`] if the value is
    /// not a bool or a boolean string.
    pub fn bool(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<bool> {
        self.read(path, idx, opts, "bool", Scalar::to_bool)
    }

    /// Read a signed integer.
    ///
    /// Floats are accepted only when integral and in range.
    ///
    /// # Errors
    ///
    /// As [`Config::child`], plus [`Error::TypeMismatch`] if the value
    /// cannot be read as `i64` without loss.
    pub fn int(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<i64> {
        self.read(path, idx, opts, "int", Scalar::to_int)
    }

    /// Read an unsigned integer.
    ///
    /// # Errors
    ///
    /// As [`Config::child`], plus [`Error::TypeMismatch`] for negative or
    /// otherwise unrepresentable values.
    pub fn uint(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<u64> {
        self.read(path, idx, opts, "uint", Scalar::to_uint)
    }

    /// Read a float.
    ///
    /// # Errors
    ///
    /// As [`Config::child`], plus [`Error::TypeMismatch`] for non-numeric
    /// values.
    pub fn float(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<f64> {
        self.read(path, idx, opts, "float", Scalar::to_float)
    }

    /// Read a string. Numbers and bools are formatted.
    ///
    /// # Errors
    ///
    /// As [`Config::child`], plus [`Error::TypeMismatch`] for nil leaves
    /// and containers.
    pub fn string(&self, path: &str, idx: Option<usize>, opts: &Options) -> Result<String> {
        self.read(path, idx, opts, "string", Scalar::to_text)
    }

    fn read<T>(
        &self,
        path: &str,
        idx: Option<usize>,
        opts: &Options,
        expected: &'static str,
        convert: impl FnOnce(&Scalar) -> Option<T>,
    ) -> Result<T> {
        let target = self.child(path, idx, opts)?;
        let found = {
            let node = target.node.borrow();
            match &node.value {
                Value::Leaf(scalar) => match convert(scalar) {
                    Some(value) => return Ok(value),
                    None => scalar.describe(),
                },
                other => other.describe(),
            }
        };

        Err(Error::TypeMismatch {
            path: target.path(opts.display_sep()),
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dotted() -> Options {
        Options::new().with_path_sep(".")
    }

    #[test]
    fn test_set_get_primitives() {
        let opts = Options::new();
        let c = Config::new();

        c.set_bool("bool", None, true, &opts).unwrap();
        c.set_int("int", None, 42, &opts).unwrap();
        c.set_uint("uint", None, 12, &opts).unwrap();
        c.set_float("float", None, 2.3, &opts).unwrap();
        c.set_string("str", None, "abc", &opts).unwrap();

        assert!(c.bool("bool", None, &opts).unwrap());
        assert_eq!(c.int("int", None, &opts).unwrap(), 42);
        assert_eq!(c.int("uint", None, &opts).unwrap(), 12);
        assert_eq!(c.uint("uint", None, &opts).unwrap(), 12);
        assert!((c.float("float", None, &opts).unwrap() - 2.3).abs() < f64::EPSILON);
        assert_eq!(c.string("str", None, &opts).unwrap(), "abc");
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let c = Config::new();
        let err = c.int("nope", None, &Options::new()).unwrap_err();
        assert_eq!(
            err,
            Error::NotFound {
                path: "nope".to_string()
            }
        );
    }

    #[test]
    fn test_negative_int_as_uint_rejected() {
        let opts = dotted();
        let c = Config::new();
        c.set_int("sub.n", None, -3, &opts).unwrap();

        let err = c.uint("sub.n", None, &opts).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                path: "sub.n".to_string(),
                expected: "uint",
                found: "int -3".to_string(),
            }
        );
        assert_eq!(c.int("sub.n", None, &opts).unwrap(), -3);
    }

    #[test]
    fn test_fractional_float_as_int_rejected() {
        let opts = Options::new();
        let c = Config::new();
        c.set_float("f", None, 2.5, &opts).unwrap();
        c.set_float("g", None, 4.0, &opts).unwrap();

        assert!(c.int("f", None, &opts).unwrap_err().is_type_mismatch());
        assert!(c.uint("f", None, &opts).unwrap_err().is_type_mismatch());
        assert_eq!(c.int("g", None, &opts).unwrap(), 4);
        assert_eq!(c.uint("g", None, &opts).unwrap(), 4);
    }

    #[test]
    fn test_string_reads_scalars() {
        let opts = Options::new();
        let c = Config::new();
        c.set_int("i", None, -7, &opts).unwrap();
        c.set_bool("b", None, false, &opts).unwrap();

        assert_eq!(c.string("i", None, &opts).unwrap(), "-7");
        assert_eq!(c.string("b", None, &opts).unwrap(), "false");
    }

    #[test]
    fn test_string_parsed_by_numeric_getters() {
        let opts = Options::new();
        let c = Config::new();
        c.set_string("port", None, "8080", &opts).unwrap();
        c.set_string("flag", None, "yes", &opts).unwrap();

        assert_eq!(c.int("port", None, &opts).unwrap(), 8080);
        assert_eq!(c.uint("port", None, &opts).unwrap(), 8080);
        assert!(c.bool("flag", None, &opts).unwrap());
        assert!(c.int("flag", None, &opts).is_err());
    }

    #[test]
    fn test_nil_never_coerces() {
        let opts = Options::new();
        let c = Config::new();
        c.set_nil("n", None, &opts).unwrap();

        assert!(c.has_field("n"));
        for err in [
            c.bool("n", None, &opts).unwrap_err(),
            c.int("n", None, &opts).unwrap_err(),
            c.string("n", None, &opts).unwrap_err(),
        ] {
            assert!(err.is_type_mismatch());
        }
    }

    #[test]
    fn test_container_is_not_a_scalar() {
        let opts = dotted();
        let c = Config::new();
        c.set_int("sub.x", None, 1, &opts).unwrap();

        let err = c.int("sub", None, &opts).unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch {
                path: "sub".to_string(),
                expected: "int",
                found: "dict".to_string(),
            }
        );
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let opts = Options::new();
        let c = Config::new();
        c.set_int("x", None, 1, &opts).unwrap();
        c.set_string("x", None, "one", &opts).unwrap();

        assert_eq!(c.string("x", None, &opts).unwrap(), "one");
        assert_eq!(c.get_fields().len(), 1);
    }

    #[test]
    fn test_leaf_handle_reads_itself() {
        let opts = Options::new();
        let c = Config::new();
        c.set_uint("u", None, 9, &opts).unwrap();

        let leaf = c.child("u", None, &opts).unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.uint("", None, &opts).unwrap(), 9);
        assert_eq!(leaf.path("."), "u");
    }

    #[test]
    fn test_write_on_leaf_handle_rejected() {
        let opts = Options::new();
        let c = Config::new();
        c.set_uint("u", None, 9, &opts).unwrap();

        let leaf = c.child("u", None, &opts).unwrap();
        assert!(leaf.set_int("x", None, 1, &opts).unwrap_err().is_type_mismatch());
        assert!(matches!(
            leaf.set_int("", None, 1, &opts).unwrap_err(),
            Error::InvalidPath { .. }
        ));
    }

    #[test]
    fn test_set_child_through_handle_is_visible_from_root() {
        let opts = dotted();
        let c = Config::new();
        c.set_int("sub.a", None, 1, &opts).unwrap();

        let sub = c.child("sub", None, &opts).unwrap();
        sub.set_int("b", None, 2, &opts).unwrap();

        assert_eq!(c.int("sub.b", None, &opts).unwrap(), 2);
    }

    #[test]
    fn test_set_child_with_attached_node_copies() {
        let opts = Options::new();
        let c = Config::new();
        let child = Config::new();
        child.set_int("v", None, 1, &opts).unwrap();
        c.set_child("first", None, &child, &opts).unwrap();
        c.set_child("second", None, &child, &opts).unwrap();

        let second = c.child("second", None, &opts).unwrap();
        assert!(!second.ptr_eq(&child));
        assert_eq!(second, child);

        second.set_int("v", None, 2, &opts).unwrap();
        assert_eq!(child.int("v", None, &opts).unwrap(), 1);
        assert_eq!(child.path("."), "first");
        assert_eq!(second.path("."), "second");
    }

    #[test]
    fn test_set_child_with_own_root_does_not_cycle() {
        let opts = Options::new();
        let c = Config::new();
        c.set_int("v", None, 1, &opts).unwrap();
        c.set_child("me", None, &c, &opts).unwrap();

        let me = c.child("me", None, &opts).unwrap();
        assert!(!me.ptr_eq(&c));
        assert_eq!(me.int("v", None, &opts).unwrap(), 1);
        assert!(!me.has_field("me"));
    }
}
