//! Leaf values and read-time coercion.
//!
//! Values are stored exactly as they were set; coercion happens only when a
//! typed getter reads them. Conversions that would lose information (a
//! negative number read as unsigned, a fractional float read as an integer,
//! an out-of-range value) are refused rather than truncated.

use std::fmt;

use serde::{Serialize, Serializer};

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Explicit null.
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 string.
    String(String),
}

// 2^63 and 2^64; `i64::MAX as f64` rounds up to 2^63 so the bounds are exclusive.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

impl Scalar {
    /// Short name of the stored type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            Self::Nil => "nil".to_string(),
            Self::String(s) => format!("string {s:?}"),
            other => format!("{} {other}", other.type_name()),
        }
    }

    /// Read as a bool.
    ///
    /// Strings `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off` are
    /// accepted in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Scalar;
    ///
    /// assert_eq!(Scalar::String("Yes".to_string()).to_bool(), Some(true));
    /// assert_eq!(Scalar::Int(1).to_bool(), None);
    /// ```
    #[must_use]
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Read as a signed integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Scalar;
    ///
    /// assert_eq!(Scalar::Uint(12).to_int(), Some(12));
    /// assert_eq!(Scalar::Float(3.0).to_int(), Some(3));
    /// assert_eq!(Scalar::Float(3.5).to_int(), None);
    /// assert_eq!(Scalar::Uint(u64::MAX).to_int(), None);
    /// ```
    #[must_use]
    pub fn to_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Uint(u) => i64::try_from(*u).ok(),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float(f) => {
                (is_integral(*f) && *f >= -I64_UPPER && *f < I64_UPPER).then(|| *f as i64)
            }
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Read as an unsigned integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgtree::Scalar;
    ///
    /// assert_eq!(Scalar::Int(5).to_uint(), Some(5));
    /// assert_eq!(Scalar::Int(-5).to_uint(), None);
    /// ```
    #[must_use]
    pub fn to_uint(&self) -> Option<u64> {
        match self {
            Self::Uint(u) => Some(*u),
            Self::Int(i) => u64::try_from(*i).ok(),
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Self::Float(f) => (is_integral(*f) && *f >= 0.0 && *f < U64_UPPER).then(|| *f as u64),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Read as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::Uint(u) => Some(*u as f64),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Read as a string; every non-nil scalar has a string form.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Nil => None,
            Self::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(i) => serializer.serialize_i64(*i),
            Self::Uint(u) => serializer.serialize_u64(*u),
            Self::Float(x) => serializer.serialize_f64(*x),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u64> for Scalar {
    fn from(u: u64) -> Self {
        Self::Uint(u)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_coercion() {
        assert_eq!(Scalar::Bool(false).to_bool(), Some(false));
        assert_eq!(Scalar::from("TRUE").to_bool(), Some(true));
        assert_eq!(Scalar::from("off").to_bool(), Some(false));
        assert_eq!(Scalar::from("maybe").to_bool(), None);
        assert_eq!(Scalar::Nil.to_bool(), None);
        assert_eq!(Scalar::Float(1.0).to_bool(), None);
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(Scalar::Int(-3).to_int(), Some(-3));
        assert_eq!(Scalar::Uint(12).to_int(), Some(12));
        assert_eq!(Scalar::from(" 17 ").to_int(), Some(17));
        assert_eq!(Scalar::from("x").to_int(), None);
        assert_eq!(Scalar::Bool(true).to_int(), None);
        assert_eq!(Scalar::Nil.to_int(), None);
    }

    #[test]
    fn test_int_rejects_lossy_float() {
        assert_eq!(Scalar::Float(-2.0).to_int(), Some(-2));
        assert_eq!(Scalar::Float(2.3).to_int(), None);
        assert_eq!(Scalar::Float(f64::NAN).to_int(), None);
        assert_eq!(Scalar::Float(f64::INFINITY).to_int(), None);
        assert_eq!(Scalar::Float(1e19).to_int(), None);
        assert_eq!(Scalar::Float(-9_223_372_036_854_775_808.0).to_int(), Some(i64::MIN));
    }

    #[test]
    fn test_uint_coercion() {
        assert_eq!(Scalar::Uint(u64::MAX).to_uint(), Some(u64::MAX));
        assert_eq!(Scalar::Int(0).to_uint(), Some(0));
        assert_eq!(Scalar::Int(-1).to_uint(), None);
        assert_eq!(Scalar::Float(1e19).to_uint(), Some(10_000_000_000_000_000_000));
        assert_eq!(Scalar::Float(-1.0).to_uint(), None);
        assert_eq!(Scalar::Float(0.5).to_uint(), None);
        assert_eq!(Scalar::from("-4").to_uint(), None);
        assert_eq!(Scalar::from("4").to_uint(), Some(4));
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(Scalar::Float(2.3).to_float(), Some(2.3));
        assert_eq!(Scalar::Int(-2).to_float(), Some(-2.0));
        assert_eq!(Scalar::Uint(12).to_float(), Some(12.0));
        assert_eq!(Scalar::from("2.75").to_float(), Some(2.75));
        assert_eq!(Scalar::Bool(true).to_float(), None);
    }

    #[test]
    fn test_text_coercion() {
        assert_eq!(Scalar::from("abc").to_text(), Some("abc".to_string()));
        assert_eq!(Scalar::Int(42).to_text(), Some("42".to_string()));
        assert_eq!(Scalar::Bool(true).to_text(), Some("true".to_string()));
        assert_eq!(Scalar::Float(2.5).to_text(), Some("2.5".to_string()));
        assert_eq!(Scalar::Nil.to_text(), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Scalar::Int(-3).describe(), "int -3");
        assert_eq!(Scalar::from("a").describe(), "string \"a\"");
        assert_eq!(Scalar::Nil.describe(), "nil");
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&Scalar::Nil).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Scalar::Int(-1)).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&Scalar::from("x")).unwrap(), "\"x\"");
    }
}
