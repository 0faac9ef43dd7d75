//! The generic tree value assembled from structural events.
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt::{self, Write as _};

pub type Map = BTreeMap<String, Value>;
pub type Array = Vec<Value>;

/// A node of the assembled tree.
///
/// The variant set is closed: null, boolean, number, string, array and
/// object. Object keys are unique; a later insert under an existing key
/// replaces the earlier value.
///
/// ```
/// use textmodem::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// An empty array, as announced by `start_root` for array roots.
    #[must_use]
    pub fn empty_array() -> Self {
        Self::Array(Array::new())
    }

    /// An empty object, as announced by `start_root` for object roots.
    #[must_use]
    pub fn empty_object() -> Self {
        Self::Object(Map::new())
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` for every variant that is neither an array nor an
    /// object.
    ///
    /// ```
    /// use textmodem::Value;
    ///
    /// assert!(Value::Number(1.5).is_scalar());
    /// assert!(!Value::empty_array().is_scalar());
    /// ```
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        !self.is_array() && !self.is_object()
    }
}

fn write_escaped_string<W: fmt::Write>(src: &str, f: &mut W) -> fmt::Result {
    f.write_char('"')?;
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() && u32::from(c) <= 0xFFFF => {
                write!(f, "\\u{:04X}", u32::from(c))?;
            }
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_escaped_string(s, f),
            Value::Array(arr) => {
                f.write_char('[')?;
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_escaped_string(k, f)?;
                    write!(f, ":{v}")?;
                }
                f.write_char('}')
            }
        }
    }
}
