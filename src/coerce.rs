//! Typed coercion of loosely typed values
//!
//! Predicates in this crate accept values whose shape is only known at runtime:
//! a `serde_json::Value` read from a file, a number that arrived as text, a
//! plain Rust integer. The [`Coerce`] trait gives every such value a uniform,
//! fallible view (as a number, an integer, text, a sequence, or a mapping).
//! Predicates call these methods and map any failure to `false`.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use sluice::coerce::{Coerce, CoercionError, Kind};
//!
//! assert_eq!(json!(15).to_number(), Ok(15.0));
//! assert_eq!(" 12 ".to_integer(), Ok(12));
//! assert_eq!(json!([1, 2]).to_number(), Err(CoercionError::WrongKind(Kind::Sequence)));
//! assert!("texto".to_number().is_err());
//! ```

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde_json::{Map, Value};
use thiserror::Error;

/// The runtime shape of a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Absent value (`null`, `None`).
    Null,
    /// Boolean.
    Bool,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Float,
    /// String.
    Text,
    /// Ordered collection.
    Sequence,
    /// Key/value collection with string keys.
    Mapping,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Text => "text",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Why a value could not be coerced to a number.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum CoercionError {
    /// The value has a kind that never converts to a number.
    #[error("expected a number, found {0}")]
    WrongKind(Kind),
    /// The value is text that does not parse as a number.
    #[error("cannot parse {0:?} as a number")]
    Unparseable(String),
    /// The value is a float with no integer counterpart.
    #[error("{0} has no integer value")]
    NotIntegral(f64),
}

/// Uniform, fallible view over loosely typed values.
///
/// Only [`Coerce::kind`] is required. Every other method defaults to the
/// failure case, so an implementation overrides just the views that apply to
/// its shape.
pub trait Coerce {
    /// The runtime shape of this value.
    fn kind(&self) -> Kind;

    /// Coerce to a floating-point number.
    ///
    /// Numbers convert directly, booleans become `1.0` / `0.0`, and text is
    /// trimmed and parsed as a float. Underscores between digits are accepted
    /// as separators (`"1_000"`).
    fn to_number(&self) -> Result<f64, CoercionError> {
        Err(CoercionError::WrongKind(self.kind()))
    }

    /// Coerce to an integer.
    ///
    /// Floats truncate toward zero. Text must hold an integer literal, so
    /// `"12.5"` fails while `12.5` succeeds as `12`.
    fn to_integer(&self) -> Result<i128, CoercionError> {
        Err(CoercionError::WrongKind(self.kind()))
    }

    /// Borrow as text, if this value is textual.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Number of elements, if this value is a sequence.
    fn seq_len(&self) -> Option<usize> {
        None
    }

    /// Whether this value is a mapping containing `key`.
    fn contains_key(&self, _key: &str) -> bool {
        false
    }
}

/// Drop `_` digit separators, as in `"1_000"`.
///
/// Returns `None` when an underscore is not flanked by digits on both sides.
fn without_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    separated.then(|| Cow::Owned(text.replace('_', "")))
}

fn parse_number(text: &str) -> Result<f64, CoercionError> {
    without_separators(text.trim())
        .and_then(|digits| digits.parse::<f64>().ok())
        .ok_or_else(|| CoercionError::Unparseable(text.to_string()))
}

fn parse_integer(text: &str) -> Result<i128, CoercionError> {
    without_separators(text.trim())
        .and_then(|digits| digits.parse::<i128>().ok())
        .ok_or_else(|| CoercionError::Unparseable(text.to_string()))
}

fn truncate(value: f64) -> Result<i128, CoercionError> {
    // i128::MAX as f64 rounds up to 2^127, hence the strict upper bound.
    if value.is_finite() && value >= i128::MIN as f64 && value < i128::MAX as f64 {
        Ok(value.trunc() as i128)
    } else {
        Err(CoercionError::NotIntegral(value))
    }
}

impl Coerce for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) if n.is_f64() => Kind::Float,
            Value::Number(_) => Kind::Integer,
            Value::String(_) => Kind::Text,
            Value::Array(_) => Kind::Sequence,
            Value::Object(_) => Kind::Mapping,
        }
    }

    fn to_number(&self) -> Result<f64, CoercionError> {
        match self {
            Value::Bool(b) => b.to_number(),
            Value::Number(n) => n
                .as_f64()
                .ok_or(CoercionError::WrongKind(self.kind())),
            Value::String(s) => parse_number(s),
            _ => Err(CoercionError::WrongKind(self.kind())),
        }
    }

    fn to_integer(&self) -> Result<i128, CoercionError> {
        match self {
            Value::Bool(b) => b.to_integer(),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(i128::from(u))
                } else {
                    n.as_f64()
                        .ok_or(CoercionError::WrongKind(self.kind()))
                        .and_then(truncate)
                }
            }
            Value::String(s) => parse_integer(s),
            _ => Err(CoercionError::WrongKind(self.kind())),
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn seq_len(&self) -> Option<usize> {
        self.as_array().map(Vec::len)
    }

    fn contains_key(&self, key: &str) -> bool {
        matches!(self, Value::Object(map) if map.contains_key(key))
    }
}

impl Coerce for bool {
    fn kind(&self) -> Kind {
        Kind::Bool
    }

    fn to_number(&self) -> Result<f64, CoercionError> {
        Ok(if *self { 1.0 } else { 0.0 })
    }

    fn to_integer(&self) -> Result<i128, CoercionError> {
        Ok(i128::from(*self))
    }
}

macro_rules! coerce_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl Coerce for $ty {
            fn kind(&self) -> Kind {
                Kind::Integer
            }

            fn to_number(&self) -> Result<f64, CoercionError> {
                Ok(*self as f64)
            }

            fn to_integer(&self) -> Result<i128, CoercionError> {
                Ok(*self as i128)
            }
        }
    )*};
}

coerce_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! coerce_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Coerce for $ty {
            fn kind(&self) -> Kind {
                Kind::Float
            }

            fn to_number(&self) -> Result<f64, CoercionError> {
                Ok(f64::from(*self))
            }

            fn to_integer(&self) -> Result<i128, CoercionError> {
                truncate(f64::from(*self))
            }
        }
    )*};
}

coerce_float!(f32, f64);

impl Coerce for str {
    fn kind(&self) -> Kind {
        Kind::Text
    }

    fn to_number(&self) -> Result<f64, CoercionError> {
        parse_number(self)
    }

    fn to_integer(&self) -> Result<i128, CoercionError> {
        parse_integer(self)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Coerce for String {
    fn kind(&self) -> Kind {
        Kind::Text
    }

    fn to_number(&self) -> Result<f64, CoercionError> {
        parse_number(self)
    }

    fn to_integer(&self) -> Result<i128, CoercionError> {
        parse_integer(self)
    }

    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Coerce> Coerce for Option<T> {
    fn kind(&self) -> Kind {
        self.as_ref().map_or(Kind::Null, Coerce::kind)
    }

    fn to_number(&self) -> Result<f64, CoercionError> {
        match self {
            Some(inner) => inner.to_number(),
            None => Err(CoercionError::WrongKind(Kind::Null)),
        }
    }

    fn to_integer(&self) -> Result<i128, CoercionError> {
        match self {
            Some(inner) => inner.to_integer(),
            None => Err(CoercionError::WrongKind(Kind::Null)),
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(Coerce::as_text)
    }

    fn seq_len(&self) -> Option<usize> {
        self.as_ref().and_then(Coerce::seq_len)
    }

    fn contains_key(&self, key: &str) -> bool {
        self.as_ref().is_some_and(|inner| inner.contains_key(key))
    }
}

impl<T> Coerce for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn seq_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Coerce for [T] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }

    fn seq_len(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<V, S: BuildHasher> Coerce for HashMap<String, V, S> {
    fn kind(&self) -> Kind {
        Kind::Mapping
    }

    fn contains_key(&self, key: &str) -> bool {
        HashMap::contains_key(self, key)
    }
}

impl<V> Coerce for BTreeMap<String, V> {
    fn kind(&self) -> Kind {
        Kind::Mapping
    }

    fn contains_key(&self, key: &str) -> bool {
        BTreeMap::contains_key(self, key)
    }
}

impl Coerce for Map<String, Value> {
    fn kind(&self) -> Kind {
        Kind::Mapping
    }

    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }
}

impl<T: Coerce + ?Sized> Coerce for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn to_number(&self) -> Result<f64, CoercionError> {
        (**self).to_number()
    }

    fn to_integer(&self) -> Result<i128, CoercionError> {
        (**self).to_integer()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn seq_len(&self) -> Option<usize> {
        (**self).seq_len()
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}
