//! Scalar values and value tuples
//!
//! Every vertex and every edge of a graph carries one [`ValueTuple`] whose
//! fields follow the graph's value schema.

use crate::error::{Error, Result};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a single schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Char,
    String,
}

impl ScalarType {
    /// Get the type name
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Bool => "Bool",
            ScalarType::Int8 => "Int8",
            ScalarType::Int16 => "Int16",
            ScalarType::Int32 => "Int32",
            ScalarType::Int64 => "Int64",
            ScalarType::UInt8 => "UInt8",
            ScalarType::UInt16 => "UInt16",
            ScalarType::UInt32 => "UInt32",
            ScalarType::UInt64 => "UInt64",
            ScalarType::Float32 => "Float32",
            ScalarType::Float64 => "Float64",
            ScalarType::Char => "Char",
            ScalarType::String => "String",
        }
    }

    /// Returns true for the integer and floating point types
    pub fn is_numeric(self) -> bool {
        !matches!(self, ScalarType::Bool | ScalarType::Char | ScalarType::String)
    }

    /// The zero value of this type (`false`, `'\0'` and `""` for the non-numeric ones)
    pub fn zero(self) -> ScalarValue {
        match self {
            ScalarType::Bool => ScalarValue::Bool(false),
            ScalarType::Int8 => ScalarValue::Int8(0),
            ScalarType::Int16 => ScalarValue::Int16(0),
            ScalarType::Int32 => ScalarValue::Int32(0),
            ScalarType::Int64 => ScalarValue::Int64(0),
            ScalarType::UInt8 => ScalarValue::UInt8(0),
            ScalarType::UInt16 => ScalarValue::UInt16(0),
            ScalarType::UInt32 => ScalarValue::UInt32(0),
            ScalarType::UInt64 => ScalarValue::UInt64(0),
            ScalarType::Float32 => ScalarValue::Float32(0.0),
            ScalarType::Float64 => ScalarValue::Float64(0.0),
            ScalarType::Char => ScalarValue::Char('\0'),
            ScalarType::String => ScalarValue::String(String::new()),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single value stored in a schema field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScalarValue {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    Char(char),
    String(String),
}

impl ScalarValue {
    /// Get the type of this value
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            ScalarValue::Bool(_) => ScalarType::Bool,
            ScalarValue::Int8(_) => ScalarType::Int8,
            ScalarValue::Int16(_) => ScalarType::Int16,
            ScalarValue::Int32(_) => ScalarType::Int32,
            ScalarValue::Int64(_) => ScalarType::Int64,
            ScalarValue::UInt8(_) => ScalarType::UInt8,
            ScalarValue::UInt16(_) => ScalarType::UInt16,
            ScalarValue::UInt32(_) => ScalarType::UInt32,
            ScalarValue::UInt64(_) => ScalarType::UInt64,
            ScalarValue::Float32(_) => ScalarType::Float32,
            ScalarValue::Float64(_) => ScalarType::Float64,
            ScalarValue::Char(_) => ScalarType::Char,
            ScalarValue::String(_) => ScalarType::String,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ScalarValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get any integer value as `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ScalarValue::Int8(v) => Some(i64::from(*v)),
            ScalarValue::Int16(v) => Some(i64::from(*v)),
            ScalarValue::Int32(v) => Some(i64::from(*v)),
            ScalarValue::Int64(v) => Some(*v),
            ScalarValue::UInt8(v) => Some(i64::from(*v)),
            ScalarValue::UInt16(v) => Some(i64::from(*v)),
            ScalarValue::UInt32(v) => Some(i64::from(*v)),
            ScalarValue::UInt64(v) => v.to_i64(),
            _ => None,
        }
    }

    /// Try to get any numeric value as `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ScalarValue::Float32(v) => Some(f64::from(*v)),
            ScalarValue::Float64(v) => Some(*v),
            ScalarValue::UInt64(v) => v.to_f64(),
            other => other.as_i64().and_then(|v| v.to_f64()),
        }
    }

    /// Try to get as char
    pub fn as_char(&self) -> Option<char> {
        match self {
            ScalarValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScalarValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Bool(v) => write!(f, "{v}"),
            ScalarValue::Int8(v) => write!(f, "{v}"),
            ScalarValue::Int16(v) => write!(f, "{v}"),
            ScalarValue::Int32(v) => write!(f, "{v}"),
            ScalarValue::Int64(v) => write!(f, "{v}"),
            ScalarValue::UInt8(v) => write!(f, "{v}"),
            ScalarValue::UInt16(v) => write!(f, "{v}"),
            ScalarValue::UInt32(v) => write!(f, "{v}"),
            ScalarValue::UInt64(v) => write!(f, "{v}"),
            // Debug keeps the trailing ".0" on whole floats
            ScalarValue::Float32(v) => write!(f, "{v:?}"),
            ScalarValue::Float64(v) => write!(f, "{v:?}"),
            ScalarValue::Char(v) => write!(f, "{v:?}"),
            ScalarValue::String(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ScalarValue {
                fn from(v: $ty) -> Self {
                    ScalarValue::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar!(
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    char => Char,
    String => String,
);

impl From<&str> for ScalarValue {
    fn from(v: &str) -> Self {
        ScalarValue::String(v.to_string())
    }
}

/// An ordered tuple of scalar values, positionally matching a value schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueTuple(Vec<ScalarValue>);

impl ValueTuple {
    /// Create the empty tuple, used by graphs without values
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Get the number of values
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the value at a field position
    pub fn get(&self, pos: usize) -> Option<&ScalarValue> {
        self.0.get(pos)
    }

    /// Get the value at a field position, failing if the tuple is too short
    pub fn field(&self, pos: usize) -> Result<&ScalarValue> {
        self.0
            .get(pos)
            .ok_or_else(|| Error::KeyNotFound(format!("position {pos} in {self}")))
    }

    /// Iterate over the values
    pub fn iter(&self) -> std::slice::Iter<'_, ScalarValue> {
        self.0.iter()
    }
}

impl From<Vec<ScalarValue>> for ValueTuple {
    fn from(values: Vec<ScalarValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<ScalarValue> for ValueTuple {
    fn from_iter<I: IntoIterator<Item = ScalarValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ValueTuple {
    type Item = ScalarValue;
    type IntoIter = std::vec::IntoIter<ScalarValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueTuple {
    type Item = &'a ScalarValue;
    type IntoIter = std::slice::Iter<'a, ScalarValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ValueTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        if self.0.len() == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")
    }
}

/// Build a [`ValueTuple`] from values convertible into [`ScalarValue`]
///
/// ```
/// use valgraph_core::{vals, ScalarValue};
///
/// let t = vals![10i64, "abc"];
/// assert_eq!(t.get(1), Some(&ScalarValue::String("abc".into())));
/// assert!(vals![].is_empty());
/// ```
#[macro_export]
macro_rules! vals {
    () => {
        $crate::ValueTuple::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ValueTuple::from(vec![$($crate::ScalarValue::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(ScalarValue::from(3i8).scalar_type(), ScalarType::Int8);
        assert_eq!(ScalarValue::from("x").scalar_type(), ScalarType::String);
        assert_eq!(ScalarValue::from(1.5f32).scalar_type(), ScalarType::Float32);
        assert!(ScalarType::UInt16.is_numeric());
        assert!(!ScalarType::Char.is_numeric());
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(ScalarValue::Int16(-4).as_i64(), Some(-4));
        assert_eq!(ScalarValue::UInt64(u64::MAX).as_i64(), None);
        assert_eq!(ScalarValue::UInt8(7).as_f64(), Some(7.0));
        assert_eq!(ScalarValue::Float32(0.5).as_f64(), Some(0.5));
        assert_eq!(ScalarValue::Bool(true).as_f64(), None);
        assert_eq!(ScalarValue::from("abc").as_str(), Some("abc"));
        assert_eq!(ScalarValue::from('z').as_char(), Some('z'));
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(ScalarType::Int32.zero(), ScalarValue::Int32(0));
        assert_eq!(ScalarType::Float64.zero(), ScalarValue::Float64(0.0));
        assert_eq!(ScalarType::String.zero(), ScalarValue::String(String::new()));
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(ScalarValue::Float64(89.0).to_string(), "89.0");
        assert_eq!(ScalarValue::from("Zürich").to_string(), "\"Zürich\"");
        assert_eq!(ScalarValue::Int32(415215).to_string(), "415215");
    }

    #[test]
    fn test_tuple_display() {
        assert_eq!(vals![].to_string(), "()");
        assert_eq!(vals![20i64].to_string(), "(20,)");
        assert_eq!(vals![30i64, "abc"].to_string(), "(30, \"abc\")");
    }

    #[test]
    fn test_tuple_field() {
        let t = vals![1u8, true];
        assert_eq!(t.field(1), Ok(&ScalarValue::Bool(true)));
        assert!(t.field(2).unwrap_err().is_not_found());
    }

    #[test]
    fn test_tuple_serde() {
        let t = vals![1i64, "a"];
        let json = serde_json::to_string(&t).unwrap();
        let back: ValueTuple = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
