//! Externally visible field values and the recursive converter.
//!
//! Lookups never expose raw [`Value`]s. [`convert`] turns a raw value into a
//! [`Field`]:
//!
//! - nested maps become [`ResourceStruct`]s of the parent's variant, wrapping
//!   the nested map by reference;
//! - sequences become immutable slices of converted elements, even for
//!   mutable variants;
//! - scalars pass through unchanged.

use std::{fmt, rc::Rc};

use crate::{Result, ResourceStruct, Segment, Value, Variant, errors::StructError};

/// A converted value as returned by struct lookups.
#[derive(Debug, Clone)]
pub enum Field {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Nested map, wrapped as a struct of the parent's variant
    Struct(ResourceStruct),
    /// Immutable sequence of converted elements
    List(Rc<[Field]>),
}

/// Converts a raw stored value into its externally visible form.
pub fn convert(raw: &Value, variant: Variant) -> Field {
    match raw {
        Value::Null => Field::Null,
        Value::Bool(b) => Field::Bool(*b),
        Value::Int(n) => Field::Int(*n),
        Value::Float(n) => Field::Float(*n),
        Value::Text(s) => Field::Text(s.clone()),
        Value::Map(store) => {
            tracing::trace!(entries = store.len(), %variant, "wrapping nested map");
            Field::Struct(ResourceStruct::new(store.clone(), variant))
        }
        Value::List(items) => Field::List(items.iter().map(|item| convert(item, variant)).collect()),
    }
}

impl Field {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Boolean coercion: only null and `false` are falsy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Field::Null | Field::Bool(false))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Field::Null => "null",
            Field::Bool(_) => "bool",
            Field::Int(_) => "int",
            Field::Float(_) => "float",
            Field::Text(_) => "text",
            Field::Struct(_) => "struct",
            Field::List(_) => "list",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Field::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Field::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Field::Float(n) => Some(*n),
            Field::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&ResourceStruct> {
        match self {
            Field::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Field]> {
        match self {
            Field::List(items) => Some(items),
            _ => None,
        }
    }

    /// Takes one navigation step into this value.
    ///
    /// Structs accept key segments (an index segment names no field and
    /// yields null); lists accept index segments (out of range yields null).
    /// Anything else fails with a path type error.
    pub fn navigate(&self, segment: &Segment) -> Result<Field> {
        match (self, segment) {
            (Field::Struct(inner), Segment::Key(key)) => Ok(inner.get(key.clone())),
            (Field::Struct(_), Segment::Index(_)) => Ok(Field::Null),
            (Field::List(items), Segment::Index(_)) => Ok(segment
                .resolve_index(items.len())
                .map_or(Field::Null, |i| items[i].clone())),
            _ => Err(StructError::PathType {
                found: self.type_name(),
                segment: segment.to_string(),
            }
            .into()),
        }
    }

    /// Converts back to a raw value. Nested structs are deep-copied.
    pub fn to_value(&self) -> Value {
        match self {
            Field::Null => Value::Null,
            Field::Bool(b) => Value::Bool(*b),
            Field::Int(n) => Value::Int(*n),
            Field::Float(n) => Value::Float(*n),
            Field::Text(s) => Value::Text(s.clone()),
            Field::Struct(s) => Value::Map(s.to_plain_map().deep_copy()),
            Field::List(items) => Value::List(items.iter().map(Field::to_value).collect()),
        }
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Field::Null, Field::Null) => true,
            (Field::Bool(a), Field::Bool(b)) => a == b,
            (Field::Int(a), Field::Int(b)) => a == b,
            (Field::Float(a), Field::Float(b)) => a == b,
            (Field::Int(i), Field::Float(f)) | (Field::Float(f), Field::Int(i)) => *i as f64 == *f,
            (Field::Text(a), Field::Text(b)) => a == b,
            (Field::Struct(a), Field::Struct(b)) => a == b,
            (Field::List(a), Field::List(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => write!(f, "null"),
            Field::Bool(b) => write!(f, "{b}"),
            Field::Int(n) => write!(f, "{n}"),
            Field::Float(n) => write!(f, "{n:?}"),
            Field::Text(s) => write!(f, "{s:?}"),
            Field::Struct(s) => write!(f, "{s}"),
            Field::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<Field> for Value {
    fn from(value: Field) -> Self {
        value.to_value()
    }
}

impl From<&Field> for Value {
    fn from(value: &Field) -> Self {
        value.to_value()
    }
}

// PartialEq implementations for comparing Field with other types
impl PartialEq<i64> for Field {
    fn eq(&self, other: &i64) -> bool {
        *self == Field::Int(*other)
    }
}

impl PartialEq<i32> for Field {
    fn eq(&self, other: &i32) -> bool {
        *self == Field::Int(*other as i64)
    }
}

impl PartialEq<f64> for Field {
    fn eq(&self, other: &f64) -> bool {
        *self == Field::Float(*other)
    }
}

impl PartialEq<bool> for Field {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Field::Bool(b) if b == other)
    }
}

impl PartialEq<str> for Field {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Field::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Field {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<ResourceStruct> for Field {
    fn eq(&self, other: &ResourceStruct) -> bool {
        matches!(self, Field::Struct(s) if s == other)
    }
}

impl PartialEq<Value> for Field {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Field::Struct(s), Value::Map(store)) => s == store,
            (Field::List(items), Value::List(raw)) => {
                items.len() == raw.len() && items.iter().zip(raw).all(|(a, b)| a == b)
            }
            (Field::Struct(_) | Field::List(_), _) => false,
            (scalar, raw) => scalar.to_value() == *raw,
        }
    }
}
