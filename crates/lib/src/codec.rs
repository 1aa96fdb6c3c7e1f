//! Text and binary serialization.
//!
//! Two forms are supported:
//!
//! - **Plain JSON.** [`Value`], [`Store`] and [`ResourceStruct`] serialize as
//!   ordinary JSON objects; both key kinds become JSON strings, and keys read
//!   back are string-like. A [`Variant`] is a [`DeserializeSeed`] that builds
//!   a struct of that variant straight from any self-describing deserializer.
//! - **Dump.** [`ResourceStruct::dump`] captures the raw store as a [`Dump`],
//!   which serializes through a tagged representation that keeps each key's
//!   textual kind. With the `binary` feature a dump encodes to DAG-CBOR.
//!
//! ```
//! use resource_struct::{ResourceStruct, Variant};
//! use serde::de::DeserializeSeed;
//!
//! let mut de = serde_json::Deserializer::from_str(r#"{"foo": {"bar": 1}}"#);
//! let s = Variant::LOOSE.deserialize(&mut de)?;
//!
//! assert_eq!(s.variant(), Variant::LOOSE);
//! assert_eq!(s.dig(["foo", "bar"])?, 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeSeed};

use crate::{Key, ResourceStruct, Result, Store, Value, Variant};

impl<'de> DeserializeSeed<'de> for Variant {
    type Value = ResourceStruct;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<ResourceStruct, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        ResourceStruct::from_value(value, self).map_err(serde::de::Error::custom)
    }
}

impl ResourceStruct {
    /// Parses JSON text into a struct of `variant`. The root must be an object or null.
    pub fn from_json_str(text: &str, variant: Variant) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value, variant)
    }

    /// Wraps an already parsed JSON document.
    pub fn from_json_value(json: serde_json::Value, variant: Variant) -> Result<Self> {
        Self::from_value(Value::from(json), variant)
    }

    /// Serializes the raw store as compact JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the raw store as indented JSON
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Serializable snapshot of a struct's raw store.
///
/// Produced by [`ResourceStruct::dump`] and consumed by
/// [`ResourceStruct::load`]. Unlike plain JSON, a dump preserves whether each
/// key was string-like or symbol-like.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "DumpRepr", from = "DumpRepr")]
pub struct Dump {
    pub data: Store,
}

impl Dump {
    pub fn new(data: Store) -> Self {
        Self { data }
    }

    /// Encodes the dump as DAG-CBOR.
    #[cfg(feature = "binary")]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_ipld_dagcbor::to_vec(self).map_err(|e| crate::Error::Codec {
            reason: e.to_string(),
        })
    }

    /// Decodes a dump produced by [`Dump::to_bytes`].
    #[cfg(feature = "binary")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        serde_ipld_dagcbor::from_slice(bytes).map_err(|e| crate::Error::Codec {
            reason: e.to_string(),
        })
    }
}

#[derive(Serialize, Deserialize)]
struct DumpRepr {
    data: Vec<(Key, Repr)>,
}

/// Kind-preserving value representation used only inside dumps.
#[derive(Serialize, Deserialize)]
enum Repr {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Map(Vec<(Key, Repr)>),
    List(Vec<Repr>),
}

fn store_to_repr(store: &Store) -> Vec<(Key, Repr)> {
    store
        .entries()
        .into_iter()
        .map(|(key, value)| (key, Repr::from(&value)))
        .collect()
}

fn repr_to_store(entries: Vec<(Key, Repr)>) -> Store {
    entries
        .into_iter()
        .map(|(key, repr)| (key, Value::from(repr)))
        .collect()
}

impl From<&Value> for Repr {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Repr::Null,
            Value::Bool(b) => Repr::Bool(*b),
            Value::Int(n) => Repr::Int(*n),
            Value::Float(n) => Repr::Float(*n),
            Value::Text(s) => Repr::Text(s.clone()),
            Value::Map(store) => Repr::Map(store_to_repr(store)),
            Value::List(items) => Repr::List(items.iter().map(Repr::from).collect()),
        }
    }
}

impl From<Repr> for Value {
    fn from(repr: Repr) -> Self {
        match repr {
            Repr::Null => Value::Null,
            Repr::Bool(b) => Value::Bool(b),
            Repr::Int(n) => Value::Int(n),
            Repr::Float(n) => Value::Float(n),
            Repr::Text(s) => Value::Text(s),
            Repr::Map(entries) => Value::Map(repr_to_store(entries)),
            Repr::List(items) => Value::List(items.into_iter().map(Value::from).collect()),
        }
    }
}

impl From<Dump> for DumpRepr {
    fn from(dump: Dump) -> Self {
        DumpRepr {
            data: store_to_repr(&dump.data),
        }
    }
}

impl From<DumpRepr> for Dump {
    fn from(repr: DumpRepr) -> Self {
        Dump {
            data: repr_to_store(repr.data),
        }
    }
}
