//! The backing map of a struct.
//!
//! A [`Store`] is an insertion-ordered `Key → Value` map behind a shared
//! handle. Cloning a `Store` clones the handle, not the entries: a nested map
//! wrapped by a struct is the very map its parent holds, so writes through
//! the nested struct are visible through the parent. Use
//! [`Store::deep_copy`] to detach.
//!
//! Key resolution is indifferent: [`Store::resolve`] finds the stored key
//! matching a requested key, checking the exact key first and then the same
//! name under the other textual kind. [`Store::assign`] uses the same rule so
//! that a logical key is never split across both kinds by a write.
//!
//! Stores are single-threaded. A store that (directly or through nested maps)
//! contains a handle to itself makes equality, copying and serialization
//! recurse without bound.

use std::{cell::RefCell, fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{Key, Value};

/// Shared, insertion-ordered map from [`Key`] to [`Value`].
#[derive(Clone, Default)]
pub struct Store {
    entries: Rc<RefCell<IndexMap<Key, Value>>>,
}

impl Store {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing map without copying it
    pub fn from_index_map(entries: IndexMap<Key, Value>) -> Self {
        Self {
            entries: Rc::new(RefCell::new(entries)),
        }
    }

    /// Returns true if both handles point at the same map
    pub fn ptr_eq(a: &Store, b: &Store) -> bool {
        Rc::ptr_eq(&a.entries, &b.entries)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if the store has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Returns the stored keys, in insertion order
    pub fn keys(&self) -> Vec<Key> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Returns a snapshot of the entries, in insertion order.
    ///
    /// Nested maps in the snapshot are still shared handles.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Returns true if exactly this key (same kind) is stored
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.borrow().contains_key(key)
    }

    /// Returns the value stored under exactly this key (same kind)
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    /// Finds the stored key for `key`: the exact key if present, otherwise
    /// the same name under the other kind.
    pub fn resolve(&self, key: &Key) -> Option<Key> {
        let entries = self.entries.borrow();
        if entries.contains_key(key) {
            return Some(key.clone());
        }
        let counterpart = key.counterpart();
        entries.contains_key(&counterpart).then_some(counterpart)
    }

    /// Returns true if `key` exists under either kind
    pub fn contains(&self, key: &Key) -> bool {
        self.resolve(key).is_some()
    }

    /// Looks up `key` under either kind, exact match first
    pub fn lookup(&self, key: &Key) -> Option<Value> {
        let entries = self.entries.borrow();
        entries
            .get(key)
            .or_else(|| entries.get(&key.counterpart()))
            .cloned()
    }

    /// Inserts under exactly this key, returning the previous value
    pub fn insert(&self, key: Key, value: Value) -> Option<Value> {
        self.entries.borrow_mut().insert(key, value)
    }

    /// Writes `value` for the logical key `key`, returning the key it was stored under.
    ///
    /// Overwrites, in order of preference: the exact key, the string-like
    /// form, the symbol-like form. Only when none is present is a new entry
    /// inserted under `key` itself.
    pub fn assign(&self, key: &Key, value: Value) -> Key {
        let mut entries = self.entries.borrow_mut();
        let target = [key.clone(), key.to_str_kind(), key.to_sym_kind()]
            .into_iter()
            .find(|candidate| entries.contains_key(candidate))
            .unwrap_or_else(|| key.clone());
        entries.insert(target.clone(), value);
        target
    }

    /// Copies the store so that no map, at any depth, is shared with the original.
    pub fn deep_copy(&self) -> Store {
        self.entries
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_copy()))
            .collect()
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Store {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Store::from_index_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<IndexMap<Key, Value>> for Store {
    fn from(entries: IndexMap<Key, Value>) -> Self {
        Store::from_index_map(entries)
    }
}

/// Indifferent structural equality: same number of entries, and every key on
/// the left has an equal value under the same key (either kind) on the right.
impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        if Store::ptr_eq(self, other) {
            return true;
        }
        let left = self.entries.borrow();
        let right = other.entries.borrow();
        if left.len() != right.len() {
            return false;
        }
        left.iter().all(|(key, value)| {
            right
                .get(key)
                .or_else(|| right.get(&key.counterpart()))
                .is_some_and(|other| value == other)
        })
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.borrow().iter()).finish()
    }
}

impl serde::Serialize for Store {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let entries = self.entries.borrow();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, value) in entries.iter() {
            map.serialize_entry(key.name(), value)?;
        }
        map.end()
    }
}

impl<'de> serde::Deserialize<'de> for Store {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        match <Value as serde::Deserialize>::deserialize(deserializer)? {
            Value::Map(store) => Ok(store),
            other => Err(D::Error::invalid_type(
                serde::de::Unexpected::Other(other.type_name()),
                &"a map",
            )),
        }
    }
}

/// Builds a [`Store`] with string-like (`"key" => v`) and symbol-like
/// (`:key => v`) keys.
///
/// ```
/// use resource_struct::{Key, Value, store};
///
/// let store = store! { "foo" => 1, :bar => "two" };
/// assert_eq!(store.get(&Key::str("foo")), Some(Value::Int(1)));
/// assert_eq!(store.get(&Key::sym("bar")), Some(Value::from("two")));
/// ```
#[macro_export]
macro_rules! store {
    (@entries $store:ident ;) => {};
    (@entries $store:ident ; : $key:ident => $value:expr $(, $($rest:tt)*)?) => {
        $store.insert($crate::Key::sym(stringify!($key)), $crate::Value::from($value));
        $crate::store!(@entries $store ; $($($rest)*)?);
    };
    (@entries $store:ident ; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $store.insert($crate::Key::from($key), $crate::Value::from($value));
        $crate::store!(@entries $store ; $($($rest)*)?);
    };
    ($($body:tt)*) => {{
        let store = $crate::Store::new();
        $crate::store!(@entries store ; $($body)*);
        store
    }};
}
