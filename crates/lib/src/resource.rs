//! The indifferent-access struct.
//!
//! A [`ResourceStruct`] wraps one [`Store`] and a [`ValueCache`]. Lookups
//! resolve the requested key under either textual kind, convert the raw
//! value on first access and hand out the cached conversion afterwards, so a
//! nested struct obtained twice is the same instance both times.
//!
//! `ResourceStruct` is a handle: cloning it yields another reference to the
//! same instance (same store, same cache). Use [`ResourceStruct::ptr_eq`] to
//! test identity and `==` for structural equality.
//!
//! # Examples
//!
//! ```
//! use resource_struct::{ResourceStruct, list, path, store};
//!
//! let s = ResourceStruct::strict(store! {
//!     "foo" => 1,
//!     "bar" => list![store! { "baz" => 2 }, 3],
//! });
//!
//! assert_eq!(s.field("foo")?, 1);
//! assert_eq!(s.get_path("bar", path![0, :baz])?, 2);
//! assert_eq!(s.get_path("bar", path![1])?, 3);
//! assert!(s.field("brr").is_err());
//! assert!(!s.predicate("brr"));
//!
//! let first = s.get_path("bar", path![0])?;
//! assert_eq!(first, ResourceStruct::strict(store! { "baz" => 2 }));
//! # Ok::<(), resource_struct::Error>(())
//! ```

use std::{
    cell::{Ref, RefCell},
    fmt,
    rc::Rc,
};

use crate::{
    Dump, Field, Key, Result, Segment, Store, Value, ValueCache, Variant, errors::StructError,
    field::convert,
};

struct Inner {
    variant: Variant,
    store: RefCell<Store>,
    cache: RefCell<ValueCache>,
}

/// Indifferent-access wrapper over a [`Store`].
#[derive(Clone)]
pub struct ResourceStruct {
    inner: Rc<Inner>,
}

impl ResourceStruct {
    /// Wraps `store` by reference.
    pub fn new(store: Store, variant: Variant) -> Self {
        Self {
            inner: Rc::new(Inner {
                variant,
                store: RefCell::new(store),
                cache: RefCell::new(ValueCache::new()),
            }),
        }
    }

    /// Creates a struct over an empty store
    pub fn empty(variant: Variant) -> Self {
        Self::new(Store::new(), variant)
    }

    /// Builds a struct from an arbitrary backing value.
    ///
    /// Maps are wrapped by reference and null yields an empty struct; any
    /// other value is rejected.
    pub fn from_value(value: impl Into<Value>, variant: Variant) -> Result<Self> {
        match value.into() {
            Value::Map(store) => Ok(Self::new(store, variant)),
            Value::Null => Ok(Self::empty(variant)),
            other => {
                tracing::debug!(found = other.type_name(), %variant, "rejected backing value");
                Err(StructError::ConstructionType {
                    found: other.type_name(),
                }
                .into())
            }
        }
    }

    /// Wraps `store` as a [`Variant::STRICT`] struct
    pub fn strict(store: Store) -> Self {
        Self::new(store, Variant::STRICT)
    }

    /// Wraps `store` as a [`Variant::FIRM`] struct
    pub fn firm(store: Store) -> Self {
        Self::new(store, Variant::FIRM)
    }

    /// Wraps `store` as a [`Variant::FLEX`] struct
    pub fn flex(store: Store) -> Self {
        Self::new(store, Variant::FLEX)
    }

    /// Wraps `store` as a [`Variant::LOOSE`] struct
    pub fn loose(store: Store) -> Self {
        Self::new(store, Variant::LOOSE)
    }

    /// Returns true if both handles refer to the same instance
    pub fn ptr_eq(a: &ResourceStruct, b: &ResourceStruct) -> bool {
        Rc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn variant(&self) -> Variant {
        self.inner.variant
    }

    fn store(&self) -> Ref<'_, Store> {
        self.inner.store.borrow()
    }

    /// The underlying store (the same map, not a copy)
    pub fn to_plain_map(&self) -> Store {
        self.store().clone()
    }

    /// The underlying store as a raw value (the same map, not a copy).
    ///
    /// Assigning the result into another struct aliases this struct's map
    /// there, so later writes on either side are visible through both. To
    /// store a detached copy, assign the struct itself (`&s` or `s`), which
    /// goes through `From<&ResourceStruct> for Value` and deep-copies.
    pub fn to_value(&self) -> Value {
        Value::Map(self.to_plain_map())
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.store().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store().is_empty()
    }

    /// Top-level keys, as stored
    pub fn keys(&self) -> Vec<Key> {
        self.store().keys()
    }

    /// Returns true if `key` is present under either kind
    pub fn contains_key(&self, key: &Key) -> bool {
        self.store().contains(key)
    }

    /// Number of fields currently cached
    pub fn cached_len(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    /// Indexed lookup.
    ///
    /// Returns the converted value stored under `key` (either kind), or null
    /// when the key is absent. Missing keys are null for every policy; only
    /// attribute-style access consults the missing-field policy.
    pub fn get(&self, key: impl Into<Key>) -> Field {
        let key = key.into();
        let variant = self.variant();
        let store = self.store();
        self.inner
            .cache
            .borrow_mut()
            .get_or_compute(key.canonical(), || {
                store.lookup(&key).map(|raw| convert(&raw, variant))
            })
            .unwrap_or(Field::Null)
    }

    /// Path lookup: `key` followed by `subkeys`.
    ///
    /// Navigation stops with null as soon as a field lookup yields null or
    /// `false`, or a list element is null. Navigating into any other scalar
    /// (a `false` list element included), or with a key into a list, is a
    /// path type error whatever the policy.
    pub fn get_path<S>(&self, key: impl Into<Key>, subkeys: impl IntoIterator<Item = S>) -> Result<Field>
    where
        S: Into<Segment>,
    {
        let mut current = self.get(key);
        let mut list_element = false;
        for segment in subkeys {
            let exhausted = if list_element {
                current.is_null()
            } else {
                !current.is_truthy()
            };
            if exhausted {
                return Ok(Field::Null);
            }
            list_element = matches!(current, Field::List(_));
            current = current.navigate(&segment.into())?;
        }
        Ok(current)
    }

    /// Path lookup where the first segment is also part of the path.
    ///
    /// An empty path returns this struct; a leading index names no field and
    /// returns null.
    pub fn dig<S>(&self, path: impl IntoIterator<Item = S>) -> Result<Field>
    where
        S: Into<Segment>,
    {
        let mut segments = path.into_iter().map(Into::<Segment>::into);
        match segments.next() {
            None => Ok(Field::Struct(self.clone())),
            Some(Segment::Index(_)) => Ok(Field::Null),
            Some(Segment::Key(key)) => self.get_path(key, segments),
        }
    }

    /// Writes `value` under the logical key `key` (mutable variants only).
    ///
    /// An existing entry under either kind is overwritten (exact kind first,
    /// then string-like, then symbol-like); otherwise a new entry is inserted
    /// under `key`'s own kind. Structs are stored as a deep copy of their raw
    /// map. The cached conversion for the key is dropped.
    pub fn assign(&self, key: impl Into<Key>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        if !self.variant().is_mutable() {
            return Err(StructError::Immutable {
                key: key.name().to_string(),
                variant: self.variant().to_string(),
            }
            .into());
        }

        let value = value.into();
        self.inner.cache.borrow_mut().invalidate(key.canonical());
        let stored = self.store().assign(&key, value);
        tracing::debug!(requested = %key, stored = %stored, "assigned field");
        Ok(())
    }

    /// Captures the raw store for serialization.
    pub fn dump(&self) -> Dump {
        Dump {
            data: self.to_plain_map(),
        }
    }

    /// Replaces the store with `dump.data` and empties the cache.
    pub fn load(&self, dump: Dump) {
        *self.inner.store.borrow_mut() = dump.data;
        self.inner.cache.borrow_mut().clear();
        tracing::debug!(entries = self.len(), "loaded struct from dump");
    }

    /// Builds a fresh struct from a dump.
    pub fn from_dump(dump: Dump, variant: Variant) -> Self {
        Self::new(dump.data, variant)
    }
}

impl Default for ResourceStruct {
    fn default() -> Self {
        Self::empty(Variant::default())
    }
}

impl From<ResourceStruct> for Value {
    fn from(value: ResourceStruct) -> Self {
        Value::Map(value.to_plain_map().deep_copy())
    }
}

impl From<&ResourceStruct> for Value {
    fn from(value: &ResourceStruct) -> Self {
        Value::Map(value.to_plain_map().deep_copy())
    }
}

/// Structural equality over the raw stores, indifferent to key kind and
/// variant.
impl PartialEq for ResourceStruct {
    fn eq(&self, other: &Self) -> bool {
        ResourceStruct::ptr_eq(self, other) || *self.store() == *other.store()
    }
}

impl PartialEq<Store> for ResourceStruct {
    fn eq(&self, other: &Store) -> bool {
        *self.store() == *other
    }
}

impl PartialEq<Value> for ResourceStruct {
    fn eq(&self, other: &Value) -> bool {
        other.as_map().is_some_and(|store| self == store)
    }
}

impl PartialEq<Field> for ResourceStruct {
    fn eq(&self, other: &Field) -> bool {
        other == self
    }
}

impl fmt::Debug for ResourceStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.variant(), *self.store())
    }
}

impl fmt::Display for ResourceStruct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.store())
    }
}

impl serde::Serialize for ResourceStruct {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&*self.store(), serializer)
    }
}
