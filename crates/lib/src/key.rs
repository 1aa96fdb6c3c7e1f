//! Keys with two interchangeable textual kinds.
//!
//! Data handed to a struct may tag its keys either as plain strings or as
//! symbols (the way an external deserializer or a hand-built fixture chose
//! to). Both kinds name the same logical field; [`Key::canonical`] folds
//! them to a single string used for caching, and [`Key::counterpart`] gives
//! the same name under the other kind so a store can be probed for either.
//!
//! ```
//! use resource_struct::Key;
//!
//! let string = Key::from("foo");
//! let symbol = Key::sym("foo");
//!
//! assert_ne!(string, symbol);
//! assert_eq!(string.canonical(), symbol.canonical());
//! assert_eq!(symbol.counterpart(), string);
//! ```

use std::fmt;

/// A store key of either textual kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Key {
    /// String-like key
    Str(String),
    /// Symbol-like key
    Sym(String),
}

impl Key {
    /// Creates a string-like key
    pub fn str(name: impl Into<String>) -> Self {
        Key::Str(name.into())
    }

    /// Creates a symbol-like key
    pub fn sym(name: impl Into<String>) -> Self {
        Key::Sym(name.into())
    }

    /// The textual name, regardless of kind
    pub fn name(&self) -> &str {
        match self {
            Key::Str(name) | Key::Sym(name) => name,
        }
    }

    /// Returns true if this is a symbol-like key
    pub fn is_sym(&self) -> bool {
        matches!(self, Key::Sym(_))
    }

    /// Returns true if this is a string-like key
    pub fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    /// The canonical cache key: symbols fold to their string form, strings are unchanged.
    pub fn canonical(&self) -> &str {
        self.name()
    }

    /// The same name under the other textual kind.
    pub fn counterpart(&self) -> Key {
        match self {
            Key::Str(name) => Key::Sym(name.clone()),
            Key::Sym(name) => Key::Str(name.clone()),
        }
    }

    /// The string-like form of this key
    pub fn to_str_kind(&self) -> Key {
        Key::Str(self.name().to_string())
    }

    /// The symbol-like form of this key
    pub fn to_sym_kind(&self) -> Key {
        Key::Sym(self.name().to_string())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(name) => write!(f, "{name:?}"),
            Key::Sym(name) => write!(f, ":{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Str(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}
