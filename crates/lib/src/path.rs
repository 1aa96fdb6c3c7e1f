//! Path segments for chained lookups.
//!
//! A path is a sequence of [`Segment`]s: keys step into nested structs,
//! integer indices step into sequences. The [`path!`](crate::path!) macro
//! builds one from mixed literals, with `:name` for symbol-like keys.
//!
//! ```
//! use resource_struct::{Key, Segment, path};
//!
//! let path = path!["bar", 0, :baz];
//! assert_eq!(
//!     path,
//!     vec![
//!         Segment::Key(Key::str("bar")),
//!         Segment::Index(0),
//!         Segment::Key(Key::sym("baz")),
//!     ]
//! );
//! ```

use std::fmt;

use crate::Key;

/// One step of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Field of a nested struct
    Key(Key),
    /// Position in a sequence; negative values count from the end
    Index(i64),
}

impl Segment {
    /// Resolves an index segment against a sequence of length `len`.
    ///
    /// Returns `None` for key segments and for out-of-range indices.
    pub fn resolve_index(&self, len: usize) -> Option<usize> {
        let Segment::Index(index) = *self else {
            return None;
        };
        let resolved = if index < 0 {
            (len as i64).checked_add(index)?
        } else {
            index
        };
        usize::try_from(resolved).ok().filter(|&i| i < len)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => write!(f, "{key}"),
            Segment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<Key> for Segment {
    fn from(value: Key) -> Self {
        Segment::Key(value)
    }
}

impl From<&Key> for Segment {
    fn from(value: &Key) -> Self {
        Segment::Key(value.clone())
    }
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::Key(Key::from(value))
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::Key(Key::from(value))
    }
}

impl From<i64> for Segment {
    fn from(value: i64) -> Self {
        Segment::Index(value)
    }
}

impl From<i32> for Segment {
    fn from(value: i32) -> Self {
        Segment::Index(value as i64)
    }
}

impl From<usize> for Segment {
    fn from(value: usize) -> Self {
        Segment::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Builds a `Vec<Segment>` from keys, `:symbol` keys and indices.
#[macro_export]
macro_rules! path {
    (@segments $path:ident ;) => {};
    (@segments $path:ident ; : $key:ident $(, $($rest:tt)*)?) => {
        $path.push($crate::Segment::Key($crate::Key::sym(stringify!($key))));
        $crate::path!(@segments $path ; $($($rest)*)?);
    };
    (@segments $path:ident ; $segment:expr $(, $($rest:tt)*)?) => {
        $path.push($crate::Segment::from($segment));
        $crate::path!(@segments $path ; $($($rest)*)?);
    };
    ($($body:tt)*) => {{
        #[allow(unused_mut)]
        let mut path: ::std::vec::Vec<$crate::Segment> = ::std::vec::Vec::new();
        $crate::path!(@segments path ; $($body)*);
        path
    }};
}
