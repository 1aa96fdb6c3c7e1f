//!
//! resource-struct: indifferent-access structs over nested key/value data.
//!
//! Wrap parsed configuration or API responses in a [`ResourceStruct`] and read
//! them by key or by attribute-style field name, without caring whether the
//! data arrived with string-like or symbol-like keys.
//!
//! ## Core Concepts
//!
//! * **Keys (`Key`)**: Two interchangeable textual kinds, string-like and symbol-like. Lookups and writes resolve either kind to the same logical field.
//! * **Stores (`Store`)**: The raw backing map. Nested maps are shared handles, so a nested struct and its parent see the same data.
//! * **Fields (`Field`)**: What lookups return. Nested maps come back as structs of the same variant; sequences come back as immutable slices.
//! * **Variants (`Variant`)**: Whether a missing field is an error or null, whether the struct accepts writes, and how attribute-style calls check their arguments.
//! * **Dispatch (`ResourceStruct::dispatch`)**: Attribute-style access: `name`, `name?` and `name=`.
//!
//! ## Example
//!
//! ```
//! use resource_struct::{Field, Key, ResourceStruct, list, path, store};
//!
//! let s = ResourceStruct::flex(store! {
//!     "foo" => 1,
//!     :bar => list![store! { "baz" => 2 }, 3],
//! });
//!
//! assert_eq!(s.get("bar"), s.get(Key::sym("bar")));
//! assert_eq!(s.get_path("bar", path![0, "baz"])?, 2);
//! assert_eq!(s.field("missing")?, Field::Null);
//!
//! s.set_field("bar", 4)?;
//! assert_eq!(s.get(Key::sym("bar")), 4);
//! assert_eq!(s.len(), 2);
//! # Ok::<(), resource_struct::Error>(())
//! ```

pub mod cache;
pub mod codec;
pub mod dispatch;
pub mod errors;
pub mod field;
pub mod key;
pub mod path;
pub mod resource;
pub mod store;
pub mod value;
pub mod variant;

pub use cache::ValueCache;
pub use codec::Dump;
pub use dispatch::{Dispatched, FieldAccess};
pub use errors::StructError;
pub use field::Field;
pub use key::Key;
pub use path::Segment;
pub use resource::ResourceStruct;
pub use store::Store;
pub use value::Value;
pub use variant::{ArgumentRule, MissingFieldPolicy, Mutability, UnknownVariant, Variant};

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from struct construction, dispatch and navigation
    #[error(transparent)]
    Struct(StructError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoding or decoding of a dump failed
    #[error("codec error: {reason}")]
    Codec { reason: String },
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Struct(_) => "struct",
            Error::Json(_) => "json",
            Error::Codec { .. } => "codec",
        }
    }

    /// Check if this error indicates a missing field.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Struct(err) if err.is_not_found())
    }

    /// Check if this error is a construction or path type error.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::Struct(err) if err.is_type_error())
    }

    /// Check if this error is an argument arity violation.
    pub fn is_arity_error(&self) -> bool {
        matches!(self, Error::Struct(err) if err.is_arity_error())
    }

    /// The structured struct error, if this is one.
    pub fn as_struct_error(&self) -> Option<&StructError> {
        match self {
            Error::Struct(err) => Some(err),
            _ => None,
        }
    }
}
