//! Error types for struct operations.
//!
//! This module defines the structured errors raised by construction, field
//! dispatch, path navigation and assignment. Every error here is a usage
//! mistake by the caller; none of them are transient.

use thiserror::Error;

/// Structured error types for struct operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructError {
    /// The backing value handed to a constructor was neither a map nor null
    #[error("first argument must be a map, found {found}")]
    ConstructionType { found: &'static str },

    /// A strict struct was asked for a field it does not have
    #[error("undefined field '{name}' for {variant}")]
    NoSuchField { name: String, variant: String },

    /// Path navigation continued past a value that cannot be navigated
    #[error("{found} does not support path navigation (segment '{segment}')")]
    PathType {
        found: &'static str,
        segment: String,
    },

    /// An attribute-style call received the wrong number of arguments
    #[error("wrong number of arguments for '{name}' (given {given}, expected {expected})")]
    ArgumentArity {
        name: String,
        given: usize,
        expected: usize,
    },

    /// Assignment was attempted on an immutable variant
    #[error("cannot assign '{key}' on immutable {variant}")]
    Immutable { key: String, variant: String },
}

impl StructError {
    /// Check if this error was raised during construction
    pub fn is_construction_error(&self) -> bool {
        matches!(self, StructError::ConstructionType { .. })
    }

    /// Check if this error reports a missing field
    pub fn is_not_found(&self) -> bool {
        matches!(self, StructError::NoSuchField { .. })
    }

    /// Check if this error is a type error (construction or path navigation)
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            StructError::ConstructionType { .. } | StructError::PathType { .. }
        )
    }

    /// Check if this error is an argument arity violation
    pub fn is_arity_error(&self) -> bool {
        matches!(self, StructError::ArgumentArity { .. })
    }

    /// Check if this error rejected a write to an immutable struct
    pub fn is_immutable_error(&self) -> bool {
        matches!(self, StructError::Immutable { .. })
    }

    /// Get the field name if this error concerns a specific field
    pub fn field(&self) -> Option<&str> {
        match self {
            StructError::NoSuchField { name, .. } | StructError::ArgumentArity { name, .. } => {
                Some(name)
            }
            StructError::Immutable { key, .. } => Some(key),
            _ => None,
        }
    }
}

// Conversion from StructError to the main Error type
impl From<StructError> for crate::Error {
    fn from(err: StructError) -> Self {
        crate::Error::Struct(err)
    }
}
