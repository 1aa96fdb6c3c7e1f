//! Behavioural configuration of a struct.
//!
//! Every struct carries a [`Variant`]: what happens when a field is missing
//! ([`MissingFieldPolicy`]), whether it can be written ([`Mutability`]), and
//! how attribute-style calls treat their argument list ([`ArgumentRule`]).
//! Nested structs produced by lookups inherit their parent's variant.
//!
//! The named presets cover the common shapes:
//!
//! | Preset | Missing field | Writable | Wrong argument count |
//! |---|---|---|---|
//! | [`Variant::STRICT`] / [`Variant::FIRM`] | error | no | falls through to a missing-field error |
//! | [`Variant::FLEX`] | null | yes | argument error |
//! | [`Variant::LOOSE`] | null | no | arguments ignored |
//!
//! Variants parse from their preset names, so they can be carried in
//! application configuration:
//!
//! ```
//! use resource_struct::Variant;
//!
//! let variant: Variant = "flex".parse()?;
//! assert_eq!(variant, Variant::FLEX);
//! assert!(variant.is_mutable());
//! # Ok::<(), resource_struct::UnknownVariant>(())
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// What an attribute-style access does when the field does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Fail with a missing-field error
    Strict,
    /// Return null
    Lenient,
}

/// Whether a struct's top-level map accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutability {
    Immutable,
    Mutable,
}

/// How attribute-style dispatch treats an argument list of the wrong length.
///
/// Plain and predicate accesses take no arguments; assignment takes exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentRule {
    /// A call with the wrong arguments is treated as a call to an unknown field
    FallThrough,
    /// A call with the wrong arguments fails with an arity error
    Enforce,
    /// Argument counts are never checked. An assignment with no argument
    /// writes nothing and is answered like a missing field.
    Ignore,
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown struct variant '{0}' (expected strict, firm, flex or loose)")]
pub struct UnknownVariant(pub String);

/// The full behavioural configuration of a struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Variant {
    pub policy: MissingFieldPolicy,
    pub mutability: Mutability,
    pub arguments: ArgumentRule,
}

impl Variant {
    /// Immutable, errors on missing fields.
    pub const STRICT: Variant = Variant::new(MissingFieldPolicy::Strict, Mutability::Immutable);

    /// Another name for [`Variant::STRICT`].
    pub const FIRM: Variant = Variant::STRICT;

    /// Mutable, null on missing fields, rejects wrong argument counts.
    pub const FLEX: Variant = Variant::new(MissingFieldPolicy::Lenient, Mutability::Mutable);

    /// Immutable, null on missing fields, ignores arguments.
    pub const LOOSE: Variant = Variant::new(MissingFieldPolicy::Lenient, Mutability::Immutable);

    /// Creates a variant with the argument rule implied by its mutability and policy.
    ///
    /// Mutable variants enforce arity, immutable strict variants fall through,
    /// immutable lenient variants ignore arguments.
    pub const fn new(policy: MissingFieldPolicy, mutability: Mutability) -> Self {
        let arguments = match (mutability, policy) {
            (Mutability::Mutable, _) => ArgumentRule::Enforce,
            (Mutability::Immutable, MissingFieldPolicy::Strict) => ArgumentRule::FallThrough,
            (Mutability::Immutable, MissingFieldPolicy::Lenient) => ArgumentRule::Ignore,
        };
        Self {
            policy,
            mutability,
            arguments,
        }
    }

    /// Replaces the argument rule.
    pub const fn with_arguments(mut self, arguments: ArgumentRule) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.policy == MissingFieldPolicy::Strict
    }

    pub fn is_mutable(&self) -> bool {
        self.mutability == Mutability::Mutable
    }

    /// The preset name, if this variant is one of the presets.
    pub fn preset_name(&self) -> Option<&'static str> {
        match *self {
            Variant::STRICT => Some("strict"),
            Variant::FLEX => Some("flex"),
            Variant::LOOSE => Some("loose"),
            _ => None,
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Variant::STRICT
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Variant::STRICT => write!(f, "StrictStruct"),
            Variant::FLEX => write!(f, "FlexStruct"),
            Variant::LOOSE => write!(f, "LooseStruct"),
            Variant {
                policy,
                mutability,
                arguments,
            } => write!(f, "ResourceStruct({policy:?}, {mutability:?}, {arguments:?})"),
        }
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "firm" => Ok(Variant::STRICT),
            "flex" => Ok(Variant::FLEX),
            "loose" => Ok(Variant::LOOSE),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
