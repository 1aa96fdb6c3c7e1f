//! Attribute-style field access.
//!
//! A field access names a field, optionally followed by a predicate marker
//! (`name?`) or an assignment marker (`name=`), and carries an argument list.
//! [`FieldAccess::parse`] splits the marker off; [`ResourceStruct::dispatch`]
//! decides between lookup, existence check and assignment, and applies the
//! struct's [`ArgumentRule`] and [`MissingFieldPolicy`] when the request
//! doesn't fit.
//!
//! ```
//! use resource_struct::{Dispatched, Field, ResourceStruct, Value, store};
//!
//! let s = ResourceStruct::flex(store! { "foo" => 1 });
//!
//! assert_eq!(s.dispatch("foo", &[])?, Dispatched::Value(Field::Int(1)));
//! assert_eq!(s.dispatch("foo?", &[])?, Dispatched::Exists(true));
//! assert_eq!(s.dispatch("foo=", &[Value::Int(2)])?, Dispatched::Assigned);
//! assert_eq!(s.field("foo")?, 2);
//! # Ok::<(), resource_struct::Error>(())
//! ```

use crate::{
    ArgumentRule, Field, Key, MissingFieldPolicy, ResourceStruct, Result, Value,
    errors::StructError,
};

/// A parsed attribute-style request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldAccess<'a> {
    /// `name`
    Lookup(&'a str),
    /// `name?`
    Predicate(&'a str),
    /// `name=`
    Assign(&'a str),
}

impl<'a> FieldAccess<'a> {
    /// Splits a trailing `?` or `=` marker off `name`.
    pub fn parse(name: &'a str) -> Self {
        if let Some(field) = name.strip_suffix('?') {
            FieldAccess::Predicate(field)
        } else if let Some(field) = name.strip_suffix('=') {
            FieldAccess::Assign(field)
        } else {
            FieldAccess::Lookup(name)
        }
    }

    /// The field name without its marker
    pub fn field(&self) -> &'a str {
        match self {
            FieldAccess::Lookup(field) | FieldAccess::Predicate(field) | FieldAccess::Assign(field) => {
                field
            }
        }
    }

    /// Number of arguments this form accepts
    pub fn expected_arguments(&self) -> usize {
        match self {
            FieldAccess::Assign(_) => 1,
            FieldAccess::Lookup(_) | FieldAccess::Predicate(_) => 0,
        }
    }
}

/// Outcome of a dispatched field access.
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatched {
    /// A plain lookup (or the null returned for a missing lenient field)
    Value(Field),
    /// A predicate result
    Exists(bool),
    /// An assignment was performed
    Assigned,
}

impl Dispatched {
    /// Flattens the outcome into a field: predicates become booleans,
    /// assignments become null.
    pub fn into_field(self) -> Field {
        match self {
            Dispatched::Value(field) => field,
            Dispatched::Exists(exists) => Field::Bool(exists),
            Dispatched::Assigned => Field::Null,
        }
    }
}

impl ResourceStruct {
    /// Dispatches an attribute-style access.
    ///
    /// In order:
    /// 1. a field named exactly `name` is looked up, if the arguments fit a plain access;
    /// 2. `name?` reports whether the field is present and truthy;
    /// 3. `name=` writes the first argument (mutable variants only; with no
    ///    argument nothing is written);
    /// 4. otherwise the argument rule and the missing-field policy decide:
    ///    an arity error under [`ArgumentRule::Enforce`], else a
    ///    missing-field error ([`MissingFieldPolicy::Strict`]) or null.
    pub fn dispatch(&self, name: &str, args: &[Value]) -> Result<Dispatched> {
        let access = FieldAccess::parse(name);
        let variant = self.variant();
        let accepts = |expected: usize| {
            variant.arguments == ArgumentRule::Ignore || args.len() == expected
        };

        let exact = Key::sym(name);
        if accepts(0) && self.contains_key(&exact) {
            return Ok(Dispatched::Value(self.get(exact)));
        }

        match (access, args.first()) {
            (FieldAccess::Predicate(field), _) if accepts(0) => {
                return Ok(Dispatched::Exists(self.get(Key::sym(field)).is_truthy()));
            }
            (FieldAccess::Assign(field), Some(value)) if variant.is_mutable() && accepts(1) => {
                self.assign(Key::sym(field), value.clone())?;
                return Ok(Dispatched::Assigned);
            }
            _ => {}
        }

        let unsupported_assign = matches!(access, FieldAccess::Assign(_)) && !variant.is_mutable();
        if variant.arguments == ArgumentRule::Enforce
            && !unsupported_assign
            && args.len() != access.expected_arguments()
        {
            tracing::debug!(field = name, given = args.len(), "argument count rejected");
            return Err(StructError::ArgumentArity {
                name: name.to_string(),
                given: args.len(),
                expected: access.expected_arguments(),
            }
            .into());
        }

        self.missing(name)
    }

    /// Plain attribute access: `s.field("foo")` is `foo` with no arguments.
    pub fn field(&self, name: &str) -> Result<Field> {
        self.dispatch(name, &[]).map(Dispatched::into_field)
    }

    /// Predicate access: `s.predicate("foo")` is `foo?` with no arguments.
    ///
    /// Only a present, truthy field answers `true`; this never fails.
    pub fn predicate(&self, name: &str) -> bool {
        self.get(Key::sym(name)).is_truthy()
    }

    /// Assignment access: `s.set_field("foo", v)` is `foo=` with one argument.
    pub fn set_field(&self, name: &str, value: impl Into<Value>) -> Result<()> {
        let access = format!("{name}=");
        self.dispatch(&access, &[value.into()]).map(|_| ())
    }

    /// Whether an attribute-style access to `name` would be answered.
    ///
    /// - [`ArgumentRule::FallThrough`]: the field exists, or `name` is a predicate.
    /// - [`ArgumentRule::Enforce`]: the field exists, with or without a trailing `?`.
    /// - [`ArgumentRule::Ignore`]: always.
    pub fn responds_to(&self, name: &str) -> bool {
        match self.variant().arguments {
            ArgumentRule::FallThrough => {
                self.contains_key(&Key::sym(name)) || name.ends_with('?')
            }
            ArgumentRule::Enforce => {
                self.contains_key(&Key::sym(name))
                    || name
                        .strip_suffix('?')
                        .is_some_and(|field| self.contains_key(&Key::sym(field)))
            }
            ArgumentRule::Ignore => true,
        }
    }

    fn missing(&self, name: &str) -> Result<Dispatched> {
        match self.variant().policy {
            MissingFieldPolicy::Strict => {
                tracing::debug!(field = name, variant = %self.variant(), "no such field");
                Err(StructError::NoSuchField {
                    name: name.to_string(),
                    variant: self.variant().to_string(),
                }
                .into())
            }
            MissingFieldPolicy::Lenient => Ok(Dispatched::Value(Field::Null)),
        }
    }
}
