//! Strict (and firm) struct behaviour: immutable, missing fields are errors.

use resource_struct::{
    Dispatched, Error, Field, Key, MissingFieldPolicy, Mutability, ResourceStruct, StructError,
    Value, Variant, path, store,
};

use crate::helpers::*;

#[test]
fn test_construction_rejects_non_maps() {
    let err = ResourceStruct::from_value("foo", Variant::STRICT).unwrap_err();
    assert!(matches!(
        err,
        Error::Struct(StructError::ConstructionType { found: "text" })
    ));
    assert!(err.is_type_error());

    assert!(ResourceStruct::from_value(Value::Null, Variant::STRICT).is_ok());
    assert!(ResourceStruct::default().is_empty());
    assert!(ResourceStruct::from_value(string_keyed(), Variant::STRICT).is_ok());
}

#[test]
fn test_indifferent_indexed_access() {
    for (label, s) in fixture_structs(Variant::STRICT) {
        assert_eq!(s.get(Key::sym("foo")), 1, "{label}");
        assert_eq!(s.get("foo"), 1, "{label}");
        assert_eq!(s.get(Key::sym("cdr")), false, "{label}");
        assert_eq!(s.get("cdr"), false, "{label}");

        let bar = s.get(Key::sym("bar"));
        for key in [Key::sym("baz"), Key::str("baz")] {
            let first = expect_struct(expect_item(&bar, 0));
            assert_eq!(first.get(key), 2, "{label}");
        }
    }
}

#[test]
fn test_attribute_access() {
    for (label, s) in fixture_structs(Variant::STRICT) {
        assert_eq!(s.field("foo").unwrap(), 1, "{label}");

        let bar = s.field("bar").unwrap();
        assert_eq!(expect_item(&bar, 0), ResourceStruct::strict(store! { "baz" => 2 }), "{label}");
        assert_eq!(expect_struct(expect_item(&bar, 0)).field("baz").unwrap(), 2, "{label}");
        assert_eq!(expect_item(&bar, 1), 3, "{label}");
    }
}

#[test]
fn test_missing_field_is_an_error() {
    for (label, s) in fixture_structs(Variant::STRICT) {
        for name in ["brr", "daz"] {
            let err = s.field(name).unwrap_err();
            assert!(err.is_not_found(), "{label}: {err}");
            assert_eq!(
                err.as_struct_error().and_then(StructError::field),
                Some(name),
                "{label}"
            );
        }
    }
}

#[test]
fn test_predicates() {
    for (label, s) in fixture_structs(Variant::STRICT) {
        assert!(s.predicate("foo"), "{label}");
        assert!(s.predicate("bar"), "{label}");
        assert!(!s.predicate("car"), "{label}");
        assert!(!s.predicate("cdr"), "{label}");
        assert!(!s.predicate("brr"), "{label}");
        assert!(!s.predicate("daz"), "{label}");

        assert_eq!(s.dispatch("foo?", &[]).unwrap(), Dispatched::Exists(true), "{label}");
        assert_eq!(s.dispatch("brr?", &[]).unwrap(), Dispatched::Exists(false), "{label}");
    }
}

#[test]
fn test_wrong_arguments_fall_through_to_missing() {
    let s = ResourceStruct::strict(string_keyed());

    let err = s.dispatch("foo", &[Value::Int(1)]).unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_arity_error());

    let err = s.dispatch("foo?", &[Value::Int(1)]).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_immutable() {
    let s = ResourceStruct::strict(string_keyed());

    let err = s.set_field("foo", 2).unwrap_err();
    assert!(err.is_not_found());

    let err = s.assign("foo", 2).unwrap_err();
    assert!(matches!(
        err,
        Error::Struct(StructError::Immutable { ref key, .. }) if key == "foo"
    ));
    assert_eq!(s.get("foo"), 1);
}

#[test]
fn test_responds_to() {
    let s = ResourceStruct::strict(string_keyed());

    assert!(s.responds_to("foo"));
    assert!(s.responds_to("cdr"));
    assert!(s.responds_to("anything?"));
    assert!(!s.responds_to("brr"));
    assert!(!s.responds_to("foo="));
}

#[test]
fn test_nested_lookups_are_identity_stable() {
    let s = ResourceStruct::strict(store! { :a => store! { :b => 1 } });

    let first = expect_struct(s.get(Key::sym("a")));
    let second = expect_struct(s.get("a"));
    let third = expect_struct(s.field("a").unwrap());

    assert!(ResourceStruct::ptr_eq(&first, &second));
    assert!(ResourceStruct::ptr_eq(&first, &third));
    assert_eq!(first.variant(), Variant::STRICT);
}

#[test]
fn test_nested_struct_shares_parent_store() {
    let inner = store! { "b" => 1 };
    let s = ResourceStruct::strict(store! { "a" => inner.clone() });

    let nested = expect_struct(s.get("a"));
    assert!(resource_struct::Store::ptr_eq(&nested.to_plain_map(), &inner));
}

#[test]
fn test_firm_is_strict() {
    let s = ResourceStruct::firm(string_keyed());
    assert_eq!(s.variant(), Variant::STRICT);
    assert!(s.field("brr").is_err());
    assert_eq!(format!("{s:?}").split('<').next(), Some("StrictStruct"));
}

#[test]
fn test_len_and_keys() {
    let s = ResourceStruct::strict(mixed_keyed());
    assert_eq!(s.len(), 4);
    assert_eq!(
        s.keys(),
        vec![Key::sym("foo"), Key::str("bar"), Key::str("car"), Key::str("cdr")]
    );
    assert!(s.contains_key(&Key::str("foo")));
    assert!(s.contains_key(&Key::sym("car")));
    assert!(!s.contains_key(&Key::sym("brr")));
}

#[test]
fn test_dump_and_load() {
    let s = ResourceStruct::strict(string_keyed());
    let dump = s.dump();
    assert_eq!(dump.data, s.to_plain_map());

    let fresh = ResourceStruct::empty(Variant::STRICT);
    fresh.load(dump);
    assert_eq!(fresh.to_plain_map(), string_keyed());
    assert_eq!(fresh.cached_len(), 0);
    assert_eq!(fresh.get_path("bar", path![0, :baz]).unwrap(), 2);
}

#[test]
fn test_field_helpers() {
    let s = ResourceStruct::strict(string_keyed());
    assert_eq!(s.get("car"), Field::Null);
    assert!(s.get("car").is_null());
    assert_eq!(s.get("foo").as_int(), Some(1));
    assert_eq!(s.get("bar").as_list().map(<[Field]>::len), Some(2));
}

#[test]
fn test_mutable_strict_variant_enforces_arity() {
    let variant = Variant::new(MissingFieldPolicy::Strict, Mutability::Mutable);
    let s = ResourceStruct::new(string_keyed(), variant);

    let err = s.dispatch("brr", &[Value::Int(1)]).unwrap_err();
    assert!(err.is_arity_error(), "{err}");

    let err = s.dispatch("foo=", &[]).unwrap_err();
    assert!(matches!(
        err,
        Error::Struct(StructError::ArgumentArity {
            given: 0,
            expected: 1,
            ..
        })
    ));

    let err = s.field("brr").unwrap_err();
    assert!(matches!(
        err,
        Error::Struct(StructError::NoSuchField { ref name, .. }) if name == "brr"
    ));

    s.set_field("foo", 2).unwrap();
    assert_eq!(s.field("foo").unwrap(), 2);
    assert_eq!(s.len(), 4);
    let plain = s.to_plain_map();
    assert!(plain.contains_key(&Key::str("foo")));
    assert!(!plain.contains_key(&Key::sym("foo")));
}
