//! Structural equality independent of key kind.

use resource_struct::{Field, Key, ResourceStruct, Store, Value, Variant, list, store};

use crate::helpers::*;

#[test]
fn test_string_and_symbol_keys_are_equal() {
    assert_eq!(
        ResourceStruct::strict(string_keyed()),
        ResourceStruct::strict(symbol_keyed())
    );
    assert_eq!(
        ResourceStruct::strict(symbol_keyed()),
        ResourceStruct::strict(string_keyed())
    );
    assert_eq!(
        ResourceStruct::strict(string_keyed()),
        ResourceStruct::strict(mixed_keyed())
    );
    assert_eq!(
        ResourceStruct::flex(symbol_keyed()),
        ResourceStruct::flex(mixed_keyed())
    );
}

#[test]
fn test_struct_equals_raw_map() {
    let s = ResourceStruct::strict(store! { "x" => 1 });

    assert_eq!(s, store! { :x => 1 });
    assert_eq!(s, Value::Map(store! { :x => 1 }));
    assert_ne!(s, Value::Int(1));
}

#[test]
fn test_count_mismatch_is_unequal() {
    let s = ResourceStruct::strict(store! { :a => 1, :b => 2 });

    assert_ne!(s, store! { :a => 1 });
    assert_ne!(ResourceStruct::strict(store! { :a => 1 }), store! { :a => 1, :b => 2 });
}

#[test]
fn test_value_mismatch_is_unequal() {
    assert_ne!(
        ResourceStruct::strict(store! { "x" => 1 }),
        ResourceStruct::strict(store! { "x" => 2 })
    );
    assert_ne!(
        ResourceStruct::strict(store! { "x" => 1 }),
        ResourceStruct::strict(store! { "y" => 1 })
    );
}

#[test]
fn test_nested_maps_compare_indifferently() {
    let left = ResourceStruct::strict(store! { "a" => list![store! { "b" => 1 }] });
    let right = ResourceStruct::strict(store! { :a => list![store! { :b => 1 }] });
    assert_eq!(left, right);
}

#[test]
fn test_equality_ignores_variant() {
    assert_eq!(
        ResourceStruct::strict(string_keyed()),
        ResourceStruct::loose(symbol_keyed())
    );
    assert_eq!(
        ResourceStruct::new(string_keyed(), Variant::FLEX),
        ResourceStruct::new(string_keyed(), Variant::STRICT)
    );
}

#[test]
fn test_numeric_equality() {
    assert_eq!(
        ResourceStruct::strict(store! { "n" => 2 }),
        ResourceStruct::strict(store! { "n" => 2.0 })
    );
    assert_eq!(ResourceStruct::strict(store! { "n" => 2 }).get("n"), 2.0);
}

#[test]
fn test_field_compares_with_raw_values() {
    let s = ResourceStruct::strict(string_keyed());

    assert_eq!(s.get("bar"), list![store! { :baz => 2 }, 3]);
    assert_eq!(s.get("foo"), Value::Int(1));
    assert_eq!(s.get("car"), Value::Null);
    assert_ne!(s.get("foo"), Field::Text("1".into()));
}

#[test]
fn test_clones_are_the_same_instance() {
    let s = ResourceStruct::strict(string_keyed());
    let alias = s.clone();
    assert!(ResourceStruct::ptr_eq(&s, &alias));

    let copy = ResourceStruct::strict(s.to_plain_map().deep_copy());
    assert!(!ResourceStruct::ptr_eq(&s, &copy));
    assert_eq!(s, copy);
}

#[test]
fn test_duplicate_kinds_exact_match_wins() {
    let store = Store::new();
    store.insert(Key::str("foo"), Value::Int(1));
    store.insert(Key::sym("foo"), Value::Int(2));
    let s = ResourceStruct::strict(store);

    assert_eq!(s.get(Key::str("foo")), 1);
    assert_eq!(s.to_plain_map().lookup(&Key::sym("foo")), Some(Value::Int(2)));
    assert_eq!(s.len(), 2);
}
