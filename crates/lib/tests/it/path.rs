//! Chained lookups through nested structs and lists.

use resource_struct::{
    Error, Field, Key, ResourceStruct, StructError, Value, Variant, list, path, store,
};

use crate::helpers::*;

const ALL: [Variant; 3] = [Variant::STRICT, Variant::FLEX, Variant::LOOSE];

#[test]
fn test_valid_paths() {
    for variant in ALL {
        for (label, s) in fixture_structs(variant) {
            assert_eq!(s.get_path("bar", path![0, :baz]).unwrap(), 2, "{variant} {label}");
            assert_eq!(s.get_path("bar", path![1]).unwrap(), 3, "{variant} {label}");
            assert_eq!(s.get_path("bar", path![-1]).unwrap(), 3, "{variant} {label}");
            assert_eq!(s.get_path("cdr", Vec::<Key>::new()).unwrap(), false, "{variant} {label}");
        }
    }
}

#[test]
fn test_missing_paths_are_null() {
    for variant in ALL {
        let s = ResourceStruct::new(string_keyed(), variant);

        assert_eq!(s.get("brr"), Field::Null, "{variant}");
        assert_eq!(s.get_path("brr", path![:bop]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path("bar", path![3]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path("bar", path![3, :dar]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path("bar", path![-3]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path("car", path!["x", 0]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path("cdr", path!["x"]).unwrap(), Field::Null, "{variant}");
    }
}

#[test]
fn test_absent_nested_key_short_circuits() {
    for variant in ALL {
        let s = ResourceStruct::new(store! { :a => store! { :b => 1 } }, variant);
        assert_eq!(s.get_path(Key::sym("a"), path![:z]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path(Key::sym("a"), path![:z, :y]).unwrap(), Field::Null, "{variant}");
    }
}

#[test]
fn test_scalars_cannot_be_navigated() {
    for variant in ALL {
        let s = ResourceStruct::new(store! { :a => 1 }, variant);
        let err = s.get_path(Key::sym("a"), path![:z]).unwrap_err();
        assert!(err.is_type_error(), "{variant}");

        let s = ResourceStruct::new(string_keyed(), variant);
        let err = s.get_path("foo", path![0]).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Struct(StructError::PathType { found: "int", ref segment }) if segment == "0"
            ),
            "{variant}: {err}"
        );
    }
}

#[test]
fn test_key_into_list_is_type_error() {
    let s = ResourceStruct::flex(string_keyed());
    let err = s.get_path("bar", path!["baz"]).unwrap_err();
    assert!(matches!(
        err,
        Error::Struct(StructError::PathType { found: "list", .. })
    ));
}

#[test]
fn test_index_into_struct_is_null() {
    let s = ResourceStruct::strict(store! { "a" => store! { "b" => 1 } });
    assert_eq!(s.get_path("a", path![0]).unwrap(), Field::Null);
}

#[test]
fn test_dig() {
    let s = ResourceStruct::strict(string_keyed());

    assert_eq!(s.dig(path![:bar, 0, "baz"]).unwrap(), 2);
    assert_eq!(s.dig(path![0]).unwrap(), Field::Null);
    assert_eq!(s.dig(path![]).unwrap(), s);
    assert!(s.dig(path!["foo", "x"]).is_err());
}

#[test]
fn test_nested_lists() {
    let s = ResourceStruct::loose(store! {
        "matrix" => list![list![1, 2], list![3, store! { "deep" => "yes" }]],
    });

    assert_eq!(s.get_path("matrix", path![1, 0]).unwrap(), 3);
    assert_eq!(s.get_path("matrix", path![1, 1, :deep]).unwrap(), "yes");
    assert_eq!(s.get_path("matrix", path![0, 5]).unwrap(), Field::Null);
}

#[test]
fn test_paths_reuse_cached_structs() {
    let s = ResourceStruct::strict(store! { "a" => store! { "b" => store! { "c" => 1 } } });

    let first = expect_struct(s.get_path("a", path!["b"]).unwrap());
    let second = expect_struct(s.dig(path![:a, :b]).unwrap());
    assert!(ResourceStruct::ptr_eq(&first, &second));
}

#[test]
fn test_false_list_element_cannot_be_navigated() {
    for variant in ALL {
        let s = ResourceStruct::new(store! { "a" => list![false, Value::Null] }, variant);

        let err = s.get_path("a", path![0, "x"]).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Struct(StructError::PathType { found: "bool", .. })
            ),
            "{variant}: {err}"
        );
        assert_eq!(s.get_path("a", path![0]).unwrap(), false, "{variant}");
        assert_eq!(s.get_path("a", path![1, "x"]).unwrap(), Field::Null, "{variant}");
        assert_eq!(s.get_path("a", path![5, "x"]).unwrap(), Field::Null, "{variant}");
    }
}
