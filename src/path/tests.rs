use super::{compile_template, split_segments, ParamValue, PathSegment, PathType, PathTypes};
use crate::error::ConfigError;

#[test]
fn test_split_segments_ignores_empty() {
    assert_eq!(split_segments("/a/b/c"), vec!["a", "b", "c"]);
    assert_eq!(split_segments("/"), Vec::<&str>::new());
    assert_eq!(split_segments(""), Vec::<&str>::new());
    assert_eq!(split_segments("//a//b/"), vec!["a", "b"]);
}

#[test]
fn test_built_in_types_resolvable() {
    let types = PathTypes::built_in();
    for name in ["String", "Integer", "Long"] {
        assert!(types.contains(name), "missing built-in type {name}");
    }
}

#[test]
fn test_integer_type_rejects_non_numeric_and_overflow() {
    let types = PathTypes::built_in();
    let integer = types.get("Integer").expect("Integer type");
    assert_eq!(integer.parse("42"), Some(ParamValue::Int(42)));
    assert_eq!(integer.parse("abc"), None);
    assert_eq!(integer.parse("9999999999999"), None);

    let long = types.get("Long").expect("Long type");
    assert_eq!(
        long.parse("9999999999999"),
        Some(ParamValue::Long(9_999_999_999_999))
    );
}

#[test]
fn test_untyped_param_defaults_to_string() {
    let types = PathTypes::built_in();
    let compiled = compile_template("/users/$name", &types).expect("compile");
    assert_eq!(compiled.segments.len(), 2);
    match &compiled.segments[1] {
        PathSegment::Param { name, path_type } => {
            assert_eq!(name, "name");
            assert_eq!(path_type.name(), "String");
        }
        other => panic!("expected param segment, got {other:?}"),
    }
}

#[test]
fn test_typed_param_uses_registered_type() {
    let types = PathTypes::built_in();
    let compiled = compile_template("/items/$id:Integer", &types).expect("compile");
    assert_eq!(compiled.params.get("id").map(PathType::name), Some("Integer"));
}

#[test]
fn test_unknown_type_fails_compilation() {
    let types = PathTypes::built_in();
    let err = compile_template("/items/$id:Uuid", &types).expect_err("should fail");
    match err {
        ConfigError::UnknownPathType { path, type_name } => {
            assert_eq!(path, "/items/$id:Uuid");
            assert_eq!(type_name, "Uuid");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_malformed_params_fail_compilation() {
    let types = PathTypes::built_in();
    assert!(matches!(
        compile_template("/items/$", &types),
        Err(ConfigError::InvalidRoutePath { .. })
    ));
    assert!(matches!(
        compile_template("/items/$id:Integer:extra", &types),
        Err(ConfigError::InvalidRoutePath { .. })
    ));
    assert!(matches!(
        compile_template("/items/$:Integer", &types),
        Err(ConfigError::InvalidRoutePath { .. })
    ));
}

#[test]
fn test_repeated_param_text_reuses_segment() {
    let types = PathTypes::built_in();
    let compiled = compile_template("/pair/$id:Integer/$id:Integer", &types).expect("compile");
    assert_eq!(compiled.segments.len(), 3);
    assert_eq!(compiled.params.len(), 1);
    match (&compiled.segments[1], &compiled.segments[2]) {
        (
            PathSegment::Param { name: a, path_type: ta },
            PathSegment::Param { name: b, path_type: tb },
        ) => {
            assert_eq!(a, b);
            assert_eq!(ta.name(), tb.name());
        }
        other => panic!("expected two param segments, got {other:?}"),
    }
}

#[test]
fn test_custom_type_registration() {
    let mut types = PathTypes::built_in();
    types.register(PathType::new("Bool", |raw| match raw {
        "true" => Some(ParamValue::Str("true".to_string())),
        "false" => Some(ParamValue::Str("false".to_string())),
        _ => None,
    }));
    let compiled = compile_template("/flags/$on:Bool", &types).expect("compile");
    assert!(compiled.params.contains_key("on"));
}
