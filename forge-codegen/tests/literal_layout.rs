//! Layout rules of the literal serializer.

use classforge_codegen::{Error, literal::to_source_of, to_source};
use classforge_ir::Literal;
use serde::Serialize;
use serde_json::json;

fn src(value: serde_json::Value, indent: usize, inline: bool) -> String {
    let literal = Literal::try_from(value).expect("Invalid literal");
    to_source(&literal, indent, inline).expect("Rendering failed")
}

#[test]
fn test_empty_containers_render_as_brackets() {
    assert_eq!(src(json!([]), 0, false), "[]");
    assert_eq!(src(json!({}), 0, false), "[]");
}

#[test]
fn test_documented_examples() {
    assert_eq!(src(json!(["a", "b"]), 0, false), "['a', 'b']");

    let nested = src(json!([["a"]]), 0, false);
    assert_eq!(nested, "[\n    ['a']\n]");
    assert!(nested.contains("['a']"));
}

#[test]
fn test_scalar_lists_are_always_inline() {
    for value in [
        json!([1, 2, 3]),
        json!(["x", true, null, 1.5]),
        json!([false]),
    ] {
        assert!(!src(value, 8, false).contains('\n'));
    }
}

#[test]
fn test_any_nested_container_goes_multiline_unless_forced() {
    for value in [json!([1, [2]]), json!([{ "a": 1 }]), json!([[]])] {
        assert!(src(value.clone(), 0, false).contains('\n'));
        assert!(!src(value, 0, true).contains('\n'));
    }
}

#[test]
fn test_maps_have_no_trailing_separator() {
    let out = src(json!({ "a": 1, "b": { "c": [1, 2] } }), 4, false);
    assert_eq!(
        out,
        "[\n        'a' => 1,\n        'b' => [\n            'c' => [1, 2]\n        ]\n    ]"
    );
    for line in out.lines() {
        if line.trim_start().starts_with(']') {
            continue;
        }
        let next_closes = out
            .lines()
            .skip_while(|l| *l != line)
            .nth(1)
            .is_some_and(|n| n.trim_start().starts_with(']'));
        if next_closes {
            assert!(!line.ends_with(','), "trailing separator on {line:?}");
        }
    }
}

#[test]
fn test_forced_inline_maps_never_break() {
    let out = src(json!({ "a": [1, { "b": [] }], "c": "d" }), 12, true);
    assert_eq!(out, "['a' => [1, ['b' => []]], 'c' => 'd']");
}

#[test]
fn test_numbers_are_unquoted() {
    assert_eq!(src(json!(42), 0, false), "42");
    assert_eq!(src(json!(-7), 0, false), "-7");
    assert_eq!(src(json!(0.5), 0, false), "0.5");
    assert_eq!(src(json!(3.0), 0, false), "3.0");
}

#[test]
fn test_unsupported_kinds_are_errors() {
    #[derive(Serialize)]
    enum Shape {
        Circle { radius: f64 },
    }

    let err = to_source_of(&Shape::Circle { radius: 1.0 }, 0, false).unwrap_err();
    assert_eq!(err, Error::invalid_kind("enum variant Shape::Circle"));
    assert!(!err.to_string().contains("unknown"));

    let err = to_source(&Literal::Float(f64::INFINITY), 0, false).unwrap_err();
    assert!(matches!(err, Error::InvalidLiteralKind { .. }));

    let err = to_source_of(&u128::MAX, 0, false).unwrap_err();
    assert!(matches!(err, Error::InvalidLiteralKind { .. }), "{err}");
    assert_eq!(to_source_of(&1i128, 0, false).unwrap(), "1");
}

#[test]
fn test_out_of_range_integers_never_round() {
    assert!(serde_json::from_str::<Literal>("18446744073709551615").is_err());
    assert!(Literal::try_from(json!(u64::MAX)).is_err());
    assert!(matches!(
        to_source_of(&u64::MAX, 0, false),
        Err(Error::InvalidLiteralKind { .. })
    ));
}

#[test]
fn test_native_values_through_serde() {
    #[derive(Serialize)]
    struct Connection<'a> {
        driver: &'a str,
        port: u16,
        options: Vec<&'a str>,
        timeout: Option<f32>,
    }

    let out = to_source_of(
        &Connection {
            driver: "mysql",
            port: 3306,
            options: vec!["ssl"],
            timeout: None,
        },
        0,
        false,
    )
    .unwrap();

    assert_eq!(
        out,
        "[\n    'driver' => 'mysql',\n    'port' => 3306,\n    'options' => ['ssl'],\n    'timeout' => null\n]"
    );
}
