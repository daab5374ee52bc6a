use std::collections::HashMap;

use lsre_core::{Format, RuleError};
use serde_json::{json, Value};

fn assert_type_error(result: Result<bool, RuleError>, actual_type: &str) {
    match result {
        Err(RuleError::InvalidArgumentType { expected, actual }) => {
            assert_eq!(expected, "str");
            assert_eq!(actual, actual_type);
        }
        other => panic!("expected InvalidArgumentType, got {other:?}"),
    }
}

#[test]
fn test_every_format_rejects_native_non_strings() {
    for format in Format::ALL {
        assert_type_error(format.validate(&123), "i32");
        assert_type_error(format.validate(&1.5f64), "f64");
        assert_type_error(format.validate(&Option::<String>::None), "none");
        assert_type_error(format.validate(&Vec::<String>::new()), "Vec");
        assert_type_error(format.validate(&HashMap::<String, String>::new()), "HashMap");
        assert_type_error(format.validate(&true), "bool");
    }
}

#[test]
fn test_every_format_rejects_json_non_strings() {
    let values = [
        (json!(null), "null"),
        (json!(42), "integer"),
        (json!(["user@example.com"]), "array"),
        (json!({"text": "user@example.com"}), "object"),
    ];
    for format in Format::ALL {
        for (value, name) in &values {
            assert_type_error(format.validate(value), name);
        }
    }
}

#[test]
fn test_guarded_functions_reject_non_strings() {
    assert_type_error(lsre_core::is_alphanumeric(&123), "i32");
    assert_type_error(lsre_core::is_email(&Value::Null), "null");
    assert_type_error(lsre_core::is_url(&vec!["http://example.com"]), "Vec");
    assert_type_error(lsre_core::is_ipv4(&[192u8, 168, 0, 1][..]), "slice");
    assert_type_error(lsre_core::is_strong_password(&12345678u64), "u64");
}

#[test]
fn test_json_strings_are_validated() {
    assert_eq!(Format::Email.validate(&json!("user@example.com")), Ok(true));
    assert_eq!(Format::Email.validate(&json!("invalid-email")), Ok(false));
}

#[test]
fn test_malformed_strings_never_error() {
    for format in Format::ALL {
        for text in ["", " ", "\n", "\u{0}", "💥", "::::", "####"] {
            assert!(format.validate(text).is_ok(), "{format} errored on {text:?}");
        }
    }
}
